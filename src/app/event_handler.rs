//! Event handler module for Tomb Runner.
//!
//! Contains the App struct and its event handling logic.

use crate::app::app_state::AppState;
use crate::config::GameConfig;
use crate::game::LevelState;
use crate::game::keys::{GameKey, winit_key_to_game_key};
use anyhow::anyhow;
use log::{error, info};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::{ElementState, KeyEvent, WindowEvent},
    event_loop::ActiveEventLoop,
    window::{Window, WindowId},
};

/// Main application struct that manages the game lifecycle and event handling.
///
/// # Lifecycle
/// 1. Created with `App::new()`; the session starts idle
/// 2. `resumed` creates the window and starts the first level
/// 3. Keyboard events steer the player; `about_to_wait` runs the ticks
/// 4. Runs until the window is closed, the quit key is hit or Ctrl-C arrives
pub struct App {
    /// Session and tick state.
    pub state: AppState,
    /// The application window, None until resumed.
    pub window: Option<Arc<Window>>,
    /// Set by the Ctrl-C handler.
    shutdown: Arc<AtomicBool>,
    /// Fatal error that stopped the event loop, reported by `main`.
    fatal: Option<anyhow::Error>,
}

impl App {
    /// Creates a new [`App`] for the given configuration.
    pub fn new(config: GameConfig, shutdown: Arc<AtomicBool>) -> Self {
        Self {
            state: AppState::new(config),
            window: None,
            shutdown,
            fatal: None,
        }
    }

    /// Whether Ctrl-C was received.
    pub fn shutdown_requested(&self) -> bool {
        self.shutdown.load(Ordering::SeqCst)
    }

    /// Takes the error that stopped the event loop, if any.
    pub fn take_fatal(&mut self) -> Option<anyhow::Error> {
        self.fatal.take()
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        error!("{err:#}");
        self.fatal = Some(err);
        event_loop.exit();
    }

    /// Applies a mapped key press or release.
    fn handle_key(&mut self, event_loop: &ActiveEventLoop, key: GameKey, pressed: bool) {
        if key.is_movement() {
            if pressed {
                self.state.game_state.on_key_down(key);
            } else {
                self.state.game_state.on_key_up(key);
            }
            return;
        }

        if !pressed {
            return;
        }

        match key {
            GameKey::Generate => {
                if !self.state.start_level(Instant::now()) {
                    self.fail(event_loop, anyhow!("maze generation failed"));
                }
            }
            GameKey::QuitLevel => {
                if self.state.game_state.level_state() == LevelState::Active {
                    self.state.quit_level();
                }
            }
            GameKey::Quit => event_loop.exit(),
            _ => {}
        }
    }
}

impl ApplicationHandler for App {
    /// Creates the window on first resume and starts the first level.
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let (width, height) = self.state.game_state.config().playfield_size();
        let attributes = Window::default_attributes()
            .with_title("Tomb Runner")
            .with_inner_size(LogicalSize::new(width, height))
            .with_resizable(false);

        let window = match event_loop.create_window(attributes) {
            Ok(window) => window,
            Err(err) => {
                self.fail(event_loop, anyhow!("failed to create window: {err}"));
                return;
            }
        };
        self.window = Some(Arc::new(window));

        if !self.state.start_level(Instant::now()) {
            self.fail(event_loop, anyhow!("maze generation failed"));
        }
    }

    /// Handles keyboard input and close requests.
    fn window_event(&mut self, event_loop: &ActiveEventLoop, _: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                info!("The close button was pressed; stopping");
                event_loop.exit();
            }

            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        logical_key: key,
                        state: key_state,
                        repeat: false,
                        ..
                    },
                ..
            } => {
                if let Some(game_key) = winit_key_to_game_key(&key) {
                    let pressed = key_state == ElementState::Pressed;
                    self.handle_key(event_loop, game_key, pressed);
                }
            }

            WindowEvent::Focused(false) => {
                // Key-up events are lost while unfocused.
                self.state.game_state.release_all_keys();
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        self.handle_update(event_loop);
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        if self.state.game_state.level_state() == LevelState::Active {
            self.state.quit_level();
        }
    }
}
