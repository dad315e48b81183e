//! Update logic for the Tomb Runner App.
//!
//! Contains the fixed-tick loop and the window title refresh.

use crate::game::LevelState;
use std::time::Instant;
use winit::event_loop::{ActiveEventLoop, ControlFlow};

use super::AppState;
use super::event_handler::App;

impl AppState {
    /// Runs at most one tick if one is due at `now`.
    ///
    /// Returns `true` when a tick ran.
    pub fn handle_tick(&mut self, now: Instant) -> bool {
        if !self.ticker.poll(now) {
            return false;
        }
        self.tick_rate.record_tick(now);
        self.game_state.tick().is_some()
    }

    /// Text describing the current level for the window title.
    pub fn title(&self) -> String {
        let game = &self.game_state;
        match game.level_state() {
            LevelState::Active => {
                let (x, y) = game.player().position();
                format!(
                    "Tomb Runner - ({x:.0}, {y:.0}) - seed {}",
                    game.seed().unwrap_or_default()
                )
            }
            // Only observable while `start_level` is running.
            LevelState::Generating => "Tomb Runner - generating...".to_string(),
            LevelState::Idle => "Tomb Runner - press Enter to generate a maze".to_string(),
        }
    }

    /// Returns the new title if it differs from the last one shown.
    pub fn take_title_change(&mut self) -> Option<String> {
        let title = self.title();
        if title == self.last_title {
            return None;
        }
        self.last_title = title.clone();
        Some(title)
    }
}

impl App {
    /// Advances the game and schedules the next wake-up.
    ///
    /// Called from `about_to_wait`, once the event queue has been drained.
    pub fn handle_update(&mut self, event_loop: &ActiveEventLoop) {
        if self.shutdown_requested() {
            log::info!("Shutdown requested; stopping");
            event_loop.exit();
            return;
        }

        let now = Instant::now();
        self.state.handle_tick(now);

        if let Some(title) = self.state.take_title_change() {
            if let Some(window) = &self.window {
                window.set_title(&title);
            }
        }

        event_loop.set_control_flow(ControlFlow::WaitUntil(self.state.ticker.next_deadline()));
    }
}
