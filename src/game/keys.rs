//! Keyboard input handling for the game.
//!
//! This module defines the [`GameKey`] enum for abstracting game actions from physical keys,
//! and [`InputState`], the set of held movement directions read once per tick.
//! It also maps winit key events to game actions.

use winit::keyboard;

/// In-game actions that can be triggered from the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameKey {
    /// Move up (W or Up Arrow).
    MoveUp,
    /// Move down (S or Down Arrow).
    MoveDown,
    /// Move left (A or Left Arrow).
    MoveLeft,
    /// Move right (D or Right Arrow).
    MoveRight,
    /// Generate a new level (Enter or G).
    Generate,
    /// Leave the current level (Escape).
    QuitLevel,
    /// Quit the game (`).
    Quit,
}

impl GameKey {
    /// Whether this key steers the player.
    pub fn is_movement(self) -> bool {
        matches!(
            self,
            GameKey::MoveUp | GameKey::MoveDown | GameKey::MoveLeft | GameKey::MoveRight
        )
    }
}

/// Held movement directions.
///
/// Each flag is true while its key is down. When several keys change between two
/// ticks, whatever was written last is what the tick sees.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl InputState {
    /// Creates an input state with nothing held.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a key as pressed. Non-movement keys are ignored.
    pub fn press_key(&mut self, key: GameKey) {
        self.set(key, true);
    }

    /// Marks a key as released. Non-movement keys are ignored.
    pub fn release_key(&mut self, key: GameKey) {
        self.set(key, false);
    }

    /// Checks if a movement key is currently held.
    pub fn is_pressed(&self, key: GameKey) -> bool {
        match key {
            GameKey::MoveUp => self.up,
            GameKey::MoveDown => self.down,
            GameKey::MoveLeft => self.left,
            GameKey::MoveRight => self.right,
            _ => false,
        }
    }

    /// Whether any direction is held.
    pub fn is_moving(&self) -> bool {
        self.up || self.down || self.left || self.right
    }

    /// Releases every direction.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    fn set(&mut self, key: GameKey, held: bool) {
        match key {
            GameKey::MoveUp => self.up = held,
            GameKey::MoveDown => self.down = held,
            GameKey::MoveLeft => self.left = held,
            GameKey::MoveRight => self.right = held,
            _ => {}
        }
    }
}

macro_rules! match_char_key {
    ($c:expr, {
        $($key:literal => $variant:expr),* $(,)?
    }) => {{
        match $c.to_ascii_lowercase().as_str() {
            $($key => Some($variant),)*
            _ => None,
        }
    }};
}

macro_rules! match_named_key {
    ($k:expr, {
        $($key:ident => $variant:expr),* $(,)?
    }) => {{
        match $k {
            $(keyboard::NamedKey::$key => Some($variant),)*
            _ => None,
        }
    }};
}

/// Converts a winit [`keyboard::Key`] to a [`GameKey`] if it matches a mapped action.
///
/// Supports both named keys (arrows, enter, escape) and character keys (WASD, G, `).
/// Returns `None` for anything else; callers drop those events.
pub fn winit_key_to_game_key(key: &keyboard::Key) -> Option<GameKey> {
    match key {
        keyboard::Key::Named(named) => match_named_key!(named, {
            ArrowUp => GameKey::MoveUp,
            ArrowDown => GameKey::MoveDown,
            ArrowLeft => GameKey::MoveLeft,
            ArrowRight => GameKey::MoveRight,
            Enter => GameKey::Generate,
            Escape => GameKey::QuitLevel,
        }),

        keyboard::Key::Character(c) => match_char_key!(c, {
            "w" => GameKey::MoveUp,
            "s" => GameKey::MoveDown,
            "a" => GameKey::MoveLeft,
            "d" => GameKey::MoveRight,
            "g" => GameKey::Generate,
            "`" => GameKey::Quit,
        }),

        _ => None,
    }
}
