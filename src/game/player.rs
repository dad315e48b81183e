//! Player state.
//!
//! The player is a fixed-size hitbox whose top-left corner moves through the
//! playfield. Coordinates are world units with the origin at the top-left corner
//! and `y` growing downward.

use crate::game::collision::Rect;

/// Position and hitbox of the player character.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Player {
    /// Left edge in world units.
    pub x: f64,
    /// Top edge in world units.
    pub y: f64,
    /// Hitbox width.
    pub width: f64,
    /// Hitbox height.
    pub height: f64,
}

impl Player {
    /// Creates a player at `(x, y)` with the given hitbox size.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Current position as `(x, y)`.
    pub fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    /// Moves the player to `(x, y)` without any checks.
    pub fn set_position(&mut self, (x, y): (f64, f64)) {
        self.x = x;
        self.y = y;
    }

    /// The hitbox at the current position.
    pub fn rect(&self) -> Rect {
        self.rect_at(self.x, self.y)
    }

    /// The hitbox the player would have at `(x, y)`.
    pub fn rect_at(&self, x: f64, y: f64) -> Rect {
        Rect::new(x, y, self.width, self.height)
    }
}
