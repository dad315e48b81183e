//! Game configuration constants.
//!
//! Every tunable of the maze and the movement engine lives here. The defaults are
//! collected into [`GameConfig`], which the level session reads on every
//! [`start_level`](crate::game::GameState::start_level).

use std::time::Duration;

/// Number of grid columns in a generated maze.
pub const MAZE_WIDTH: usize = 20;

/// Number of grid rows in a generated maze.
pub const MAZE_HEIGHT: usize = 20;

/// Side length of one grid cell in world units (pixels).
pub const CELL_SIZE: f64 = 40.0;

/// Distance the player travels per tick.
pub const PLAYER_SPEED: f64 = 5.0;

/// Player hitbox width in world units.
pub const PLAYER_WIDTH: f64 = 30.0;

/// Player hitbox height in world units.
pub const PLAYER_HEIGHT: f64 = 30.0;

/// Interval between two movement ticks (~60 Hz).
pub const TICK_INTERVAL: Duration = Duration::from_millis(16);

/// Runtime view of the configuration constants.
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Maze columns.
    pub maze_width: usize,
    /// Maze rows.
    pub maze_height: usize,
    /// Cell side length in world units.
    pub cell_size: f64,
    /// Units moved per tick.
    pub speed: f64,
    /// Player hitbox `(width, height)`.
    pub player_size: (f64, f64),
    /// Fixed tick interval.
    pub tick_interval: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            maze_width: MAZE_WIDTH,
            maze_height: MAZE_HEIGHT,
            cell_size: CELL_SIZE,
            speed: PLAYER_SPEED,
            player_size: (PLAYER_WIDTH, PLAYER_HEIGHT),
            tick_interval: TICK_INTERVAL,
        }
    }
}

impl GameConfig {
    /// Size of the playfield `(width, height)` in world units.
    pub fn playfield_size(&self) -> (f64, f64) {
        (
            self.maze_width as f64 * self.cell_size,
            self.maze_height as f64 * self.cell_size,
        )
    }

    /// Spawn point of the player: the top-left corner of cell (1, 1).
    pub fn spawn_point(&self) -> (f64, f64) {
        (self.cell_size, self.cell_size)
    }
}
