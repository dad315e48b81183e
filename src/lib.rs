//! Tomb Runner - A 2D Maze Runner Game
//!
//! Tomb Runner is a real-time 2D maze game. The player steers a square avatar
//! through a procedurally generated maze, sliding along walls on collision.
//!
//! # Features
//! - **Procedural Generation**: Perfect mazes from a randomized depth-first backtracker
//! - **Fixed-Tick Movement**: Normalized diagonal speed and wall sliding at ~60 Hz
//! - **Reproducible Levels**: Every maze is derived from a logged seed
//!
//! # Architecture
//! - `maze/`: Occupancy grid and maze generation
//! - `game/`: Level session, input state, movement and collision
//! - `app/`: winit host that forwards keys and drives ticks
//! - `benchmarks/`: Timing of generation and ticks
//!
//! # Usage
//! Run with `cargo run`. WASD or the arrow keys move, Enter generates a new maze,
//! Escape leaves the level and the backtick key quits. Set `RUST_LOG=debug` to see
//! every generated maze in the log.

pub mod app;
pub mod benchmarks;
pub mod config;
pub mod game;
pub mod maze;
