//! Maze generation module.
//!
//! Provides the occupancy grid ([`Maze`]) and the randomized backtracker that carves
//! it ([`generate`]).

pub mod generator;

pub use generator::{Cell, Maze, MazeError, generate};
