//! Collision detection between the player and maze walls.
//!
//! # Overview
//!
//! Every wall cell of the current [`Maze`] becomes one axis-aligned [`Rect`] in world
//! space. The player is tested against that list with a plain linear scan: the mazes
//! are small (a few hundred walls) and the per-wall test is four comparisons.
//!
//! # Intersection Semantics
//!
//! Rectangles are half-open: a rectangle covers `[x, x + width) x [y, y + height)`.
//! Two rectangles that only share an edge do **not** intersect, so the player may
//! stand flush against a wall.

use crate::maze::{Cell, Maze};

/// Axis-aligned rectangle in world space, `(x, y)` being its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Creates a new rectangle from its top-left corner and size.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge (exclusive).
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge (exclusive).
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Checks if this rectangle overlaps another one with a non-zero area.
    ///
    /// Uses the separating axis test on both axes; shared edges do not count.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

/// Holds the wall rectangles of the active maze and answers overlap queries.
#[derive(Debug, Clone, Default)]
pub struct CollisionSystem {
    walls: Vec<Rect>,
}

impl CollisionSystem {
    /// Creates an empty collision system with no walls.
    pub fn new() -> Self {
        Self { walls: Vec::new() }
    }

    /// Creates a collision system from an explicit wall list.
    pub fn from_walls(walls: Vec<Rect>) -> Self {
        Self { walls }
    }

    /// Replaces all walls with one `cell_size` square per wall cell of `maze`.
    ///
    /// Wall `(x, y)` is placed at `(x * cell_size, y * cell_size)`.
    pub fn build_from_maze(&mut self, maze: &Maze, cell_size: f64) {
        self.walls = maze
            .cells_of(Cell::Wall)
            .map(|(x, y)| {
                Rect::new(
                    x as f64 * cell_size,
                    y as f64 * cell_size,
                    cell_size,
                    cell_size,
                )
            })
            .collect();
    }

    /// Drops every wall.
    pub fn clear(&mut self) {
        self.walls.clear();
    }

    /// The current wall rectangles.
    pub fn walls(&self) -> &[Rect] {
        &self.walls
    }

    /// Whether `rect` overlaps any wall.
    pub fn collides(&self, rect: &Rect) -> bool {
        self.walls.iter().any(|wall| wall.intersects(rect))
    }
}
