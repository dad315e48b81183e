//! Maze generation using a randomized depth-first backtracker.
//!
//! The maze lives on a full-resolution occupancy grid where every cell is either a
//! [`Cell::Wall`] or a [`Cell::Open`] passage. Rooms sit at odd coordinates and the
//! backtracker walks between them at a stride of two, opening the midpoint cell of
//! every step it takes. Because a room is only ever linked to the room that
//! discovered it, the result is a perfect maze: every open cell is reachable from
//! the origin `(1, 1)` by exactly one simple path.
//!
//! # Examples
//!
//! ```ignore
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let maze = generate(21, 15, &mut rng)?;
//! assert!(maze.is_open(1, 1));
//! println!("{maze}");
//! ```

use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;
use std::fmt;

/// Smallest accepted maze dimension: one room surrounded by its border.
pub const MIN_DIMENSION: usize = 3;

/// Origin room of every generated maze.
pub const ORIGIN: (usize, usize) = (1, 1);

/// Offsets from a room to its four neighbouring rooms: right, down, left, up.
const ROOM_STEPS: [(isize, isize); 4] = [(2, 0), (0, 2), (-2, 0), (0, -2)];

/// State of a single grid cell.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Solid cell, blocks the player.
    #[default]
    Wall,
    /// Passage cell.
    Open,
}

/// Errors raised while building a [`Maze`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// A dimension is below [`MIN_DIMENSION`].
    TooSmall { width: usize, height: usize },
    /// A text row does not match the width of the first row.
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MazeError::TooSmall { width, height } => write!(
                f,
                "maze of {width}x{height} is too small, both dimensions must be at least {MIN_DIMENSION}"
            ),
            MazeError::RaggedRow {
                row,
                expected,
                found,
            } => write!(
                f,
                "maze row {row} has {found} cells, expected {expected}"
            ),
        }
    }
}

impl std::error::Error for MazeError {}

/// Occupancy grid of a maze, indexed by `(x, y)` with the origin at the top-left.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Maze {
    /// Creates a maze of the given size where every cell is a wall.
    pub fn filled(width: usize, height: usize) -> Result<Self, MazeError> {
        if width < MIN_DIMENSION || height < MIN_DIMENSION {
            return Err(MazeError::TooSmall { width, height });
        }
        Ok(Self {
            width,
            height,
            cells: vec![Cell::Wall; width * height],
        })
    }

    /// Parses a maze from text, one line per row.
    ///
    /// `#` becomes a wall, any other character an open cell. Rows must all have
    /// the same length.
    pub fn from_text(text: &str) -> Result<Self, MazeError> {
        let rows: Vec<&str> = text.lines().filter(|line| !line.is_empty()).collect();
        let width = rows.first().map_or(0, |row| row.chars().count());
        let mut maze = Self::filled(width, rows.len())?;

        for (y, row) in rows.iter().enumerate() {
            let found = row.chars().count();
            if found != width {
                return Err(MazeError::RaggedRow {
                    row: y,
                    expected: width,
                    found,
                });
            }
            for (x, c) in row.chars().enumerate() {
                if c != '#' {
                    maze.set(x, y, Cell::Open);
                }
            }
        }

        Ok(maze)
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the cell at `(x, y)`, or `None` outside the grid.
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        if x < self.width && y < self.height {
            Some(self.cells[self.index(x, y)])
        } else {
            None
        }
    }

    /// Whether `(x, y)` is a wall. Cells outside the grid count as walls.
    pub fn is_wall(&self, x: usize, y: usize) -> bool {
        self.get(x, y).is_none_or(|cell| cell == Cell::Wall)
    }

    /// Whether `(x, y)` is an open passage.
    pub fn is_open(&self, x: usize, y: usize) -> bool {
        !self.is_wall(x, y)
    }

    /// Iterates over the coordinates of every cell in the given state, row by row.
    pub fn cells_of(&self, state: Cell) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(move |(_, cell)| **cell == state)
            .map(move |(i, _)| (i % self.width, i / self.width))
    }

    /// Number of open cells.
    pub fn open_count(&self) -> usize {
        self.cells.iter().filter(|cell| **cell == Cell::Open).count()
    }

    /// Number of horizontally or vertically adjacent pairs of open cells.
    ///
    /// For a perfect maze this is exactly `open_count() - 1`.
    pub fn open_edge_count(&self) -> usize {
        self.cells_of(Cell::Open)
            .map(|(x, y)| usize::from(self.is_open(x + 1, y)) + usize::from(self.is_open(x, y + 1)))
            .sum()
    }

    fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    fn set(&mut self, x: usize, y: usize, cell: Cell) {
        let index = self.index(x, y);
        self.cells[index] = cell;
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.width) {
            for cell in row {
                let symbol = match cell {
                    Cell::Wall => '#',
                    Cell::Open => ' ',
                };
                write!(f, "{symbol}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// A room on the backtracking stack together with its remaining directions.
struct Visit {
    x: usize,
    y: usize,
    steps: [(isize, isize); 4],
    next: usize,
}

impl Visit {
    fn new<R: Rng + ?Sized>(x: usize, y: usize, rng: &mut R) -> Self {
        let mut steps = ROOM_STEPS;
        steps.shuffle(rng);
        Self {
            x,
            y,
            steps,
            next: 0,
        }
    }
}

/// Generates a perfect maze of `width` x `height` cells.
///
/// Rooms are carved at odd coordinates starting from [`ORIGIN`]. When a dimension is
/// even, the line at index `dimension - 2` holds no rooms and therefore stays solid,
/// which leaves a double-thick wall on the right or bottom edge.
///
/// The only side effect is consuming randomness from `rng`: a seeded generator
/// always yields the same maze.
///
/// # Errors
/// Returns [`MazeError::TooSmall`] when either dimension is below [`MIN_DIMENSION`].
pub fn generate<R: Rng + ?Sized>(
    width: usize,
    height: usize,
    rng: &mut R,
) -> Result<Maze, MazeError> {
    let mut maze = Maze::filled(width, height)?;
    let (max_x, max_y) = ((width - 2) as isize, (height - 2) as isize);

    let (origin_x, origin_y) = ORIGIN;
    maze.set(origin_x, origin_y, Cell::Open);
    let mut stack = vec![Visit::new(origin_x, origin_y, rng)];

    while let Some(visit) = stack.last_mut() {
        if visit.next == visit.steps.len() {
            stack.pop();
            continue;
        }

        let (dx, dy) = visit.steps[visit.next];
        visit.next += 1;
        let (x, y) = (visit.x, visit.y);
        let nx = x as isize + dx;
        let ny = y as isize + dy;

        if !(1..=max_x).contains(&nx) || !(1..=max_y).contains(&ny) {
            continue;
        }
        let (nx, ny) = (nx as usize, ny as usize);
        if maze.is_open(nx, ny) {
            continue;
        }

        maze.set((x + nx) / 2, (y + ny) / 2, Cell::Open);
        maze.set(nx, ny, Cell::Open);
        stack.push(Visit::new(nx, ny, rng));
    }

    debug!(
        "Generated {}x{} maze with {} open cells",
        width,
        height,
        maze.open_count()
    );

    Ok(maze)
}
