//! `Grid2d`: a four-connected board parsed from ASCII rows.
//!
//! | Char  | Meaning         |
//! |-------|-----------------|
//! | `' '` | open cell       |
//! | `'#'` | wall            |
//! | `'S'` | open, start     |
//! | `'G'` | open, goal      |
//!
//! Moves cost 1. Neighbors are enumerated `Up`, `Down`, `Left`, `Right`;
//! that order feeds creation order and therefore every counter.

use std::fmt;

use rand::Rng;
use waypoint_kernel::error::DomainError;
use waypoint_kernel::heuristic::Heuristic;
use waypoint_kernel::problem::{Problem, SimpleProblem};
use waypoint_kernel::space::{Action, Cost, PredefinedSpace, RandomAccessSpace, Space};

/// A board position. Row 0 is the first ASCII row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub row: u32,
    pub col: u32,
}

impl Cell {
    #[must_use]
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    #[must_use]
    pub fn manhattan(self, other: Self) -> Cost {
        i64::from(self.row.abs_diff(other.row)) + i64::from(self.col.abs_diff(other.col))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A unit step in one of the four directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

impl Move {
    /// Enumeration order of [`Grid2d::neighbors`](Space::neighbors).
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    fn apply(self, from: Cell) -> Option<Cell> {
        let Cell { row, col } = from;
        Some(match self {
            Self::Up => Cell::new(row.checked_sub(1)?, col),
            Self::Down => Cell::new(row.checked_add(1)?, col),
            Self::Left => Cell::new(row, col.checked_sub(1)?),
            Self::Right => Cell::new(row, col.checked_add(1)?),
        })
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        })
    }
}

impl Action<Cell> for Move {
    fn cost(&self, _from: &Cell) -> Cost {
        1
    }
}

/// Rejection reasons for [`Grid2d::parse`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridParseError {
    #[error("grid has no rows")]
    Empty,

    #[error("row {row} has width {found}, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown cell {ch:?} at row {row}, column {col}")]
    UnknownCell { row: usize, col: usize, ch: char },

    #[error("grid has no open cell")]
    NoOpenCell,

    #[error("grid dimension {len} does not fit in u32")]
    TooLarge { len: usize },
}

/// A rectangular board with walls, starts and goals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid2d {
    width: u32,
    height: u32,
    /// Row-major; `true` for open cells.
    open: Vec<bool>,
    open_cells: Vec<Cell>,
    starts: Vec<Cell>,
    goals: Vec<Cell>,
}

impl Grid2d {
    /// Parse ASCII rows. Starts and goals are recorded in row-major order.
    ///
    /// # Errors
    ///
    /// Returns [`GridParseError`] for an empty or ragged grid, an unknown
    /// character, or a grid without any open cell.
    pub fn parse<R: AsRef<str>>(rows: &[R]) -> Result<Self, GridParseError> {
        let first = rows.first().ok_or(GridParseError::Empty)?;
        let expected = first.as_ref().chars().count();
        let width = u32::try_from(expected).map_err(|_| GridParseError::TooLarge { len: expected })?;
        let height =
            u32::try_from(rows.len()).map_err(|_| GridParseError::TooLarge { len: rows.len() })?;

        let mut grid = Self {
            width,
            height,
            open: Vec::with_capacity(expected * rows.len()),
            open_cells: Vec::new(),
            starts: Vec::new(),
            goals: Vec::new(),
        };
        for (r, line) in (0..height).zip(rows) {
            let line = line.as_ref();
            let found = line.chars().count();
            if found != expected {
                return Err(GridParseError::RaggedRow {
                    row: r as usize,
                    expected,
                    found,
                });
            }
            for (c, ch) in (0..width).zip(line.chars()) {
                let cell = Cell::new(r, c);
                let open = match ch {
                    ' ' => true,
                    '#' => false,
                    'S' => {
                        grid.starts.push(cell);
                        true
                    }
                    'G' => {
                        grid.goals.push(cell);
                        true
                    }
                    _ => {
                        return Err(GridParseError::UnknownCell {
                            row: r as usize,
                            col: c as usize,
                            ch,
                        })
                    }
                };
                if open {
                    grid.open_cells.push(cell);
                }
                grid.open.push(open);
            }
        }
        if grid.open_cells.is_empty() {
            return Err(GridParseError::NoOpenCell);
        }
        Ok(grid)
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Whether `cell` is on the board and not a wall.
    #[must_use]
    pub fn is_open(&self, cell: Cell) -> bool {
        cell.row < self.height
            && cell.col < self.width
            && self.open[cell.row as usize * self.width as usize + cell.col as usize]
    }

    /// Every open cell, row-major.
    #[must_use]
    pub fn open_cells(&self) -> &[Cell] {
        &self.open_cells
    }
}

impl Space for Grid2d {
    type State = Cell;
    type Action = Move;

    fn neighbors(&self, state: &Cell) -> Result<Vec<(Move, Cell)>, DomainError> {
        Ok(Move::ALL
            .iter()
            .filter_map(|&m| m.apply(*state).map(|next| (m, next)))
            .filter(|&(_, next)| self.is_open(next))
            .collect())
    }

    /// Draw the board with `@` at `state`, `S` at the problem's starts and `G`
    /// at its goals. Rows are separated by `\n`.
    fn render<P>(&self, problem: &P, state: &Cell) -> Result<String, DomainError>
    where
        P: Problem<Space = Self>,
    {
        let mut out = String::with_capacity((self.width as usize + 1) * self.height as usize);
        for row in 0..self.height {
            if row > 0 {
                out.push('\n');
            }
            for col in 0..self.width {
                let cell = Cell::new(row, col);
                out.push(if cell == *state {
                    '@'
                } else if !self.is_open(cell) {
                    '#'
                } else if problem.starts().contains(&cell) {
                    'S'
                } else if problem.is_goal(&cell) {
                    'G'
                } else {
                    ' '
                });
            }
        }
        Ok(out)
    }
}

impl PredefinedSpace for Grid2d {
    fn starting_states(&self) -> Vec<Cell> {
        self.starts.clone()
    }

    fn goal_states(&self) -> Vec<Cell> {
        self.goals.clone()
    }
}

impl RandomAccessSpace for Grid2d {
    /// Uniform over open cells.
    fn random_state<R: Rng + ?Sized>(&self, rng: &mut R) -> Cell {
        self.open_cells[rng.random_range(0..self.open_cells.len())]
    }
}

/// Distance to the nearest goal ignoring walls. Admissible and consistent
/// for [`Grid2d`]; 0 when there are no goals.
#[derive(Debug, Clone, Default)]
pub struct ManhattanDistance {
    goals: Vec<Cell>,
}

impl ManhattanDistance {
    #[must_use]
    pub fn new(goals: impl IntoIterator<Item = Cell>) -> Self {
        let mut goals: Vec<Cell> = goals.into_iter().collect();
        goals.sort_unstable();
        goals.dedup();
        Self { goals }
    }

    /// Toward the goals of `problem`.
    #[must_use]
    pub fn for_problem(problem: &SimpleProblem<'_, Grid2d>) -> Self {
        Self::new(problem.goals().iter().copied())
    }
}

impl Heuristic<Cell> for ManhattanDistance {
    fn estimate(&self, state: &Cell) -> Cost {
        self.goals
            .iter()
            .map(|g| state.manhattan(*g))
            .min()
            .unwrap_or(0)
    }
}
