//! Grid positions and the per-cell view of a board.

use core::fmt;

use crate::config::BOARD_SIZE;

/// A position on the board, 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Coordinate {
    pub row: usize,
    pub col: usize,
}

impl Coordinate {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn in_bounds(&self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }

    /// `true` for the checkerboard subset (`row + col` even).
    pub fn is_checkerboard(&self) -> bool {
        (self.row + self.col) % 2 == 0
    }

    /// In-bounds orthogonal neighbours, in the order up, down, left, right.
    pub fn neighbors(&self) -> impl Iterator<Item = Coordinate> {
        let Coordinate { row, col } = *self;
        let up = row.checked_sub(1).map(|r| Coordinate::new(r, col));
        let down = row.checked_add(1).map(|r| Coordinate::new(r, col));
        let left = col.checked_sub(1).map(|c| Coordinate::new(row, c));
        let right = col.checked_add(1).map(|c| Coordinate::new(row, c));
        [up, down, left, right]
            .into_iter()
            .flatten()
            .filter(Coordinate::in_bounds)
    }
}

impl From<(usize, usize)> for Coordinate {
    fn from((row, col): (usize, usize)) -> Self {
        Coordinate::new(row, col)
    }
}

/// Column letter then 1-based row, e.g. `(1, 2)` -> `C2`.
impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match u8::try_from(self.col) {
            Ok(c) if c < 26 => write!(f, "{}{}", (b'A' + c) as char, self.row + 1),
            _ => write!(f, "({}, {})", self.row, self.col),
        }
    }
}

/// Resolution state of a cell. Moves from `Empty` to `Hit` or `Miss` once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum CellState {
    Empty,
    Hit,
    Miss,
}

/// One grid position as seen by the board's owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Cell {
    pub row: usize,
    pub col: usize,
    pub state: CellState,
    pub has_ship: bool,
}

impl Cell {
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.row, self.col)
    }

    pub fn is_resolved(&self) -> bool {
        self.state != CellState::Empty
    }

    /// What a viewer may see here. Without `reveal` an unresolved ship
    /// segment is indistinguishable from open water.
    pub fn marker(&self, reveal: bool) -> Marker {
        match self.state {
            CellState::Hit => Marker::Hit,
            CellState::Miss => Marker::Miss,
            CellState::Empty if reveal && self.has_ship => Marker::Ship,
            CellState::Empty => Marker::Unknown,
        }
    }
}

/// Rendering marker for a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Unknown,
    Ship,
    Hit,
    Miss,
}
