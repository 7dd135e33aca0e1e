//! Ship definitions and per-ship damage tracking.

use alloc::vec::Vec;
use core::fmt;

use crate::board::Grid;
use crate::cell::Coordinate;
use crate::common::BoardError;
use crate::config::BOARD_SIZE;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

impl Orientation {
    pub fn toggled(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Horizontal => f.write_str("horizontal"),
            Orientation::Vertical => f.write_str("vertical"),
        }
    }
}

/// Type of ship: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct ShipType {
    name: &'static str,
    length: usize,
}

impl ShipType {
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

/// Board-local ship identity, assigned in placement order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct ShipId(pub usize);

/// Cells covered by a ship of `length` anchored at (`row`, `col`), extending
/// right when horizontal and down when vertical. Not bounds checked.
pub fn footprint(
    row: usize,
    col: usize,
    length: usize,
    orientation: Orientation,
) -> impl Iterator<Item = Coordinate> {
    (0..length).map(move |i| match orientation {
        Orientation::Horizontal => Coordinate::new(row, col + i),
        Orientation::Vertical => Coordinate::new(row + i, col),
    })
}

/// A ship placed on the board.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Ship {
    id: ShipId,
    ship_type: ShipType,
    orientation: Orientation,
    positions: Vec<Coordinate>,
    #[cfg_attr(feature = "std", serde(skip))]
    mask: Grid,
    hits: usize,
    sunk: bool,
}

impl Ship {
    /// Lay out a ship at (`row`, `col`). Fails if any segment leaves the grid.
    pub fn new(
        id: ShipId,
        ship_type: ShipType,
        orientation: Orientation,
        row: usize,
        col: usize,
    ) -> Result<Self, BoardError> {
        let len = ship_type.length();
        let (anchor, along) = match orientation {
            Orientation::Horizontal => (row, col),
            Orientation::Vertical => (col, row),
        };
        if anchor >= BOARD_SIZE || along >= BOARD_SIZE || len > BOARD_SIZE - along {
            return Err(BoardError::ShipOutOfBounds);
        }

        let positions: Vec<Coordinate> = footprint(row, col, len, orientation).collect();
        let mask = Grid::from_cells(positions.iter().map(|p| (p.row, p.col)))?;
        Ok(Ship {
            id,
            ship_type,
            orientation,
            positions,
            mask,
            hits: 0,
            sunk: false,
        })
    }

    /// Count one hit. Returns `true` once the ship is sunk.
    pub(crate) fn register_hit(&mut self) -> bool {
        if self.hits < self.ship_type.length() {
            self.hits += 1;
        }
        if self.hits == self.ship_type.length() {
            self.sunk = true;
        }
        self.sunk
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.mask.get(row, col).unwrap_or(false)
    }

    pub fn id(&self) -> ShipId {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.ship_type.name()
    }

    pub fn length(&self) -> usize {
        self.ship_type.length()
    }

    pub fn ship_type(&self) -> ShipType {
        self.ship_type
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Occupied cells, starting at the anchor.
    pub fn positions(&self) -> &[Coordinate] {
        &self.positions
    }

    pub fn hits(&self) -> usize {
        self.hits
    }

    pub fn is_sunk(&self) -> bool {
        self.sunk
    }

    pub fn mask(&self) -> Grid {
        self.mask
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ id: {}, name: \"{}\", origin: {:?}, orientation: {:?}, hits: {}/{}, sunk: {} }}",
            self.id.0,
            self.ship_type.name(),
            self.positions.first(),
            self.orientation,
            self.hits,
            self.ship_type.length(),
            self.sunk,
        )
    }
}
