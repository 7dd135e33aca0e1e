//! Shared result and error types.

use core::fmt;

use crate::bitboard::BitBoardError;
use crate::game::{Phase, Side};

/// Outcome of a single shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum ShotResult {
    /// Shot struck a ship that is still afloat.
    Hit,
    /// Shot landed in open water.
    Miss,
    /// Shot sank a ship, carrying its name.
    Sink(&'static str),
}

impl ShotResult {
    pub fn is_hit(&self) -> bool {
        !matches!(self, ShotResult::Miss)
    }

    pub fn is_sunk(&self) -> bool {
        matches!(self, ShotResult::Sink(_))
    }
}

/// Errors returned by board operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    BitBoardError(BitBoardError),
    /// Coordinate lies outside the grid.
    OutOfBounds { row: usize, col: usize },
    /// Part of the ship would leave the grid.
    ShipOutOfBounds,
    /// Ship placement overlaps another ship.
    ShipOverlaps,
    /// No fleet entry has this length.
    UnknownShipLength(usize),
    /// The cell was already resolved as a hit or miss.
    AlreadyAttacked { row: usize, col: usize },
    /// A ship cell had no owning ship; the board is inconsistent.
    UnknownShipHit,
    /// Random placement ran out of attempts.
    UnableToPlaceShip,
}

impl From<BitBoardError> for BoardError {
    fn from(err: BitBoardError) -> Self {
        match err {
            BitBoardError::IndexOutOfBounds { row, col } => BoardError::OutOfBounds { row, col },
            other => BoardError::BitBoardError(other),
        }
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::BitBoardError(e) => write!(f, "BitBoard error: {}", e),
            BoardError::OutOfBounds { row, col } => {
                write!(f, "Cell ({}, {}) is outside the board", row, col)
            }
            BoardError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            BoardError::ShipOverlaps => write!(f, "Ship placement overlaps with another ship"),
            BoardError::UnknownShipLength(len) => write!(f, "No ship of length {} in the fleet", len),
            BoardError::AlreadyAttacked { row, col } => {
                write!(f, "Cell ({}, {}) has already been attacked", row, col)
            }
            BoardError::UnknownShipHit => write!(f, "Hit a ship cell with no owning ship"),
            BoardError::UnableToPlaceShip => write!(f, "Unable to place ship"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}

/// Errors returned by [`GameSession`](crate::GameSession) when a request does
/// not fit the current phase or turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    WrongPhase { expected: Phase, actual: Phase },
    OutOfTurn(Side),
    Board(BoardError),
}

impl From<BoardError> for SessionError {
    fn from(err: BoardError) -> Self {
        SessionError::Board(err)
    }
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::WrongPhase { expected, actual } => {
                write!(f, "Only allowed during {:?}, game is in {:?}", expected, actual)
            }
            SessionError::OutOfTurn(side) => write!(f, "It is not the {:?} side's turn", side),
            SessionError::Board(e) => write!(f, "{}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SessionError {}
