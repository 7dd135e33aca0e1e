//! One side's 8×8 grid: ship placements, hits and misses.
//!
//! Every operation that changes the board takes `&self` and returns a new
//! `Board`; a caller holding an older value keeps an unchanged snapshot.

use alloc::vec::Vec;
use rand::Rng;

use crate::bitboard::BitBoard;
use crate::cell::{Cell, CellState, Coordinate, Marker};
use crate::common::{BoardError, ShotResult};
use crate::config::{ship_type_for_length, BOARD_SIZE, FLEET, MAX_FLEET_RESEEDS, MAX_PLACEMENT_ATTEMPTS};
use crate::ship::{footprint, Orientation, Ship, ShipId, ShipType};

/// Bitboard covering the game grid.
pub type Grid = BitBoard<u64, BOARD_SIZE>;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Board {
    ships: Vec<Ship>,
    #[cfg_attr(feature = "std", serde(skip))]
    ship_map: Grid,
    #[cfg_attr(feature = "std", serde(serialize_with = "serialize_cells"))]
    hits: Grid,
    #[cfg_attr(feature = "std", serde(serialize_with = "serialize_cells"))]
    misses: Grid,
}

/// Grids go out as lists of coordinates; the ship map is implied by `ships`.
#[cfg(feature = "std")]
fn serialize_cells<S: serde::Serializer>(grid: &Grid, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(grid.iter_set_bits().map(Coordinate::from))
}

/// Result of [`Board::attack`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attack {
    pub board: Board,
    pub result: ShotResult,
}

impl Attack {
    pub fn hit(&self) -> bool {
        self.result.is_hit()
    }

    pub fn sunk(&self) -> bool {
        self.result.is_sunk()
    }
}

/// Result of [`Board::place_ships_randomly`]. `placed` falls short of the
/// requested ships when one ran out of attempts and was skipped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RandomFleet {
    pub board: Board,
    pub placed: usize,
}

impl Board {
    /// Empty board: every cell unresolved, no ships.
    pub fn new() -> Self {
        Board {
            ships: Vec::new(),
            ship_map: Grid::new(),
            hits: Grid::new(),
            misses: Grid::new(),
        }
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Occupancy mask of all ships.
    pub fn ship_map(&self) -> Grid {
        self.ship_map
    }

    pub fn hits(&self) -> Grid {
        self.hits
    }

    pub fn misses(&self) -> Grid {
        self.misses
    }

    /// Cells already resolved as a hit or a miss.
    pub fn resolved(&self) -> Grid {
        self.hits | self.misses
    }

    pub fn cell(&self, row: usize, col: usize) -> Result<Cell, BoardError> {
        let state = if self.hits.get(row, col)? {
            CellState::Hit
        } else if self.misses.get(row, col)? {
            CellState::Miss
        } else {
            CellState::Empty
        };
        Ok(Cell {
            row,
            col,
            state,
            has_ship: self.ship_map.get(row, col)?,
        })
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..BOARD_SIZE * BOARD_SIZE)
            .filter_map(move |idx| self.cell(idx / BOARD_SIZE, idx % BOARD_SIZE).ok())
    }

    /// Cells still in state `Empty`, row-major.
    pub fn empty_cells(&self) -> Vec<Coordinate> {
        (!self.resolved())
            .iter_set_bits()
            .map(Coordinate::from)
            .collect()
    }

    /// `true` if the coordinate is on the board and not yet attacked.
    pub fn is_unresolved(&self, at: Coordinate) -> bool {
        at.in_bounds() && !self.resolved().get(at.row, at.col).unwrap_or(true)
    }

    pub fn marker(&self, row: usize, col: usize, reveal: bool) -> Result<Marker, BoardError> {
        Ok(self.cell(row, col)?.marker(reveal))
    }

    /// Whether a ship of `length` fits at (`row`, `col`) without leaving the
    /// grid or touching another ship.
    pub fn can_place_ship(
        &self,
        row: usize,
        col: usize,
        length: usize,
        orientation: Orientation,
    ) -> bool {
        let (anchor, along) = match orientation {
            Orientation::Horizontal => (row, col),
            Orientation::Vertical => (col, row),
        };
        if anchor >= BOARD_SIZE || along >= BOARD_SIZE || length > BOARD_SIZE - along {
            return false;
        }
        footprint(row, col, length, orientation)
            .all(|p| !self.ship_map.get(p.row, p.col).unwrap_or(true))
    }

    /// Place a ship of `length`, named from the fleet table. Rejects
    /// placements that [`can_place_ship`](Self::can_place_ship) would refuse.
    pub fn place_ship(
        &self,
        row: usize,
        col: usize,
        length: usize,
        orientation: Orientation,
    ) -> Result<Board, BoardError> {
        let def = ship_type_for_length(length).ok_or(BoardError::UnknownShipLength(length))?;
        let ship = Ship::new(ShipId(self.ships.len()), def, orientation, row, col)?;
        if !(self.ship_map & ship.mask()).is_empty() {
            return Err(BoardError::ShipOverlaps);
        }

        let mut board = self.clone();
        board.ship_map = board.ship_map | ship.mask();
        log::debug!(
            "placed {} at {} ({})",
            ship.name(),
            Coordinate::new(row, col),
            orientation
        );
        board.ships.push(ship);
        Ok(board)
    }

    /// Draw random anchors and orientations for a ship of `length` until one
    /// fits, giving up after [`MAX_PLACEMENT_ATTEMPTS`] draws.
    pub fn random_placement<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        length: usize,
    ) -> Option<(usize, usize, Orientation)> {
        for _ in 0..MAX_PLACEMENT_ATTEMPTS {
            let row = rng.random_range(0..BOARD_SIZE);
            let col = rng.random_range(0..BOARD_SIZE);
            let orientation = if rng.random::<bool>() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            if self.can_place_ship(row, col, length, orientation) {
                return Some((row, col, orientation));
            }
        }
        None
    }

    /// Place the fleet (Warship, Submarine, Destroyer) at random. A ship that
    /// cannot be fitted is skipped and reflected in `placed`.
    pub fn place_ships_randomly<R: Rng + ?Sized>(&self, rng: &mut R) -> RandomFleet {
        self.place_random(rng, &FLEET)
    }

    pub(crate) fn place_random<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        ships: &[ShipType],
    ) -> RandomFleet {
        let mut board = self.clone();
        let mut placed = 0;
        for def in ships {
            let next = board
                .random_placement(rng, def.length())
                .map(|(r, c, o)| board.place_ship(r, c, def.length(), o));
            match next {
                Some(Ok(b)) => {
                    board = b;
                    placed += 1;
                }
                _ => log::warn!(
                    "no room for {} after {} attempts, skipping it",
                    def.name(),
                    MAX_PLACEMENT_ATTEMPTS
                ),
            }
        }
        RandomFleet { board, placed }
    }

    /// A fresh board with the whole fleet placed at random, reseeding from an
    /// empty board when a ship gets skipped.
    pub fn random_fleet<R: Rng + ?Sized>(rng: &mut R) -> Result<Board, BoardError> {
        for _ in 0..MAX_FLEET_RESEEDS {
            let seeded = Board::new().place_ships_randomly(rng);
            if seeded.placed == FLEET.len() {
                return Ok(seeded.board);
            }
        }
        Err(BoardError::UnableToPlaceShip)
    }

    /// Fire at (`row`, `col`). Cells already resolved are rejected so a hit
    /// is never counted twice.
    pub fn attack(&self, row: usize, col: usize) -> Result<Attack, BoardError> {
        if self.cell(row, col)?.is_resolved() {
            return Err(BoardError::AlreadyAttacked { row, col });
        }

        let mut board = self.clone();
        if !self.ship_map.get(row, col)? {
            board.misses.set(row, col)?;
            return Ok(Attack {
                board,
                result: ShotResult::Miss,
            });
        }

        board.hits.set(row, col)?;
        let ship = board
            .ships
            .iter_mut()
            .find(|s| s.contains(row, col))
            .ok_or(BoardError::UnknownShipHit)?;
        let result = if ship.register_hit() {
            ShotResult::Sink(ship.name())
        } else {
            ShotResult::Hit
        };
        Ok(Attack { board, result })
    }

    /// `true` when every ship is sunk, including the vacuous case of no ships.
    pub fn is_game_over(&self) -> bool {
        self.ships.iter().all(Ship::is_sunk)
    }

    /// Ships still afloat.
    pub fn ships_remaining(&self) -> usize {
        self.ships.iter().filter(|s| !s.is_sunk()).count()
    }
}
