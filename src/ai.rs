// Target selection for the computer opponent.
// Memory is an explicit value owned by each game, never global.

use alloc::collections::VecDeque;
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::{
    board::{Board, Grid},
    cell::Coordinate,
};

/// Target returned when no unresolved cell is left.
pub const FALLBACK_TARGET: Coordinate = Coordinate::new(0, 0);

/// Skill tier of the computer opponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, clap::ValueEnum))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum Difficulty {
    /// Uniformly random unresolved cell.
    Easy,
    /// Follows up queued neighbours of earlier hits, otherwise random.
    #[default]
    Medium,
    /// Random over the checkerboard parity cells, then anything left.
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => f.write_str("easy"),
            Difficulty::Medium => f.write_str("medium"),
            Difficulty::Hard => f.write_str("hard"),
        }
    }
}

impl FromStr for Difficulty {
    type Err = UnknownDifficulty;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            d if d.eq_ignore_ascii_case("easy") => Ok(Difficulty::Easy),
            d if d.eq_ignore_ascii_case("medium") => Ok(Difficulty::Medium),
            d if d.eq_ignore_ascii_case("hard") => Ok(Difficulty::Hard),
            _ => Err(UnknownDifficulty),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownDifficulty;

impl fmt::Display for UnknownDifficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("difficulty must be easy, medium or hard")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for UnknownDifficulty {}

/// Cross-turn memory of the hunt/target heuristic: the most recent hit and a
/// FIFO of neighbours still worth probing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OpponentMemory {
    last_hit: Option<Coordinate>,
    queue: VecDeque<Coordinate>,
}

impl OpponentMemory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_hit(&self) -> Option<Coordinate> {
        self.last_hit
    }

    /// Queued follow-up targets, front first.
    pub fn pending(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.queue.iter().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.last_hit.is_none() && self.queue.is_empty()
    }

    /// Pick the next cell to fire at on `board`, the opponent's board as the
    /// shooter knows it. Only unresolved cells are ever returned, except for
    /// [`FALLBACK_TARGET`] when none are left.
    ///
    /// Hard deliberately does not consult the queue.
    pub fn choose_target<R: Rng + ?Sized>(
        &mut self,
        board: &Board,
        difficulty: Difficulty,
        rng: &mut R,
    ) -> Coordinate {
        let available = board.empty_cells();
        if available.is_empty() {
            log::warn!("no unresolved cells left, firing at {}", FALLBACK_TARGET);
            return FALLBACK_TARGET;
        }

        match difficulty {
            Difficulty::Easy => pick(&available, rng),
            Difficulty::Medium => {
                while let Some(target) = self.queue.pop_front() {
                    if board.is_unresolved(target) {
                        log::debug!("following up hit with {}", target);
                        return target;
                    }
                    log::debug!("dropping stale target {}", target);
                }
                pick(&available, rng)
            }
            Difficulty::Hard => {
                let parity: Vec<Coordinate> = (!board.resolved() & Grid::checkerboard())
                    .iter_set_bits()
                    .map(Coordinate::from)
                    .collect();
                if parity.is_empty() {
                    pick(&available, rng)
                } else {
                    pick(&parity, rng)
                }
            }
        }
    }

    /// Feed back the result of a shot at (`row`, `col`); `board` is the
    /// target board after the shot. A hit queues every unresolved in-bounds
    /// neighbour (up, down, left, right). A miss changes nothing.
    pub fn record_shot(&mut self, row: usize, col: usize, hit: bool, board: &Board) {
        if !hit {
            return;
        }
        let at = Coordinate::new(row, col);
        self.last_hit = Some(at);
        let before = self.queue.len();
        self.queue
            .extend(at.neighbors().filter(|n| board.is_unresolved(*n)));
        log::debug!(
            "hit at {}, queued {} follow-ups ({} pending)",
            at,
            self.queue.len() - before,
            self.queue.len()
        );
    }

    /// Forget everything. Call before the first target of every game.
    pub fn reset(&mut self) {
        self.last_hit = None;
        self.queue.clear();
    }
}

fn pick<R: Rng + ?Sized>(cells: &[Coordinate], rng: &mut R) -> Coordinate {
    cells.choose(rng).copied().unwrap_or(FALLBACK_TARGET)
}
