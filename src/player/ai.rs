use rand::rngs::SmallRng;

use crate::{
    ai::{Difficulty, OpponentMemory},
    board::Board,
    cell::Coordinate,
    common::{BoardError, ShotResult},
};

use super::Player;

/// Computer opponent: a difficulty tier plus its own hunt/target memory.
#[derive(Debug, Clone, Default)]
pub struct ComputerPlayer {
    difficulty: Difficulty,
    memory: OpponentMemory,
}

impl ComputerPlayer {
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            memory: OpponentMemory::new(),
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Takes effect from the next target; memory is kept.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    pub fn memory(&self) -> &OpponentMemory {
        &self.memory
    }
}

impl Player for ComputerPlayer {
    fn place_fleet(&mut self, rng: &mut SmallRng) -> Result<Board, BoardError> {
        Board::random_fleet(rng)
    }

    fn select_target(&mut self, rng: &mut SmallRng, enemy: &Board) -> Coordinate {
        self.memory.choose_target(enemy, self.difficulty, rng)
    }

    fn handle_shot_result(&mut self, target: Coordinate, result: ShotResult, enemy: &Board) {
        self.memory
            .record_shot(target.row, target.col, result.is_hit(), enemy);
    }

    fn reset(&mut self) {
        self.memory.reset();
    }
}
