//! One human-vs-computer game: both boards, whose turn it is, and the phase.
//!
//! The session is the only owner of the computer's targeting memory, so
//! independent sessions never share hunt state.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::{
    ai::Difficulty,
    board::Board,
    cell::Coordinate,
    common::{BoardError, SessionError, ShotResult},
    config::{FLEET, MAX_FLEET_RESEEDS},
    player::{ComputerPlayer, Player},
    ship::{Orientation, ShipType},
};

/// Game phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum Phase {
    Setup,
    Playing,
    Ended,
}

/// The two sides of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum Side {
    Human,
    Computer,
}

/// What happened on an accepted shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShotReport {
    pub by: Side,
    pub target: Coordinate,
    pub result: ShotResult,
    /// The shot sank the last ship of the target fleet.
    pub game_over: bool,
}

/// Progress after a ship was placed during setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetupProgress {
    pub placed: ShipType,
    /// Ship to place next, `None` once the fleet is complete.
    pub next: Option<ShipType>,
}

pub struct GameSession {
    player_board: Board,
    computer_board: Board,
    computer: ComputerPlayer,
    rng: SmallRng,
    phase: Phase,
    turn: Side,
    winner: Option<Side>,
    setup_index: usize,
    orientation: Orientation,
    message: String,
}

impl GameSession {
    /// Start a game in the setup phase. The computer's fleet is seeded right
    /// away; the human places theirs with [`place_next_ship`](Self::place_next_ship).
    pub fn new(difficulty: Difficulty, mut rng: SmallRng) -> Result<Self, BoardError> {
        let mut computer = ComputerPlayer::new(difficulty);
        computer.reset();
        let computer_board = computer.place_fleet(&mut rng)?;
        log::info!("new game at {} difficulty", difficulty);
        Ok(Self {
            player_board: Board::new(),
            computer_board,
            computer,
            rng,
            phase: Phase::Setup,
            turn: Side::Human,
            winner: None,
            setup_index: 0,
            orientation: Orientation::Horizontal,
            message: setup_prompt(FLEET[0]),
        })
    }

    /// Reproducible session for a fixed seed.
    pub fn from_seed(difficulty: Difficulty, seed: u64) -> Result<Self, BoardError> {
        Self::new(difficulty, SmallRng::seed_from_u64(seed))
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Side allowed to fire next.
    pub fn turn(&self) -> Side {
        self.turn
    }

    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    pub fn difficulty(&self) -> Difficulty {
        self.computer.difficulty()
    }

    /// Allowed at any point; applies from the computer's next target.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        log::info!("difficulty set to {}", difficulty);
        self.computer.set_difficulty(difficulty);
    }

    pub fn player_board(&self) -> &Board {
        &self.player_board
    }

    pub fn computer_board(&self) -> &Board {
        &self.computer_board
    }

    pub fn computer(&self) -> &ComputerPlayer {
        &self.computer
    }

    /// Status line for the front end.
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Flip the orientation used for the next manual placement.
    pub fn toggle_orientation(&mut self) -> Orientation {
        self.orientation = self.orientation.toggled();
        self.orientation
    }

    /// Ship the human places next, while in setup.
    pub fn next_ship(&self) -> Option<ShipType> {
        match self.phase {
            Phase::Setup => FLEET.get(self.setup_index).copied(),
            _ => None,
        }
    }

    /// Place the next fleet ship with its bow at (`row`, `col`) using the
    /// current orientation. An invalid spot leaves the board untouched.
    pub fn place_next_ship(&mut self, row: usize, col: usize) -> Result<SetupProgress, SessionError> {
        self.expect_phase(Phase::Setup)?;
        let def = FLEET[self.setup_index];
        match self
            .player_board
            .place_ship(row, col, def.length(), self.orientation)
        {
            Ok(board) => self.player_board = board,
            Err(e) => {
                self.message = String::from("Cannot place ship here. Try a different position.");
                return Err(e.into());
            }
        }
        self.setup_index += 1;
        Ok(self.after_placement(def))
    }

    /// Place every remaining fleet ship at random.
    pub fn auto_place_fleet(&mut self) -> Result<(), SessionError> {
        self.expect_phase(Phase::Setup)?;
        let remaining: Vec<ShipType> = FLEET[self.setup_index..].to_vec();
        for _ in 0..MAX_FLEET_RESEEDS {
            let seeded = self.player_board.place_random(&mut self.rng, &remaining);
            if seeded.placed == remaining.len() {
                self.player_board = seeded.board;
                self.setup_index = FLEET.len();
                if let Some(last) = remaining.last() {
                    self.after_placement(*last);
                }
                return Ok(());
            }
        }
        Err(BoardError::UnableToPlaceShip.into())
    }

    fn after_placement(&mut self, placed: ShipType) -> SetupProgress {
        let next = FLEET.get(self.setup_index).copied();
        match next {
            Some(def) => self.message = setup_prompt(def),
            None => {
                self.phase = Phase::Playing;
                self.turn = Side::Human;
                self.message = String::from("Battle begins! Attack the enemy fleet!");
                log::info!("fleet deployed, battle begins");
            }
        }
        SetupProgress { placed, next }
    }

    /// Fire at the computer's board. Accepted only while playing and on the
    /// human's turn; each accepted call resolves exactly one cell.
    pub fn human_attack(&mut self, row: usize, col: usize) -> Result<ShotReport, SessionError> {
        self.expect_turn(Side::Human)?;
        let attack = self.computer_board.attack(row, col)?;
        self.computer_board = attack.board;
        let game_over = self.computer_board.is_game_over();

        self.message = String::from(match attack.result {
            ShotResult::Sink(_) => "Ship sunk!",
            ShotResult::Hit => "Direct hit!",
            ShotResult::Miss => "Miss!",
        });
        if game_over {
            self.finish(Side::Human);
        } else {
            self.turn = Side::Computer;
        }
        Ok(ShotReport {
            by: Side::Human,
            target: Coordinate::new(row, col),
            result: attack.result,
            game_over,
        })
    }

    /// Let the computer pick a target, fire at the human's board and learn
    /// from the result. Accepted only while playing and on its turn.
    pub fn computer_turn(&mut self) -> Result<ShotReport, SessionError> {
        self.expect_turn(Side::Computer)?;
        let target = self
            .computer
            .select_target(&mut self.rng, &self.player_board);
        let attack = self.player_board.attack(target.row, target.col)?;
        self.player_board = attack.board;
        self.computer
            .handle_shot_result(target, attack.result, &self.player_board);
        let game_over = self.player_board.is_game_over();

        self.message = String::from(match attack.result {
            ShotResult::Sink(_) => "The computer sunk your ship!",
            ShotResult::Hit => "The computer hit your ship!",
            ShotResult::Miss => "The computer missed!",
        });
        if game_over {
            self.finish(Side::Computer);
        } else {
            self.turn = Side::Human;
        }
        Ok(ShotReport {
            by: Side::Computer,
            target,
            result: attack.result,
            game_over,
        })
    }

    /// Throw both boards away and go back to setup. The targeting memory is
    /// cleared; the difficulty is kept.
    pub fn reset(&mut self) -> Result<(), SessionError> {
        self.computer.reset();
        self.computer_board = self.computer.place_fleet(&mut self.rng)?;
        self.player_board = Board::new();
        self.phase = Phase::Setup;
        self.turn = Side::Human;
        self.winner = None;
        self.setup_index = 0;
        self.orientation = Orientation::Horizontal;
        self.message = setup_prompt(FLEET[0]);
        log::info!("game reset");
        Ok(())
    }

    fn finish(&mut self, winner: Side) {
        self.phase = Phase::Ended;
        self.winner = Some(winner);
        self.message = String::from(match winner {
            Side::Human => "Victory! You sank all enemy ships!",
            Side::Computer => "Defeat! The computer sunk all your ships!",
        });
        log::info!("game over, {:?} wins", winner);
    }

    fn expect_phase(&self, expected: Phase) -> Result<(), SessionError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(SessionError::WrongPhase {
                expected,
                actual: self.phase,
            })
        }
    }

    fn expect_turn(&self, side: Side) -> Result<(), SessionError> {
        self.expect_phase(Phase::Playing)?;
        if self.turn == side {
            Ok(())
        } else {
            Err(SessionError::OutOfTurn(side))
        }
    }
}

fn setup_prompt(def: ShipType) -> String {
    format!("Place your {} (length {})", def.name(), def.length())
}
