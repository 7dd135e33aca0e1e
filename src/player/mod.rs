//! Participants that can field a fleet and pick targets.
//!
//! [`ComputerPlayer`] drives the targeting engine; the interactive human side
//! is handled by [`GameSession`](crate::GameSession) and the terminal front
//! end, so it needs no implementation here.

use rand::rngs::SmallRng;

use crate::{
    board::Board,
    cell::Coordinate,
    common::{BoardError, ShotResult},
};

/// Interface implemented by the sides of a game.
pub trait Player {
    /// Produce a board carrying this player's whole fleet.
    fn place_fleet(&mut self, rng: &mut SmallRng) -> Result<Board, BoardError>;

    /// Choose the next target on the opponent's board.
    fn select_target(&mut self, rng: &mut SmallRng, enemy: &Board) -> Coordinate;

    /// Inform the player of the result of its last shot; `enemy` is the
    /// opponent's board after the shot.
    fn handle_shot_result(&mut self, _target: Coordinate, _result: ShotResult, _enemy: &Board) {}

    /// Drop anything remembered from a previous game.
    fn reset(&mut self) {}
}

mod ai;
pub use ai::ComputerPlayer;
