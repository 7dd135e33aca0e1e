//! Two players firing at each other until one fleet is gone.

use rand::rngs::SmallRng;

use crate::{
    board::Board,
    common::BoardError,
    config::MAX_DUEL_SHOTS,
    player::Player,
};

/// Seat at the table; `First` fires first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum Seat {
    First,
    Second,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct DuelOutcome {
    /// `None` if the shot cap was reached first.
    pub winner: Option<Seat>,
    pub first_shots: usize,
    pub second_shots: usize,
}

pub struct Duel<A: Player, B: Player> {
    first: A,
    second: B,
    first_board: Board,
    second_board: Board,
}

impl<A: Player, B: Player> Duel<A, B> {
    /// Both players field their fleets, each from its own rng.
    pub fn new(
        mut first: A,
        mut second: B,
        rng_first: &mut SmallRng,
        rng_second: &mut SmallRng,
    ) -> Result<Self, BoardError> {
        first.reset();
        second.reset();
        let first_board = first.place_fleet(rng_first)?;
        let second_board = second.place_fleet(rng_second)?;
        Ok(Self {
            first,
            second,
            first_board,
            second_board,
        })
    }

    pub fn board(&self, seat: Seat) -> &Board {
        match seat {
            Seat::First => &self.first_board,
            Seat::Second => &self.second_board,
        }
    }

    /// Alternate shots, first seat leading, until a fleet is sunk.
    pub fn run(
        &mut self,
        rng_first: &mut SmallRng,
        rng_second: &mut SmallRng,
    ) -> Result<DuelOutcome, BoardError> {
        let mut outcome = DuelOutcome {
            winner: None,
            first_shots: 0,
            second_shots: 0,
        };
        while outcome.first_shots + outcome.second_shots < MAX_DUEL_SHOTS {
            let seat = if outcome.first_shots == outcome.second_shots {
                Seat::First
            } else {
                Seat::Second
            };
            let sunk_all = self.fire(seat, rng_first, rng_second)?;
            match seat {
                Seat::First => outcome.first_shots += 1,
                Seat::Second => outcome.second_shots += 1,
            }
            if sunk_all {
                outcome.winner = Some(seat);
                break;
            }
        }
        log::debug!("duel finished: {:?}", outcome);
        Ok(outcome)
    }

    /// One shot from `seat`. Returns `true` if it sank the opposing fleet.
    fn fire(
        &mut self,
        seat: Seat,
        rng_first: &mut SmallRng,
        rng_second: &mut SmallRng,
    ) -> Result<bool, BoardError> {
        match seat {
            Seat::First => volley(&mut self.first, rng_first, &mut self.second_board),
            Seat::Second => volley(&mut self.second, rng_second, &mut self.first_board),
        }
    }
}

fn volley<P: Player>(
    shooter: &mut P,
    rng: &mut SmallRng,
    target: &mut Board,
) -> Result<bool, BoardError> {
    let at = shooter.select_target(rng, target);
    let attack = target.attack(at.row, at.col)?;
    *target = attack.board;
    shooter.handle_shot_result(at, attack.result, target);
    Ok(target.is_game_over())
}
