#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod ai;
mod bitboard;
mod board;
mod cell;
#[cfg(feature = "std")]
pub mod cli;
mod common;
mod config;
mod duel;
mod game;
#[cfg(feature = "std")]
mod logging;
mod player;
#[cfg(feature = "std")]
pub mod render;
mod ship;

pub use ai::*;
pub use bitboard::{BitBoard, BitBoardError, SetBits};
pub use board::*;
pub use cell::*;
pub use common::*;
pub use config::*;
pub use duel::*;
pub use game::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, parse_level, LOG_ENV};
pub use player::*;
pub use ship::*;
