#![cfg(feature = "std")]

//! Parsing of the commands typed at the terminal prompt.

use std::io::{self, BufRead, Write};

use crate::{ai::Difficulty, cell::Coordinate, config::BOARD_SIZE};

/// Input during ship placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupCommand {
    Place(Coordinate),
    Rotate,
    Auto,
    Quit,
}

/// Input while the battle is on or after it ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayCommand {
    Fire(Coordinate),
    Difficulty(Difficulty),
    NewGame,
    Quit,
}

/// Parse a coordinate such as `A5` or `h8`: column letter, then 1-based row.
pub fn parse_coord(input: &str) -> Result<Coordinate, String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("Empty input".to_string());
    }
    if input.len() < 2 {
        return Err("Too short - need column letter and row number (e.g., A5)".to_string());
    }
    let last_col = (b'A' + BOARD_SIZE as u8 - 1) as char;
    let mut chars = input.chars();
    let col_ch = chars.next().ok_or("No column letter")?.to_ascii_uppercase();
    if !col_ch.is_ascii_alphabetic() {
        return Err(format!("Invalid column '{}' - must be a letter A-{}", col_ch, last_col));
    }
    let col = (col_ch as u8).wrapping_sub(b'A') as usize;
    if col >= BOARD_SIZE {
        return Err(format!("Column '{}' out of bounds - must be A-{}", col_ch, last_col));
    }
    let row_str: String = chars.collect();
    let row: usize = row_str
        .trim()
        .parse()
        .map_err(|_| format!("Invalid row '{}' - must be a number 1-{}", row_str, BOARD_SIZE))?;
    if row == 0 || row > BOARD_SIZE {
        return Err(format!("Row {} out of bounds - must be 1-{}", row, BOARD_SIZE));
    }
    Ok(Coordinate::new(row - 1, col))
}

pub fn parse_setup_command(input: &str) -> Result<SetupCommand, String> {
    match input.trim().to_ascii_lowercase().as_str() {
        "r" | "rotate" => Ok(SetupCommand::Rotate),
        "a" | "auto" => Ok(SetupCommand::Auto),
        "q" | "quit" => Ok(SetupCommand::Quit),
        other => parse_coord(other).map(SetupCommand::Place),
    }
}

pub fn parse_play_command(input: &str) -> Result<PlayCommand, String> {
    let input = input.trim().to_ascii_lowercase();
    let mut words = input.split_whitespace();
    match (words.next(), words.next()) {
        (Some("q" | "quit"), None) => Ok(PlayCommand::Quit),
        (Some("n" | "new"), None) => Ok(PlayCommand::NewGame),
        (Some("difficulty" | "d"), Some(level)) => level
            .parse()
            .map(PlayCommand::Difficulty)
            .map_err(|e: crate::ai::UnknownDifficulty| e.to_string()),
        (Some(coord), None) => parse_coord(coord).map(PlayCommand::Fire),
        _ => Err(format!("Unrecognised command '{}'", input)),
    }
}

/// Print `prompt` and read one line. `None` at end of input.
pub fn prompt_line(prompt: &str) -> io::Result<Option<String>> {
    print!("{} ", prompt);
    io::stdout().flush()?;
    let mut buf = String::new();
    if io::stdin().lock().read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(buf.trim().to_string()))
}
