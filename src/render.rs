#![cfg(feature = "std")]

//! Terminal rendering of boards and fleet status.

use crate::{
    board::Board,
    cell::Marker,
    config::BOARD_SIZE,
    game::{GameSession, Phase, Side},
};

/// Render a board as text. With `reveal` the owner's unhit ships are shown;
/// without it only resolved cells are.
pub fn board_lines(board: &Board, reveal: bool) -> Vec<String> {
    let mut lines = Vec::with_capacity(BOARD_SIZE + 1);
    let header: String = (0..BOARD_SIZE)
        .map(|c| format!(" {}", (b'A' + c as u8) as char))
        .collect();
    lines.push(format!("   {}", header));
    for r in 0..BOARD_SIZE {
        let row: String = (0..BOARD_SIZE)
            .map(|c| {
                let ch = match board.marker(r, c, reveal).unwrap_or(Marker::Unknown) {
                    Marker::Hit => 'X',
                    Marker::Miss => 'o',
                    Marker::Ship => 'S',
                    Marker::Unknown => '.',
                };
                format!(" {}", ch)
            })
            .collect();
        lines.push(format!("{:2} {}", r + 1, row));
    }
    lines
}

pub fn print_board(board: &Board, reveal: bool) {
    for line in board_lines(board, reveal) {
        println!("    {}", line);
    }
    if reveal {
        println!("    Legend: S=Ship  X=Hit  o=Miss  .=Water");
    } else {
        println!("    Legend: X=Hit  o=Miss  .=Unknown");
    }
}

/// One line per ship. The enemy fleet only reports whether a ship is sunk.
pub fn fleet_status_lines(board: &Board, reveal: bool) -> Vec<String> {
    board
        .ships()
        .iter()
        .map(|ship| {
            let status = if ship.is_sunk() {
                "Sunk".to_string()
            } else if reveal {
                format!("{}/{} hits", ship.hits(), ship.length())
            } else {
                "Unknown".to_string()
            };
            format!("{:<10} {}", ship.name(), status)
        })
        .collect()
}

/// Header for a fleet column, e.g. `Your Fleet (2/3 afloat)`.
pub fn fleet_header(title: &str, board: &Board) -> String {
    format!(
        "{} ({}/{} afloat)",
        title,
        board.ships_remaining(),
        board.ships().len()
    )
}

/// Both boards side by side, fleet status and the session message.
pub fn print_session(session: &GameSession) {
    let own = board_lines(session.player_board(), true);
    let enemy = board_lines(session.computer_board(), false);
    println!();
    println!(
        "    {:<24}    {}",
        fleet_header("Your Fleet", session.player_board()),
        fleet_header("Enemy Waters", session.computer_board())
    );
    for (left, right) in own.iter().zip(enemy.iter()) {
        println!("    {:<24}    {}", left, right);
    }
    println!();
    let own_status = fleet_status_lines(session.player_board(), true);
    let enemy_status = fleet_status_lines(session.computer_board(), false);
    for i in 0..own_status.len().max(enemy_status.len()) {
        println!(
            "    {:<24}    {}",
            own_status.get(i).map(String::as_str).unwrap_or(""),
            enemy_status.get(i).map(String::as_str).unwrap_or("")
        );
    }
    println!();
    let turn = match (session.phase(), session.turn()) {
        (Phase::Setup, _) => "setup".to_string(),
        (Phase::Ended, _) => "ended".to_string(),
        (Phase::Playing, Side::Human) => "your turn".to_string(),
        (Phase::Playing, Side::Computer) => "computer's turn".to_string(),
    };
    println!("    [{} | {}] {}", turn, session.difficulty(), session.message());
}
