#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use broadside::{init_logging, ComputerPlayer, Difficulty, Duel, Seat};
#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::{rngs::SmallRng, SeedableRng};
#[cfg(feature = "std")]
use serde_json::json;

/// Run one computer-vs-computer game and print the outcome as JSON.
#[derive(Parser)]
#[cfg(feature = "std")]
struct Args {
    seed1: u64,
    seed2: u64,
    #[arg(long, value_enum, default_value_t = Difficulty::Hard)]
    first: Difficulty,
    #[arg(long, value_enum, default_value_t = Difficulty::Medium)]
    second: Difficulty,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let args = Args::parse();

    let mut rng1 = SmallRng::seed_from_u64(args.seed1);
    let mut rng2 = SmallRng::seed_from_u64(args.seed2);

    let mut duel = Duel::new(
        ComputerPlayer::new(args.first),
        ComputerPlayer::new(args.second),
        &mut rng1,
        &mut rng2,
    )?;
    let outcome = duel.run(&mut rng1, &mut rng2)?;

    let winner = match outcome.winner {
        Some(Seat::First) => Some("player1"),
        Some(Seat::Second) => Some("player2"),
        None => None,
    };

    let result = json!({
        "player1": {
            "difficulty": args.first,
            "shots": outcome.first_shots,
            "board": duel.board(Seat::First),
        },
        "player2": {
            "difficulty": args.second,
            "shots": outcome.second_shots,
            "board": duel.board(Seat::Second),
        },
        "winner": winner,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
