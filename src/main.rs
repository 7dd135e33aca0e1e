#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use broadside::{
    cli::{parse_play_command, parse_setup_command, prompt_line, PlayCommand, SetupCommand},
    init_logging,
    render::{print_board, print_session},
    ComputerPlayer, Difficulty, Duel, GameSession, Phase, Seat, ShotReport, ShotResult, Side,
};

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use tokio::time::Duration;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play against the computer in this terminal.
    Play {
        #[arg(long, value_enum, default_value_t = Difficulty::Medium)]
        difficulty: Difficulty,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = 1000, help = "Pause before the computer fires, in milliseconds")]
        delay_ms: u64,
        #[arg(long, help = "Place your fleet at random instead of ship by ship")]
        auto_place: bool,
    },
    /// Watch two computer players fight it out.
    Watch {
        #[arg(long, value_enum, default_value_t = Difficulty::Hard)]
        first: Difficulty,
        #[arg(long, value_enum, default_value_t = Difficulty::Medium)]
        second: Difficulty,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

#[cfg(feature = "std")]
fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => {
            println!("Using fixed seed: {} (game will be reproducible)", s);
            SmallRng::seed_from_u64(s)
        }
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

#[cfg(feature = "std")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            difficulty,
            seed,
            delay_ms,
            auto_place,
        } => {
            let session = GameSession::new(difficulty, make_rng(seed))?;
            play(session, Duration::from_millis(delay_ms), auto_place).await?;
        }
        Commands::Watch { first, second, seed } => {
            let mut rng_first = make_rng(seed);
            let mut rng_second = match seed {
                Some(s) => SmallRng::seed_from_u64(s.wrapping_add(1)),
                None => SmallRng::from_rng(&mut rand::rng()),
            };
            let mut duel = Duel::new(
                ComputerPlayer::new(first),
                ComputerPlayer::new(second),
                &mut rng_first,
                &mut rng_second,
            )?;
            let outcome = duel.run(&mut rng_first, &mut rng_second)?;
            println!("First ({}):", first);
            print_board(duel.board(Seat::First), true);
            println!("Second ({}):", second);
            print_board(duel.board(Seat::Second), true);
            match outcome.winner {
                Some(Seat::First) => println!("First player wins after {} shots", outcome.first_shots),
                Some(Seat::Second) => println!("Second player wins after {} shots", outcome.second_shots),
                None => println!("No winner"),
            }
        }
    }
    Ok(())
}

#[cfg(feature = "std")]
fn describe(report: &ShotReport) -> String {
    let who = match report.by {
        Side::Human => "You fire",
        Side::Computer => "Computer fires",
    };
    let what = match report.result {
        ShotResult::Hit => "hit!".to_string(),
        ShotResult::Miss => "miss.".to_string(),
        ShotResult::Sink(name) => format!("hit and sunk the {}!", name),
    };
    format!("{} at {}: {}", who, report.target, what)
}

#[cfg(feature = "std")]
async fn play(mut session: GameSession, delay: Duration, auto_place: bool) -> anyhow::Result<()> {
    loop {
        match session.phase() {
            Phase::Setup => {
                if auto_place {
                    session.auto_place_fleet()?;
                    continue;
                }
                let Some(next) = session.next_ship() else {
                    return Err(anyhow::anyhow!("setup phase with no ship left to place"));
                };
                print_board(session.player_board(), true);
                let prompt = format!(
                    "{} ({}) - coordinate, 'r' to rotate, 'auto' to place the rest:",
                    session.message(),
                    session.orientation()
                );
                let Some(line) = prompt_line(&prompt)? else {
                    return Ok(());
                };
                match parse_setup_command(&line) {
                    Ok(SetupCommand::Place(at)) => {
                        if let Err(e) = session.place_next_ship(at.row, at.col) {
                            println!("Cannot place the {} at {}: {}", next.name(), at, e);
                        }
                    }
                    Ok(SetupCommand::Rotate) => {
                        session.toggle_orientation();
                    }
                    Ok(SetupCommand::Auto) => session.auto_place_fleet()?,
                    Ok(SetupCommand::Quit) => return Ok(()),
                    Err(e) => println!("{}", e),
                }
            }
            Phase::Playing => {
                print_session(&session);
                let Some(line) = prompt_line("Fire at (e.g. C4), 'd <level>', 'new' or 'quit':")? else {
                    return Ok(());
                };
                match parse_play_command(&line) {
                    Ok(PlayCommand::Fire(at)) => match session.human_attack(at.row, at.col) {
                        Ok(report) => println!("{}", describe(&report)),
                        Err(e) => {
                            println!("{}", e);
                            continue;
                        }
                    },
                    Ok(PlayCommand::Difficulty(d)) => session.set_difficulty(d),
                    Ok(PlayCommand::NewGame) => session.reset()?,
                    Ok(PlayCommand::Quit) => return Ok(()),
                    Err(e) => println!("{}", e),
                }
                if session.phase() == Phase::Playing && session.turn() == Side::Computer {
                    println!("The computer is taking aim...");
                    tokio::time::sleep(delay).await;
                    let report = session.computer_turn()?;
                    println!("{}", describe(&report));
                }
            }
            Phase::Ended => {
                print_session(&session);
                let Some(line) = prompt_line("Play again? (y/n)")? else {
                    return Ok(());
                };
                if line.eq_ignore_ascii_case("y") || line.eq_ignore_ascii_case("yes") {
                    session.reset()?;
                } else {
                    return Ok(());
                }
            }
        }
    }
}
