use broadside::{
    Board, ComputerPlayer, Coordinate, Difficulty, Duel, Player, Seat, ShotResult, BOARD_SIZE,
    MAX_DUEL_SHOTS,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

const TIERS: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

#[test]
fn test_ai_vs_ai_game() {
    for (i, first) in TIERS.iter().enumerate() {
        for (j, second) in TIERS.iter().enumerate() {
            let mut rng1 = SmallRng::seed_from_u64(100 + i as u64);
            let mut rng2 = SmallRng::seed_from_u64(200 + j as u64);
            let mut duel = Duel::new(
                ComputerPlayer::new(*first),
                ComputerPlayer::new(*second),
                &mut rng1,
                &mut rng2,
            )
            .unwrap();
            let outcome = duel.run(&mut rng1, &mut rng2).unwrap();

            let winner = outcome.winner.expect("duel ended without a winner");
            assert!(outcome.first_shots + outcome.second_shots <= MAX_DUEL_SHOTS);
            match winner {
                Seat::First => {
                    assert!(duel.board(Seat::Second).is_game_over());
                    assert!(!duel.board(Seat::First).is_game_over());
                    assert_eq!(outcome.first_shots, outcome.second_shots + 1);
                }
                Seat::Second => {
                    assert!(duel.board(Seat::First).is_game_over());
                    assert!(!duel.board(Seat::Second).is_game_over());
                    assert_eq!(outcome.first_shots, outcome.second_shots);
                }
            }
            assert_eq!(
                duel.board(Seat::Second).resolved().count_ones(),
                outcome.first_shots
            );
            assert_eq!(
                duel.board(Seat::First).resolved().count_ones(),
                outcome.second_shots
            );
        }
    }
}

#[test]
fn test_duel_is_reproducible() {
    let play = || {
        let mut rng1 = SmallRng::seed_from_u64(1);
        let mut rng2 = SmallRng::seed_from_u64(2);
        let mut duel = Duel::new(
            ComputerPlayer::new(Difficulty::Hard),
            ComputerPlayer::new(Difficulty::Medium),
            &mut rng1,
            &mut rng2,
        )
        .unwrap();
        let outcome = duel.run(&mut rng1, &mut rng2).unwrap();
        (outcome, duel.board(Seat::First).clone(), duel.board(Seat::Second).clone())
    };
    assert_eq!(play(), play());
}

#[test]
fn test_medium_player_never_fires_twice_at_a_cell() {
    let mut rng = SmallRng::seed_from_u64(77);
    let mut player = ComputerPlayer::new(Difficulty::Medium);
    let mut target = Board::random_fleet(&mut rng).unwrap();

    let mut shots = 0;
    while !target.is_game_over() {
        let at = player.select_target(&mut rng, &target);
        assert!(target.is_unresolved(at), "fired twice at {}", at);
        let attack = target.attack(at.row, at.col).unwrap();
        target = attack.board;
        player.handle_shot_result(at, attack.result, &target);
        shots += 1;
        assert!(shots <= BOARD_SIZE * BOARD_SIZE);
    }
}

#[test]
fn test_medium_follows_up_after_hit() {
    let mut rng = SmallRng::seed_from_u64(8);
    let mut player = ComputerPlayer::new(Difficulty::Medium);
    let board = Board::new()
        .place_ship(3, 3, 3, broadside::Orientation::Horizontal)
        .unwrap();

    let attack = board.attack(3, 4).unwrap();
    assert_eq!(attack.result, ShotResult::Hit);
    let board = attack.board;
    player.handle_shot_result(Coordinate::new(3, 4), attack.result, &board);

    let next = player.select_target(&mut rng, &board);
    assert_eq!(next, Coordinate::new(2, 4));
    assert_eq!(player.memory().last_hit(), Some(Coordinate::new(3, 4)));
}

#[test]
fn test_reset_clears_player_memory() {
    let board = Board::new();
    let mut player = ComputerPlayer::new(Difficulty::Medium);
    player.handle_shot_result(Coordinate::new(0, 0), ShotResult::Hit, &board);
    assert!(!player.memory().is_empty());
    player.reset();
    assert!(player.memory().is_empty());
    assert_eq!(player.difficulty(), Difficulty::Medium);
}
