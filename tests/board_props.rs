use broadside::{Board, CellState, Coordinate, Orientation, BOARD_SIZE};
use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};
use std::collections::HashSet;

fn orientation() -> impl Strategy<Value = Orientation> {
    prop_oneof![Just(Orientation::Horizontal), Just(Orientation::Vertical)]
}

fn fleet_length() -> impl Strategy<Value = usize> {
    prop_oneof![Just(5usize), Just(3usize), Just(2usize)]
}

/// Random full fleet plus some random shots.
fn random_board(seed: u64) -> Board {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut board = Board::random_fleet(&mut rng).unwrap();
    let shots = rng.random_range(0..BOARD_SIZE * BOARD_SIZE);
    for _ in 0..shots {
        let r = rng.random_range(0..BOARD_SIZE);
        let c = rng.random_range(0..BOARD_SIZE);
        if let Ok(a) = board.attack(r, c) {
            board = a.board;
        }
    }
    board
}

fn run(row: usize, col: usize, len: usize, o: Orientation) -> Vec<Coordinate> {
    (0..len)
        .map(|i| match o {
            Orientation::Horizontal => Coordinate::new(row, col + i),
            Orientation::Vertical => Coordinate::new(row + i, col),
        })
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn valid_placement_marks_exactly_the_run(
        row in 0..BOARD_SIZE,
        col in 0..BOARD_SIZE,
        len in fleet_length(),
        o in orientation(),
    ) {
        let fits = match o {
            Orientation::Horizontal => col + len <= BOARD_SIZE,
            Orientation::Vertical => row + len <= BOARD_SIZE,
        };
        let board = Board::new();
        prop_assert_eq!(board.can_place_ship(row, col, len, o), fits);
        if fits {
            let placed = board.place_ship(row, col, len, o).unwrap();
            prop_assert_eq!(placed.ships().len(), 1);
            let expected = run(row, col, len, o);
            prop_assert_eq!(placed.ships()[0].positions(), expected.as_slice());
            prop_assert_eq!(placed.ship_map().count_ones(), len);
            for p in run(row, col, len, o) {
                prop_assert!(placed.cell(p.row, p.col).unwrap().has_ship);
            }
        } else {
            prop_assert!(board.place_ship(row, col, len, o).is_err());
        }
    }

    #[test]
    fn overlapping_placement_is_refused(
        row in 0..BOARD_SIZE,
        col in 0..BOARD_SIZE,
        len in fleet_length(),
        o in orientation(),
    ) {
        let board = Board::new().place_ship(3, 2, 3, Orientation::Horizontal).unwrap();
        let overlaps = run(row, col, len, o)
            .iter()
            .any(|p| p.row == 3 && (2..5).contains(&p.col));
        if overlaps {
            prop_assert!(!board.can_place_ship(row, col, len, o));
        }
    }

    #[test]
    fn random_fleet_never_overlaps(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let seeded = Board::new().place_ships_randomly(&mut rng);
        prop_assert_eq!(seeded.placed, seeded.board.ships().len());
        let mut seen = HashSet::new();
        let mut total = 0;
        for ship in seeded.board.ships() {
            for p in ship.positions() {
                prop_assert!(p.in_bounds());
                prop_assert!(seen.insert(*p), "cell {:?} used twice", p);
                total += 1;
            }
        }
        prop_assert_eq!(seeded.board.ship_map().count_ones(), total);
    }

    #[test]
    fn attack_updates_exactly_one_cell(
        seed in any::<u64>(),
        row in 0..BOARD_SIZE,
        col in 0..BOARD_SIZE,
    ) {
        let board = random_board(seed);
        let before = board.cell(row, col).unwrap();
        let hits_before: Vec<usize> = board.ships().iter().map(|s| s.hits()).collect();
        match board.attack(row, col) {
            Err(_) => prop_assert!(before.state != CellState::Empty),
            Ok(a) => {
                prop_assert_eq!(before.state, CellState::Empty);
                let after = a.board.cell(row, col).unwrap();
                let hits_after: Vec<usize> = a.board.ships().iter().map(|s| s.hits()).collect();
                if before.has_ship {
                    prop_assert!(a.hit());
                    prop_assert_eq!(after.state, CellState::Hit);
                    let changed: Vec<usize> = (0..hits_before.len())
                        .filter(|&i| hits_after[i] != hits_before[i])
                        .collect();
                    prop_assert_eq!(changed.len(), 1);
                    let i = changed[0];
                    prop_assert_eq!(hits_after[i], hits_before[i] + 1);
                    let ship = &a.board.ships()[i];
                    prop_assert_eq!(ship.is_sunk(), ship.hits() == ship.length());
                    prop_assert_eq!(a.sunk(), ship.is_sunk());
                } else {
                    prop_assert!(!a.hit() && !a.sunk());
                    prop_assert_eq!(after.state, CellState::Miss);
                    prop_assert_eq!(hits_after, hits_before);
                }
                let resolved = a.board.cells().filter(|c| c.state != CellState::Empty).count();
                let resolved_before = board.cells().filter(|c| c.state != CellState::Empty).count();
                prop_assert_eq!(resolved, resolved_before + 1);
            }
        }
    }

    #[test]
    fn game_over_iff_all_sunk(seed in any::<u64>()) {
        let board = random_board(seed);
        prop_assert_eq!(
            board.is_game_over(),
            board.ships().iter().all(|s| s.is_sunk())
        );
        for ship in board.ships() {
            prop_assert!(ship.hits() <= ship.length());
        }
    }
}
