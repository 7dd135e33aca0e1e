use broadside::{BitBoard, BitBoardError, Grid};

#[test]
fn test_try_new_sizes() {
    assert!(BitBoard::<u64, 8>::try_new().is_ok());
    let err = BitBoard::<u8, 3>::try_new();
    assert!(matches!(err, Err(BitBoardError::SizeTooLarge { .. })));
}

#[test]
fn test_get_set_bounds() {
    let mut bb = Grid::new();
    assert!(bb.is_empty());
    bb.set(7, 7).unwrap();
    assert!(bb.get(7, 7).unwrap());
    assert_eq!(
        bb.set(8, 0).unwrap_err(),
        BitBoardError::IndexOutOfBounds { row: 8, col: 0 }
    );
}

#[test]
fn test_not_stays_on_full_width_board() {
    let mut bb = Grid::new();
    bb.set(0, 0).unwrap();
    assert_eq!((!bb).count_ones(), 63);
}

#[test]
fn test_checkerboard() {
    let cb = Grid::checkerboard();
    assert_eq!(cb.count_ones(), 32);
    assert!(cb.iter_set_bits().all(|(r, c)| (r + c) % 2 == 0));
}

#[test]
fn test_from_cells_and_iter() {
    let bb = BitBoard::<u16, 4>::from_cells([(3, 3), (0, 1)]).unwrap();
    let bits: Vec<_> = bb.iter_set_bits().collect();
    assert_eq!(bits, vec![(0, 1), (3, 3)]);
}
