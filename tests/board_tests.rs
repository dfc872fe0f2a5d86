use duel::{
    Board, BoardError, Cell, Guess, GuessResult, Orientation, PlacedShip, Spacing, BATTLESHIP,
    CRUISER, DESTROYER, SINGLE_CELL,
};

fn ship<const N: usize>(len: usize, orientation: Orientation, row: usize, col: usize) -> PlacedShip<N> {
    let kind = match len {
        1 => SINGLE_CELL,
        2 => DESTROYER,
        3 => CRUISER,
        _ => BATTLESHIP,
    };
    PlacedShip::<N>::new(kind, len, orientation, row, col).unwrap()
}

#[test]
fn test_new_board_is_water() {
    let board = Board::<4>::new().unwrap();
    for r in 0..4 {
        for c in 0..4 {
            assert_eq!(board.cell(r, c).unwrap(), Cell::Water);
        }
    }
    assert!(board.all_sunk());
    assert_eq!(board.size(), 4);
}

#[test]
fn test_board_too_large_for_storage() {
    let err = Board::<9>::new().unwrap_err();
    assert!(matches!(err, BoardError::BitBoard(_)));
}

#[test]
fn test_check_hit_marks_segment() {
    let mut board = Board::<4>::new().unwrap();
    board.place(ship(1, Orientation::Horizontal, 2, 1), Spacing::Touching).unwrap();
    assert_eq!(board.cell(2, 1).unwrap(), Cell::ShipSegment(SINGLE_CELL));

    assert!(!board.check_hit(Guess::new(0, 0)).unwrap());
    assert_eq!(board.cell(0, 0).unwrap(), Cell::Water);

    assert!(board.check_hit(Guess::new(2, 1)).unwrap());
    assert_eq!(board.cell(2, 1).unwrap(), Cell::Hit);
    assert!(board.all_sunk());
}

#[test]
fn test_repeat_hit_reads_as_miss() {
    let mut board = Board::<4>::new().unwrap();
    board.place(ship(1, Orientation::Horizontal, 0, 0), Spacing::Touching).unwrap();
    board.place(ship(1, Orientation::Horizontal, 3, 3), Spacing::Touching).unwrap();

    assert!(board.check_hit(Guess::new(0, 0)).unwrap());
    assert!(!board.check_hit(Guess::new(0, 0)).unwrap());
    assert_eq!(board.cell(0, 0).unwrap(), Cell::Hit);
    assert!(!board.all_sunk());
}

#[test]
fn test_sink_reported_on_last_segment() {
    let mut board = Board::<8>::new().unwrap();
    board.place(ship(3, Orientation::Vertical, 1, 5), Spacing::Separated).unwrap();

    assert_eq!(board.guess(1, 5).unwrap(), GuessResult::Hit);
    assert_eq!(board.guess(3, 5).unwrap(), GuessResult::Hit);
    assert_eq!(board.guess(2, 5).unwrap(), GuessResult::Sink(CRUISER));
    assert_eq!(board.guess(2, 5).unwrap(), GuessResult::Miss);
    assert!(board.all_sunk());
}

#[test]
fn test_sinking_one_ship_leaves_the_other_afloat() {
    let mut board = Board::<8>::new().unwrap();
    board.place(ship(2, Orientation::Horizontal, 0, 0), Spacing::Separated).unwrap();
    board.place(ship(2, Orientation::Horizontal, 5, 5), Spacing::Separated).unwrap();

    assert_eq!(board.guess(0, 1).unwrap(), GuessResult::Hit);
    assert_eq!(board.guess(5, 5).unwrap(), GuessResult::Hit);
    assert_eq!(board.guess(0, 0).unwrap(), GuessResult::Sink(DESTROYER));
    assert!(!board.all_sunk());
    assert_eq!(board.segments().iter_set_bits().collect::<Vec<_>>(), vec![(5, 6)]);
    assert_eq!(board.guess(5, 6).unwrap(), GuessResult::Sink(DESTROYER));
    assert!(board.all_sunk());
    assert!(board.ships().iter().all(|s| s.is_sunk()));
}

#[test]
fn test_guess_out_of_bounds() {
    let mut board = Board::<4>::new().unwrap();
    assert_eq!(
        board.check_hit(Guess::new(4, 0)).unwrap_err(),
        BoardError::OutOfBounds { row: 4, col: 0 }
    );
}

#[test]
fn test_ship_out_of_bounds() {
    let err = PlacedShip::<8>::new(BATTLESHIP, 4, Orientation::Horizontal, 0, 5).unwrap_err();
    assert_eq!(err, BoardError::ShipOutOfBounds);
    let err = PlacedShip::<8>::new(BATTLESHIP, 4, Orientation::Vertical, 5, 0).unwrap_err();
    assert_eq!(err, BoardError::ShipOutOfBounds);
    assert!(PlacedShip::<8>::new(BATTLESHIP, 4, Orientation::Vertical, 4, 7).is_ok());
}

#[test]
fn test_overlap_rejected() {
    let mut board = Board::<8>::new().unwrap();
    board.place(ship(4, Orientation::Horizontal, 2, 2), Spacing::Touching).unwrap();
    let err = board
        .place(ship(2, Orientation::Vertical, 1, 3), Spacing::Touching)
        .unwrap_err();
    assert_eq!(err, BoardError::ShipOverlaps);
}

#[test]
fn test_spacing_rules() {
    let mut board = Board::<8>::new().unwrap();
    board.place(ship(2, Orientation::Horizontal, 0, 0), Spacing::Separated).unwrap();

    // diagonal neighbour of (0, 1)
    let diagonal = ship(2, Orientation::Horizontal, 1, 2);
    assert_eq!(
        board.check_placement(&diagonal, Spacing::Separated).unwrap_err(),
        BoardError::ShipTooClose
    );
    assert!(board.check_placement(&diagonal, Spacing::Touching).is_ok());

    let apart = ship(2, Orientation::Horizontal, 2, 0);
    board.place(apart, Spacing::Separated).unwrap();
    assert_eq!(board.ships().len(), 2);
}

#[test]
fn test_clear_resets_board() {
    let mut board = Board::<4>::new().unwrap();
    board.place(ship(1, Orientation::Horizontal, 1, 1), Spacing::Touching).unwrap();
    board.check_hit(Guess::new(1, 1)).unwrap();
    board.clear();
    assert!(board.ships().is_empty());
    assert!(board.hits().is_empty());
    assert_eq!(board.cell(1, 1).unwrap(), Cell::Water);
}

#[test]
fn test_display_grid() {
    let mut board = Board::<4>::new().unwrap();
    board.place(ship(1, Orientation::Horizontal, 0, 1), Spacing::Touching).unwrap();
    board.place(ship(1, Orientation::Horizontal, 2, 3), Spacing::Touching).unwrap();
    board.check_hit(Guess::new(2, 3)).unwrap();
    let expected = "   0 1 2 3\n0  . S . .\n1  . . . .\n2  . . . X\n3  . . . .";
    assert_eq!(board.to_string(), expected);
}
