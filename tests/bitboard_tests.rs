use duel::{BitBoard, BitBoardError};

#[test]
fn test_try_new_sizes() {
    // Success for board that fits
    let ok = BitBoard::<u64, 8>::try_new();
    assert!(ok.is_ok());

    // Failure when board is too large
    let err = BitBoard::<u8, 3>::try_new();
    assert!(matches!(err, Err(BitBoardError::SizeTooLarge { .. })));
}

#[test]
fn test_get_set_clear() {
    let mut bb = BitBoard::<u16, 4>::new();
    assert!(bb.is_empty());

    bb.set(1, 1).unwrap();
    assert!(bb.get(1, 1).unwrap());

    bb.clear(1, 1).unwrap();
    assert!(!bb.get(1, 1).unwrap());

    assert_eq!(
        bb.set(4, 0).unwrap_err(),
        BitBoardError::IndexOutOfBounds { row: 4, col: 0 }
    );
}

#[test]
fn test_from_iter_and_iter() {
    let bb = BitBoard::<u16, 4>::from_iter([(0, 1), (3, 3)]).unwrap();
    let bits: Vec<_> = bb.iter_set_bits().collect();
    assert_eq!(bits, vec![(0, 1), (3, 3)]);
}

#[test]
fn test_dilate_interior_cell() {
    let bb = BitBoard::<u64, 8>::from_iter([(3, 3)]).unwrap();
    let grown = bb.dilate();
    assert_eq!(grown.count_ones(), 9);
    for r in 2..=4 {
        for c in 2..=4 {
            assert!(grown.get(r, c).unwrap());
        }
    }
}

#[test]
fn test_dilate_clips_at_edges() {
    // corners do not wrap onto the opposite edge or the next row
    let bb = BitBoard::<u64, 8>::from_iter([(0, 7), (7, 0)]).unwrap();
    let grown = bb.dilate();
    let mut cells: Vec<_> = grown.iter_set_bits().collect();
    cells.sort();
    assert_eq!(
        cells,
        vec![(0, 6), (0, 7), (1, 6), (1, 7), (6, 0), (6, 1), (7, 0), (7, 1)]
    );
}

#[test]
fn test_dilate_small_board_uses_full_width() {
    let bb = BitBoard::<u16, 4>::from_iter([(3, 3)]).unwrap();
    let cells: Vec<_> = bb.dilate().iter_set_bits().collect();
    assert_eq!(cells, vec![(2, 2), (2, 3), (3, 2), (3, 3)]);
}

#[test]
fn test_bit_ops() {
    let a = BitBoard::<u16, 4>::from_iter([(0, 0), (1, 1)]).unwrap();
    let b = BitBoard::<u16, 4>::from_iter([(1, 1), (2, 2)]).unwrap();
    assert_eq!((a & b).iter_set_bits().collect::<Vec<_>>(), vec![(1, 1)]);
    assert_eq!((a | b).count_ones(), 3);
    assert_eq!((!a).count_ones(), 14);
}

#[test]
fn test_display_labels_rows_and_columns() {
    let bb = BitBoard::<u16, 4>::from_iter([(0, 1), (3, 3)]).unwrap();
    assert_eq!(
        bb.to_string(),
        "   0 1 2 3\n0  . # . .\n1  . . . .\n2  . . . .\n3  . . . #"
    );
}
