use twentyfortyeight::{Board, Direction};

#[test]
fn test_left_merges_and_packs_low() {
    let board = Board::from_rows([[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]]);
    let (next, delta) = board.shifted(Direction::Left);
    assert_eq!(next, Board::from_rows([[4, 0, 0, 0], [0; 4], [0; 4], [0; 4]]));
    assert_eq!(delta, 4);
}

#[test]
fn test_right_merges_and_packs_high() {
    let board = Board::from_rows([[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]]);
    let (next, delta) = board.shifted(Direction::Right);
    assert_eq!(next, Board::from_rows([[0, 0, 0, 4], [0; 4], [0; 4], [0; 4]]));
    assert_eq!(delta, 4);
}

#[test]
fn test_columns_move_up_and_down() {
    let board = Board::from_rows([[2, 0, 0, 0], [2, 0, 0, 0], [4, 0, 0, 0], [0; 4]]);
    let (up, delta_up) = board.shifted(Direction::Up);
    assert_eq!(
        up,
        Board::from_rows([[4, 0, 0, 0], [4, 0, 0, 0], [0; 4], [0; 4]])
    );
    assert_eq!(delta_up, 4);

    let (down, delta_down) = board.shifted(Direction::Down);
    assert_eq!(
        down,
        Board::from_rows([[0; 4], [0; 4], [4, 0, 0, 0], [4, 0, 0, 0]])
    );
    assert_eq!(delta_down, 4);
}

#[test]
fn test_a_tile_merges_at_most_once_per_move() {
    let board = Board::from_rows([[2, 2, 2, 2], [0; 4], [0; 4], [0; 4]]);
    let (next, delta) = board.shifted(Direction::Left);
    // Two pair merges, not a cascade into 8.
    assert_eq!(next, Board::from_rows([[4, 4, 0, 0], [0; 4], [0; 4], [0; 4]]));
    assert_eq!(delta, 8);
}

#[test]
fn test_compaction_without_merge_is_ineffective_when_already_packed() {
    let board = Board::from_rows([[2, 4, 2, 0], [0; 4], [0; 4], [0; 4]]);
    let (next, delta) = board.shifted(Direction::Left);
    assert_eq!(next, board);
    assert_eq!(delta, 0);
    assert!(!board.is_move_effective(Direction::Left));
    // The same row still moves right, so that direction is effective.
    assert!(board.is_move_effective(Direction::Right));
}

#[test]
fn test_delta_sums_merges_across_all_lines() {
    let board = Board::from_rows([[2, 2, 0, 0], [4, 4, 0, 0], [8, 8, 0, 0], [0; 4]]);
    let (next, delta) = board.shifted(Direction::Left);
    assert_eq!(
        next,
        Board::from_rows([[4, 0, 0, 0], [8, 0, 0, 0], [16, 0, 0, 0], [0; 4]])
    );
    assert_eq!(delta, 4 + 8 + 16);
}

#[test]
fn test_delta_sums_multiple_merges_in_one_line() {
    let board = Board::from_rows([[2, 2, 4, 4], [0; 4], [0; 4], [0; 4]]);
    let (next, delta) = board.shifted(Direction::Left);
    assert_eq!(next, Board::from_rows([[4, 8, 0, 0], [0; 4], [0; 4], [0; 4]]));
    assert_eq!(delta, 12);
}

#[test]
fn test_win_detection() {
    let mut rows = [[0u32; 4]; 4];
    assert!(!Board::from_rows(rows).has_win());
    rows[2][3] = 2048;
    assert!(Board::from_rows(rows).has_win());
}

#[test]
fn test_full_board_without_adjacent_pairs_has_no_moves() {
    // Checkerboard of 2s and 4s: full, no equal neighbors anywhere.
    let stuck = Board::from_rows([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);
    assert!(stuck.has_no_moves());

    // One adjacent equal pair makes a move available again.
    let almost = Board::from_rows([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 4]]);
    assert!(!almost.has_no_moves());
}

#[test]
fn test_snapshot_is_row_major() {
    let board = Board::from_rows([[2, 0, 0, 0], [0, 4, 0, 0], [0; 4], [0, 0, 0, 8]]);
    let tiles = board.tiles();
    assert_eq!(tiles[0], 2);
    assert_eq!(tiles[5], 4);
    assert_eq!(tiles[15], 8);
    assert_eq!(tiles.iter().filter(|&&v| v != 0).count(), 3);
}
