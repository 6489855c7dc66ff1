use super::*;

#[test]
fn test_stone_opponent() {
    assert_eq!(Stone::Black.opponent(), Stone::White);
    assert_eq!(Stone::White.opponent(), Stone::Black);
    assert_eq!(Stone::Empty.opponent(), Stone::Empty);
}

#[test]
fn test_board_constants() {
    assert_eq!(BOARD_SIZE, 15);
    assert_eq!(TOTAL_CELLS, 225);
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::center();
    assert_eq!(pos.to_index(), 7 * 15 + 7);
    assert_eq!(pos.to_index(), 112);

    let pos2 = Pos::from_index(112);
    assert_eq!(pos2.row, 7);
    assert_eq!(pos2.col, 7);
}

#[test]
fn test_pos_validity() {
    assert!(Pos::is_valid(0, 0));
    assert!(Pos::is_valid(14, 14));
    assert!(Pos::is_valid(7, 7));
    assert!(!Pos::is_valid(-1, 0));
    assert!(!Pos::is_valid(0, -1));
    assert!(!Pos::is_valid(15, 0));
    assert!(!Pos::is_valid(0, 15));
}

#[test]
fn test_pos_ordering() {
    let pos1 = Pos::new(0, 0);
    let pos2 = Pos::new(0, 1);
    let pos3 = Pos::new(1, 0);

    assert!(pos1 < pos2);
    assert!(pos2 < pos3);
    assert!(pos1 < pos3);
}

#[test]
fn test_new_board_state() {
    let board = Board::new();
    assert!(board.is_board_empty());
    assert_eq!(board.to_move(), Stone::Black);
    assert_eq!(board.stone_count(), 0);
}

#[test]
fn test_make_move_places_current_side() {
    let mut board = Board::new();
    assert!(board.make_move(7, 7));
    assert_eq!(board.get(Pos::new(7, 7)), Stone::Black);

    board.switch_turn();
    assert!(board.make_move(7, 8));
    assert_eq!(board.get(Pos::new(7, 8)), Stone::White);
}

#[test]
fn test_make_move_rejects_occupied_and_out_of_bounds() {
    let mut board = Board::new();
    assert!(board.make_move(7, 7));
    assert!(!board.make_move(7, 7), "Occupied cell must be rejected");
    assert!(!board.make_move(-1, 0));
    assert!(!board.make_move(0, 15));
    // Board unchanged by the failed attempts
    assert_eq!(board.stone_count(), 1);
}

#[test]
fn test_make_move_does_not_advance_turn() {
    let mut board = Board::new();
    board.make_move(3, 3);
    assert_eq!(board.to_move(), Stone::Black);
}

#[test]
fn test_set_turn_ignores_empty() {
    let mut board = Board::new();
    board.set_turn(Stone::White);
    assert_eq!(board.to_move(), Stone::White);

    board.set_turn(Stone::Empty);
    assert_eq!(board.to_move(), Stone::White, "Empty must be ignored");
}

#[test]
fn test_stone_at_out_of_range_is_empty() {
    let mut board = Board::new();
    board.place_stone(Pos::new(0, 0), Stone::Black);
    assert_eq!(board.stone_at(0, 0), Stone::Black);
    assert_eq!(board.stone_at(-1, 0), Stone::Empty);
    assert_eq!(board.stone_at(0, 15), Stone::Empty);
    assert_eq!(board.stone_at(100, 100), Stone::Empty);
}

#[test]
fn test_check_win_horizontal_incremental() {
    // Stones at row 7, cols 3..=6: no win after any of the first four,
    // then col 7 completes five in a row.
    let mut board = Board::new();
    for col in 3..=6 {
        assert!(board.make_move(7, col));
        assert!(
            !board.check_win(Pos::new(7, col as u8)),
            "No win expected after {} stones",
            col - 2
        );
    }
    assert!(board.make_move(7, 7));
    assert!(board.check_win(Pos::new(7, 7)));
}

#[test]
fn test_check_win_vertical() {
    let mut board = Board::new();
    for row in 3..=6 {
        board.make_move(row, 7);
        assert!(!board.check_win(Pos::new(row as u8, 7)));
    }
    board.make_move(7, 7);
    assert!(board.check_win(Pos::new(7, 7)));
}

#[test]
fn test_check_win_diagonal_se() {
    let mut board = Board::new();
    for i in 3..=6 {
        board.make_move(i, i);
        assert!(!board.check_win(Pos::new(i as u8, i as u8)));
    }
    board.make_move(7, 7);
    assert!(board.check_win(Pos::new(7, 7)));
}

#[test]
fn test_check_win_diagonal_sw() {
    let mut board = Board::new();
    for i in 3..=6 {
        board.make_move(i, 14 - i);
        assert!(!board.check_win(Pos::new(i as u8, (14 - i) as u8)));
    }
    board.make_move(7, 7);
    assert!(board.check_win(Pos::new(7, 7)));
}

#[test]
fn test_check_win_from_middle_of_run() {
    // Five in a row detected through an interior cell, not just the ends
    let mut board = Board::new();
    for col in 3..=7 {
        if col != 5 {
            board.make_move(7, col);
        }
    }
    board.make_move(7, 5);
    assert!(board.check_win(Pos::new(7, 5)));
}

#[test]
fn test_check_win_overline_counts() {
    // Six in a row is still a win (no overline exclusion)
    let mut board = Board::new();
    for col in 2..=6 {
        board.make_move(7, col);
    }
    board.make_move(7, 7);
    assert!(board.check_win(Pos::new(7, 7)));
}

#[test]
fn test_check_win_uses_side_to_move() {
    // White stones do not produce a win while Black is to move
    let mut board = Board::new();
    for col in 3..=7 {
        board.place_stone(Pos::new(7, col), Stone::White);
    }
    assert!(!board.check_win(Pos::new(7, 7)));

    board.set_turn(Stone::White);
    assert!(board.check_win(Pos::new(7, 7)));
}

#[test]
fn test_legal_moves_count_tracks_placements() {
    let mut board = Board::new();
    assert_eq!(board.legal_moves().len(), TOTAL_CELLS);

    let placements = [(0, 0), (7, 7), (14, 14), (3, 11)];
    for (i, &(r, c)) in placements.iter().enumerate() {
        assert!(board.make_move(r, c));
        board.switch_turn();
        assert_eq!(board.legal_moves().len(), TOTAL_CELLS - i - 1);
    }

    for pos in board.legal_moves() {
        assert!(board.is_valid_move(i32::from(pos.row), i32::from(pos.col)));
    }
}

#[test]
fn test_legal_moves_row_major_order() {
    let board = Board::new();
    let moves = board.legal_moves();
    for window in moves.windows(2) {
        assert!(window[0] < window[1], "Moves must come out in row-major order");
    }
}

#[test]
fn test_clone_independence() {
    let mut original = Board::new();
    original.make_move(7, 7);

    let mut copy = original.clone();
    copy.place_stone(Pos::new(0, 0), Stone::White);
    copy.switch_turn();

    assert_eq!(original.get(Pos::new(0, 0)), Stone::Empty);
    assert_eq!(original.to_move(), Stone::Black);
    assert_eq!(copy.get(Pos::new(7, 7)), Stone::Black);
}

#[test]
fn test_bitboard_set_clear_count() {
    let mut bb = Bitboard::new();
    assert!(bb.is_empty());

    bb.set(Pos::new(0, 0));
    bb.set(Pos::new(14, 14));
    assert_eq!(bb.count(), 2);
    assert!(bb.get(Pos::new(0, 0)));

    bb.clear(Pos::new(0, 0));
    assert!(!bb.get(Pos::new(0, 0)));
    assert_eq!(bb.count(), 1);
}

#[test]
fn test_bitboard_iter_ones() {
    let mut bb = Bitboard::new();
    let positions = [Pos::new(0, 3), Pos::new(7, 7), Pos::new(14, 0)];
    for &pos in &positions {
        bb.set(pos);
    }

    let collected: Vec<Pos> = bb.iter_ones().collect();
    assert_eq!(collected, positions);
}

#[test]
fn test_display_renders_stones() {
    let mut board = Board::new();
    board.place_stone(Pos::new(0, 0), Stone::Black);
    board.place_stone(Pos::new(0, 1), Stone::White);

    let text = board.to_string();
    assert!(text.contains('X'));
    assert!(text.contains('O'));
}
