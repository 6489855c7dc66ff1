//! Heuristic evaluation for the minimax search
//!
//! Two evaluators live here:
//! - [`evaluate`] scores a whole board by walking every row, column and
//!   diagonal once, scoring each run of stones by length and open ends.
//!   This is the leaf evaluation of the alpha-beta search.
//! - [`evaluate_point`] is a cheap move-local estimate used by the lowest
//!   difficulty tier, scoring only the runs through a single cell.

use crate::board::{Board, Pos, Stone, BOARD_SIZE};

use super::patterns::{score_blocked_sequence, score_run, score_sequence, PatternScore};

/// Scan directions: horizontal, vertical, diagonal SE, diagonal SW
const DIRECTIONS: [(i32, i32); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Evaluate the board from the perspective of `player`.
///
/// Sums the line scores of every full row, column and both diagonal
/// families for `player`, minus the same total for the opponent. Positive
/// values favor `player`.
#[must_use]
pub fn evaluate(board: &Board, player: Stone) -> i32 {
    let opponent = player.opponent();
    let n = BOARD_SIZE as i32;
    let mut player_score = 0;
    let mut opponent_score = 0;

    let mut scan = |row: i32, col: i32, dr: i32, dc: i32| {
        player_score += evaluate_line(board, row, col, dr, dc, player);
        opponent_score += evaluate_line(board, row, col, dr, dc, opponent);
    };

    // Rows and columns
    for i in 0..n {
        scan(i, 0, 0, 1);
        scan(0, i, 1, 0);
    }

    // SE diagonals, starting from the left edge and the top edge
    for i in 0..n {
        scan(i, 0, 1, 1);
    }
    for j in 1..n {
        scan(0, j, 1, 1);
    }

    // SW diagonals, starting from the right edge and the top edge
    for i in 0..n {
        scan(i, n - 1, 1, -1);
    }
    for j in 0..n - 1 {
        scan(0, j, 1, -1);
    }

    player_score - opponent_score
}

/// Evaluate one full line for `side`, walking it once.
///
/// Tracks a running count of consecutive `side` stones and the empty cells
/// bounding the run. A run that ends on an empty cell is scored with that
/// empty as one open end; a run cut off by an opponent stone is scored as
/// blocked, with only the empties seen before it as a possible open end.
/// A run reaching five scores the win value immediately. The trailing run
/// at the end of the line is scored as blocked.
fn evaluate_line(board: &Board, row: i32, col: i32, dr: i32, dc: i32, side: Stone) -> i32 {
    let mut score = 0;
    let mut count = 0u32;
    let mut empties = 0u32;

    let (mut r, mut c) = (row, col);
    while Pos::is_valid(r, c) {
        let stone = board.stone_at(r, c);
        if stone == side {
            count += 1;
            if count >= 5 {
                score += PatternScore::FIVE;
                count = 0;
                empties = 0;
            }
        } else if stone == Stone::Empty {
            if count > 0 {
                empties += 1;
                score += score_sequence(count, empties);
                count = 0;
                empties = 1; // this empty opens the next run
            } else {
                empties += 1;
            }
        } else {
            if count > 0 {
                score += score_blocked_sequence(count, empties);
            }
            count = 0;
            empties = 0;
        }
        r += dr;
        c += dc;
    }

    if count > 0 {
        score += score_blocked_sequence(count, empties);
    }

    score
}

/// Move-local estimate of the stone just placed at `pos` for `player`.
///
/// For each of the four axes, counts the contiguous run of `player` stones
/// through `pos` (scanning outward both ways, at most five cells per side),
/// recording an open end when the scan stops on an empty cell. Adds the
/// run score per axis plus a centrality bonus.
#[must_use]
pub fn evaluate_point(board: &Board, pos: Pos, player: Stone) -> i32 {
    let mut score = center_bonus(pos);

    for &(dr, dc) in &DIRECTIONS {
        let mut count = 1;
        let mut open_ends = 0;

        for &(sr, sc) in &[(dr, dc), (-dr, -dc)] {
            let mut r = i32::from(pos.row);
            let mut c = i32::from(pos.col);
            for _ in 0..5 {
                r += sr;
                c += sc;
                if !Pos::is_valid(r, c) {
                    break;
                }
                match board.stone_at(r, c) {
                    s if s == player => count += 1,
                    Stone::Empty => {
                        open_ends += 1;
                        break;
                    }
                    _ => break,
                }
            }
        }

        score += score_run(count, open_ends);
    }

    score
}

/// Centrality bonus: `max(0, N - manhattan distance to center) * weight`
#[must_use]
pub fn center_bonus(pos: Pos) -> i32 {
    let center = (BOARD_SIZE / 2) as i32;
    let dist = (i32::from(pos.row) - center).abs() + (i32::from(pos.col) - center).abs();
    (BOARD_SIZE as i32 - dist).max(0) * PatternScore::CENTER_WEIGHT
}
