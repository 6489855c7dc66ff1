//! Candidate move generation and ordering
//!
//! The full legal-move list on a 15x15 board is far too wide for tree
//! search, so candidates are restricted to empty cells near existing
//! stones (vicinity pruning) and sorted by a cheap proximity/centrality
//! score so that alpha-beta sees the most promising moves first.

use crate::board::{Board, Pos, Stone, BOARD_SIZE, TOTAL_CELLS};
use crate::eval::heuristic::center_bonus;

/// Candidate moves are restricted to this box radius around stones
pub const VICINITY_RADIUS: i32 = 2;

/// Weight per unit of closeness to an occupied neighbor
const PROXIMITY_WEIGHT: i32 = 10;

/// Empty cells within [`VICINITY_RADIUS`] of any occupied cell, row-major.
///
/// Walks the occupied cells of both bitboards and marks the empty cells
/// of each surrounding box, then emits the marked cells in index order.
/// On an empty board this returns nothing; the engine special-cases the
/// opening move before pruned generation is ever consulted.
#[must_use]
pub fn vicinity_moves(board: &Board) -> Vec<Pos> {
    let mut considered = [false; TOTAL_CELLS];

    for stone in board.black.iter_ones().chain(board.white.iter_ones()) {
        let (row, col) = (i32::from(stone.row), i32::from(stone.col));
        for dr in -VICINITY_RADIUS..=VICINITY_RADIUS {
            for dc in -VICINITY_RADIUS..=VICINITY_RADIUS {
                let (r, c) = (row + dr, col + dc);
                if !Pos::is_valid(r, c) {
                    continue;
                }
                let pos = Pos::new(r as u8, c as u8);
                if board.is_empty(pos) {
                    considered[pos.to_index()] = true;
                }
            }
        }
    }

    (0..TOTAL_CELLS)
        .filter(|&idx| considered[idx])
        .map(Pos::from_index)
        .collect()
}

/// Order candidates by descending proximity/centrality score.
///
/// The sort is stable, so equal-scored moves keep their original
/// enumeration order and searches stay deterministic.
#[must_use]
pub fn order_moves(board: &Board, moves: &[Pos]) -> Vec<Pos> {
    let mut scored: Vec<(i32, Pos)> = moves
        .iter()
        .map(|&pos| (proximity_score(board, pos), pos))
        .collect();
    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored.into_iter().map(|(_, pos)| pos).collect()
}

/// Cheap ordering score: centrality bonus plus a bonus per occupied cell
/// within manhattan distance [`VICINITY_RADIUS`], weighted by closeness.
#[must_use]
pub fn proximity_score(board: &Board, pos: Pos) -> i32 {
    let mut score = center_bonus(pos);

    let (row, col) = (i32::from(pos.row), i32::from(pos.col));
    for r in (row - VICINITY_RADIUS).max(0)..=(row + VICINITY_RADIUS).min(BOARD_SIZE as i32 - 1) {
        for c in
            (col - VICINITY_RADIUS).max(0)..=(col + VICINITY_RADIUS).min(BOARD_SIZE as i32 - 1)
        {
            if board.stone_at(r, c) == Stone::Empty {
                continue;
            }
            let dist = (row - r).abs() + (col - c).abs();
            if dist <= VICINITY_RADIUS {
                score += (VICINITY_RADIUS - dist + 1) * PROXIMITY_WEIGHT;
            }
        }
    }

    score
}
