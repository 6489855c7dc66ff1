//! Fixed-depth minimax search with alpha-beta pruning
//!
//! The searcher explores continuations on private board clones: every
//! branch owns its own deep copy and the caller's board is never touched.
//! Depth and pruning behavior come from the [`TierConfig`] passed in, so
//! the same driver serves every difficulty tier that searches a tree.
//!
//! Root handling follows a strict priority: a candidate that wins on the
//! spot is returned immediately, and if the opponent has an immediate
//! winning reply the search returns that blocking cell instead of
//! continuing the tree walk.

use crate::board::{Board, Pos, Stone};
use crate::engine::TierConfig;
use crate::eval::{evaluate, PatternScore};

use super::cache::{CacheKey, EvalCache};
use super::movegen::{order_moves, vicinity_moves};
use super::CacheStats;

/// Infinity bound for alpha-beta windows
const INF: i32 = i32::MAX;

/// Maximum candidates per node when the tier caps the branching factor
const MAX_CANDIDATES: usize = 15;

/// Search result with the best move found and diagnostics.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Best move found, if any
    pub best_move: Option<Pos>,
    /// Evaluation score of the best move
    pub score: i32,
    /// Total nodes visited
    pub nodes: u64,
}

/// Alpha-beta searcher with a per-search transposition cache.
pub struct Searcher {
    cache: EvalCache,
    nodes: u64,
}

impl Searcher {
    #[must_use]
    pub fn new() -> Self {
        Self {
            cache: EvalCache::new(),
            nodes: 0,
        }
    }

    /// Cache diagnostics for the most recent search
    #[must_use]
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Search for the best move for the side to move on `board`.
    ///
    /// Candidates at the root are always vicinity-pruned and ordered; the
    /// tier decides whether inner nodes prune too, whether the candidate
    /// list is capped, and whether the transposition cache is consulted.
    /// The cache is cleared up front so no entry from a previous top-level
    /// search can leak in.
    #[must_use]
    pub fn search(&mut self, board: &Board, tier: TierConfig) -> SearchResult {
        if tier.use_cache {
            self.cache.clear();
        }
        self.nodes = 0;

        let player = board.to_move();
        let opponent = player.opponent();

        let mut candidates = vicinity_moves(board);
        if candidates.is_empty() {
            // Stones may crowd every nearby cell; fall back to the full list
            candidates = board.legal_moves();
        }
        let mut candidates = order_moves(board, &candidates);
        if tier.cap_candidates {
            candidates.truncate(MAX_CANDIDATES);
        }

        let mut best_move = None;
        let mut best_score = -INF;

        for pos in candidates {
            let mut child = board.clone();
            let placed = child.make_move(i32::from(pos.row), i32::from(pos.col));
            debug_assert!(placed);

            // A move that wins on the spot ends the search
            if child.check_win(pos) {
                return SearchResult {
                    best_move: Some(pos),
                    score: PatternScore::FIVE,
                    nodes: self.nodes,
                };
            }

            // Forced-move interrupt: if the opponent can win immediately
            // from the pre-move board, block that cell instead of searching
            if let Some(block) = find_winning_reply(board, opponent) {
                return SearchResult {
                    best_move: Some(block),
                    score: -PatternScore::FIVE,
                    nodes: self.nodes,
                };
            }

            child.switch_turn();
            let depth = tier.depth.saturating_sub(1);
            let score = self.alpha_beta(&child, depth, -INF, INF, false, player, tier);

            // Strictly greater wins; the first candidate keeps ties
            if score > best_score {
                best_score = score;
                best_move = Some(pos);
            }
        }

        SearchResult {
            best_move,
            score: best_score,
            nodes: self.nodes,
        }
    }

    /// Recursive minimax with alpha-beta pruning.
    ///
    /// `maximizing` alternates each ply; `player` stays the root side so
    /// leaf evaluations are always from the root player's perspective.
    /// The side to move on `board` is always the side placing this ply.
    #[allow(clippy::too_many_arguments)]
    fn alpha_beta(
        &mut self,
        board: &Board,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
        player: Stone,
        tier: TierConfig,
    ) -> i32 {
        self.nodes += 1;

        let key = CacheKey::new(board, maximizing, depth);
        if tier.use_cache {
            if let Some(score) = self.cache.probe(&key) {
                return score;
            }
        }

        if depth == 0 {
            let score = evaluate(board, player);
            if tier.use_cache {
                self.cache.store(key, score);
            }
            return score;
        }

        let moves = if tier.prune_moves {
            vicinity_moves(board)
        } else {
            board.legal_moves()
        };
        if moves.is_empty() {
            return 0; // draw
        }

        let mut candidates = order_moves(board, &moves);
        if tier.cap_candidates {
            candidates.truncate(MAX_CANDIDATES);
        }

        let mut best = if maximizing { -INF } else { INF };

        for pos in candidates {
            let mut child = board.clone();
            let placed = child.make_move(i32::from(pos.row), i32::from(pos.col));
            debug_assert!(placed);

            // Immediate win short-circuits the whole node
            if child.check_win(pos) {
                best = if maximizing {
                    PatternScore::FIVE
                } else {
                    -PatternScore::FIVE
                };
                break;
            }

            child.switch_turn();
            let score =
                self.alpha_beta(&child, depth - 1, alpha, beta, !maximizing, player, tier);

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(score);
            } else {
                best = best.min(score);
                beta = beta.min(score);
            }

            if beta <= alpha {
                break;
            }
        }

        if tier.use_cache {
            self.cache.store(key, best);
        }
        best
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new()
    }
}

/// Find a move that wins immediately for `side`, if one exists.
///
/// Tries every legal move on a private clone with the turn forced to
/// `side`; the first (row-major) winning cell is returned.
#[must_use]
pub fn find_winning_reply(board: &Board, side: Stone) -> Option<Pos> {
    for pos in board.legal_moves() {
        let mut probe = board.clone();
        probe.set_turn(side);
        if probe.make_move(i32::from(pos.row), i32::from(pos.col)) && probe.check_win(pos) {
            return Some(pos);
        }
    }
    None
}
