//! Decision engine: difficulty tiers and best-move selection
//!
//! The engine is the single entry point for callers: hand it a board and
//! it returns one legal move, or `None` when no moves remain (draw).
//! Selection follows a fixed priority:
//!
//! 1. No legal moves -> `None`
//! 2. Empty center -> play it (one-entry opening book)
//! 3. Depth-1 tier -> per-move point evaluation with random tie-breaking
//! 4. Deeper tiers -> fixed-depth alpha-beta search
//!
//! One call runs the full search to completion; there are no suspension
//! points and no state shared between engines. Callers embedding this in
//! an interactive loop should treat `best_move` as blocking.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;

use crate::board::{Board, Pos, Stone};
use crate::eval::evaluate_point;
use crate::search::{CacheStats, Searcher};

/// Named difficulty levels exposed to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    /// Depth 1, move-local evaluation only
    Easy,
    /// Depth 2 alpha-beta, full candidate lists
    Medium,
    /// Depth 3 alpha-beta with pruning, capped candidates and caching
    Hard,
}

impl Difficulty {
    /// Expand the level into its explicit behavior record.
    #[must_use]
    pub fn tier(self) -> TierConfig {
        match self {
            Difficulty::Easy => TierConfig {
                depth: 1,
                prune_moves: false,
                cap_candidates: false,
                use_cache: false,
            },
            Difficulty::Medium => TierConfig {
                depth: 2,
                prune_moves: false,
                cap_candidates: false,
                use_cache: false,
            },
            Difficulty::Hard => TierConfig {
                depth: 3,
                prune_moves: true,
                cap_candidates: true,
                use_cache: true,
            },
        }
    }
}

/// Explicit search configuration for one tier.
///
/// The engine and searcher branch on these flags, never on the tier name,
/// so custom configurations behave exactly like the named ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierConfig {
    /// Search depth in plies (1 = point evaluation only)
    pub depth: u8,
    /// Restrict inner-node candidates to cells near stones
    pub prune_moves: bool,
    /// Cap ordered candidate lists at a fixed maximum
    pub cap_candidates: bool,
    /// Consult/populate the transposition cache
    pub use_cache: bool,
}

/// Five-in-a-row decision engine.
///
/// Owns its searcher (and thus the transposition cache) and its RNG seed,
/// so concurrent engines never share state. Randomness only breaks ties
/// in the depth-1 tier, and every `best_move` call derives a fresh RNG
/// from the stored seed: repeated calls on the same unmodified board
/// return the same move. Seed via [`Engine::with_seed`] for reproducible
/// play.
pub struct Engine {
    tier: TierConfig,
    searcher: Searcher,
    seed: u64,
}

impl Engine {
    /// Create an engine for the given difficulty, seeded from entropy.
    #[must_use]
    pub fn new(difficulty: Difficulty) -> Self {
        Self::from_tier(difficulty.tier(), rand::rng().random())
    }

    /// Create an engine with a fixed RNG seed for deterministic play.
    #[must_use]
    pub fn with_seed(difficulty: Difficulty, seed: u64) -> Self {
        Self::from_tier(difficulty.tier(), seed)
    }

    /// Create an engine from an explicit tier record.
    #[must_use]
    pub fn from_tier(tier: TierConfig, seed: u64) -> Self {
        Self {
            tier,
            searcher: Searcher::new(),
            seed,
        }
    }

    /// Active tier configuration
    #[must_use]
    pub fn tier(&self) -> TierConfig {
        self.tier
    }

    /// Cache diagnostics from the most recent search
    #[must_use]
    pub fn cache_stats(&self) -> CacheStats {
        self.searcher.cache_stats()
    }

    /// Pick a move for the side to move on `board`.
    ///
    /// Returns `None` only when the board has no empty cell left. The
    /// input board is never mutated; all exploration happens on clones.
    #[must_use]
    pub fn best_move(&mut self, board: &Board) -> Option<Pos> {
        let legal = board.legal_moves();
        if legal.is_empty() {
            return None;
        }

        // Opening book of size one: take the center while it is free
        let center = Pos::center();
        if board.get(center) == Stone::Empty {
            return Some(center);
        }

        if self.tier.depth <= 1 {
            self.point_eval_move(board, &legal)
        } else {
            self.searcher.search(board, self.tier).best_move
        }
    }

    /// Depth-1 move selection: score every legal move independently with
    /// the move-local evaluator, keeping the maximum. Equal scores are
    /// broken by a coin flip between incumbent and challenger. The RNG is
    /// re-derived from the engine seed on every call, so the same board
    /// always yields the same move.
    fn point_eval_move(&self, board: &Board, legal: &[Pos]) -> Option<Pos> {
        let mut rng = Pcg64Mcg::seed_from_u64(self.seed);
        let player = board.to_move();
        let mut best_score = i32::MIN;
        let mut best_move = None;

        for &pos in legal {
            let mut child = board.clone();
            let placed = child.make_move(i32::from(pos.row), i32::from(pos.col));
            debug_assert!(placed);

            let score = evaluate_point(&child, pos, player);
            if score > best_score || (score == best_score && rng.random_bool(0.5)) {
                best_score = score;
                best_move = Some(pos);
            }
        }

        best_move
    }
}
