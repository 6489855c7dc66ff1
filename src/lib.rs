//! Five-in-a-row decision engine
//!
//! A bounded-depth decision engine for five-in-a-row (gomoku) on a fixed
//! 15x15 board: given a board state and a difficulty tier it produces a
//! legal move that prefers immediate wins, blocks immediate opponent
//! wins, and otherwise approximates optimal play within a fixed search
//! budget. Presentation layers (console, GUI, localization) are external
//! collaborators that consume only the [`Board`] and [`Engine`] APIs.
//!
//! # Architecture
//!
//! - [`board`]: Board representation with bitboards and turn tracking
//! - [`eval`]: Pattern-based position evaluation
//! - [`search`]: Move generation, ordering and alpha-beta search
//! - [`engine`]: Difficulty tiers and best-move selection
//!
//! # Quick Start
//!
//! ```
//! use omok::{Board, Difficulty, Engine, Pos};
//!
//! let mut board = Board::new();
//! let mut engine = Engine::with_seed(Difficulty::Medium, 0);
//!
//! // The first move is always the center
//! let pos = engine.best_move(&board).expect("empty board has moves");
//! assert_eq!(pos, Pos::center());
//!
//! board.make_move(i32::from(pos.row), i32::from(pos.col));
//! board.switch_turn();
//! ```
//!
//! # Move selection priority
//!
//! 1. No legal moves: report a draw (`None`)
//! 2. Free center cell: take it
//! 3. Lowest tier: move-local evaluation with seeded random tie-breaks
//! 4. Deeper tiers: fixed-depth minimax with alpha-beta pruning,
//!    vicinity-pruned candidates and a per-search transposition cache

pub mod board;
pub mod engine;
pub mod eval;
pub mod search;

// Re-export commonly used types for convenience
pub use board::{Board, Pos, Stone, BOARD_SIZE};
pub use engine::{Difficulty, Engine, TierConfig};
pub use search::{SearchResult, Searcher};
