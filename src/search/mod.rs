//! Search module for the five-in-a-row engine
//!
//! Contains:
//! - Vicinity-pruned move generation and heuristic move ordering
//! - Transposition cache keyed by packed board + side + depth
//! - Fixed-depth minimax with alpha-beta pruning

pub mod alphabeta;
pub mod cache;
pub mod movegen;

pub use alphabeta::{SearchResult, Searcher};
pub use cache::{CacheStats, EvalCache};
pub use movegen::{order_moves, vicinity_moves};
