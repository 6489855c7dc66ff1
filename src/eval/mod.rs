//! Evaluation module for five-in-a-row positions
//!
//! Pattern recognition and scoring for board positions:
//! - Run patterns (twos, threes, fours, fives) with open/blocked ends
//! - Positional bonuses (center control)

pub mod heuristic;
pub mod patterns;

pub use heuristic::{evaluate, evaluate_point};
pub use patterns::PatternScore;
