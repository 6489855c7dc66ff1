//! Pattern scores for run evaluation
//!
//! These constants define the scoring weights for runs of consecutive
//! stones, split by how many ends of the run are open.

/// Pattern scores for evaluation
pub struct PatternScore;

impl PatternScore {
    /// Five in a row - immediate win
    pub const FIVE: i32 = 100_000;

    /// Open four: _OOOO_
    pub const OPEN_FOUR: i32 = 10_000;
    /// Closed four: XOOOO_ (one way to extend)
    pub const CLOSED_FOUR: i32 = 1_000;

    /// Open three: _OOO_
    pub const OPEN_THREE: i32 = 500;
    /// Closed three: XOOO_
    pub const CLOSED_THREE: i32 = 100;

    /// Open two: _OO_
    pub const OPEN_TWO: i32 = 50;
    /// Closed two: XOO_
    pub const CLOSED_TWO: i32 = 10;

    /// Lone stone with both neighbors open
    pub const OPEN_ONE: i32 = 1;

    /// Weight per unit of closeness to the board center
    pub const CENTER_WEIGHT: i32 = 3;
}

/// Score a run of `count` consecutive stones with `open_ends` open ends.
///
/// Runs of five or more always score [`PatternScore::FIVE`]; shorter runs
/// with no open end score 0 (they can never grow to five).
#[must_use]
pub fn score_run(count: u32, open_ends: u32) -> i32 {
    if count >= 5 {
        return PatternScore::FIVE;
    }
    match (count, open_ends) {
        (4, 2..) => PatternScore::OPEN_FOUR,
        (4, 1) => PatternScore::CLOSED_FOUR,
        (3, 2..) => PatternScore::OPEN_THREE,
        (3, 1) => PatternScore::CLOSED_THREE,
        (2, 2..) => PatternScore::OPEN_TWO,
        (2, 1) => PatternScore::CLOSED_TWO,
        (1, 2..) => PatternScore::OPEN_ONE,
        _ => 0,
    }
}

/// Score a run that ended on an empty cell.
///
/// `empties` counts the empty cells bounding the run, including the cell
/// that terminated the walk: two or more means both ends were open.
#[must_use]
pub fn score_sequence(count: u32, empties: u32) -> i32 {
    match empties {
        2.. => score_run(count, 2),
        1 => score_run(count, 1),
        0 => 0,
    }
}

/// Score a run that ended on an opponent stone or the board edge.
///
/// `empties` counts the empty cells seen before the run started; at least
/// one means the run still has one open end behind it.
#[must_use]
pub fn score_blocked_sequence(count: u32, empties: u32) -> i32 {
    if empties >= 1 {
        score_run(count, 1)
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_score_hierarchy() {
        assert!(PatternScore::FIVE > PatternScore::OPEN_FOUR);
        assert!(PatternScore::OPEN_FOUR > PatternScore::CLOSED_FOUR);
        assert!(PatternScore::CLOSED_FOUR > PatternScore::OPEN_THREE);
        assert!(PatternScore::OPEN_THREE > PatternScore::CLOSED_THREE);
        assert!(PatternScore::CLOSED_THREE > PatternScore::OPEN_TWO);
        assert!(PatternScore::OPEN_TWO > PatternScore::CLOSED_TWO);
        assert!(PatternScore::CLOSED_TWO > PatternScore::OPEN_ONE);
    }

    #[test]
    fn test_score_run_full_table() {
        // Every (run length 1-4, open ends 0/1/2) combination
        let expected = [
            // (count, open_ends, score)
            (1, 0, 0),
            (1, 1, 0),
            (1, 2, 1),
            (2, 0, 0),
            (2, 1, 10),
            (2, 2, 50),
            (3, 0, 0),
            (3, 1, 100),
            (3, 2, 500),
            (4, 0, 0),
            (4, 1, 1_000),
            (4, 2, 10_000),
        ];
        for &(count, open_ends, score) in &expected {
            assert_eq!(
                score_run(count, open_ends),
                score,
                "score_run({count}, {open_ends})"
            );
        }
    }

    #[test]
    fn test_score_run_five_ignores_ends() {
        assert_eq!(score_run(5, 0), PatternScore::FIVE);
        assert_eq!(score_run(5, 2), PatternScore::FIVE);
        assert_eq!(score_run(6, 1), PatternScore::FIVE);
    }

    #[test]
    fn test_score_sequence_end_classification() {
        // Two bounding empties = both ends open, one = blocked on one side
        assert_eq!(score_sequence(3, 2), PatternScore::OPEN_THREE);
        assert_eq!(score_sequence(3, 1), PatternScore::CLOSED_THREE);
        assert_eq!(score_sequence(3, 5), PatternScore::OPEN_THREE);
        assert_eq!(score_sequence(3, 0), 0);
    }

    #[test]
    fn test_score_blocked_sequence() {
        assert_eq!(score_blocked_sequence(4, 1), PatternScore::CLOSED_FOUR);
        assert_eq!(score_blocked_sequence(4, 3), PatternScore::CLOSED_FOUR);
        assert_eq!(score_blocked_sequence(4, 0), 0);
        assert_eq!(score_blocked_sequence(1, 1), 0);
    }
}
