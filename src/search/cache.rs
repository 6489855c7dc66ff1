//! Transposition cache for search-subtree evaluations
//!
//! Memoizes alpha-beta results keyed by the packed board state, the
//! maximizing flag and the remaining depth. The cache lives inside one
//! searcher and is cleared at the start of every top-level search, so
//! entries from unrelated searches can never collide on depth or turn.

use std::collections::HashMap;

use crate::board::Board;

/// Packed cache key: both bitboards plus search context.
///
/// The maximizing flag and remaining depth are part of the key because the
/// same position evaluated at a different depth or with roles swapped is a
/// different subtree result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CacheKey {
    black: [u64; 4],
    white: [u64; 4],
    maximizing: bool,
    depth: u8,
}

impl CacheKey {
    #[must_use]
    pub fn new(board: &Board, maximizing: bool, depth: u8) -> Self {
        Self {
            black: board.black.words(),
            white: board.white.words(),
            maximizing,
            depth,
        }
    }
}

/// Probe/hit counters for diagnostics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub probes: u64,
    pub hits: u64,
}

impl CacheStats {
    /// Hit rate in percent
    #[must_use]
    pub fn hit_rate(&self) -> f64 {
        if self.probes == 0 {
            0.0
        } else {
            self.hits as f64 / self.probes as f64 * 100.0
        }
    }
}

/// Evaluation cache scoped to a single top-level search
#[derive(Debug, Default)]
pub struct EvalCache {
    entries: HashMap<CacheKey, i32>,
    stats: CacheStats,
}

impl EvalCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a previously stored score
    #[must_use]
    pub fn probe(&mut self, key: &CacheKey) -> Option<i32> {
        self.stats.probes += 1;
        let score = self.entries.get(key).copied();
        if score.is_some() {
            self.stats.hits += 1;
        }
        score
    }

    /// Store a score for the given key
    pub fn store(&mut self, key: CacheKey, score: i32) {
        self.entries.insert(key, score);
    }

    /// Drop all entries and reset counters.
    /// Called before every top-level search that uses the cache.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.stats = CacheStats::default();
    }

    /// Number of cached entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn stats(&self) -> CacheStats {
        self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Pos, Stone};

    #[test]
    fn test_store_and_probe() {
        let board = Board::new();
        let mut cache = EvalCache::new();
        let key = CacheKey::new(&board, true, 3);

        assert_eq!(cache.probe(&key), None);
        cache.store(key, 42);
        assert_eq!(cache.probe(&key), Some(42));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_key_separates_depth_and_roles() {
        let board = Board::new();
        let mut cache = EvalCache::new();

        cache.store(CacheKey::new(&board, true, 2), 10);
        assert_eq!(cache.probe(&CacheKey::new(&board, true, 1)), None);
        assert_eq!(cache.probe(&CacheKey::new(&board, false, 2)), None);
        assert_eq!(cache.probe(&CacheKey::new(&board, true, 2)), Some(10));
    }

    #[test]
    fn test_key_separates_positions() {
        let mut a = Board::new();
        a.place_stone(Pos::new(7, 7), Stone::Black);
        let mut b = Board::new();
        b.place_stone(Pos::new(7, 8), Stone::Black);

        let mut cache = EvalCache::new();
        cache.store(CacheKey::new(&a, true, 2), 5);
        assert_eq!(cache.probe(&CacheKey::new(&b, true, 2)), None);
    }

    #[test]
    fn test_clear_resets_entries_and_stats() {
        let board = Board::new();
        let mut cache = EvalCache::new();
        let key = CacheKey::new(&board, false, 1);

        cache.store(key, 7);
        let _ = cache.probe(&key);
        cache.clear();

        assert!(cache.is_empty());
        assert_eq!(cache.stats(), CacheStats::default());
    }

    #[test]
    fn test_hit_rate() {
        let board = Board::new();
        let mut cache = EvalCache::new();
        let key = CacheKey::new(&board, true, 1);

        cache.store(key, 1);
        let _ = cache.probe(&key);
        let _ = cache.probe(&CacheKey::new(&board, true, 9));

        let stats = cache.stats();
        assert_eq!(stats.probes, 2);
        assert_eq!(stats.hits, 1);
        assert!((stats.hit_rate() - 50.0).abs() < f64::EPSILON);
    }
}
