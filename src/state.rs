//! Search states and the memo table.
//!
//! A state is any value the search drivers can compare and hash. Two states
//! that compare equal must behave identically under the expansion function;
//! cycle detection and memoization are unsound otherwise.

use std::collections::HashMap;
use std::hash::Hash;

/// A point in a search space. Blanket-implemented for any hashable value type.
pub trait State: Clone + Eq + Hash {}

impl<T: Clone + Eq + Hash> State for T {}

/// Cache of previously computed subproblem results, keyed by state.
///
/// Owned by the caller and passed into the memoizing drivers, so tests can
/// reset and inspect it between queries. Entries are never evicted; the
/// state spaces here are finite and small.
#[derive(Debug, Clone)]
pub struct MemoTable<K: State, V: Clone> {
    entries: HashMap<K, V>,
    hits: u64,
    misses: u64,
}

impl<K: State, V: Clone> MemoTable<K, V> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            hits: 0,
            misses: 0,
        }
    }

    /// Look up a cached result, recording a hit or miss.
    pub fn get(&mut self, key: &K) -> Option<V> {
        match self.entries.get(key) {
            Some(value) => {
                self.hits += 1;
                Some(value.clone())
            }
            None => {
                self.misses += 1;
                None
            }
        }
    }

    pub fn insert(&mut self, key: K, value: V) {
        self.entries.insert(key, value);
    }

    /// Drop all cached entries. Hit/miss counters survive so a warm/cold
    /// comparison can still be read off afterwards.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }
}

impl<K: State, V: Clone> Default for MemoTable<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_records_hits_and_misses() {
        let mut memo: MemoTable<u32, u64> = MemoTable::new();
        assert_eq!(memo.get(&1), None);
        memo.insert(1, 10);
        assert_eq!(memo.get(&1), Some(10));
        assert_eq!(memo.get(&2), None);

        assert_eq!(memo.hits(), 1);
        assert_eq!(memo.misses(), 2);
        assert_eq!(memo.len(), 1);
    }

    #[test]
    fn test_clear_keeps_counters() {
        let mut memo: MemoTable<u32, bool> = MemoTable::new();
        memo.insert(7, true);
        memo.get(&7);
        memo.clear();

        assert!(memo.is_empty());
        assert_eq!(memo.hits(), 1);
        assert_eq!(memo.get(&7), None);
    }
}
