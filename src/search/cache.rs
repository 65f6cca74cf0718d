use std::collections::HashMap;

use crate::combination::CombinationSet;
use crate::search::state::SearchState;

/// Memoization cache mapping each expanded search state to the completions
/// found from it.
///
/// Every query through `find_combinations` builds a fresh cache; callers
/// issuing many queries can create one with `SearchCache::new` and thread it
/// through `find_combinations_with_cache` instead. Entries for different
/// targets never collide because the target is part of the key.
#[derive(Debug, Default)]
pub struct SearchCache {
    completions: HashMap<SearchState, CombinationSet>,
}

impl SearchCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of memoized states
    pub fn len(&self) -> usize {
        self.completions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.completions.is_empty()
    }

    /// Drop all memoized states
    pub fn clear(&mut self) {
        self.completions.clear();
    }

    pub(crate) fn get(&self, state: &SearchState) -> Option<&CombinationSet> {
        self.completions.get(state)
    }

    pub(crate) fn insert(&mut self, state: SearchState, completions: CombinationSet) {
        self.completions.insert(state, completions);
    }
}
