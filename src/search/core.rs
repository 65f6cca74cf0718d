use log::{debug, info};

use crate::combination::{Combination, CombinationSet};
use crate::search::cache::SearchCache;
use crate::search::constants::DIGIT_MAX;
use crate::search::state::SearchState;
use crate::utils::is_achievable;

/// Memoized recursive search for strictly increasing digit combinations
/// with a fixed length and sum
pub struct CombinationSearch {}

impl CombinationSearch {
    /// Create a new combination search
    pub fn new() -> Self {
        Self {}
    }

    /// Find every combination of exactly `count` distinct digits from 1..=9
    /// whose digits sum to `target`.
    ///
    /// Out-of-range inputs are not rejected up front; the search simply
    /// exhausts and yields an empty set. A query for zero digits summing to
    /// zero yields the lone empty combination.
    pub fn find_combinations(&self, count: i32, target: i32) -> CombinationSet {
        let mut cache = SearchCache::new();
        self.find_combinations_with_cache(count, target, &mut cache)
    }

    /// Run the same search against a caller-owned cache, letting repeated
    /// queries share memoized subproblems. Mixing counts and targets in one
    /// cache is safe since both are part of every key.
    pub fn find_combinations_with_cache(
        &self,
        count: i32,
        target: i32,
        cache: &mut SearchCache,
    ) -> CombinationSet {
        info!(
            "Starting memoized combination search for {} digits summing to {}",
            count, target
        );

        if !is_achievable(count, target) {
            debug!(
                "No {} distinct digits can sum to {}, the search will come up empty",
                count, target
            );
        }

        let found = self.search(SearchState::root(count, target), cache);
        info!("Search finished with {} combinations", found.len());
        found
    }

    /// Expand one search state and memoize the completions it yields.
    ///
    /// The success base case is checked before the failure guards, and the
    /// cache is only consulted after both. Terminal states return early, so
    /// only expandable states are ever stored.
    fn search(&self, state: SearchState, cache: &mut SearchCache) -> CombinationSet {
        // Exactly one way to pick zero more digits when the target is met
        if state.remaining == 0 && state.sum == state.target {
            let mut base = CombinationSet::new();
            base.insert(Combination::empty());
            return base;
        }

        // Negative picks or targets only appear on malformed root calls;
        // past 9 the universe is exhausted
        if state.remaining < 0 || state.target < 0 || state.next_digit > DIGIT_MAX {
            return CombinationSet::new();
        }

        // Out of picks without reaching the target, or already overshot
        if state.remaining == 0 || state.sum > state.target {
            return CombinationSet::new();
        }

        if let Some(cached) = cache.get(&state) {
            return cached.clone();
        }

        let mut completions = CombinationSet::new();
        for digit in state.next_digit..=DIGIT_MAX {
            let candidate_sum = state.sum + i32::from(digit);
            if candidate_sum > state.target {
                // Digits are tried in ascending order, so every later
                // candidate overshoots as well
                break;
            }

            for completion in self.search(state.advanced_by(digit), cache) {
                completions.insert(completion.prefixed_with(digit));
            }
        }

        cache.insert(state, completions.clone());
        completions
    }
}

impl Default for CombinationSearch {
    fn default() -> Self {
        Self::new()
    }
}
