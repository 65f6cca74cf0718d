//! Enneadix - A library for finding fixed-length digit combinations with a fixed sum
//!
//! This library enumerates every strictly increasing combination of exactly `count`
//! distinct digits from 1..=9 whose digits sum to `target`, using a memoized
//! recursive search over subproblem states.

pub mod combination;
pub mod search;
pub mod utils;

// Re-export the main public API
pub use combination::{Combination, CombinationError, CombinationSet};
pub use search::{CombinationSearch, SearchCache};
pub use utils::is_achievable;

/// Find every combination of `count` distinct digits from 1..=9 summing to `target`
///
/// This is a convenience function that creates a default search and runs a single
/// query against a fresh cache.
///
/// # Arguments
///
/// * `count` - How many distinct digits each combination must use
/// * `target` - The sum each combination must reach
///
/// # Returns
///
/// The set of all matching combinations, each strictly increasing. The set is
/// empty when the inputs are out of range or the target is unreachable; no
/// error is raised for such inputs. Zero digits summing to zero yields the
/// lone empty combination.
///
/// # Examples
///
/// ```
/// use enneadix::find_combinations;
///
/// let found = find_combinations(3, 9);
/// assert_eq!(found.len(), 3);
/// for combination in &found {
///     assert_eq!(combination.sum(), 9);
///     println!("{}", combination);
/// }
/// ```
pub fn find_combinations(count: i32, target: i32) -> CombinationSet {
    let search = CombinationSearch::new();
    search.find_combinations(count, target)
}
