use log::debug;

use crate::search::constants::{DIGIT_MAX, DIGIT_MIN, UNIVERSE_SIZE};

/// Smallest sum `count` distinct digits from the universe can reach, taking
/// the lowest digits first. `None` when no combination of that length exists.
pub fn min_achievable_sum(count: i32) -> Option<i32> {
    if !(0..=UNIVERSE_SIZE).contains(&count) {
        return None;
    }
    Some(count * (2 * i32::from(DIGIT_MIN) + count - 1) / 2)
}

/// Largest sum `count` distinct digits from the universe can reach, taking
/// the highest digits first. `None` when no combination of that length exists.
pub fn max_achievable_sum(count: i32) -> Option<i32> {
    if !(0..=UNIVERSE_SIZE).contains(&count) {
        return None;
    }
    Some(count * (2 * i32::from(DIGIT_MAX) - count + 1) / 2)
}

/// Whether any combination of `count` distinct digits can sum to `target`.
///
/// Digit sums of a fixed length fill the whole range between the two bounds,
/// so a target inside them is always reachable. A zero count pairs only with
/// a zero target, matching the search's degenerate base case.
pub fn is_achievable(count: i32, target: i32) -> bool {
    debug!("Checking whether {} digits can sum to {}", count, target);

    match (min_achievable_sum(count), max_achievable_sum(count)) {
        (Some(min), Some(max)) => (min..=max).contains(&target),
        _ => false,
    }
}
