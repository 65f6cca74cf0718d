use crate::search::constants::DIGIT_MIN;

/// Subproblem identity for the memoized search.
///
/// The completions reachable from a state depend only on these four values,
/// never on which digits were picked to get there. That path independence is
/// what makes caching on the full state sound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct SearchState {
    /// How many digits still have to be picked
    pub(crate) remaining: i32,
    /// Sum the finished combination must reach, fixed for a whole query
    pub(crate) target: i32,
    /// Smallest digit still eligible, which keeps every path strictly
    /// increasing and duplicate free
    pub(crate) next_digit: u8,
    /// Sum of the digits picked so far on this path
    pub(crate) sum: i32,
}

impl SearchState {
    /// Root state for a top-level query
    pub(crate) fn root(count: i32, target: i32) -> Self {
        Self {
            remaining: count,
            target,
            next_digit: DIGIT_MIN,
            sum: 0,
        }
    }

    /// State after committing to `digit`, with the running sum advanced and
    /// only digits above `digit` still eligible
    pub(crate) fn advanced_by(&self, digit: u8) -> Self {
        Self {
            remaining: self.remaining - 1,
            target: self.target,
            next_digit: digit + 1,
            sum: self.sum + i32::from(digit),
        }
    }
}
