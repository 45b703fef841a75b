//! Random source port for picking canned replies and suggestions.
//!
//! Handlers never touch an RNG directly; they ask this port for an index.
//! Production uses a thread-local RNG, tests inject a scripted source so
//! every candidate can be asserted deterministically.

/// Port for uniform random selection.
///
/// Implementations must be thread-safe; handlers share one instance
/// across concurrent requests.
pub trait RandomSource: Send + Sync {
    /// Returns an index uniformly drawn from `0..upper`.
    ///
    /// Callers guarantee `upper > 0`.
    fn index_below(&self, upper: usize) -> usize;
}

/// Picks one element of `items` using `source`, or `None` when empty.
pub fn choose<'a, T>(source: &dyn RandomSource, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    let index = source.index_below(items.len());
    items.get(index.min(items.len() - 1))
}
