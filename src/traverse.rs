use crate::keyed::Keyed;

/// Whole-container traversal: visit, transform or fold every entry
/// exactly once, in the container's own iteration order.
///
/// None of these mutate the container or terminate early, and a panic
/// raised inside a caller-supplied closure propagates unmodified.
pub trait Traverse: Keyed {
    /// Invokes `action(key, value)` once per entry.
    fn each<F>(&self, mut action: F)
    where
        F: FnMut(&Self::K, &Self::V),
    {
        for (key, value) in self.entries() {
            action(key, value);
        }
    }

    /// Collects `transform(key, value)` for every entry into a sequence
    /// matching traversal order. Key information is discarded; the output
    /// length always equals the entry count.
    fn map_entries<T, F>(&self, mut transform: F) -> Vec<T>
    where
        F: FnMut(&Self::K, &Self::V) -> T,
    {
        let mut collected = Vec::with_capacity(self.len());
        for (key, value) in self.entries() {
            collected.push(transform(key, value));
        }
        collected
    }

    /// Left-folds the entries: `current = reducer(current, key, value)`
    /// for each entry in traversal order. An empty container returns
    /// `initial` unchanged.
    ///
    /// A non-commutative reducer is order-sensitive; the result is only
    /// guaranteed consistent across calls on the same unmodified instance.
    fn reduce<T, F>(&self, initial: T, mut reducer: F) -> T
    where
        F: FnMut(T, &Self::K, &Self::V) -> T,
    {
        self.entries()
            .fold(initial, |current, (key, value)| reducer(current, key, value))
    }
}

impl<M: Keyed + ?Sized> Traverse for M {}
