use tracing::trace;

use crate::keyed::Keyed;
use crate::value::{Value, ValueType};

/// Guarded single-key lookup: "if this key exists and satisfies X, do Y,
/// else Z" collapsed into one call.
///
/// Absent keys and failed predicates are ordinary control flow here and
/// never raise. Closures run at most once; a panic inside one propagates
/// unmodified.
pub trait Lookup: Keyed {
    /// Invokes `action(value)` if the key is present, otherwise does
    /// nothing.
    fn with_value<F>(&self, key: &Self::K, action: F)
    where
        F: FnOnce(&Self::V),
    {
        if let Some(value) = self.lookup(key) {
            action(value);
        }
    }

    /// Invokes `action(value)` if the key is present, otherwise invokes
    /// `fallback()`.
    fn with_value_or<F, D>(&self, key: &Self::K, action: F, fallback: D)
    where
        F: FnOnce(&Self::V),
        D: FnOnce(),
    {
        match self.lookup(key) {
            Some(value) => action(value),
            None => {
                trace!("key absent, dispatching fallback");
                fallback();
            }
        }
    }

    /// Invokes `action(value)` only when the key is present and
    /// `predicate(value)` holds; otherwise does nothing.
    fn with_value_if<P, F>(&self, key: &Self::K, predicate: P, action: F)
    where
        P: FnOnce(&Self::V) -> bool,
        F: FnOnce(&Self::V),
    {
        if let Some(value) = self.lookup(key) {
            if predicate(value) {
                action(value);
            }
        }
    }

    /// Invokes `action(value)` when the key is present and
    /// `predicate(value)` holds, and `fallback()` when the key is absent
    /// or the predicate fails.
    fn with_value_if_or<P, F, D>(&self, key: &Self::K, predicate: P, action: F, fallback: D)
    where
        P: FnOnce(&Self::V) -> bool,
        F: FnOnce(&Self::V),
        D: FnOnce(),
    {
        match self.lookup(key) {
            Some(value) if predicate(value) => action(value),
            _ => {
                trace!("key absent or predicate failed, dispatching fallback");
                fallback();
            }
        }
    }
}

impl<M: Keyed + ?Sized> Lookup for M {}

/// Type-guarded lookup over containers of heterogeneous [`Value`]s.
///
/// The guard dispatches on the value's variant tag: the action only runs
/// when the stored value carries a payload of type `T`. An absent key and
/// a tag mismatch are treated identically.
pub trait TypedLookup: Keyed<V = Value> {
    /// Invokes `action(payload)` when the key is present and the stored
    /// value carries a `T`; otherwise does nothing.
    fn with_value_of<T, F>(&self, key: &Self::K, action: F)
    where
        T: ValueType,
        F: FnOnce(&T),
    {
        if let Some(payload) = self.lookup(key).and_then(T::from_value) {
            action(payload);
        }
    }

    /// Invokes `action(payload)` when the key is present and the stored
    /// value carries a `T`, and `fallback()` when the key is absent or
    /// the variant does not match.
    fn with_value_of_or<T, F, D>(&self, key: &Self::K, action: F, fallback: D)
    where
        T: ValueType,
        F: FnOnce(&T),
        D: FnOnce(),
    {
        match self.lookup(key).and_then(T::from_value) {
            Some(payload) => action(payload),
            None => {
                trace!(
                    expected = T::DATA_TYPE,
                    "key absent or tag mismatch, dispatching fallback"
                );
                fallback();
            }
        }
    }
}

impl<M: Keyed<V = Value> + ?Sized> TypedLookup for M {}
