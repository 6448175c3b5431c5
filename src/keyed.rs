// keyed containers use HashMap or BTreeMap under the hood
use core::hash::{BuildHasher, BuildHasherDefault, Hash};
use std::collections::{BTreeMap, HashMap};

use seahash::SeaHasher;

use crate::value::Value;

pub type KeyedHasher = BuildHasherDefault<SeaHasher>;

/// A hash map from keys to heterogeneous [`Value`]s, hashed with seahash.
pub type ValueMap<K> = HashMap<K, Value, KeyedHasher>;

/// The two read-only primitives every traversal and lookup helper is
/// built from: iterate all entries, or look a single key up.
///
/// Entries are yielded in the container's own iteration order. For
/// [`BTreeMap`] that is ascending key order; for [`HashMap`] it is
/// arbitrary but stable across repeated calls on the same unmodified
/// instance.
pub trait Keyed {
    type K;
    type V;

    fn entries(&self) -> impl Iterator<Item = (&Self::K, &Self::V)>;
    fn lookup(&self, key: &Self::K) -> Option<&Self::V>;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<K, V, S> Keyed for HashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    type K = K;
    type V = V;

    fn entries(&self) -> impl Iterator<Item = (&K, &V)> {
        self.iter()
    }
    fn lookup(&self, key: &K) -> Option<&V> {
        self.get(key)
    }
    fn len(&self) -> usize {
        HashMap::len(self)
    }
}

impl<K, V> Keyed for BTreeMap<K, V>
where
    K: Ord,
{
    type K = K;
    type V = V;

    fn entries(&self) -> impl Iterator<Item = (&K, &V)> {
        self.iter()
    }
    fn lookup(&self, key: &K) -> Option<&V> {
        self.get(key)
    }
    fn len(&self) -> usize {
        BTreeMap::len(self)
    }
}
