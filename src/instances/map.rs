//! Adapters for two-key containers: `HashMap` and `BTreeMap`.
//!
//! A map's element is its `(key, value)` entry. Maps fold, combine and
//! filter, but they are not Functors or Monads: a mapped entry could collide
//! with another key, and there is no single element type to re-bind.
//!
//! Append is a left-biased union. When both maps hold a key, the left entry
//! survives and the right entry is dropped.

use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use crate::typeclass::{
    Adapted, DerivedSingleton, FoldableInstance, Instances, MonoidInstance, Singleton,
    SingletonMonoid, Unsupported,
};

// =============================================================================
// HashMap
// =============================================================================

impl<K, V, S> Instances for HashMap<K, V, S> {
    type MonoidVia = Adapted;
    type FoldableVia = Adapted;
    type FunctorVia = Unsupported;
    type FilterableVia = DerivedSingleton;
    type MonadVia = Unsupported;
}

impl<K, V, S> MonoidInstance<Adapted> for HashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher + Default,
{
    #[inline]
    fn empty() -> Self {
        Self::default()
    }

    #[inline]
    fn empty_with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, S::default())
    }

    // Grow the larger side. Left entries overwrite on the right, and right
    // entries only fill vacant keys on the left.
    fn append(mut self, mut other: Self) -> Self {
        if self.len() >= other.len() {
            for (key, value) in other {
                self.entry(key).or_insert(value);
            }
            self
        } else {
            other.extend(self);
            other
        }
    }
}

impl<K, V, S> SingletonMonoid for HashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher + Default,
{
    #[inline]
    fn append_one(mut self, Singleton((key, value)): Singleton<(K, V)>) -> Self {
        self.entry(key).or_insert(value);
        self
    }
}

impl<K, V, S> FoldableInstance<Adapted> for HashMap<K, V, S> {
    #[inline]
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, (K, V)) -> B,
    {
        self.into_iter().fold(init, function)
    }

    #[inline]
    fn fold_left_ref<'a, B, F>(&'a self, init: B, function: F) -> B
    where
        F: FnMut(B, (&'a K, &'a V)) -> B,
    {
        self.iter().fold(init, function)
    }

    #[inline]
    fn size_hint(&self) -> Option<usize> {
        Some(self.len())
    }
}

// =============================================================================
// BTreeMap
// =============================================================================

impl<K, V> Instances for BTreeMap<K, V> {
    type MonoidVia = Adapted;
    type FoldableVia = Adapted;
    type FunctorVia = Unsupported;
    type FilterableVia = DerivedSingleton;
    type MonadVia = Unsupported;
}

impl<K: Ord, V> MonoidInstance<Adapted> for BTreeMap<K, V> {
    #[inline]
    fn empty() -> Self {
        Self::new()
    }

    // `BTreeMap::append` overwrites with the moved-in entries.
    fn append(mut self, mut other: Self) -> Self {
        BTreeMap::append(&mut other, &mut self);
        other
    }
}

impl<K: Ord, V> SingletonMonoid for BTreeMap<K, V> {
    #[inline]
    fn append_one(mut self, Singleton((key, value)): Singleton<(K, V)>) -> Self {
        self.entry(key).or_insert(value);
        self
    }
}

impl<K, V> FoldableInstance<Adapted> for BTreeMap<K, V> {
    #[inline]
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, (K, V)) -> B,
    {
        self.into_iter().fold(init, function)
    }

    #[inline]
    fn fold_left_ref<'a, B, F>(&'a self, init: B, function: F) -> B
    where
        F: FnMut(B, (&'a K, &'a V)) -> B,
    {
        self.iter().fold(init, function)
    }

    #[inline]
    fn size_hint(&self) -> Option<usize> {
        Some(self.len())
    }
}
