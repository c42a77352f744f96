//! Adapters for set containers: `HashSet` and `BTreeSet`.
//!
//! Append is a left-biased union: when both sides hold equal elements the
//! left one survives. An owned set is drained by owning iteration, which
//! moves every stored element out without cloning or rehashing.

use std::collections::{BTreeSet, HashSet};
use std::hash::{BuildHasher, Hash};

use crate::typeclass::{
    Adapted, Derived, DerivedInPlace, DerivedSingleton, FoldableInstance, Instances,
    MonoidInstance, Singleton, SingletonMonoid,
};

// =============================================================================
// HashSet
// =============================================================================

impl<T, S> Instances for HashSet<T, S> {
    type MonoidVia = Adapted;
    type FoldableVia = Adapted;
    type FunctorVia = DerivedSingleton;
    type FilterableVia = DerivedInPlace;
    type MonadVia = Derived;
}

impl<T, S> MonoidInstance<Adapted> for HashSet<T, S>
where
    T: Eq + Hash,
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

    // Grow the larger side. `replace` lets left elements win either way.
    fn append(mut self, mut other: Self) -> Self {
        if self.len() >= other.len() {
            self.extend(other);
            self
        } else {
            for element in self {
                other.replace(element);
            }
            other
        }
    }
}

impl<T, S> SingletonMonoid for HashSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher + Default,
{
    #[inline]
    fn append_one(mut self, Singleton(element): Singleton<T>) -> Self {
        self.insert(element);
        self
    }
}

impl<T, S> FoldableInstance<Adapted> for HashSet<T, S> {
    #[inline]
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        self.into_iter().fold(init, function)
    }

    #[inline]
    fn fold_left_ref<'a, B, F>(&'a self, init: B, function: F) -> B
    where
        F: FnMut(B, &'a T) -> B,
    {
        self.iter().fold(init, function)
    }

    #[inline]
    fn size_hint(&self) -> Option<usize> {
        Some(self.len())
    }
}

// =============================================================================
// BTreeSet
// =============================================================================

impl<T> Instances for BTreeSet<T> {
    type MonoidVia = Adapted;
    type FoldableVia = Adapted;
    type FunctorVia = DerivedSingleton;
    type FilterableVia = DerivedInPlace;
    type MonadVia = Derived;
}

impl<T: Ord> MonoidInstance<Adapted> for BTreeSet<T> {
    #[inline]
    fn empty() -> Self {
        Self::new()
    }

    // `BTreeSet::append` keeps the moved-in element on ties, so only the
    // elements missing on the left are moved in.
    fn append(mut self, mut other: Self) -> Self {
        other.retain(|element| !self.contains(element));
        BTreeSet::append(&mut self, &mut other);
        self
    }
}

impl<T: Ord> SingletonMonoid for BTreeSet<T> {
    #[inline]
    fn append_one(mut self, Singleton(element): Singleton<T>) -> Self {
        self.insert(element);
        self
    }
}

impl<T> FoldableInstance<Adapted> for BTreeSet<T> {
    #[inline]
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        self.into_iter().fold(init, function)
    }

    #[inline]
    fn fold_left_ref<'a, B, F>(&'a self, init: B, function: F) -> B
    where
        F: FnMut(B, &'a T) -> B,
    {
        self.iter().fold(init, function)
    }

    #[inline]
    fn size_hint(&self) -> Option<usize> {
        Some(self.len())
    }
}
