//! Adapters for sequence containers: `Vec`, `VecDeque` and `LinkedList`.
//!
//! `Vec` carries its own Functor: owning `map` goes through
//! `into_iter().map().collect()`, which reuses the source allocation when
//! the element layouts agree. The other sequences derive Functor from
//! their fold and a push-one append. `Vec` and `VecDeque` filter in place;
//! `LinkedList` has no erase primitive on stable and rebuilds.

use std::collections::{LinkedList, VecDeque};

use crate::typeclass::{
    Adapted, Derived, DerivedInPlace, DerivedSingleton, FoldableInstance, FunctorInstance,
    Instances, MonoidInstance, PointedInstance, Singleton, SingletonMonoid,
};

// =============================================================================
// Vec
// =============================================================================

impl<T> Instances for Vec<T> {
    type MonoidVia = Adapted;
    type FoldableVia = Adapted;
    type FunctorVia = Adapted;
    type FilterableVia = DerivedInPlace;
    type MonadVia = Derived;
}

impl<T> MonoidInstance<Adapted> for Vec<T> {
    #[inline]
    fn empty() -> Self {
        Self::new()
    }

    #[inline]
    fn empty_with_capacity(capacity: usize) -> Self {
        Self::with_capacity(capacity)
    }

    fn append(mut self, other: Self) -> Self {
        if self.is_empty() && self.capacity() < other.len() {
            return other;
        }
        self.extend(other);
        self
    }
}

impl<T> SingletonMonoid for Vec<T> {
    #[inline]
    fn append_one(mut self, Singleton(element): Singleton<T>) -> Self {
        self.push(element);
        self
    }
}

impl<T> FoldableInstance<Adapted> for Vec<T> {
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

impl<T> PointedInstance<Adapted> for Vec<T> {
    #[inline]
    fn unit(element: T) -> Self {
        vec![element]
    }
}

impl<T, B> FunctorInstance<Adapted, B> for Vec<T> {
    #[inline]
    fn map<F>(self, function: F) -> Vec<B>
    where
        F: FnMut(T) -> B,
    {
        self.into_iter().map(function).collect()
    }

    #[inline]
    fn map_ref<'a, F>(&'a self, function: F) -> Vec<B>
    where
        F: FnMut(&'a T) -> B,
    {
        self.iter().map(function).collect()
    }
}

// =============================================================================
// VecDeque
// =============================================================================

impl<T> Instances for VecDeque<T> {
    type MonoidVia = Adapted;
    type FoldableVia = Adapted;
    type FunctorVia = DerivedSingleton;
    type FilterableVia = DerivedInPlace;
    type MonadVia = Derived;
}

impl<T> MonoidInstance<Adapted> for VecDeque<T> {
    #[inline]
    fn empty() -> Self {
        Self::new()
    }

    #[inline]
    fn empty_with_capacity(capacity: usize) -> Self {
        Self::with_capacity(capacity)
    }

    fn append(mut self, mut other: Self) -> Self {
        if self.is_empty() && self.capacity() < other.len() {
            return other;
        }
        VecDeque::append(&mut self, &mut other);
        self
    }
}

impl<T> SingletonMonoid for VecDeque<T> {
    #[inline]
    fn append_one(mut self, Singleton(element): Singleton<T>) -> Self {
        self.push_back(element);
        self
    }
}

impl<T> FoldableInstance<Adapted> for VecDeque<T> {
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
// LinkedList
// =============================================================================

impl<T> Instances for LinkedList<T> {
    type MonoidVia = Adapted;
    type FoldableVia = Adapted;
    type FunctorVia = DerivedSingleton;
    type FilterableVia = DerivedSingleton;
    type MonadVia = Derived;
}

impl<T> MonoidInstance<Adapted> for LinkedList<T> {
    #[inline]
    fn empty() -> Self {
        Self::new()
    }

    // Splicing two lists is O(1).
    #[inline]
    fn append(mut self, mut other: Self) -> Self {
        LinkedList::append(&mut self, &mut other);
        self
    }
}

impl<T> SingletonMonoid for LinkedList<T> {
    #[inline]
    fn append_one(mut self, Singleton(element): Singleton<T>) -> Self {
        self.push_back(element);
        self
    }
}

impl<T> FoldableInstance<Adapted> for LinkedList<T> {
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
