//! Adapter for `Option`, the zero-or-one element carrier.
//!
//! `Option` already has `map`, `filter` and `and_then`; the adapter forwards
//! to them. Its Monoid lifts the inner Monoid: `None` is the identity and two
//! present values append their contents.

use crate::typeclass::{
    Adapted, CloneInner, FilterableInstance, FoldableInstance, FunctorInstance, Instances,
    MonadInstance, Monoid, MonoidInstance, PointedInstance,
};

impl<T> Instances for Option<T> {
    type MonoidVia = Adapted;
    type FoldableVia = Adapted;
    type FunctorVia = Adapted;
    type FilterableVia = Adapted;
    type MonadVia = Adapted;
}

impl<T: Monoid> MonoidInstance<Adapted> for Option<T> {
    #[inline]
    fn empty() -> Self {
        None
    }

    fn append(self, other: Self) -> Self {
        match (self, other) {
            (Some(left), Some(right)) => Some(Monoid::append(left, right)),
            (left, None) => left,
            (None, right) => right,
        }
    }
}

impl<T> FoldableInstance<Adapted> for Option<T> {
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
        Some(usize::from(self.is_some()))
    }
}

impl<T> PointedInstance<Adapted> for Option<T> {
    #[inline]
    fn unit(element: T) -> Self {
        Some(element)
    }
}

impl<T, B> FunctorInstance<Adapted, B> for Option<T> {
    #[inline]
    fn map<F>(self, function: F) -> Option<B>
    where
        F: FnMut(T) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn map_ref<'a, F>(&'a self, function: F) -> Option<B>
    where
        F: FnMut(&'a T) -> B,
    {
        self.as_ref().map(function)
    }
}

impl<T> FilterableInstance<Adapted> for Option<T> {
    #[inline]
    fn filter<P>(self, predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        self.filter(predicate)
    }

    // Stays on the projected types: `Self: CloneInner` keeps `Ref<'a>` and
    // `Inner` from normalising to `&'a T` and `T` here.
    fn filter_ref<'a, P>(&'a self, mut predicate: P) -> Self
    where
        P: FnMut(Self::Ref<'a>) -> bool,
        Self: CloneInner,
        Self::Ref<'a>: Copy,
    {
        <Self as FoldableInstance<Adapted>>::fold_left_ref(self, None, |kept, element| {
            if predicate(element) {
                <Self as PointedInstance<Adapted>>::unit(Self::clone_inner(element))
            } else {
                kept
            }
        })
    }
}

impl<T, B> MonadInstance<Adapted, B> for Option<T> {
    #[inline]
    fn flat_map<F>(self, function: F) -> Option<B>
    where
        F: FnMut(T) -> Option<B>,
    {
        self.and_then(function)
    }

    #[inline]
    fn flat_map_ref<'a, F>(&'a self, function: F) -> Option<B>
    where
        F: FnMut(&'a T) -> Option<B>,
    {
        self.as_ref().and_then(function)
    }
}
