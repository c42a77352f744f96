//! Lazy views: carriers backed by an iterator instead of storage.
//!
//! A [`View`] wraps any iterator. Mapping, filtering and flat-mapping a view
//! through the pipeline stack another iterator layer on top of it and do no
//! work until the view is folded or converted. An owned view folds and
//! converts whatever its iterator. A borrowed view restarts from a clone of
//! its iterator, so it can be consumed any number of times, and only views
//! over cloneable iterators are [`Foldable`](crate::typeclass::Foldable).
//!
//! [`own`](crate::pipeline::own) materialises a view into an [`OwnedView`]
//! that holds its elements and no longer borrows anything the source did.
//!
//! # Examples
//!
//! ```rust
//! use retrofit::pipeline::{filter, fold_left, map, own};
//! use retrofit::view::view;
//!
//! let values = vec![1, 2, 3, 4];
//! let evens = view(values.iter()) | filter(|value: &&i32| **value % 2 == 0) | map(|value: &i32| value * 10);
//! assert_eq!(&evens | fold_left(0, |total, value| total + value), 60);
//!
//! let owned = evens | own();
//! drop(values);
//! assert_eq!(owned.into_iter().collect::<Vec<_>>(), vec![20, 40]);
//! ```

use std::iter::{Filter, FlatMap, Map};

use crate::typeclass::{
    Adapted, Carrier, CloneInner, FoldableInstance, Instances, Unsupported,
};

/// A lazy carrier over the iterator `I`.
#[derive(Debug, Clone)]
pub struct View<I> {
    iterator: I,
}

/// A view layer applying a function to every element.
pub type MapView<I, F> = View<Map<I, F>>;

/// A view layer skipping elements that fail a predicate.
pub type FilterView<I, P> = View<Filter<I, P>>;

/// A view layer expanding every element into a sub-sequence.
pub type FlatMapView<I, R, F> = View<FlatMap<I, R, F>>;

/// A view that owns its materialised elements.
pub type OwnedView<T> = View<std::vec::IntoIter<T>>;

impl<I: Iterator> View<I> {
    /// Wraps an iterator.
    #[inline]
    pub const fn new(iterator: I) -> Self {
        Self { iterator }
    }

    pub(crate) fn layer<J: Iterator>(self, wrap: impl FnOnce(I) -> J) -> View<J> {
        View::new(wrap(self.iterator))
    }

    /// The number of remaining elements, when the iterator knows it exactly.
    pub fn exact_len(&self) -> Option<usize> {
        match self.iterator.size_hint() {
            (lower, Some(upper)) if lower == upper => Some(lower),
            _ => None,
        }
    }

    /// Collects the remaining elements into an [`OwnedView`].
    pub fn materialise(self) -> OwnedView<I::Item> {
        let elements: Vec<I::Item> = self.iterator.collect();
        View::new(elements.into_iter())
    }
}

impl<I: Iterator + Clone> View<I> {
    /// A fresh view starting where this one currently stands.
    #[inline]
    pub fn restart(&self) -> Self {
        self.clone()
    }
}

/// Views any iterable: `view(&vec)` borrows, `view(vec)` takes ownership.
#[inline]
pub fn view<C: IntoIterator>(source: C) -> View<C::IntoIter> {
    View::new(source.into_iter())
}

impl<I: Iterator> IntoIterator for View<I> {
    type Item = I::Item;
    type IntoIter = I;

    #[inline]
    fn into_iter(self) -> I {
        self.iterator
    }
}

impl<I: Iterator> Carrier for View<I> {
    type Inner = I::Item;
    type Ref<'a>
        = I::Item
    where
        Self: 'a;
}

impl<I: Iterator> CloneInner for View<I> {
    #[inline]
    fn clone_inner<'a>(element: I::Item) -> I::Item
    where
        Self: 'a,
    {
        element
    }
}

// Mapping, filtering and flat-mapping a view go through the lazy pipeline
// stages, never through the eager contracts.
impl<I> Instances for View<I> {
    type MonoidVia = Unsupported;
    type FoldableVia = Adapted;
    type FunctorVia = Unsupported;
    type FilterableVia = Unsupported;
    type MonadVia = Unsupported;
}

impl<I: Iterator + Clone> FoldableInstance<Adapted> for View<I> {
    #[inline]
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, I::Item) -> B,
    {
        crate::trace::trace_instance!(Self, "foldable", "view");
        self.iterator.fold(init, function)
    }

    #[inline]
    fn fold_left_ref<'a, B, F>(&'a self, init: B, function: F) -> B
    where
        F: FnMut(B, Self::Ref<'a>) -> B,
    {
        crate::trace::trace_instance!(Self, "foldable", "view");
        self.iterator.clone().fold(init, function)
    }

    fn size_hint(&self) -> Option<usize> {
        self.exact_len()
    }
}

crate::pipeable!(lazy impl[I] View<I>);

#[cfg(test)]
mod tests {
    use super::{View, view};
    use crate::pipeline::{as_, filter, flat_map, fold_left, map, own};
    use crate::typeclass::Foldable;
    use std::cell::Cell;
    use std::collections::BTreeSet;

    #[test]
    fn stages_do_no_work_until_consumed() {
        let calls = Cell::new(0);
        let source = vec![1, 2, 3];
        let mapped = view(source.iter()) | map(|value: &i32| {
            calls.set(calls.get() + 1);
            value + 1
        });
        assert_eq!(calls.get(), 0);
        let total = mapped | fold_left(0, |total, value| total + value);
        assert_eq!(total, 9);
        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn borrowed_view_restarts() {
        let doubled = view(1..=3) | map(|value: i32| value * 2);
        let first: Vec<i32> = &doubled | as_::<Vec<_>>();
        let second: Vec<i32> = &doubled | as_::<Vec<_>>();
        assert_eq!(first, second);
        assert_eq!(first, vec![2, 4, 6]);
    }

    #[test]
    fn flat_map_expands_into_iterables() {
        let expanded = view(1..=3) | flat_map(|value: i32| vec![value; value as usize]);
        let counted: Vec<i32> = expanded | as_::<Vec<_>>();
        assert_eq!(counted, vec![1, 2, 2, 3, 3, 3]);
    }

    #[test]
    fn own_detaches_from_the_source() {
        let owned = {
            let words = vec![String::from("b"), String::from("a"), String::from("b")];
            view(words.iter()) | filter(|word: &&String| !word.is_empty()) | map(|word: &String| word.clone()) | own()
        };
        let unique: BTreeSet<String> = owned | as_::<BTreeSet<_>>();
        assert_eq!(unique, BTreeSet::from([String::from("a"), String::from("b")]));
    }

    #[test]
    fn exact_size_is_reported() {
        let ranged = View::new(0..10);
        assert_eq!(Foldable::length(&ranged), 10);
        let filtered = view(0..10) | filter(|value: &i32| *value > 4);
        assert_eq!(Foldable::length(&filtered), 5);
    }
}
