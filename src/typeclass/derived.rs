//! Instances synthesised from Foldable and Monoid.
//!
//! A carrier that can fold and combine gets the rest of the typeclass
//! family from here:
//!
//! | strategy | `unit` | `map` | `flat_map` | `filter` (owned) | `filter` (borrowed) |
//! |----------|--------|-------|------------|------------------|---------------------|
//! | [`Derived`] | `FromIterator` | fold + `append(unit(f(x)))` | fold + `append(f(x))` | fold + `append(unit(x))` | same, cloning survivors |
//! | [`DerivedSingleton`] | `empty().append_one` | fold + `append_one(f(x))` | | fold + `append_one(x)` | same, cloning survivors |
//! | [`DerivedInPlace`] | | | | `retain_where` + `release_slack` | singleton rebuild |
//!
//! Owned folds move each element into the user function exactly once, so
//! deriving never clones where a hand-written loop would move. Borrowed
//! folds clone only what ends up in the result.

use super::capability::Retain;
use super::carrier::{Carrier, CloneInner, Rebind, Singleton};
use super::filterable::FilterableInstance;
use super::foldable::Foldable;
use super::functor::{FunctorInstance, Pointed, PointedInstance};
use super::monad::MonadInstance;
use super::monoid::{Monoid, SingletonMonoid};
use super::strategy::{Derived, DerivedInPlace, DerivedSingleton};
use crate::trace::trace_instance;

// =============================================================================
// Pointed
// =============================================================================

impl<C> PointedInstance<Derived> for C
where
    C: Carrier + FromIterator<<C as Carrier>::Inner>,
{
    #[inline]
    fn unit(element: Self::Inner) -> Self {
        std::iter::once(element).collect()
    }
}

impl<C: SingletonMonoid> PointedInstance<DerivedSingleton> for C {
    #[inline]
    fn unit(element: Self::Inner) -> Self {
        SingletonMonoid::append_one(<C as Monoid>::empty(), Singleton(element))
    }
}

// =============================================================================
// Functor
// =============================================================================

impl<C, B> FunctorInstance<Derived, B> for C
where
    C: Foldable + Rebind,
    C::With<B>: Pointed + Monoid,
{
    fn map<F>(self, mut function: F) -> Self::With<B>
    where
        F: FnMut(Self::Inner) -> B,
    {
        trace_instance!(C, "functor", "derived");
        let capacity = self.size_hint().unwrap_or(0);
        self.fold_left(
            <C::With<B> as Monoid>::empty_with_capacity(capacity),
            |accumulator, element| {
                Monoid::append(accumulator, <C::With<B> as Pointed>::unit(function(element)))
            },
        )
    }

    fn map_ref<'a, F>(&'a self, mut function: F) -> Self::With<B>
    where
        F: FnMut(Self::Ref<'a>) -> B,
    {
        trace_instance!(C, "functor", "derived");
        let capacity = self.size_hint().unwrap_or(0);
        self.fold_left_ref(
            <C::With<B> as Monoid>::empty_with_capacity(capacity),
            |accumulator, element| {
                Monoid::append(accumulator, <C::With<B> as Pointed>::unit(function(element)))
            },
        )
    }
}

impl<C, B> FunctorInstance<DerivedSingleton, B> for C
where
    C: Foldable + Rebind,
    C::With<B>: SingletonMonoid,
{
    fn map<F>(self, mut function: F) -> Self::With<B>
    where
        F: FnMut(Self::Inner) -> B,
    {
        trace_instance!(C, "functor", "derived_singleton");
        let capacity = self.size_hint().unwrap_or(0);
        self.fold_left(
            <C::With<B> as Monoid>::empty_with_capacity(capacity),
            |accumulator, element| {
                SingletonMonoid::append_one(accumulator, Singleton(function(element)))
            },
        )
    }

    fn map_ref<'a, F>(&'a self, mut function: F) -> Self::With<B>
    where
        F: FnMut(Self::Ref<'a>) -> B,
    {
        trace_instance!(C, "functor", "derived_singleton");
        let capacity = self.size_hint().unwrap_or(0);
        self.fold_left_ref(
            <C::With<B> as Monoid>::empty_with_capacity(capacity),
            |accumulator, element| {
                SingletonMonoid::append_one(accumulator, Singleton(function(element)))
            },
        )
    }
}

// =============================================================================
// Monad
// =============================================================================

impl<C, B> MonadInstance<Derived, B> for C
where
    C: Foldable + Rebind,
    C::With<B>: Monoid,
{
    fn flat_map<F>(self, mut function: F) -> Self::With<B>
    where
        F: FnMut(Self::Inner) -> Self::With<B>,
    {
        trace_instance!(C, "monad", "derived");
        self.fold_left(<C::With<B> as Monoid>::empty(), |accumulator, element| {
            Monoid::append(accumulator, function(element))
        })
    }

    fn flat_map_ref<'a, F>(&'a self, mut function: F) -> Self::With<B>
    where
        F: FnMut(Self::Ref<'a>) -> Self::With<B>,
    {
        trace_instance!(C, "monad", "derived");
        self.fold_left_ref(<C::With<B> as Monoid>::empty(), |accumulator, element| {
            Monoid::append(accumulator, function(element))
        })
    }
}

// =============================================================================
// Filterable
// =============================================================================

impl<C> FilterableInstance<Derived> for C
where
    C: Foldable + Monoid + Pointed,
{
    fn filter<P>(self, mut predicate: P) -> Self
    where
        P: FnMut(&Self::Inner) -> bool,
    {
        trace_instance!(C, "filterable", "derived");
        self.fold_left(<C as Monoid>::empty(), |accumulator, element| {
            if predicate(&element) {
                Monoid::append(accumulator, <C as Pointed>::unit(element))
            } else {
                accumulator
            }
        })
    }

    fn filter_ref<'a, P>(&'a self, mut predicate: P) -> Self
    where
        P: FnMut(Self::Ref<'a>) -> bool,
        Self: CloneInner,
        Self::Ref<'a>: Copy,
    {
        trace_instance!(C, "filterable", "derived");
        self.fold_left_ref(<C as Monoid>::empty(), |accumulator, element| {
            if predicate(element) {
                Monoid::append(accumulator, <C as Pointed>::unit(C::clone_inner(element)))
            } else {
                accumulator
            }
        })
    }
}

impl<C> FilterableInstance<DerivedSingleton> for C
where
    C: Foldable + SingletonMonoid,
{
    fn filter<P>(self, mut predicate: P) -> Self
    where
        P: FnMut(&Self::Inner) -> bool,
    {
        trace_instance!(C, "filterable", "derived_singleton");
        self.fold_left(<C as Monoid>::empty(), |accumulator, element| {
            if predicate(&element) {
                SingletonMonoid::append_one(accumulator, Singleton(element))
            } else {
                accumulator
            }
        })
    }

    fn filter_ref<'a, P>(&'a self, predicate: P) -> Self
    where
        P: FnMut(Self::Ref<'a>) -> bool,
        Self: CloneInner,
        Self::Ref<'a>: Copy,
    {
        trace_instance!(C, "filterable", "derived_singleton");
        rebuild_surviving(self, predicate)
    }
}

impl<C> FilterableInstance<DerivedInPlace> for C
where
    C: Retain + Foldable + SingletonMonoid,
{
    fn filter<P>(self, predicate: P) -> Self
    where
        P: FnMut(&Self::Inner) -> bool,
    {
        trace_instance!(C, "filterable", "derived_in_place");
        let mut kept = self;
        kept.retain_where(predicate);
        kept.release_slack();
        kept
    }

    fn filter_ref<'a, P>(&'a self, predicate: P) -> Self
    where
        P: FnMut(Self::Ref<'a>) -> bool,
        Self: CloneInner,
        Self::Ref<'a>: Copy,
    {
        trace_instance!(C, "filterable", "derived_in_place");
        rebuild_surviving(self, predicate)
    }
}

fn rebuild_surviving<'a, C, P>(source: &'a C, mut predicate: P) -> C
where
    C: Foldable + SingletonMonoid + CloneInner,
    C::Ref<'a>: Copy,
    P: FnMut(C::Ref<'a>) -> bool,
{
    source.fold_left_ref(<C as Monoid>::empty(), |accumulator, element| {
        if predicate(element) {
            SingletonMonoid::append_one(accumulator, Singleton(C::clone_inner(element)))
        } else {
            accumulator
        }
    })
}

#[cfg(test)]
mod tests {
    use crate::typeclass::{Filterable, Foldable, Functor, Monad, Monoid, Pointed, Singleton, SingletonMonoid};
    use rstest::rstest;
    use std::cell::Cell;
    use std::collections::{BTreeSet, HashSet, LinkedList, VecDeque};

    /// Hand-rolled fold-and-append, the reference a derived `map` must match.
    fn fold_and_append<C, B>(source: C, function: impl Fn(C::Inner) -> B) -> C::With<B>
    where
        C: Foldable + crate::typeclass::Rebind,
        C::With<B>: Monoid + Pointed,
    {
        source.fold_left(<C::With<B> as Monoid>::empty(), |accumulator, element| {
            Monoid::append(accumulator, <C::With<B> as Pointed>::unit(function(element)))
        })
    }

    #[rstest]
    #[case(vec![])]
    #[case(vec![3, 1, 2])]
    #[case(vec![7, 7, 8])]
    fn derived_map_matches_hand_rolled_fold(#[case] input: Vec<i32>) {
        let square = |value: i32| value * value;

        let deque: VecDeque<i32> = input.iter().copied().collect();
        assert_eq!(Functor::map(deque.clone(), square), fold_and_append(deque, square));

        let list: LinkedList<i32> = input.iter().copied().collect();
        assert_eq!(Functor::map(list.clone(), square), fold_and_append(list, square));

        let ordered: BTreeSet<i32> = input.iter().copied().collect();
        assert_eq!(Functor::map(ordered.clone(), square), fold_and_append(ordered, square));

        let hashed: HashSet<i32> = input.into_iter().collect();
        assert_eq!(Functor::map(hashed.clone(), square), fold_and_append(hashed, square));
    }

    #[test]
    fn derived_flat_map_merges_sets() {
        let set = BTreeSet::from([1, 2, 3]);
        let result = Monad::flat_map(set, |value: i32| BTreeSet::from([value, value * 2]));
        assert_eq!(result, BTreeSet::from([1, 2, 3, 4, 6]));
    }

    #[test]
    fn derived_filter_calls_predicate_once_per_element() {
        let calls = Cell::new(0);
        let list: LinkedList<i32> = (1..=5).collect();
        let kept = Filterable::filter(list, |value: &i32| {
            calls.set(calls.get() + 1);
            *value > 2
        });
        assert_eq!(calls.get(), 5);
        assert_eq!(kept.len(), 3);
    }

    #[test]
    fn in_place_filter_reuses_buffer() {
        let values: Vec<u32> = (0..32).collect();
        let before = values.as_ptr();
        let kept = Filterable::filter(values, |value: &u32| *value >= 16);
        assert_eq!(kept.as_ptr(), before);
        assert_eq!(kept.len(), 16);
    }

    #[test]
    fn in_place_filter_on_deque_keeps_capacity_bounded() {
        let deque: VecDeque<u32> = (0..100).collect();
        let capacity = deque.capacity();
        let kept = Filterable::filter(deque, |value: &u32| value % 10 == 0);
        assert!(kept.capacity() <= capacity);
        assert_eq!(kept, VecDeque::from([0, 10, 20, 30, 40, 50, 60, 70, 80, 90]));
    }

    #[test]
    fn singleton_unit_builds_one_element() {
        let set: BTreeSet<&str> = Pointed::unit("x");
        assert_eq!(set, BTreeSet::new().append_one(Singleton("x")));
    }
}
