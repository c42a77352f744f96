//! Monad type class: mapping each element to a carrier and flattening.
//!
//! Flattening uses the result carrier's Monoid append, so nested results
//! are merged structurally: sequences concatenate, sets take the union and
//! `Option` short-circuits on the first `None`.
//!
//! # Laws
//!
//! ## Left Identity Law
//!
//! ```text
//! unit(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.flat_map(unit) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use retrofit::typeclass::Monad;
//! use std::collections::BTreeSet;
//!
//! let doubled = Monad::flat_map(vec![1, 2, 3], |value: i32| vec![value, value]);
//! assert_eq!(doubled, vec![1, 1, 2, 2, 3, 3]);
//!
//! let neighbours = Monad::flat_map(BTreeSet::from([1, 5]), |value: i32| BTreeSet::from([value - 1, value + 1]));
//! assert_eq!(neighbours, BTreeSet::from([0, 2, 4, 6]));
//!
//! let parsed = Monad::flat_map(Some("42"), |text: &str| text.parse::<i32>().ok());
//! assert_eq!(parsed, Some(42));
//! ```

use super::capability::{AndThenMethods, MonadMethods};
use super::carrier::Rebind;
use super::functor::Functor;
use super::strategy::{Instances, Native, NativeAlias};

/// Candidate `flat_map` implementation selected by the strategy `Via`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` has no Monad instance under strategy `{Via}` producing `{B}`",
    note = "check the `MonadVia` entry of `{Self}`'s `Instances` table"
)]
pub trait MonadInstance<Via, B>: Rebind + Sized {
    /// Maps each owned element to a carrier and flattens.
    fn flat_map<F>(self, function: F) -> Self::With<B>
    where
        F: FnMut(Self::Inner) -> Self::With<B>;

    /// Maps each borrowed element to a carrier and flattens.
    fn flat_map_ref<'a, F>(&'a self, function: F) -> Self::With<B>
    where
        F: FnMut(Self::Ref<'a>) -> Self::With<B>;
}

/// A Functor whose mapped results can be flattened.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a Monad producing `{B}`",
    label = "`flat_map` is not available for this type",
    note = "a carrier that is Foldable and a Monoid can derive `flat_map`; set `MonadVia = Derived`"
)]
pub trait Monad<B>: Functor<B> {
    /// Maps each owned element to a carrier and flattens.
    fn flat_map<F>(self, function: F) -> Self::With<B>
    where
        F: FnMut(Self::Inner) -> Self::With<B>;

    /// Maps each borrowed element to a carrier and flattens.
    fn flat_map_ref<'a, F>(&'a self, function: F) -> Self::With<B>
    where
        F: FnMut(Self::Ref<'a>) -> Self::With<B>;
}

impl<T, B> Monad<B> for T
where
    T: Functor<B> + Instances + MonadInstance<<T as Instances>::MonadVia, B>,
{
    #[inline]
    fn flat_map<F>(self, function: F) -> Self::With<B>
    where
        F: FnMut(Self::Inner) -> Self::With<B>,
    {
        <T as MonadInstance<T::MonadVia, B>>::flat_map(self, function)
    }

    #[inline]
    fn flat_map_ref<'a, F>(&'a self, function: F) -> Self::With<B>
    where
        F: FnMut(Self::Ref<'a>) -> Self::With<B>,
    {
        <T as MonadInstance<T::MonadVia, B>>::flat_map_ref(self, function)
    }
}

impl<T: MonadMethods, B> MonadInstance<Native, B> for T {
    #[inline]
    fn flat_map<F>(self, function: F) -> Self::With<B>
    where
        F: FnMut(Self::Inner) -> Self::With<B>,
    {
        <T as MonadMethods>::flat_map(self, function)
    }

    #[inline]
    fn flat_map_ref<'a, F>(&'a self, function: F) -> Self::With<B>
    where
        F: FnMut(Self::Ref<'a>) -> Self::With<B>,
    {
        <T as MonadMethods>::flat_map_ref(self, function)
    }
}

impl<T: AndThenMethods, B> MonadInstance<NativeAlias, B> for T {
    #[inline]
    fn flat_map<F>(self, function: F) -> Self::With<B>
    where
        F: FnMut(Self::Inner) -> Self::With<B>,
    {
        <T as AndThenMethods>::and_then(self, function)
    }

    #[inline]
    fn flat_map_ref<'a, F>(&'a self, function: F) -> Self::With<B>
    where
        F: FnMut(Self::Ref<'a>) -> Self::With<B>,
    {
        <T as AndThenMethods>::and_then_ref(self, function)
    }
}

#[cfg(test)]
mod tests {
    use super::Monad;
    use crate::typeclass::{Functor, Monoid, Pointed};
    use rstest::rstest;
    use std::collections::{HashSet, LinkedList, VecDeque};

    fn twice(value: i32) -> Vec<i32> {
        vec![value, value]
    }

    #[rstest]
    #[case(vec![])]
    #[case(vec![1])]
    #[case(vec![1, 2, 3])]
    fn flat_map_equals_map_then_concat(#[case] input: Vec<i32>) {
        let flattened = Monad::flat_map(input.clone(), twice);
        let merged = Functor::map(input, twice)
            .into_iter()
            .fold(Vec::empty(), Monoid::append);
        assert_eq!(flattened, merged);
    }

    #[test]
    fn left_identity_on_deque() {
        let function = |value: i32| VecDeque::from([value, value * 10]);
        let lifted: VecDeque<i32> = Pointed::unit(3);
        assert_eq!(Monad::flat_map(lifted, function), function(3));
    }

    #[test]
    fn right_identity_on_linked_list() {
        let list: LinkedList<i32> = (1..=3).collect();
        let rebuilt = Monad::flat_map(list.clone(), <LinkedList<i32> as Pointed>::unit);
        assert_eq!(rebuilt, list);
    }

    #[test]
    fn set_flat_map_merges() {
        let set = HashSet::from([1, 2]);
        let merged = Monad::flat_map_ref(&set, |value: &i32| HashSet::from([*value, 0]));
        assert_eq!(merged, HashSet::from([0, 1, 2]));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn option_flat_map_short_circuits() {
        let mut calls = 0;
        let result = Monad::flat_map(None::<i32>, |value: i32| {
            calls += 1;
            Some(value)
        });
        assert_eq!(result, None);
        assert_eq!(calls, 0);
    }
}
