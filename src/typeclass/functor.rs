//! Functor type class: mapping over a carrier's elements.
//!
//! Functor is split in two traits. [`Pointed`] provides `unit`, wrapping one
//! element into a carrier; [`Functor`] provides `map` in an owning and a
//! borrowing form. Both are resolved through the carrier's `FunctorVia`
//! strategy, so a carrier gets `unit` from the same source as `map`.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.map(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.map(f).map(g) == fa.map(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use retrofit::typeclass::{Functor, Pointed};
//! use std::collections::BTreeSet;
//!
//! let lengths = Functor::map(vec!["a", "bcd"], str::len);
//! assert_eq!(lengths, vec![1, 3]);
//!
//! // Sets merge elements that map to the same value.
//! let parity = Functor::map_ref(&BTreeSet::from([1, 2, 3]), |value: &i32| value % 2);
//! assert_eq!(parity, BTreeSet::from([0, 1]));
//!
//! assert_eq!(<Option<i32> as Pointed>::unit(7), Some(7));
//! ```

use super::capability::FunctorMethods;
use super::carrier::{Carrier, Rebind};
use super::strategy::{Instances, Native};

/// Candidate `unit` implementation selected by the strategy `Via`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` has no `unit` under strategy `{Via}`",
    note = "check the `FunctorVia` entry of `{Self}`'s `Instances` table"
)]
pub trait PointedInstance<Via>: Carrier + Sized {
    /// Wraps one element.
    fn unit(element: Self::Inner) -> Self;
}

/// A carrier that can wrap a single element.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot wrap a single element",
    label = "`unit` is not available for this type"
)]
pub trait Pointed: Carrier + Sized {
    /// Wraps one element.
    fn unit(element: Self::Inner) -> Self;
}

impl<T> Pointed for T
where
    T: Instances + PointedInstance<<T as Instances>::FunctorVia>,
{
    #[inline]
    fn unit(element: Self::Inner) -> Self {
        <T as PointedInstance<T::FunctorVia>>::unit(element)
    }
}

/// Candidate `map` implementation selected by the strategy `Via`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` has no Functor instance under strategy `{Via}` mapping to `{B}`",
    note = "check the `FunctorVia` entry of `{Self}`'s `Instances` table"
)]
pub trait FunctorInstance<Via, B>: Rebind + Sized {
    /// Maps owned elements.
    fn map<F>(self, function: F) -> Self::With<B>
    where
        F: FnMut(Self::Inner) -> B;

    /// Maps borrowed elements.
    fn map_ref<'a, F>(&'a self, function: F) -> Self::With<B>
    where
        F: FnMut(Self::Ref<'a>) -> B;
}

/// A carrier whose elements can be mapped to `B`.
///
/// Owned input is consumed; elements move into `function` and nothing is
/// cloned. Borrowed input is left untouched; `function` receives
/// [`Carrier::Ref`] views.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a Functor producing `{B}`",
    label = "`map` is not available for this type",
    note = "two-key carriers such as maps have no single element to map; convert them with `as_` first"
)]
pub trait Functor<B>: Pointed + Rebind {
    /// Maps owned elements.
    fn map<F>(self, function: F) -> Self::With<B>
    where
        F: FnMut(Self::Inner) -> B;

    /// Maps borrowed elements.
    fn map_ref<'a, F>(&'a self, function: F) -> Self::With<B>
    where
        F: FnMut(Self::Ref<'a>) -> B;
}

impl<T, B> Functor<B> for T
where
    T: Instances + Pointed + FunctorInstance<<T as Instances>::FunctorVia, B>,
{
    #[inline]
    fn map<F>(self, function: F) -> Self::With<B>
    where
        F: FnMut(Self::Inner) -> B,
    {
        <T as FunctorInstance<T::FunctorVia, B>>::map(self, function)
    }

    #[inline]
    fn map_ref<'a, F>(&'a self, function: F) -> Self::With<B>
    where
        F: FnMut(Self::Ref<'a>) -> B,
    {
        <T as FunctorInstance<T::FunctorVia, B>>::map_ref(self, function)
    }
}

impl<T: FunctorMethods> PointedInstance<Native> for T {
    #[inline]
    fn unit(element: Self::Inner) -> Self {
        <T as FunctorMethods>::unit(element)
    }
}

impl<T: FunctorMethods, B> FunctorInstance<Native, B> for T {
    #[inline]
    fn map<F>(self, function: F) -> Self::With<B>
    where
        F: FnMut(Self::Inner) -> B,
    {
        <T as FunctorMethods>::map(self, function)
    }

    #[inline]
    fn map_ref<'a, F>(&'a self, function: F) -> Self::With<B>
    where
        F: FnMut(Self::Ref<'a>) -> B,
    {
        <T as FunctorMethods>::map_ref(self, function)
    }
}

/// Wraps one element into the carrier `T`.
///
/// # Examples
///
/// ```rust
/// use retrofit::unit;
/// use std::collections::HashSet;
///
/// let single: HashSet<&str> = unit("only");
/// assert!(single.contains("only"));
/// ```
#[inline]
pub fn unit<T: Pointed>(element: T::Inner) -> T {
    T::unit(element)
}

#[cfg(test)]
mod tests {
    use super::{Functor, Pointed, unit};
    use rstest::rstest;
    use std::collections::{BTreeSet, LinkedList, VecDeque};

    #[rstest]
    #[case(vec![], vec![])]
    #[case(vec![1, 2, 3], vec![2, 4, 6])]
    fn vec_map_doubles(#[case] input: Vec<i32>, #[case] expected: Vec<i32>) {
        assert_eq!(Functor::map_ref(&input, |value: &i32| value * 2), expected);
        assert_eq!(Functor::map(input, |value: i32| value * 2), expected);
    }

    #[test]
    fn identity_law_on_linked_list() {
        let list: LinkedList<i32> = (1..=4).collect();
        assert_eq!(Functor::map(list.clone(), |value: i32| value), list);
    }

    #[test]
    fn composition_law_on_deque() {
        let deque = VecDeque::from([1, 2, 3]);
        let add_one = |value: i32| value + 1;
        let square = |value: i32| value * value;
        let chained = Functor::map(Functor::map(deque.clone(), add_one), square);
        let composed = Functor::map(deque, |value: i32| square(add_one(value)));
        assert_eq!(chained, composed);
    }

    #[test]
    fn set_map_changes_element_type() {
        let set = BTreeSet::from([1, 22, 333]);
        let widths: BTreeSet<usize> = Functor::map(set, |value: i32| value.to_string().len());
        assert_eq!(widths, BTreeSet::from([1, 2, 3]));
    }

    #[test]
    fn unit_builds_single_element_carriers() {
        assert_eq!(unit::<Vec<u8>>(1), vec![1]);
        assert_eq!(<VecDeque<u8> as Pointed>::unit(2), VecDeque::from([2]));
        assert_eq!(unit::<BTreeSet<u8>>(3), BTreeSet::from([3]));
        assert_eq!(unit::<Option<u8>>(4), Some(4));
    }
}
