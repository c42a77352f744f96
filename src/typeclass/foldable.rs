//! Foldable type class: reducing a carrier's elements to a summary value.
//!
//! Every carrier folds two ways. [`Foldable::fold_left`] consumes the
//! carrier and hands each element to the combining function by value, so
//! node-based containers give up their elements without cloning.
//! [`Foldable::fold_left_ref`] borrows the carrier and hands out
//! [`Carrier::Ref`] views.
//!
//! # Laws
//!
//! ## Consistency between owned and borrowed folds
//!
//! ```text
//! fa.fold_left_ref(init, |b, r| f(b, clone(r))) == fa.fold_left(init, f)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use retrofit::typeclass::Foldable;
//! use std::collections::BTreeMap;
//!
//! let sum = Foldable::fold_left(vec![1, 2, 3, 4, 5], 0, |accumulator, element| accumulator + element);
//! assert_eq!(sum, 15);
//!
//! let scores = BTreeMap::from([("ann", 3), ("bob", 4)]);
//! let total = Foldable::fold_left_ref(&scores, 0, |accumulator, (_, score)| accumulator + score);
//! assert_eq!(total, 7);
//! ```

use super::capability::{FoldMethods, FoldableMethods};
use super::carrier::Carrier;
use super::monoid::Monoid;
use super::strategy::{Instances, Native, NativeAlias};

/// Candidate Foldable implementation selected by the strategy `Via`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` has no Foldable instance under strategy `{Via}`",
    note = "check the `FoldableVia` entry of `{Self}`'s `Instances` table"
)]
pub trait FoldableInstance<Via>: Carrier {
    /// Folds owned elements from the left.
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        Self: Sized,
        F: FnMut(B, Self::Inner) -> B;

    /// Folds borrowed elements from the left.
    fn fold_left_ref<'a, B, F>(&'a self, init: B, function: F) -> B
    where
        F: FnMut(B, Self::Ref<'a>) -> B;

    /// The number of elements, when known without traversal.
    #[inline]
    fn size_hint(&self) -> Option<usize> {
        None
    }
}

/// A carrier whose elements can be folded to a summary value.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not Foldable",
    label = "`fold_left` is not available for this type",
    note = "implement `FoldableMethods` (or `FoldMethods`) and name the strategy in its `Instances` table"
)]
pub trait Foldable: Carrier {
    /// Folds owned elements from the left.
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        Self: Sized,
        F: FnMut(B, Self::Inner) -> B;

    /// Folds borrowed elements from the left.
    fn fold_left_ref<'a, B, F>(&'a self, init: B, function: F) -> B
    where
        F: FnMut(B, Self::Ref<'a>) -> B;

    /// The number of elements, when known without traversal.
    ///
    /// Derived instances use this as a reservation hint.
    fn size_hint(&self) -> Option<usize>;

    /// Maps every owned element into a Monoid and appends the results.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use retrofit::typeclass::{Foldable, Sum};
    ///
    /// let total: Sum<i32> = Foldable::fold_map(vec![1, 2, 3], Sum);
    /// assert_eq!(total, Sum(6));
    /// ```
    fn fold_map<M, F>(self, mut function: F) -> M
    where
        Self: Sized,
        M: Monoid,
        F: FnMut(Self::Inner) -> M,
    {
        self.fold_left(M::empty(), |accumulator, element| {
            accumulator.append(function(element))
        })
    }

    /// Maps every borrowed element into a Monoid and appends the results.
    fn fold_map_ref<'a, M, F>(&'a self, mut function: F) -> M
    where
        M: Monoid,
        F: FnMut(Self::Ref<'a>) -> M,
    {
        self.fold_left_ref(M::empty(), |accumulator, element| {
            accumulator.append(function(element))
        })
    }

    /// Counts the elements, traversing only when the size is unknown.
    fn length(&self) -> usize {
        self.size_hint()
            .unwrap_or_else(|| self.fold_left_ref(0, |count, _| count + 1))
    }
}

impl<T> Foldable for T
where
    T: Instances + FoldableInstance<<T as Instances>::FoldableVia>,
{
    #[inline]
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        Self: Sized,
        F: FnMut(B, Self::Inner) -> B,
    {
        <T as FoldableInstance<T::FoldableVia>>::fold_left(self, init, function)
    }

    #[inline]
    fn fold_left_ref<'a, B, F>(&'a self, init: B, function: F) -> B
    where
        F: FnMut(B, Self::Ref<'a>) -> B,
    {
        <T as FoldableInstance<T::FoldableVia>>::fold_left_ref(self, init, function)
    }

    #[inline]
    fn size_hint(&self) -> Option<usize> {
        <T as FoldableInstance<T::FoldableVia>>::size_hint(self)
    }
}

impl<T: FoldableMethods> FoldableInstance<Native> for T {
    #[inline]
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        Self: Sized,
        F: FnMut(B, Self::Inner) -> B,
    {
        <T as FoldableMethods>::fold_left(self, init, function)
    }

    #[inline]
    fn fold_left_ref<'a, B, F>(&'a self, init: B, function: F) -> B
    where
        F: FnMut(B, Self::Ref<'a>) -> B,
    {
        <T as FoldableMethods>::fold_left_ref(self, init, function)
    }
}

impl<T: FoldMethods> FoldableInstance<NativeAlias> for T {
    #[inline]
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        Self: Sized,
        F: FnMut(B, Self::Inner) -> B,
    {
        <T as FoldMethods>::fold(self, init, function)
    }

    #[inline]
    fn fold_left_ref<'a, B, F>(&'a self, init: B, function: F) -> B
    where
        F: FnMut(B, Self::Ref<'a>) -> B,
    {
        <T as FoldMethods>::fold_ref(self, init, function)
    }
}
