//! Monoid type class: an identity element and an associative append.
//!
//! # Laws
//!
//! For all `a`, `b`, `c` of type `T`:
//!
//! ## Left Identity
//!
//! ```text
//! T::empty().append(a) == a
//! ```
//!
//! ## Right Identity
//!
//! ```text
//! a.append(T::empty()) == a
//! ```
//!
//! ## Associativity
//!
//! ```text
//! a.append(b).append(c) == a.append(b.append(c))
//! ```
//!
//! Append comes in four ownership combinations. The owning forms may reuse
//! either operand's storage; the borrowing forms never mutate a borrowed
//! operand. Collections with a cheaper "add one element" path additionally
//! implement [`SingletonMonoid`].
//!
//! # Examples
//!
//! ```rust
//! use retrofit::typeclass::Monoid;
//!
//! assert_eq!(Monoid::append(String::from("ab"), String::from("cd")), "abcd");
//!
//! let left = vec![1, 2];
//! let joined = left.ref_append_ref(&vec![3]);
//! assert_eq!(joined, vec![1, 2, 3]);
//! assert_eq!(left, vec![1, 2]);
//! ```

use super::carrier::{Carrier, Singleton};
use super::capability::MonoidMethods;
use super::strategy::{Instances, Native};

/// Candidate Monoid implementation selected by the strategy `Via`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` has no Monoid instance under strategy `{Via}`",
    note = "check the `MonoidVia` entry of `{Self}`'s `Instances` table"
)]
pub trait MonoidInstance<Via>: Sized {
    /// The identity element.
    fn empty() -> Self;

    /// The identity element, with room for `capacity` elements where the
    /// carrier can reserve.
    #[inline]
    fn empty_with_capacity(_capacity: usize) -> Self {
        Self::empty()
    }

    /// Owned + owned.
    fn append(self, other: Self) -> Self;

    /// Owned + borrowed.
    #[inline]
    fn append_ref(self, other: &Self) -> Self
    where
        Self: Clone,
    {
        self.append(other.clone())
    }

    /// Borrowed + owned.
    #[inline]
    fn ref_append(&self, other: Self) -> Self
    where
        Self: Clone,
    {
        self.clone().append(other)
    }

    /// Borrowed + borrowed.
    #[inline]
    fn ref_append_ref(&self, other: &Self) -> Self
    where
        Self: Clone,
    {
        self.clone().append(other.clone())
    }
}

/// A type with an identity element and an associative append.
///
/// Implemented for every type whose [`Instances::MonoidVia`] strategy has a
/// candidate [`MonoidInstance`].
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a Monoid",
    label = "`empty` and `append` are not available for this type",
    note = "implement `MonoidMethods` and set `MonoidVia = Native` in its `Instances` table"
)]
pub trait Monoid: Sized {
    /// The identity element.
    fn empty() -> Self;

    /// The identity element with reserved room for `capacity` elements.
    fn empty_with_capacity(capacity: usize) -> Self;

    /// Combines two owned values.
    fn append(self, other: Self) -> Self;

    /// Combines an owned value with a borrowed one.
    fn append_ref(self, other: &Self) -> Self
    where
        Self: Clone;

    /// Combines a borrowed value with an owned one.
    fn ref_append(&self, other: Self) -> Self
    where
        Self: Clone;

    /// Combines two borrowed values into a fresh one.
    fn ref_append_ref(&self, other: &Self) -> Self
    where
        Self: Clone;

    /// Appends every item to the identity, left to right.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use retrofit::typeclass::Monoid;
    ///
    /// let words = vec![String::from("a"), String::from("b"), String::from("c")];
    /// assert_eq!(String::concat(words), "abc");
    /// assert_eq!(String::concat(Vec::new()), "");
    /// ```
    fn concat<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        items
            .into_iter()
            .fold(Self::empty(), |accumulator, item| accumulator.append(item))
    }
}

impl<T> Monoid for T
where
    T: Instances + MonoidInstance<<T as Instances>::MonoidVia>,
{
    #[inline]
    fn empty() -> Self {
        <T as MonoidInstance<T::MonoidVia>>::empty()
    }

    #[inline]
    fn empty_with_capacity(capacity: usize) -> Self {
        <T as MonoidInstance<T::MonoidVia>>::empty_with_capacity(capacity)
    }

    #[inline]
    fn append(self, other: Self) -> Self {
        <T as MonoidInstance<T::MonoidVia>>::append(self, other)
    }

    #[inline]
    fn append_ref(self, other: &Self) -> Self
    where
        Self: Clone,
    {
        <T as MonoidInstance<T::MonoidVia>>::append_ref(self, other)
    }

    #[inline]
    fn ref_append(&self, other: Self) -> Self
    where
        Self: Clone,
    {
        <T as MonoidInstance<T::MonoidVia>>::ref_append(self, other)
    }

    #[inline]
    fn ref_append_ref(&self, other: &Self) -> Self
    where
        Self: Clone,
    {
        <T as MonoidInstance<T::MonoidVia>>::ref_append_ref(self, other)
    }
}

/// A Monoid with a cheaper path for appending a single element.
///
/// `append_one(x)` must equal `append(unit(x))` where both exist.
pub trait SingletonMonoid: Monoid + Carrier {
    /// Appends one owned element.
    fn append_one(self, element: Singleton<Self::Inner>) -> Self;

    /// Appends one element to a copy of a borrowed carrier.
    #[inline]
    fn ref_append_one(&self, element: Singleton<Self::Inner>) -> Self
    where
        Self: Clone,
    {
        self.clone().append_one(element)
    }
}

impl<T: MonoidMethods> MonoidInstance<Native> for T {
    #[inline]
    fn empty() -> Self {
        <T as MonoidMethods>::empty()
    }

    #[inline]
    fn append(self, other: Self) -> Self {
        <T as MonoidMethods>::append(self, other)
    }
}

/// Returns the identity element of `T`.
///
/// # Examples
///
/// ```rust
/// use retrofit::empty;
/// use std::collections::BTreeSet;
///
/// let set: BTreeSet<u8> = empty();
/// assert!(set.is_empty());
/// ```
#[inline]
pub fn empty<T: Monoid>() -> T {
    T::empty()
}
