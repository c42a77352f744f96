//! Filterable type class: keeping the elements that satisfy a predicate.
//!
//! Filtering never changes the element type. The owning form may erase in
//! place; the borrowing form always builds a new carrier from clones of the
//! surviving elements and leaves its source untouched.
//!
//! # Examples
//!
//! ```rust
//! use retrofit::typeclass::Filterable;
//!
//! let words = vec![String::from("1"), String::from("2"), String::from("3")];
//! let odd = Filterable::filter_ref(&words, |word: &String| word.parse::<i32>().is_ok_and(|n| n % 2 == 1));
//! assert_eq!(odd, vec!["1", "3"]);
//! assert_eq!(words.len(), 3);
//! ```

use super::capability::FilterableMethods;
use super::carrier::{Carrier, CloneInner};
use super::strategy::{Instances, Native};

/// Candidate Filterable implementation selected by the strategy `Via`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` has no Filterable instance under strategy `{Via}`",
    note = "check the `FilterableVia` entry of `{Self}`'s `Instances` table"
)]
pub trait FilterableInstance<Via>: Carrier + Sized {
    /// Keeps owned elements satisfying `predicate`.
    fn filter<P>(self, predicate: P) -> Self
    where
        P: FnMut(&Self::Inner) -> bool;

    /// Clones the borrowed elements satisfying `predicate` into a new carrier.
    fn filter_ref<'a, P>(&'a self, predicate: P) -> Self
    where
        P: FnMut(Self::Ref<'a>) -> bool,
        Self: CloneInner,
        Self::Ref<'a>: Copy;
}

/// A carrier whose elements can be filtered.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not Filterable",
    label = "`filter` is not available for this type",
    note = "a carrier that is Foldable and a Monoid can derive `filter`; set `FilterableVia = Derived`"
)]
pub trait Filterable: Carrier + Sized {
    /// Keeps owned elements satisfying `predicate`.
    fn filter<P>(self, predicate: P) -> Self
    where
        P: FnMut(&Self::Inner) -> bool;

    /// Clones the borrowed elements satisfying `predicate` into a new carrier.
    fn filter_ref<'a, P>(&'a self, predicate: P) -> Self
    where
        P: FnMut(Self::Ref<'a>) -> bool,
        Self: CloneInner,
        Self::Ref<'a>: Copy;
}

impl<T> Filterable for T
where
    T: Instances + FilterableInstance<<T as Instances>::FilterableVia>,
{
    #[inline]
    fn filter<P>(self, predicate: P) -> Self
    where
        P: FnMut(&Self::Inner) -> bool,
    {
        <T as FilterableInstance<T::FilterableVia>>::filter(self, predicate)
    }

    #[inline]
    fn filter_ref<'a, P>(&'a self, predicate: P) -> Self
    where
        P: FnMut(Self::Ref<'a>) -> bool,
        Self: CloneInner,
        Self::Ref<'a>: Copy,
    {
        <T as FilterableInstance<T::FilterableVia>>::filter_ref(self, predicate)
    }
}

impl<T: FilterableMethods> FilterableInstance<Native> for T {
    #[inline]
    fn filter<P>(self, predicate: P) -> Self
    where
        P: FnMut(&Self::Inner) -> bool,
    {
        <T as FilterableMethods>::filter(self, predicate)
    }

    #[inline]
    fn filter_ref<'a, P>(&'a self, predicate: P) -> Self
    where
        P: FnMut(Self::Ref<'a>) -> bool,
        Self: CloneInner,
        Self::Ref<'a>: Copy,
    {
        <T as FilterableMethods>::filter_ref(self, predicate)
    }
}
