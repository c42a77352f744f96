//! Newtype wrappers selecting a Monoid for numeric and ordered values.
//!
//! A bare `i32` has several reasonable monoids, so none is chosen for it.
//! Wrapping picks one:
//!
//! - [`Sum`]: addition, identity `0`
//! - [`Product`]: multiplication, identity `1`
//! - [`Max`]: larger value, identity [`Bounded::MIN_VALUE`]
//! - [`Min`]: smaller value, identity [`Bounded::MAX_VALUE`]
//!
//! # Examples
//!
//! ```rust
//! use retrofit::typeclass::{Foldable, Max, Monoid, Sum};
//!
//! let total: Sum<u32> = Foldable::fold_map(vec![1, 2, 3], Sum);
//! assert_eq!(total.into_inner(), 6);
//!
//! let highest = Monoid::append(Max(3), Max(9));
//! assert_eq!(highest, Max(9));
//! assert_eq!(Max::<u8>::empty(), Max(0));
//! ```

use std::ops::Add;

use super::monoid::MonoidInstance;
use super::strategy::{Adapted, Instances, Unsupported};

macro_rules! wrapper {
    ($(#[$attribute:meta])* $name:ident) => {
        $(#[$attribute])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name<A>(pub A);

        impl<A> $name<A> {
            /// Wraps a value.
            #[inline]
            pub const fn new(value: A) -> Self {
                Self(value)
            }

            /// Consumes the wrapper and returns the inner value.
            #[inline]
            pub fn into_inner(self) -> A {
                self.0
            }

            /// Returns a reference to the inner value.
            #[inline]
            pub const fn as_inner(&self) -> &A {
                &self.0
            }
        }

        impl<A> From<A> for $name<A> {
            fn from(value: A) -> Self {
                Self::new(value)
            }
        }

        impl<A> Instances for $name<A> {
            type MonoidVia = Adapted;
            type FoldableVia = Unsupported;
            type FunctorVia = Unsupported;
            type FilterableVia = Unsupported;
            type MonadVia = Unsupported;
        }
    };
}

wrapper! {
    /// Addition monoid.
    Sum
}

wrapper! {
    /// Multiplication monoid.
    Product
}

wrapper! {
    /// Maximum monoid.
    Max
}

wrapper! {
    /// Minimum monoid.
    Min
}

impl<A: Add<Output = A> + Default> MonoidInstance<Adapted> for Sum<A> {
    #[inline]
    fn empty() -> Self {
        Self(A::default())
    }

    #[inline]
    fn append(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

macro_rules! product_monoid {
    ($one:literal => $($numeric:ty),*) => {
        $(
            impl MonoidInstance<Adapted> for Product<$numeric> {
                #[inline]
                fn empty() -> Self {
                    Self($one)
                }

                #[inline]
                fn append(self, other: Self) -> Self {
                    Self(self.0 * other.0)
                }
            }
        )*
    };
}

product_monoid!(1 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
product_monoid!(1.0 => f32, f64);

impl<A: Ord + Bounded> MonoidInstance<Adapted> for Max<A> {
    #[inline]
    fn empty() -> Self {
        Self(A::MIN_VALUE)
    }

    #[inline]
    fn append(self, other: Self) -> Self {
        if self.0 >= other.0 { self } else { other }
    }
}

impl<A: Ord + Bounded> MonoidInstance<Adapted> for Min<A> {
    #[inline]
    fn empty() -> Self {
        Self(A::MAX_VALUE)
    }

    #[inline]
    fn append(self, other: Self) -> Self {
        if self.0 <= other.0 { self } else { other }
    }
}

/// Types with a least and a greatest value.
pub trait Bounded {
    /// The minimum value of this type.
    const MIN_VALUE: Self;

    /// The maximum value of this type.
    const MAX_VALUE: Self;
}

macro_rules! bounded_integer {
    ($($integer:ty),*) => {
        $(
            impl Bounded for $integer {
                const MIN_VALUE: Self = Self::MIN;
                const MAX_VALUE: Self = Self::MAX;
            }
        )*
    };
}

bounded_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Bounded for char {
    const MIN_VALUE: Self = '\0';
    const MAX_VALUE: Self = Self::MAX;
}

impl Bounded for bool {
    const MIN_VALUE: Self = false;
    const MAX_VALUE: Self = true;
}
