//! Carrier types: containers participating in the typeclass system.
//!
//! Rust has no higher-kinded types, so a carrier is described by the
//! element it holds ([`Carrier::Inner`]), the borrowed view of one element
//! ([`Carrier::Ref`]) and, for single-socket containers, the same container
//! applied to another element type ([`Rebind::With`]).
//!
//! # Example
//!
//! ```rust
//! use retrofit::typeclass::{Carrier, Rebind};
//!
//! fn relabel<C: Rebind>(_carrier: &C) -> C::With<String>
//! where
//!     C::With<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let labels: Vec<String> = relabel(&vec![1, 2, 3]);
//! assert!(labels.is_empty());
//!
//! fn assert_inner<C: Carrier<Inner = (u8, char)>>() {}
//! assert_inner::<std::collections::BTreeMap<u8, char>>();
//! ```

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, LinkedList, VecDeque};

/// A container or value type with an element type.
///
/// `Inner` is what an owning traversal yields; `Ref<'a>` is what a borrowing
/// traversal over `&'a Self` yields. Sequences and sets borrow as `&'a T`,
/// two-key containers borrow as `(&'a K, &'a V)`.
pub trait Carrier {
    /// The element type held by this carrier.
    type Inner;

    /// One element as seen through a shared borrow of the carrier.
    type Ref<'a>
    where
        Self: 'a;
}

/// A single-socket carrier that can be re-applied to another element type.
///
/// `Vec<T>` rebinds to `Vec<B>`, `HashSet<T, S>` to `HashSet<B, S>`. Two-key
/// containers do not implement this trait, which is what rules out `map`
/// and `flat_map` on them.
///
/// # Laws
///
/// `<C as Rebind>::With<C::Inner>` is `C`.
pub trait Rebind: Carrier {
    /// The same container holding `B`.
    type With<B>: Carrier<Inner = B>;
}

/// Turns a borrowed element back into an owned one.
///
/// Borrowing entry points (`filter_ref`, `convert_ref`) need this to build a
/// fresh carrier without touching the source.
pub trait CloneInner: Carrier {
    /// Clones the element behind `element`.
    fn clone_inner<'a>(element: Self::Ref<'a>) -> Self::Inner
    where
        Self: 'a;
}

/// Marks a single element to be appended, as opposed to a whole carrier.
///
/// # Examples
///
/// ```rust
/// use retrofit::typeclass::{Singleton, SingletonMonoid};
///
/// let numbers = vec![1, 2].append_one(Singleton(3));
/// assert_eq!(numbers, vec![1, 2, 3]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Singleton<T>(pub T);

impl<T> Singleton<T> {
    /// Consumes the wrapper and returns the element.
    #[inline]
    pub fn into_inner(self) -> T {
        self.0
    }
}

// =============================================================================
// Single-socket carriers
// =============================================================================

macro_rules! single_socket_carrier {
    ($($container:ident),* $(,)?) => {
        $(
            impl<T> Carrier for $container<T> {
                type Inner = T;
                type Ref<'a>
                    = &'a T
                where
                    Self: 'a;
            }

            impl<T> Rebind for $container<T> {
                type With<B> = $container<B>;
            }

            impl<T: Clone> CloneInner for $container<T> {
                #[inline]
                fn clone_inner<'a>(element: &'a T) -> T
                where
                    Self: 'a,
                {
                    element.clone()
                }
            }
        )*
    };
}

single_socket_carrier!(Vec, VecDeque, LinkedList, BTreeSet, Option);

// =============================================================================
// Hashed and two-key carriers
// =============================================================================

impl<T, S> Carrier for HashSet<T, S> {
    type Inner = T;
    type Ref<'a>
        = &'a T
    where
        Self: 'a;
}

impl<T, S> Rebind for HashSet<T, S> {
    type With<B> = HashSet<B, S>;
}

impl<T: Clone, S> CloneInner for HashSet<T, S> {
    #[inline]
    fn clone_inner<'a>(element: &'a T) -> T
    where
        Self: 'a,
    {
        element.clone()
    }
}

impl<K, V, S> Carrier for HashMap<K, V, S> {
    type Inner = (K, V);
    type Ref<'a>
        = (&'a K, &'a V)
    where
        Self: 'a;
}

impl<K: Clone, V: Clone, S> CloneInner for HashMap<K, V, S> {
    #[inline]
    fn clone_inner<'a>((key, value): (&'a K, &'a V)) -> (K, V)
    where
        Self: 'a,
    {
        (key.clone(), value.clone())
    }
}

impl<K, V> Carrier for BTreeMap<K, V> {
    type Inner = (K, V);
    type Ref<'a>
        = (&'a K, &'a V)
    where
        Self: 'a;
}

impl<K: Clone, V: Clone> CloneInner for BTreeMap<K, V> {
    #[inline]
    fn clone_inner<'a>((key, value): (&'a K, &'a V)) -> (K, V)
    where
        Self: 'a,
    {
        (key.clone(), value.clone())
    }
}

// Characters are yielded by value from both traversals.
impl Carrier for String {
    type Inner = char;
    type Ref<'a>
        = char
    where
        Self: 'a;
}

impl CloneInner for String {
    #[inline]
    fn clone_inner<'a>(element: Self::Ref<'a>) -> char
    where
        Self: 'a,
    {
        element
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn vec_inner_type_is_element() {
        fn assert_inner<C: Carrier<Inner = i32>>() {}
        assert_inner::<Vec<i32>>();
        assert_inner::<VecDeque<i32>>();
        assert_inner::<Option<i32>>();
    }

    #[test]
    fn map_inner_type_is_entry_pair() {
        fn assert_inner<C: Carrier<Inner = (String, u8)>>() {}
        assert_inner::<HashMap<String, u8>>();
        assert_inner::<BTreeMap<String, u8>>();
    }

    #[test]
    fn hash_set_rebind_keeps_hasher() {
        fn rebind<C: Rebind>(_: &C) -> C::With<String>
        where
            C::With<String>: Default,
        {
            Default::default()
        }

        let source: HashSet<i32, rustc_hash::FxBuildHasher> = HashSet::default();
        let rebound: HashSet<String, rustc_hash::FxBuildHasher> = rebind(&source);
        assert!(rebound.is_empty());
    }

    #[rstest]
    #[case(("a", 1))]
    #[case(("zz", -4))]
    fn map_clone_inner_copies_both_halves(#[case] entry: (&str, i32)) {
        let key = entry.0.to_string();
        let cloned = <BTreeMap<String, i32> as CloneInner>::clone_inner((&key, &entry.1));
        assert_eq!(cloned, (key, entry.1));
    }

    #[test]
    fn singleton_into_inner_unwraps() {
        assert_eq!(Singleton("x").into_inner(), "x");
    }
}
