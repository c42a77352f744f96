//! Capabilities a carrier may already have.
//!
//! A capability is a trait whose methods have exactly the shape a typeclass
//! needs. Implementing one of the `*Methods` traits is how a carrier says
//! "I already have this operation natively"; the strategy named in its
//! [`Instances`](super::Instances) table then forwards to it instead of
//! deriving the operation.
//!
//! Foldable and Monad are detected under two spellings each:
//!
//! | typeclass | primary spelling | alternate spelling |
//! |-----------|------------------|--------------------|
//! | Foldable  | [`FoldableMethods::fold_left`] | [`FoldMethods::fold`] |
//! | Monad     | [`MonadMethods::flat_map`] | [`AndThenMethods::and_then`] |
//!
//! A carrier may implement both spellings; its resolution table names
//! exactly one of [`Native`](super::Native) or
//! [`NativeAlias`](super::NativeAlias), so the choice is never ambiguous.
//!
//! The remaining traits describe structure used by fast paths: erasing in
//! place ([`Retain`]) and populating a conversion destination ([`Insert`]).

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, LinkedList, VecDeque};
use std::hash::{BuildHasher, Hash};

use super::carrier::{Carrier, Rebind};

// =============================================================================
// Native method shapes
// =============================================================================

/// Native `empty` / `append`.
pub trait MonoidMethods: Sized {
    /// The identity element.
    fn empty() -> Self;

    /// Combines two values, consuming both.
    fn append(self, other: Self) -> Self;
}

/// Native `fold_left`.
pub trait FoldableMethods: Carrier {
    /// Folds owned elements from the left.
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        Self: Sized,
        F: FnMut(B, Self::Inner) -> B;

    /// Folds borrowed elements from the left.
    fn fold_left_ref<'a, B, F>(&'a self, init: B, function: F) -> B
    where
        F: FnMut(B, Self::Ref<'a>) -> B;
}

/// Native `fold`, the iterator-style spelling of [`FoldableMethods`].
pub trait FoldMethods: Carrier {
    /// Folds owned elements from the left.
    fn fold<B, F>(self, init: B, function: F) -> B
    where
        Self: Sized,
        F: FnMut(B, Self::Inner) -> B;

    /// Folds borrowed elements from the left.
    fn fold_ref<'a, B, F>(&'a self, init: B, function: F) -> B
    where
        F: FnMut(B, Self::Ref<'a>) -> B;
}

/// Native `unit` / `map`.
pub trait FunctorMethods: Rebind + Sized {
    /// Wraps one element.
    fn unit(element: Self::Inner) -> Self;

    /// Maps owned elements.
    fn map<B, F>(self, function: F) -> Self::With<B>
    where
        F: FnMut(Self::Inner) -> B;

    /// Maps borrowed elements.
    fn map_ref<'a, B, F>(&'a self, function: F) -> Self::With<B>
    where
        F: FnMut(Self::Ref<'a>) -> B;
}

/// Native `filter`.
pub trait FilterableMethods: Carrier + Sized {
    /// Keeps the elements satisfying `predicate`.
    fn filter<P>(self, predicate: P) -> Self
    where
        P: FnMut(&Self::Inner) -> bool;

    /// Builds a new carrier from the borrowed elements satisfying `predicate`.
    fn filter_ref<'a, P>(&'a self, predicate: P) -> Self
    where
        P: FnMut(Self::Ref<'a>) -> bool;
}

/// Native `flat_map`.
pub trait MonadMethods: Rebind + Sized {
    /// Maps each owned element to a carrier and flattens the results.
    fn flat_map<B, F>(self, function: F) -> Self::With<B>
    where
        F: FnMut(Self::Inner) -> Self::With<B>;

    /// Maps each borrowed element to a carrier and flattens the results.
    fn flat_map_ref<'a, B, F>(&'a self, function: F) -> Self::With<B>
    where
        F: FnMut(Self::Ref<'a>) -> Self::With<B>;
}

/// Native `and_then`, the std-style spelling of [`MonadMethods`].
pub trait AndThenMethods: Rebind + Sized {
    /// Maps each owned element to a carrier and flattens the results.
    fn and_then<B, F>(self, function: F) -> Self::With<B>
    where
        F: FnMut(Self::Inner) -> Self::With<B>;

    /// Maps each borrowed element to a carrier and flattens the results.
    fn and_then_ref<'a, B, F>(&'a self, function: F) -> Self::With<B>
    where
        F: FnMut(Self::Ref<'a>) -> Self::With<B>;
}

// =============================================================================
// Structural capabilities
// =============================================================================

/// True in-place erasure.
///
/// Carriers implementing this can be filtered without rebuilding when the
/// caller gives up ownership.
pub trait Retain: Carrier {
    /// Removes every element for which `keep` returns `false`.
    fn retain_where<P>(&mut self, keep: P)
    where
        P: FnMut(&Self::Inner) -> bool;

    /// Gives back spare capacity after a shrinking operation.
    ///
    /// The default does nothing, which is right for node-based carriers.
    #[inline]
    fn release_slack(&mut self) {}
}

/// A destination that can be populated one element at a time.
///
/// Conversions require the destination to accept exactly the source's inner
/// type. A `Vec<(K, V)>` feeds a map; a `Vec<K>` does not.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be populated with elements of type `{Item}`",
    label = "destination must hold the same inner type as the source",
    note = "`as_` only changes the container; map the elements first if their type differs"
)]
pub trait Insert<Item> {
    /// Adds one element. Two-key destinations keep the first value seen for a key.
    fn insert_item(&mut self, item: Item);
}

// =============================================================================
// Standard library capabilities
// =============================================================================

// Shrink only when at most a quarter of the buffer is in use.
const SLACK_RATIO: usize = 4;

impl<T> Retain for Vec<T> {
    #[inline]
    fn retain_where<P>(&mut self, keep: P)
    where
        P: FnMut(&T) -> bool,
    {
        self.retain(keep);
    }

    fn release_slack(&mut self) {
        if self.len() < self.capacity() / SLACK_RATIO {
            self.shrink_to_fit();
        }
    }
}

impl<T> Retain for VecDeque<T> {
    #[inline]
    fn retain_where<P>(&mut self, keep: P)
    where
        P: FnMut(&T) -> bool,
    {
        self.retain(keep);
    }

    fn release_slack(&mut self) {
        if self.len() < self.capacity() / SLACK_RATIO {
            self.shrink_to_fit();
        }
    }
}

impl<T, S> Retain for HashSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    #[inline]
    fn retain_where<P>(&mut self, keep: P)
    where
        P: FnMut(&T) -> bool,
    {
        self.retain(keep);
    }
}

impl<T: Ord> Retain for BTreeSet<T> {
    #[inline]
    fn retain_where<P>(&mut self, keep: P)
    where
        P: FnMut(&T) -> bool,
    {
        self.retain(keep);
    }
}

impl Retain for String {
    #[inline]
    fn retain_where<P>(&mut self, mut keep: P)
    where
        P: FnMut(&char) -> bool,
    {
        self.retain(|character| keep(&character));
    }
}

impl<T> Insert<T> for Vec<T> {
    #[inline]
    fn insert_item(&mut self, item: T) {
        self.push(item);
    }
}

impl<T> Insert<T> for VecDeque<T> {
    #[inline]
    fn insert_item(&mut self, item: T) {
        self.push_back(item);
    }
}

impl<T> Insert<T> for LinkedList<T> {
    #[inline]
    fn insert_item(&mut self, item: T) {
        self.push_back(item);
    }
}

impl<T, S> Insert<T> for HashSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    #[inline]
    fn insert_item(&mut self, item: T) {
        self.insert(item);
    }
}

impl<T: Ord> Insert<T> for BTreeSet<T> {
    #[inline]
    fn insert_item(&mut self, item: T) {
        self.insert(item);
    }
}

impl<K, V, S> Insert<(K, V)> for HashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    #[inline]
    fn insert_item(&mut self, (key, value): (K, V)) {
        self.entry(key).or_insert(value);
    }
}

impl<K: Ord, V> Insert<(K, V)> for BTreeMap<K, V> {
    #[inline]
    fn insert_item(&mut self, (key, value): (K, V)) {
        self.entry(key).or_insert(value);
    }
}

impl Insert<char> for String {
    #[inline]
    fn insert_item(&mut self, item: char) {
        self.push(item);
    }
}
