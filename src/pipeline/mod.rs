//! Pipeline stages applied with `|`, with `.apply()`, or with [`pipe!`].
//!
//! Each operation is a small stage value built by a free function:
//!
//! - [`map`], [`filter`], [`flat_map`]: the Functor, Filterable and Monad operations
//! - [`fold_left`]: reduce to a summary value
//! - [`append`]: combine with another carrier, or with one element via [`Singleton`]
//! - [`as_`]: convert into another carrier shape
//! - [`inner_map`], [`inner_filter`], [`inner_flat_map`]: apply to every nested carrier
//! - [`own`]: take an owned copy, materialising views
//!
//! A stage does nothing until it meets a carrier. The carrier's value
//! category picks the entry point: an owned carrier is consumed and may be
//! reused, a borrowed carrier is left untouched, and a [`View`] stacks a lazy
//! layer.
//!
//! [`View`]: crate::view::View
//! [`Singleton`]: crate::typeclass::Singleton
//!
//! # Examples
//!
//! ```rust
//! use retrofit::pipeline::{Stage, as_, filter, fold_left, map};
//! use std::collections::BTreeSet;
//!
//! let words = vec![String::from("1"), String::from("2"), String::from("3")];
//!
//! // Borrowed: `words` survives.
//! let odd = &words | filter(|word: &String| word.parse::<i32>().is_ok_and(|n| n % 2 == 1));
//! assert_eq!(odd, vec!["1", "3"]);
//!
//! // Owned: `words` is consumed.
//! let joined = words | fold_left(String::from("result="), |mut text: String, word: String| {
//!     text.push_str(&word);
//!     text
//! });
//! assert_eq!(joined, "result=123");
//!
//! // The curried form is the same stage applied explicitly.
//! let set = as_::<BTreeSet<_>>().apply(map(|value: i32| value % 3).apply(vec![1, 2, 3, 4]));
//! assert_eq!(set, BTreeSet::from([0, 1, 2]));
//! ```
//!
//! Closures passed to stages annotate their parameter type: the stage is
//! built before it meets its carrier, so the element type cannot flow into
//! the closure from the left operand.

mod pipe_macro;
mod pipeable_macro;
mod stages;

#[cfg(feature = "views")]
mod lazy;

use std::marker::PhantomData;

// =============================================================================
// Stage trait and modes
// =============================================================================

/// Entry point taking the carrier by value.
#[derive(Debug)]
pub enum Owned {}

/// Entry point taking the carrier by shared reference.
#[derive(Debug)]
pub enum Borrowed {}

/// Entry point stacking a lazy layer on a view.
#[derive(Debug)]
pub enum Lazy {}

/// A pipeline stage applicable to `C` through the entry point `Mode`.
///
/// `Mode` is never written by hand: for a given carrier and stage at most one
/// mode has its requirements met, and inference picks it.
#[diagnostic::on_unimplemented(
    message = "this stage cannot be applied to `{C}`",
    label = "no owned, borrowed or lazy entry point accepts `{C}`",
    note = "the carrier must provide the typeclass behind the stage, and closure parameters must match its element type"
)]
pub trait Stage<C, Mode> {
    /// The value produced by the stage.
    type Output;

    /// Runs the stage on `carrier`.
    fn apply(self, carrier: C) -> Self::Output;
}

// =============================================================================
// Stage values
// =============================================================================

/// Maps every element. Built by [`map`].
#[derive(Debug)]
pub struct Map<F> {
    function: F,
}

/// Keeps the elements satisfying a predicate. Built by [`filter`].
#[derive(Debug)]
pub struct Filter<P> {
    predicate: P,
}

/// Maps every element to a carrier and flattens. Built by [`flat_map`].
#[derive(Debug)]
pub struct FlatMap<F> {
    function: F,
}

/// Folds from the left. Built by [`fold_left`].
#[derive(Debug)]
pub struct FoldLeft<B, F> {
    init: B,
    function: F,
}

/// Appends a carrier, a borrowed carrier or a single element. Built by [`append`].
#[derive(Debug)]
pub struct Append<R> {
    other: R,
}

/// Converts into the carrier `D`. Built by [`as_`].
pub struct As<D> {
    destination: PhantomData<fn() -> D>,
}

impl<D> std::fmt::Debug for As<D> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("As")
            .field("destination", &std::any::type_name::<D>())
            .finish()
    }
}

/// Maps every element of every nested carrier. Built by [`inner_map`].
#[derive(Debug)]
pub struct InnerMap<F> {
    function: F,
}

/// Filters every nested carrier. Built by [`inner_filter`].
#[derive(Debug)]
pub struct InnerFilter<P> {
    predicate: P,
}

/// Flat-maps every nested carrier. Built by [`inner_flat_map`].
#[derive(Debug)]
pub struct InnerFlatMap<F> {
    function: F,
}

/// Produces an owned carrier. Built by [`own`].
#[derive(Debug)]
pub struct Own;

// =============================================================================
// Constructors
// =============================================================================

/// Maps every element with `function`.
#[inline]
pub const fn map<F>(function: F) -> Map<F> {
    Map { function }
}

/// Keeps the elements for which `predicate` holds.
#[inline]
pub const fn filter<P>(predicate: P) -> Filter<P> {
    Filter { predicate }
}

/// Maps every element to a carrier of the same shape and flattens the results.
///
/// # Examples
///
/// ```rust
/// use retrofit::pipeline::flat_map;
///
/// let pairs = vec![1, 2] | flat_map(|value: i32| vec![value, -value]);
/// assert_eq!(pairs, vec![1, -1, 2, -2]);
/// ```
#[inline]
pub const fn flat_map<F>(function: F) -> FlatMap<F> {
    FlatMap { function }
}

/// Folds the elements from the left, starting at `init`.
#[inline]
pub const fn fold_left<B, F>(init: B, function: F) -> FoldLeft<B, F> {
    FoldLeft { init, function }
}

/// Appends `other` on the right.
///
/// `other` may be a carrier of the same type, a reference to one, or a
/// [`Singleton`](crate::typeclass::Singleton) element.
///
/// # Examples
///
/// ```rust
/// use retrofit::pipeline::append;
/// use retrofit::typeclass::Singleton;
///
/// let tail = vec![3];
/// let joined = vec![1] | append(Singleton(2)) | append(&tail);
/// assert_eq!(joined, vec![1, 2, 3]);
/// ```
#[inline]
pub const fn append<R>(other: R) -> Append<R> {
    Append { other }
}

/// Converts into the carrier `D`.
///
/// The destination's element type may be left for inference:
/// `as_::<HashSet<_>>()`.
#[inline]
pub const fn as_<D>() -> As<D> {
    As {
        destination: PhantomData,
    }
}

/// Maps every element of every nested carrier.
///
/// # Examples
///
/// ```rust
/// use retrofit::pipeline::inner_map;
///
/// let grid = vec![vec![1, 2], vec![3]] | inner_map(|cell: i32| cell * 10);
/// assert_eq!(grid, vec![vec![10, 20], vec![30]]);
/// ```
#[inline]
pub const fn inner_map<F>(function: F) -> InnerMap<F> {
    InnerMap { function }
}

/// Filters every nested carrier.
#[inline]
pub const fn inner_filter<P>(predicate: P) -> InnerFilter<P> {
    InnerFilter { predicate }
}

/// Flat-maps every nested carrier.
#[inline]
pub const fn inner_flat_map<F>(function: F) -> InnerFlatMap<F> {
    InnerFlatMap { function }
}

/// Produces an owned carrier: a clone of a borrowed carrier, or the
/// materialised elements of a view.
#[inline]
pub const fn own() -> Own {
    Own
}

#[cfg(test)]
mod tests {
    use super::{Stage, append, as_, filter, flat_map, fold_left, inner_filter, inner_flat_map, inner_map, map, own};
    use crate::typeclass::Singleton;
    use rstest::rstest;
    use std::collections::{BTreeMap, BTreeSet, HashSet, LinkedList, VecDeque};

    #[test]
    fn operator_and_curried_forms_agree() {
        let source = vec![1, 2, 3, 4];
        let piped = &source | map(|value: &i32| value * 3) | filter(|value: &i32| value % 2 == 0);
        let curried = filter(|value: &i32| value % 2 == 0).apply(map(|value: &i32| value * 3).apply(&source));
        assert_eq!(piped, curried);
        assert_eq!(piped, vec![6, 12]);
    }

    #[test]
    fn borrowed_pipeline_leaves_source_unchanged() {
        let source = VecDeque::from([String::from("a"), String::from("bb")]);
        let lengths = &source | map(|word: &String| word.len());
        assert_eq!(lengths, VecDeque::from([1, 2]));
        assert_eq!(source, VecDeque::from([String::from("a"), String::from("bb")]));
    }

    #[test]
    fn none_pipeline_short_circuits() {
        let mut calls = 0;
        let absent: Option<i32> = None;
        let result = absent
            | map(|value: i32| {
                calls += 1;
                value + 1
            });
        let result = result | flat_map(|value: i32| Some(value * 2));
        assert_eq!(result, None);
        assert_eq!(calls, 0);
    }

    #[rstest]
    #[case(vec![], 0)]
    #[case(vec![1, 2, 3], 6)]
    fn fold_left_owned_and_borrowed(#[case] values: Vec<i32>, #[case] expected: i32) {
        let list: LinkedList<i32> = values.into_iter().collect();
        assert_eq!(&list | fold_left(0, |total: i32, value: &i32| total + value), expected);
        assert_eq!(list | fold_left(0, |total: i32, value: i32| total + value), expected);
    }

    #[test]
    fn append_accepts_owned_borrowed_and_single() {
        let right = BTreeSet::from([3]);
        let set = BTreeSet::from([1]) | append(BTreeSet::from([2])) | append(&right) | append(Singleton(4));
        assert_eq!(set, BTreeSet::from([1, 2, 3, 4]));

        let base = String::from("ab");
        let text = &base | append(String::from("cd"));
        assert_eq!(text, "abcd");
        assert_eq!(&base | append(Singleton('!')), "ab!");
    }

    #[test]
    fn as_converts_with_inferred_element_type() {
        let source = vec![3, 1, 3];
        let unique = &source | as_::<HashSet<_>>();
        assert_eq!(unique, HashSet::from([1, 3]));

        let index = vec![("b", 2), ("a", 1)] | as_::<BTreeMap<_, _>>();
        let pairs = index | as_::<Vec<_>>();
        assert_eq!(pairs, vec![("a", 1), ("b", 2)]);
    }

    #[test]
    fn inner_stages_reach_nested_carriers() {
        let nested = vec![vec![1, 2, 3], vec![4]];
        let evens = nested | inner_filter(|value: &i32| value % 2 == 0);
        assert_eq!(evens, vec![vec![2], vec![4]]);

        let sets = vec![BTreeSet::from([1]), BTreeSet::from([2])];
        let widened = sets | inner_flat_map(|value: i32| BTreeSet::from([value, value + 10]));
        assert_eq!(widened, vec![BTreeSet::from([1, 11]), BTreeSet::from([2, 12])]);

        let options = vec![Some(1), None] | inner_map(|value: i32| value.to_string());
        assert_eq!(options, vec![Some(String::from("1")), None]);
    }

    #[test]
    fn own_clones_a_borrowed_carrier() {
        let source = vec![1, 2];
        let copy = &source | own();
        assert_eq!(copy, source);
        assert_eq!(vec![5] | own(), vec![5]);
    }
}
