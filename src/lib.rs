//! # retrofit
//!
//! Functor, Monad, Monoid, Foldable and Filterable instances for containers
//! that were never written with typeclasses in mind, resolved entirely at
//! compile time.
//!
//! ## Overview
//!
//! - **Typeclasses**: contracts with an owning and a borrowing entry point,
//!   plus [`Converter`](typeclass::Converter) between carrier shapes
//! - **Resolution**: each carrier names one strategy per typeclass in its
//!   [`Instances`](typeclass::Instances) table: forward to native methods,
//!   use an adapter, derive from Foldable + Monoid, or stay unsupported
//! - **Instances**: `Vec`, `VecDeque`, `LinkedList`, `HashSet`, `BTreeSet`,
//!   `HashMap`, `BTreeMap`, `Option`, `String`, and `SmallVec` behind a feature
//! - **Pipelines**: `carrier | map(f) | filter(p) | as_::<BTreeSet<_>>()`,
//!   the curried `stage.apply(carrier)`, and [`pipe!`]
//! - **Views**: lazy iterator-backed carriers with [`own`](pipeline::own)
//!
//! ## Feature Flags
//!
//! - `views`: lazy views and their pipeline stages (default)
//! - `derive`: `#[derive(Carrier)]` (default)
//! - `smallvec`: instances for `smallvec::SmallVec`
//! - `tracing`: a `trace` event per derived operation
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use retrofit::prelude::*;
//! use std::collections::{BTreeSet, HashMap};
//!
//! let words = vec!["apple", "avocado", "banana", "apple"];
//!
//! let initials = &words | map(|word: &&str| word.chars().next()) | as_::<BTreeSet<_>>();
//! assert_eq!(initials, BTreeSet::from([Some('a'), Some('b')]));
//!
//! let lengths: HashMap<&str, usize> = words | map(|word: &'static str| (word, word.len())) | as_();
//! assert_eq!(lengths["banana"], 6);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

mod trace;

pub mod pipeline;
pub mod typeclass;

#[cfg(feature = "views")]
pub mod view;

mod instances;

pub use typeclass::{empty, unit};

#[cfg(feature = "derive")]
pub use retrofit_derive::Carrier;

/// Prelude module for convenient imports.
///
/// Re-exports the typeclass contracts, the pipeline stages and, with the
/// `views` feature, the view constructor. Candidate and native-method
/// traits are left out so that method calls on carriers stay unambiguous.
///
/// [`Monoid`](crate::typeclass::Monoid) is in scope with the prelude, and
/// its by-value `append` is found before the inherent
/// `append(&mut self, &mut Self)` of `Vec`, `VecDeque`, `LinkedList` and
/// `BTreeSet`. Call the inherent method by path, as in
/// `Vec::append(&mut left, &mut right)`.
///
/// # Usage
///
/// ```rust
/// use retrofit::prelude::*;
///
/// let mut left = vec![1, 2];
/// let mut right = vec![3];
/// Vec::append(&mut left, &mut right);
/// assert_eq!(left.append(vec![4]), vec![1, 2, 3, 4]);
/// ```
pub mod prelude {
    pub use crate::pipe;
    pub use crate::pipeline::{
        Stage, append, as_, filter, flat_map, fold_left, inner_filter, inner_flat_map, inner_map,
        map, own,
    };
    pub use crate::typeclass::{
        Carrier, CloneInner, Converter, Filterable, Foldable, Functor, Max, Min, Monad, Monoid,
        Pointed, Product, Rebind, Singleton, SingletonMonoid, Sum, empty, unit,
    };

    #[cfg(feature = "views")]
    pub use crate::view::{View, view};
}
