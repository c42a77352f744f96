//! Derive macro registering a user container as a retrofit carrier.
//!
//! # Example
//!
//! ```rust,ignore
//! use retrofit::Carrier;
//! use retrofit::prelude::*;
//! use retrofit::typeclass::{FoldableMethods, MonoidMethods};
//!
//! #[derive(Debug, Clone, PartialEq, Carrier)]
//! #[carrier(monoid = native, foldable = native, functor = derived, filterable = derived)]
//! struct Bag<T>(Vec<T>);
//!
//! impl<T> MonoidMethods for Bag<T> { /* empty, append */ }
//! impl<T> FoldableMethods for Bag<T> { /* fold_left, fold_left_ref */ }
//! impl<T> FromIterator<T> for Bag<T> { /* collect into the Vec */ }
//!
//! let bag = Bag(vec![1, 2, 3]) | map(|value: i32| value * 10) | filter(|value: &i32| *value > 10);
//! assert_eq!(bag, Bag(vec![20, 30]));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod carrier;
mod options;

use proc_macro::TokenStream;

/// Derive macro implementing `Carrier`, `Rebind`, `CloneInner`, `Instances`
/// and the `|` operator for a container type.
///
/// # Attribute
///
/// `#[carrier(...)]` takes `key = value` pairs:
///
/// - `element = T`: the element type parameter (default: the first type parameter)
/// - `monoid`, `foldable`, `functor`, `filterable`, `monad`: the strategy
///   for that typeclass, one of `native`, `native_alias`, `adapted`,
///   `derived`, `derived_singleton`, `in_place` or `unsupported`
///   (default: `unsupported`)
///
/// `native` strategies expect the matching `*Methods` trait to be
/// implemented by hand.
///
/// # Generated Code
///
/// ```rust,ignore
/// impl<T> Carrier for Bag<T> { type Inner = T; type Ref<'r> = &'r T where Self: 'r; }
/// impl<T> Rebind for Bag<T> { type With<B> = Bag<B>; }
/// impl<T: Clone> CloneInner for Bag<T> { ... }
/// impl<T> Instances for Bag<T> { type MonoidVia = Native; ... }
/// retrofit::pipeable!(impl[T] Bag<T>);
/// ```
///
/// `Rebind` is only generated when the element parameter carries no
/// bounds, since `Bag<B>` would otherwise need those bounds for every `B`.
///
/// # Errors
///
/// Unions, types with lifetime parameters and types without a type
/// parameter for the element are rejected.
#[proc_macro_derive(Carrier, attributes(carrier))]
pub fn derive_carrier(input: TokenStream) -> TokenStream {
    carrier::derive_carrier_impl(input)
}
