//! Typeclass contracts, capability detection and instance derivation.
//!
//! # Overview
//!
//! - [`Carrier`] / [`Rebind`]: element type and re-application of a container
//! - [`Monoid`]: `empty` and `append`, with [`SingletonMonoid`] for one-element appends
//! - [`Foldable`]: `fold_left` over owned or borrowed elements
//! - [`Pointed`] / [`Functor`]: `unit` and `map`
//! - [`Filterable`]: `filter`
//! - [`Monad`]: `flat_map`
//! - [`Converter`]: conversion between carrier shapes
//!
//! # Resolution
//!
//! Each carrier implements [`Instances`], naming one strategy per typeclass:
//!
//! - [`Native`] / [`NativeAlias`]: forward to `*Methods` the carrier already has
//! - [`Adapted`]: a hand-written adapter for a standard container shape
//! - [`Derived`], [`DerivedSingleton`], [`DerivedInPlace`]: synthesised from Foldable + Monoid
//! - [`Unsupported`]: no instance; using the typeclass does not compile
//!
//! ```compile_fail
//! use retrofit::typeclass::Functor;
//! use std::collections::HashMap;
//!
//! // Maps hold two-key entries and have no Functor instance.
//! let _ = Functor::map(HashMap::from([(1, 2)]), |(key, value): (i32, i32)| key + value);
//! ```

mod capability;
mod carrier;
mod converter;
mod derived;
mod filterable;
mod foldable;
mod functor;
mod monad;
mod monoid;
mod strategy;
mod wrappers;

pub use capability::{
    AndThenMethods, FilterableMethods, FoldMethods, FoldableMethods, FunctorMethods, Insert,
    MonadMethods, MonoidMethods, Retain,
};
pub use carrier::{Carrier, CloneInner, Rebind, Singleton};
pub use converter::Converter;
pub use filterable::{Filterable, FilterableInstance};
pub use foldable::{Foldable, FoldableInstance};
pub use functor::{Functor, FunctorInstance, Pointed, PointedInstance, unit};
pub use monad::{Monad, MonadInstance};
pub use monoid::{Monoid, MonoidInstance, SingletonMonoid, empty};
pub use strategy::{
    Adapted, Derived, DerivedInPlace, DerivedSingleton, Instances, Native, NativeAlias,
    Unsupported,
};
pub use wrappers::{Bounded, Max, Min, Product, Sum};
