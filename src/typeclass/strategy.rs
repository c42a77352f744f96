//! Instance resolution.
//!
//! Every carrier carries a resolution table, [`Instances`], with one
//! associated type per typeclass. The associated type names the strategy
//! that implements the typeclass for that carrier. Each typeclass has a
//! candidate trait parameterised by the strategy (`FunctorInstance<Via, B>`
//! and friends) and a single blanket impl of the user-facing contract that
//! forwards through the strategy the table names.
//!
//! Because an associated type has exactly one value, exactly one candidate
//! is consulted per (carrier, typeclass) pair. Ambiguity cannot arise, and a
//! table entry with no matching candidate impl (most commonly
//! [`Unsupported`]) is a compile error at the use site.
//!
//! ```rust
//! use retrofit::typeclass::Instances;
//!
//! fn strategy_of<C: Instances>() -> &'static str {
//!     std::any::type_name::<C::FilterableVia>()
//! }
//!
//! assert!(strategy_of::<Vec<i32>>().ends_with("DerivedInPlace"));
//! ```

/// Forward to the carrier's native `*Methods` implementation (primary spelling).
#[derive(Debug)]
pub enum Native {}

/// Forward to the carrier's native alternate spelling (`fold`, `and_then`).
#[derive(Debug)]
pub enum NativeAlias {}

/// Use a hand-written adapter for this concrete container shape.
#[derive(Debug)]
pub enum Adapted {}

/// Derive from Foldable + Monoid, wrapping each produced element with `unit`.
#[derive(Debug)]
pub enum Derived {}

/// Derive from Foldable + Monoid, appending each produced element as a
/// [`Singleton`](super::Singleton).
#[derive(Debug)]
pub enum DerivedSingleton {}

/// Filter owned carriers in place through [`Retain`](super::Retain);
/// rebuild borrowed ones.
#[derive(Debug)]
pub enum DerivedInPlace {}

/// The typeclass is not available for this carrier.
#[derive(Debug)]
pub enum Unsupported {}

/// The resolution table of a carrier.
///
/// # Examples
///
/// A wrapper that only knows how to fold and combine gets Functor, Monad
/// and Filterable for free:
///
/// ```rust
/// use retrofit::typeclass::*;
///
/// #[derive(Debug, PartialEq)]
/// struct Bag<T>(Vec<T>);
///
/// impl<T> Carrier for Bag<T> {
///     type Inner = T;
///     type Ref<'a> = &'a T where Self: 'a;
/// }
/// impl<T> Rebind for Bag<T> {
///     type With<B> = Bag<B>;
/// }
/// impl<T> FromIterator<T> for Bag<T> {
///     fn from_iter<I: IntoIterator<Item = T>>(items: I) -> Self {
///         Bag(items.into_iter().collect())
///     }
/// }
/// impl<T> MonoidMethods for Bag<T> {
///     fn empty() -> Self { Bag(Vec::new()) }
///     fn append(mut self, other: Self) -> Self { self.0.extend(other.0); self }
/// }
/// impl<T> FoldableMethods for Bag<T> {
///     fn fold_left<B, F: FnMut(B, T) -> B>(self, init: B, function: F) -> B {
///         self.0.into_iter().fold(init, function)
///     }
///     fn fold_left_ref<'a, B, F: FnMut(B, &'a T) -> B>(&'a self, init: B, function: F) -> B {
///         self.0.iter().fold(init, function)
///     }
/// }
/// impl<T> Instances for Bag<T> {
///     type MonoidVia = Native;
///     type FoldableVia = Native;
///     type FunctorVia = Derived;
///     type FilterableVia = Derived;
///     type MonadVia = Derived;
/// }
///
/// let doubled = Functor::map(Bag(vec![1, 2, 3]), |value: i32| value * 2);
/// assert_eq!(doubled, Bag(vec![2, 4, 6]));
/// ```
pub trait Instances {
    /// Strategy for [`Monoid`](super::Monoid).
    type MonoidVia;
    /// Strategy for [`Foldable`](super::Foldable).
    type FoldableVia;
    /// Strategy for [`Functor`](super::Functor) and [`Pointed`](super::Pointed).
    type FunctorVia;
    /// Strategy for [`Filterable`](super::Filterable).
    type FilterableVia;
    /// Strategy for [`Monad`](super::Monad).
    type MonadVia;
}
