//! The `pipeable!` macro, implementing `|` for a carrier type.

/// Implements the `|` operator between a carrier and every pipeline stage.
///
/// `carrier | stage` becomes `stage.apply(carrier)` and `&carrier | stage`
/// the borrowing entry point. The operator has to be implemented per
/// carrier type, because a blanket `impl<C, S> BitOr<S> for C` is not
/// allowed; every std adapter and every `#[derive(Carrier)]` type already
/// has it.
///
/// # Syntax
///
/// - `pipeable!(impl[T] Bag<T>)` - an eager carrier
/// - `pipeable!(impl[T, const N: usize] Ring<T, N>)` - generics are listed in brackets
/// - `pipeable!(lazy impl[I] Stream<I>)` - a carrier whose map, filter and flat-map stack lazily
///
/// Bounds that the carrier type itself needs go in a trailing
/// `where [T: Ord]` group. Lifetime parameters are not supported in the
/// bracket list.
///
/// # Examples
///
/// ```rust
/// use retrofit::pipeline::{filter, map};
/// use retrofit::typeclass::*;
///
/// #[derive(Debug, Clone, PartialEq)]
/// struct Stack<T>(Vec<T>);
///
/// impl<T> Carrier for Stack<T> {
///     type Inner = T;
///     type Ref<'a> = &'a T where Self: 'a;
/// }
///
/// impl<T> Rebind for Stack<T> {
///     type With<B> = Stack<B>;
/// }
///
/// impl<T: Clone> CloneInner for Stack<T> {
///     fn clone_inner<'a>(element: &'a T) -> T where Self: 'a {
///         element.clone()
///     }
/// }
///
/// impl<T> MonoidMethods for Stack<T> {
///     fn empty() -> Self { Stack(Vec::new()) }
///     fn append(mut self, other: Self) -> Self { self.0.extend(other.0); self }
/// }
///
/// impl<T> FoldableMethods for Stack<T> {
///     fn fold_left<B, F: FnMut(B, T) -> B>(self, init: B, function: F) -> B {
///         self.0.into_iter().fold(init, function)
///     }
///     fn fold_left_ref<'a, B, F: FnMut(B, &'a T) -> B>(&'a self, init: B, function: F) -> B {
///         self.0.iter().fold(init, function)
///     }
/// }
///
/// impl<T> FromIterator<T> for Stack<T> {
///     fn from_iter<I: IntoIterator<Item = T>>(items: I) -> Self {
///         Stack(items.into_iter().collect())
///     }
/// }
///
/// impl<T> Instances for Stack<T> {
///     type MonoidVia = Native;
///     type FoldableVia = Native;
///     type FunctorVia = Derived;
///     type FilterableVia = Derived;
///     type MonadVia = Derived;
/// }
///
/// retrofit::pipeable!(impl[T] Stack<T>);
///
/// let doubled = Stack(vec![1, 2, 3]) | map(|value: i32| value * 2) | filter(|value: &i32| *value > 2);
/// assert_eq!(doubled, Stack(vec![4, 6]));
/// ```
#[macro_export]
macro_rules! pipeable {
    (impl[$($generics:tt)*] $carrier:ty $(where [$($bounds:tt)*])?) => {
        $crate::pipeable!(@eager [$($generics)*] $carrier, [$($($bounds)*)?]);
    };

    (lazy impl[$($generics:tt)*] $carrier:ty $(where [$($bounds:tt)*])?) => {
        $crate::pipeable!(@lazy [$($generics)*] $carrier, [$($($bounds)*)?]);
    };

    (@eager [$($generics:tt)*] $carrier:ty, $bounds:tt) => {
        $crate::pipeable!(@both [$($generics)*] $carrier, $bounds, Owned, Borrowed, [__F] $crate::pipeline::Map<__F>);
        $crate::pipeable!(@both [$($generics)*] $carrier, $bounds, Owned, Borrowed, [__F] $crate::pipeline::Filter<__F>);
        $crate::pipeable!(@both [$($generics)*] $carrier, $bounds, Owned, Borrowed, [__F] $crate::pipeline::FlatMap<__F>);
        $crate::pipeable!(@both [$($generics)*] $carrier, $bounds, Owned, Borrowed, [] $crate::pipeline::Own);
        $crate::pipeable!(@both [$($generics)*] $carrier, $bounds, Owned, Borrowed, [__B, __F] $crate::pipeline::FoldLeft<__B, __F>);
        $crate::pipeable!(@both [$($generics)*] $carrier, $bounds, Owned, Borrowed, [__D] $crate::pipeline::As<__D>);
        $crate::pipeable!(@common [$($generics)*] $carrier, $bounds);
    };

    (@lazy [$($generics:tt)*] $carrier:ty, $bounds:tt) => {
        $crate::pipeable!(@both [$($generics)*] $carrier, $bounds, Lazy, Lazy, [__F] $crate::pipeline::Map<__F>);
        $crate::pipeable!(@both [$($generics)*] $carrier, $bounds, Lazy, Lazy, [__F] $crate::pipeline::Filter<__F>);
        $crate::pipeable!(@both [$($generics)*] $carrier, $bounds, Lazy, Lazy, [__F] $crate::pipeline::FlatMap<__F>);
        $crate::pipeable!(@both [$($generics)*] $carrier, $bounds, Lazy, Lazy, [] $crate::pipeline::Own);
        // Consuming folds take the iterator directly; borrowed ones restart it.
        $crate::pipeable!(@both [$($generics)*] $carrier, $bounds, Lazy, Borrowed, [__B, __F] $crate::pipeline::FoldLeft<__B, __F>);
        $crate::pipeable!(@both [$($generics)*] $carrier, $bounds, Lazy, Borrowed, [__D] $crate::pipeline::As<__D>);
        $crate::pipeable!(@common [$($generics)*] $carrier, $bounds);
    };

    // Stages whose entry point does not depend on laziness.
    (@common [$($generics:tt)*] $carrier:ty, $bounds:tt) => {
        $crate::pipeable!(@both [$($generics)*] $carrier, $bounds, Owned, Borrowed, [__R] $crate::pipeline::Append<__R>);
        $crate::pipeable!(@owned [$($generics)*] $carrier, $bounds, Owned, [__F] $crate::pipeline::InnerMap<__F>);
        $crate::pipeable!(@owned [$($generics)*] $carrier, $bounds, Owned, [__F] $crate::pipeline::InnerFilter<__F>);
        $crate::pipeable!(@owned [$($generics)*] $carrier, $bounds, Owned, [__F] $crate::pipeline::InnerFlatMap<__F>);
    };

    (@both [$($generics:tt)*] $carrier:ty, [$($bounds:tt)*], $owned:ident, $borrowed:ident, [$($stage_generic:ident),*] $stage:ty) => {
        $crate::pipeable!(@owned [$($generics)*] $carrier, [$($bounds)*], $owned, [$($stage_generic),*] $stage);

        impl<'__a, $($stage_generic,)* $($generics)*> ::core::ops::BitOr<$stage> for &'__a $carrier
        where
            $stage: $crate::pipeline::Stage<&'__a $carrier, $crate::pipeline::$borrowed>,
            $($bounds)*
        {
            type Output = <$stage as $crate::pipeline::Stage<&'__a $carrier, $crate::pipeline::$borrowed>>::Output;

            #[inline]
            fn bitor(self, stage: $stage) -> Self::Output {
                $crate::pipeline::Stage::<&'__a $carrier, $crate::pipeline::$borrowed>::apply(stage, self)
            }
        }
    };

    (@owned [$($generics:tt)*] $carrier:ty, [$($bounds:tt)*], $mode:ident, [$($stage_generic:ident),*] $stage:ty) => {
        impl<$($stage_generic,)* $($generics)*> ::core::ops::BitOr<$stage> for $carrier
        where
            $stage: $crate::pipeline::Stage<$carrier, $crate::pipeline::$mode>,
            $($bounds)*
        {
            type Output = <$stage as $crate::pipeline::Stage<$carrier, $crate::pipeline::$mode>>::Output;

            #[inline]
            fn bitor(self, stage: $stage) -> Self::Output {
                $crate::pipeline::Stage::<$carrier, $crate::pipeline::$mode>::apply(stage, self)
            }
        }
    };
}
