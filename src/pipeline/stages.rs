//! Owned and borrowed entry points of every stage.
//!
//! Each impl forwards to one contract trait. The owned impls take `C`, the
//! borrowed impls take `&'a C`; neither is ever satisfied by a view.

use super::{
    Append, As, Borrowed, Filter, FlatMap, FoldLeft, InnerFilter, InnerFlatMap, InnerMap, Map,
    Own, Owned, Stage,
};
use crate::typeclass::{
    Carrier, CloneInner, Converter, Filterable, Foldable, Functor, Monad, Monoid, Rebind,
    Singleton, SingletonMonoid,
};

// =============================================================================
// Map
// =============================================================================

impl<C, F, B> Stage<C, Owned> for Map<F>
where
    C: Functor<B>,
    F: FnMut(C::Inner) -> B,
{
    type Output = C::With<B>;

    #[inline]
    fn apply(self, carrier: C) -> Self::Output {
        Functor::map(carrier, self.function)
    }
}

impl<'a, C, F, B> Stage<&'a C, Borrowed> for Map<F>
where
    C: Functor<B>,
    F: FnMut(C::Ref<'a>) -> B,
{
    type Output = C::With<B>;

    #[inline]
    fn apply(self, carrier: &'a C) -> Self::Output {
        Functor::map_ref(carrier, self.function)
    }
}

// =============================================================================
// Filter
// =============================================================================

impl<C, P> Stage<C, Owned> for Filter<P>
where
    C: Filterable,
    P: FnMut(&C::Inner) -> bool,
{
    type Output = C;

    #[inline]
    fn apply(self, carrier: C) -> C {
        Filterable::filter(carrier, self.predicate)
    }
}

impl<'a, C, P> Stage<&'a C, Borrowed> for Filter<P>
where
    C: Filterable + CloneInner,
    C::Ref<'a>: Copy,
    P: FnMut(C::Ref<'a>) -> bool,
{
    type Output = C;

    #[inline]
    fn apply(self, carrier: &'a C) -> C {
        Filterable::filter_ref(carrier, self.predicate)
    }
}

// =============================================================================
// FlatMap
// =============================================================================

// The result carrier `R` fixes the new element type.
impl<C, F, R> Stage<C, Owned> for FlatMap<F>
where
    R: Carrier,
    C: Monad<R::Inner> + Rebind<With<R::Inner> = R>,
    F: FnMut(C::Inner) -> R,
{
    type Output = R;

    #[inline]
    fn apply(self, carrier: C) -> R {
        Monad::flat_map(carrier, self.function)
    }
}

impl<'a, C, F, R> Stage<&'a C, Borrowed> for FlatMap<F>
where
    R: Carrier,
    C: Monad<R::Inner> + Rebind<With<R::Inner> = R>,
    F: FnMut(C::Ref<'a>) -> R,
{
    type Output = R;

    #[inline]
    fn apply(self, carrier: &'a C) -> R {
        Monad::flat_map_ref(carrier, self.function)
    }
}

// =============================================================================
// FoldLeft
// =============================================================================

impl<C, B, F> Stage<C, Owned> for FoldLeft<B, F>
where
    C: Foldable,
    F: FnMut(B, C::Inner) -> B,
{
    type Output = B;

    #[inline]
    fn apply(self, carrier: C) -> B {
        Foldable::fold_left(carrier, self.init, self.function)
    }
}

impl<'a, C, B, F> Stage<&'a C, Borrowed> for FoldLeft<B, F>
where
    C: Foldable,
    F: FnMut(B, C::Ref<'a>) -> B,
{
    type Output = B;

    #[inline]
    fn apply(self, carrier: &'a C) -> B {
        Foldable::fold_left_ref(carrier, self.init, self.function)
    }
}

// =============================================================================
// Append
// =============================================================================

impl<C: Monoid> Stage<C, Owned> for Append<C> {
    type Output = C;

    #[inline]
    fn apply(self, carrier: C) -> C {
        Monoid::append(carrier, self.other)
    }
}

impl<'r, C: Monoid + Clone> Stage<C, Owned> for Append<&'r C> {
    type Output = C;

    #[inline]
    fn apply(self, carrier: C) -> C {
        Monoid::append_ref(carrier, self.other)
    }
}

impl<C, T> Stage<C, Owned> for Append<Singleton<T>>
where
    C: SingletonMonoid + Carrier<Inner = T>,
{
    type Output = C;

    #[inline]
    fn apply(self, carrier: C) -> C {
        SingletonMonoid::append_one(carrier, self.other)
    }
}

impl<'a, C: Monoid + Clone> Stage<&'a C, Borrowed> for Append<C> {
    type Output = C;

    #[inline]
    fn apply(self, carrier: &'a C) -> C {
        Monoid::ref_append(carrier, self.other)
    }
}

impl<'a, 'r, C: Monoid + Clone> Stage<&'a C, Borrowed> for Append<&'r C> {
    type Output = C;

    #[inline]
    fn apply(self, carrier: &'a C) -> C {
        Monoid::ref_append_ref(carrier, self.other)
    }
}

impl<'a, C, T> Stage<&'a C, Borrowed> for Append<Singleton<T>>
where
    C: SingletonMonoid + Carrier<Inner = T> + Clone,
{
    type Output = C;

    #[inline]
    fn apply(self, carrier: &'a C) -> C {
        SingletonMonoid::ref_append_one(carrier, self.other)
    }
}

// =============================================================================
// As
// =============================================================================

impl<C, D> Stage<C, Owned> for As<D>
where
    C: Converter<D>,
{
    type Output = D;

    #[inline]
    fn apply(self, carrier: C) -> D {
        Converter::convert(carrier)
    }
}

impl<'a, C, D> Stage<&'a C, Borrowed> for As<D>
where
    C: Converter<D> + CloneInner,
{
    type Output = D;

    #[inline]
    fn apply(self, carrier: &'a C) -> D {
        Converter::convert_ref(carrier)
    }
}

// =============================================================================
// Inner stages
// =============================================================================

impl<C, N, F, B> Stage<C, Owned> for InnerMap<F>
where
    C: Functor<N::With<B>> + Carrier<Inner = N>,
    N: Functor<B>,
    F: FnMut(N::Inner) -> B,
{
    type Output = C::With<N::With<B>>;

    fn apply(self, carrier: C) -> Self::Output {
        let mut function = self.function;
        Functor::map(carrier, |inner: N| Functor::map(inner, &mut function))
    }
}

impl<C, N, P> Stage<C, Owned> for InnerFilter<P>
where
    C: Functor<N> + Carrier<Inner = N>,
    N: Filterable,
    P: FnMut(&N::Inner) -> bool,
{
    type Output = C::With<N>;

    fn apply(self, carrier: C) -> Self::Output {
        let mut predicate = self.predicate;
        Functor::map(carrier, |inner: N| Filterable::filter(inner, &mut predicate))
    }
}

impl<C, N, F, R> Stage<C, Owned> for InnerFlatMap<F>
where
    R: Carrier,
    C: Functor<R> + Carrier<Inner = N>,
    N: Monad<R::Inner> + Rebind<With<R::Inner> = R>,
    F: FnMut(N::Inner) -> R,
{
    type Output = C::With<R>;

    fn apply(self, carrier: C) -> Self::Output {
        let mut function = self.function;
        Functor::map(carrier, |inner: N| Monad::flat_map(inner, &mut function))
    }
}

// =============================================================================
// Own
// =============================================================================

impl<C: Monoid> Stage<C, Owned> for Own {
    type Output = C;

    #[inline]
    fn apply(self, carrier: C) -> C {
        carrier
    }
}

impl<'a, C: Monoid + Clone> Stage<&'a C, Borrowed> for Own {
    type Output = C;

    #[inline]
    fn apply(self, carrier: &'a C) -> C {
        carrier.clone()
    }
}
