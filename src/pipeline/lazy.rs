//! Lazy entry points: stages applied to a [`View`] stack an iterator layer.
//!
//! A borrowed view is restarted from a clone of its iterator, so the layer
//! built on it is independent of the original. An owned view is folded and
//! converted by consuming its iterator, which need not be cloneable.
//!
//! A view over a cloneable iterator is also Foldable, so `.apply()` and
//! [`pipe!`](crate::pipe) cannot tell the owned and lazy entry points of
//! [`fold_left`](super::fold_left) and [`as_`](super::as_) apart for it.
//! The `|` operator always picks the lazy one; elsewhere name it with
//! `Stage::<_, Lazy>::apply`.

use super::{As, Filter, FlatMap, FoldLeft, Lazy, Map, Own, Stage};
use crate::typeclass::{Insert, Monoid};
use crate::view::{FilterView, FlatMapView, MapView, OwnedView, View};

impl<I, F, B> Stage<View<I>, Lazy> for Map<F>
where
    I: Iterator,
    F: FnMut(I::Item) -> B,
{
    type Output = MapView<I, F>;

    #[inline]
    fn apply(self, view: View<I>) -> Self::Output {
        view.layer(|iterator| iterator.map(self.function))
    }
}

impl<'a, I, F, B> Stage<&'a View<I>, Lazy> for Map<F>
where
    I: Iterator + Clone,
    F: FnMut(I::Item) -> B,
{
    type Output = MapView<I, F>;

    #[inline]
    fn apply(self, view: &'a View<I>) -> Self::Output {
        <Self as Stage<View<I>, Lazy>>::apply(self, view.restart())
    }
}

impl<I, P> Stage<View<I>, Lazy> for Filter<P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    type Output = FilterView<I, P>;

    #[inline]
    fn apply(self, view: View<I>) -> Self::Output {
        view.layer(|iterator| iterator.filter(self.predicate))
    }
}

impl<'a, I, P> Stage<&'a View<I>, Lazy> for Filter<P>
where
    I: Iterator + Clone,
    P: FnMut(&I::Item) -> bool,
{
    type Output = FilterView<I, P>;

    #[inline]
    fn apply(self, view: &'a View<I>) -> Self::Output {
        <Self as Stage<View<I>, Lazy>>::apply(self, view.restart())
    }
}

impl<I, F, R> Stage<View<I>, Lazy> for FlatMap<F>
where
    I: Iterator,
    F: FnMut(I::Item) -> R,
    R: IntoIterator,
{
    type Output = FlatMapView<I, R, F>;

    #[inline]
    fn apply(self, view: View<I>) -> Self::Output {
        view.layer(|iterator| iterator.flat_map(self.function))
    }
}

impl<'a, I, F, R> Stage<&'a View<I>, Lazy> for FlatMap<F>
where
    I: Iterator + Clone,
    F: FnMut(I::Item) -> R,
    R: IntoIterator,
{
    type Output = FlatMapView<I, R, F>;

    #[inline]
    fn apply(self, view: &'a View<I>) -> Self::Output {
        <Self as Stage<View<I>, Lazy>>::apply(self, view.restart())
    }
}

impl<I: Iterator> Stage<View<I>, Lazy> for Own {
    type Output = OwnedView<I::Item>;

    #[inline]
    fn apply(self, view: View<I>) -> Self::Output {
        crate::trace::trace_instance!(View<I>, "own", "materialise");
        view.materialise()
    }
}

impl<'a, I: Iterator + Clone> Stage<&'a View<I>, Lazy> for Own {
    type Output = OwnedView<I::Item>;

    #[inline]
    fn apply(self, view: &'a View<I>) -> Self::Output {
        <Self as Stage<View<I>, Lazy>>::apply(self, view.restart())
    }
}

impl<I, B, F> Stage<View<I>, Lazy> for FoldLeft<B, F>
where
    I: Iterator,
    F: FnMut(B, I::Item) -> B,
{
    type Output = B;

    #[inline]
    fn apply(self, view: View<I>) -> B {
        crate::trace::trace_instance!(View<I>, "foldable", "view");
        view.into_iter().fold(self.init, self.function)
    }
}

impl<I, D> Stage<View<I>, Lazy> for As<D>
where
    I: Iterator,
    D: Monoid + Insert<I::Item>,
{
    type Output = D;

    fn apply(self, view: View<I>) -> D {
        crate::trace::trace_instance!(View<I>, "converter", "drain");
        let mut destination = D::empty_with_capacity(view.exact_len().unwrap_or(0));
        for element in view {
            destination.insert_item(element);
        }
        destination
    }
}
