//! Adapter for `SmallVec<[T; N]>`, an inline-first sequence.
//!
//! The adapter supplies only the primitives: combine, fold, push-one and
//! erase-in-place. Functor and Monad are derived from them, so a mapped
//! `SmallVec` stays inline when the result fits.

use smallvec::SmallVec;

use crate::typeclass::{
    Adapted, Carrier, CloneInner, Derived, DerivedInPlace, DerivedSingleton, FoldableInstance,
    Insert, Instances, MonoidInstance, Rebind, Retain, Singleton, SingletonMonoid,
};

impl<T, const N: usize> Carrier for SmallVec<[T; N]> {
    type Inner = T;
    type Ref<'a>
        = &'a T
    where
        Self: 'a;
}

impl<T, const N: usize> Rebind for SmallVec<[T; N]> {
    type With<B> = SmallVec<[B; N]>;
}

impl<T: Clone, const N: usize> CloneInner for SmallVec<[T; N]> {
    #[inline]
    fn clone_inner<'a>(element: &'a T) -> T
    where
        Self: 'a,
    {
        element.clone()
    }
}

impl<T, const N: usize> Instances for SmallVec<[T; N]> {
    type MonoidVia = Adapted;
    type FoldableVia = Adapted;
    type FunctorVia = DerivedSingleton;
    type FilterableVia = DerivedInPlace;
    type MonadVia = Derived;
}

impl<T, const N: usize> MonoidInstance<Adapted> for SmallVec<[T; N]> {
    #[inline]
    fn empty() -> Self {
        Self::new()
    }

    #[inline]
    fn empty_with_capacity(capacity: usize) -> Self {
        Self::with_capacity(capacity)
    }

    fn append(mut self, mut other: Self) -> Self {
        if self.is_empty() && self.capacity() < other.len() {
            return other;
        }
        SmallVec::append(&mut self, &mut other);
        self
    }
}

impl<T, const N: usize> SingletonMonoid for SmallVec<[T; N]> {
    #[inline]
    fn append_one(mut self, Singleton(element): Singleton<T>) -> Self {
        self.push(element);
        self
    }
}

impl<T, const N: usize> FoldableInstance<Adapted> for SmallVec<[T; N]> {
    #[inline]
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        self.into_iter().fold(init, function)
    }

    #[inline]
    fn fold_left_ref<'a, B, F>(&'a self, init: B, function: F) -> B
    where
        F: FnMut(B, &'a T) -> B,
    {
        self.iter().fold(init, function)
    }

    #[inline]
    fn size_hint(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl<T, const N: usize> Retain for SmallVec<[T; N]> {
    #[inline]
    fn retain_where<P>(&mut self, mut keep: P)
    where
        P: FnMut(&T) -> bool,
    {
        self.retain(|element| keep(element));
    }

    // Shrinking moves the elements back inline once they fit.
    fn release_slack(&mut self) {
        if self.spilled() && self.len() < self.capacity() / 4 {
            self.shrink_to_fit();
        }
    }
}

impl<T, const N: usize> Insert<T> for SmallVec<[T; N]> {
    #[inline]
    fn insert_item(&mut self, item: T) {
        self.push(item);
    }
}

#[cfg(test)]
mod tests {
    use crate::typeclass::{Filterable, Functor, Monoid};
    use smallvec::{SmallVec, smallvec};

    #[test]
    fn derived_map_stays_inline() {
        let values: SmallVec<[u8; 4]> = smallvec![1, 2, 3];
        let doubled = Functor::map(values, |value: u8| u16::from(value) * 2);
        assert!(!doubled.spilled());
        assert_eq!(doubled.as_slice(), &[2, 4, 6]);
    }

    #[test]
    fn filter_returns_inline_after_shrinking() {
        let values: SmallVec<[u32; 2]> = (0..64).collect();
        assert!(values.spilled());
        let kept = Filterable::filter(values, |value: &u32| *value < 2);
        assert!(!kept.spilled());
        assert_eq!(kept.as_slice(), &[0, 1]);
    }

    #[test]
    fn derived_map_fills_the_reserved_buffer() {
        let values: SmallVec<[u32; 4]> = (0..100).collect();
        let mapped = Functor::map(values, |value: u32| u64::from(value) + 1);
        assert_eq!(mapped.capacity(), 100);
        assert_eq!(mapped.len(), 100);
    }

    #[test]
    fn append_onto_empty_reserved_buffer_keeps_it() {
        let reserved: SmallVec<[u8; 2]> = Monoid::empty_with_capacity(16);
        let joined = Monoid::append(reserved, smallvec![1, 2, 3]);
        assert_eq!(joined.capacity(), 16);
        assert_eq!(joined.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn append_concatenates() {
        let left: SmallVec<[i32; 2]> = smallvec![1];
        let right: SmallVec<[i32; 2]> = smallvec![2, 3];
        assert_eq!(Monoid::append(left, right).as_slice(), &[1, 2, 3]);
    }
}
