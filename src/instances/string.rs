//! Adapter for `String`, a carrier of `char`.
//!
//! A string folds over its characters and filters in place. It has no
//! Functor: mapping a `char` to anything else would not produce a string.

use crate::typeclass::{
    Adapted, DerivedInPlace, FoldableInstance, Instances, MonoidInstance, Singleton,
    SingletonMonoid, Unsupported,
};

impl Instances for String {
    type MonoidVia = Adapted;
    type FoldableVia = Adapted;
    type FunctorVia = Unsupported;
    type FilterableVia = DerivedInPlace;
    type MonadVia = Unsupported;
}

impl MonoidInstance<Adapted> for String {
    #[inline]
    fn empty() -> Self {
        Self::new()
    }

    // Capacity is counted in characters; one byte each is a lower bound.
    #[inline]
    fn empty_with_capacity(capacity: usize) -> Self {
        Self::with_capacity(capacity)
    }

    fn append(mut self, other: Self) -> Self {
        if self.is_empty() && self.capacity() < other.len() {
            return other;
        }
        self.push_str(&other);
        self
    }

    fn append_ref(mut self, other: &Self) -> Self {
        self.push_str(other);
        self
    }

    fn ref_append_ref(&self, other: &Self) -> Self {
        let mut joined = Self::with_capacity(self.len() + other.len());
        joined.push_str(self);
        joined.push_str(other);
        joined
    }
}

impl SingletonMonoid for String {
    #[inline]
    fn append_one(mut self, Singleton(character): Singleton<char>) -> Self {
        self.push(character);
        self
    }
}

impl FoldableInstance<Adapted> for String {
    #[inline]
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, char) -> B,
    {
        self.chars().fold(init, function)
    }

    #[inline]
    fn fold_left_ref<'a, B, F>(&'a self, init: B, function: F) -> B
    where
        F: FnMut(B, Self::Ref<'a>) -> B,
    {
        self.chars().fold(init, function)
    }
}

#[cfg(test)]
mod tests {
    use crate::typeclass::{Foldable, Monoid, Singleton, SingletonMonoid};

    #[test]
    fn fold_left_builds_result_text() {
        let digits = String::from("123");
        let text = Foldable::fold_left_ref(&digits, String::from("result="), |mut text, digit| {
            text.push(digit);
            text
        });
        assert_eq!(text, "result=123");
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        assert_eq!(Foldable::length(&String::from("héllo")), 5);
    }

    #[test]
    fn append_one_pushes_a_character() {
        assert_eq!(String::from("ab").append_one(Singleton('c')), "abc");
    }

    #[test]
    fn borrowed_append_reserves_both_halves() {
        let left = String::from("left");
        let joined = left.ref_append_ref(&String::from("right"));
        assert_eq!(joined, "leftright");
        assert!(joined.capacity() >= 9);
        assert_eq!(Monoid::append(String::new(), left), "left");
    }
}
