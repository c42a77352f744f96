//! Converter type class: moving elements between carrier shapes.
//!
//! Any Foldable source converts into any Monoid destination that accepts
//! the source's inner type through [`Insert`]. The destination is created
//! with room for the source's known size, then populated element by
//! element. An owned source is drained: elements move out of it, including
//! out of node-based sets and maps, and are never cloned. A borrowed source
//! is cloned element by element.
//!
//! Two-key sources yield `(K, V)` and therefore feed two-key destinations
//! with the association intact. One-key sources feed two-key destinations
//! only when their elements are pairs.
//!
//! # Examples
//!
//! ```rust
//! use retrofit::typeclass::Converter;
//! use std::collections::{BTreeMap, BTreeSet};
//!
//! let set: BTreeSet<i32> = Converter::convert(vec![3, 1, 3, 2]);
//! assert_eq!(set, BTreeSet::from([1, 2, 3]));
//!
//! let pairs = vec![("b", 2), ("a", 1)];
//! let map: BTreeMap<&str, i32> = Converter::convert_ref(&pairs);
//! assert_eq!(map, BTreeMap::from([("a", 1), ("b", 2)]));
//! ```
//!
//! Shapes with different inner types are rejected:
//!
//! ```compile_fail
//! use retrofit::typeclass::Converter;
//! use std::collections::HashMap;
//!
//! let map: HashMap<i32, i32> = Converter::convert(vec![1, 2, 3]);
//! ```

use super::capability::Insert;
use super::carrier::CloneInner;
use super::foldable::Foldable;
use super::monoid::Monoid;

/// Conversion from `Self` into the carrier `D`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be converted into `{D}`",
    label = "source and destination must hold the same inner type",
    note = "the source must be Foldable and the destination a Monoid accepting the source's elements"
)]
pub trait Converter<D> {
    /// Drains `self` into a new `D`.
    fn convert(self) -> D;

    /// Clones the elements of `self` into a new `D`.
    fn convert_ref(&self) -> D
    where
        Self: CloneInner;
}

impl<S, D> Converter<D> for S
where
    S: Foldable,
    D: Monoid + Insert<S::Inner>,
{
    fn convert(self) -> D {
        crate::trace::trace_instance!(S, "converter", "drain");
        let destination = D::empty_with_capacity(self.size_hint().unwrap_or(0));
        self.fold_left(destination, |mut destination, element| {
            destination.insert_item(element);
            destination
        })
    }

    fn convert_ref(&self) -> D
    where
        Self: CloneInner,
    {
        crate::trace::trace_instance!(S, "converter", "clone");
        let destination = D::empty_with_capacity(self.size_hint().unwrap_or(0));
        self.fold_left_ref(destination, |mut destination, element| {
            destination.insert_item(S::clone_inner(element));
            destination
        })
    }
}

#[cfg(test)]
mod tests {
    use super::Converter;
    use rstest::rstest;
    use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, LinkedList, VecDeque};

    #[rstest]
    #[case(vec![])]
    #[case(vec![2, 1])]
    #[case(vec![5, 5, 4])]
    fn vec_to_set_and_back_keeps_element_set(#[case] input: Vec<i32>) {
        let set: HashSet<i32> = Converter::convert_ref(&input);
        let back: Vec<i32> = Converter::convert(set);
        let expected: BTreeSet<i32> = input.into_iter().collect();
        assert_eq!(back.into_iter().collect::<BTreeSet<_>>(), expected);
    }

    #[test]
    fn map_to_pairs_preserves_association() {
        let map = BTreeMap::from([(1, "one"), (2, "two")]);
        let pairs: Vec<(i32, &str)> = Converter::convert(map.clone());
        assert_eq!(pairs, vec![(1, "one"), (2, "two")]);

        let hashed: HashMap<i32, &str> = Converter::convert_ref(&map);
        assert_eq!(hashed.get(&2), Some(&"two"));
    }

    #[test]
    fn pairs_to_map_keep_first_value_per_key() {
        let pairs = vec![("k", 1), ("k", 2), ("j", 3)];
        let map: BTreeMap<&str, i32> = Converter::convert(pairs);
        assert_eq!(map, BTreeMap::from([("j", 3), ("k", 1)]));
    }

    #[test]
    fn sequences_convert_in_order() {
        let deque = VecDeque::from(['a', 'b', 'c']);
        let list: LinkedList<char> = Converter::convert_ref(&deque);
        let text: String = Converter::convert(list);
        assert_eq!(text, "abc");
        assert_eq!(deque.len(), 3);
    }

    #[test]
    fn destination_reserves_source_size() {
        let source: BTreeSet<u32> = (0..100).collect();
        let vector: Vec<u32> = Converter::convert(source);
        assert!(vector.capacity() >= 100);
        assert_eq!(vector.len(), 100);
    }
}
