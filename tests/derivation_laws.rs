//! Property-based tests for derived instances.
//!
//! Every carrier's `map`, `filter` and `flat_map`, whatever strategy its
//! `Instances` table names, must agree with a hand-written iterator loop:
//!
//! 1. **Map identity**: `map(c, f) == c.into_iter().map(f).collect()`
//! 2. **Filter identity**: `filter(c, p) == c.into_iter().filter(p).collect()`
//! 3. **Flattening**: `flat_map(c, f) == c.into_iter().flat_map(f).collect()`
//! 4. **Monad identities**: `flat_map(unit(x), f) == f(x)`, `flat_map(c, unit) == c`

use paste::paste;
use proptest::prelude::*;
use retrofit::typeclass::{Filterable, Functor, Monad, Pointed, Rebind};
use std::collections::{BTreeSet, HashSet, LinkedList, VecDeque};

fn triple(value: i16) -> i32 {
    i32::from(value) * 3
}

macro_rules! derivation_laws {
    ($($name:ident => $carrier:ty),* $(,)?) => {
        paste! {
            proptest! {
                $(
                    #[test]
                    fn [<prop_ $name _map_matches_hand_loop>](
                        elements in prop::collection::vec(any::<i16>(), 0..40)
                    ) {
                        let carrier: $carrier = elements.iter().copied().collect();
                        let expected: <$carrier as Rebind>::With<i32> =
                            carrier.iter().copied().map(triple).collect();

                        let owned: <$carrier as Rebind>::With<i32> =
                            Functor::map(carrier.clone(), triple);
                        let borrowed: <$carrier as Rebind>::With<i32> =
                            Functor::map_ref(&carrier, |value: &i16| triple(*value));

                        prop_assert_eq!(&owned, &expected);
                        prop_assert_eq!(borrowed, expected);
                    }

                    #[test]
                    fn [<prop_ $name _filter_matches_hand_loop>](
                        elements in prop::collection::vec(any::<i16>(), 0..40)
                    ) {
                        let carrier: $carrier = elements.iter().copied().collect();
                        let expected: $carrier =
                            carrier.iter().copied().filter(|value| value % 3 == 0).collect();

                        let borrowed = Filterable::filter_ref(&carrier, |value: &i16| value % 3 == 0);
                        let owned = Filterable::filter(carrier, |value: &i16| value % 3 == 0);

                        prop_assert_eq!(&owned, &expected);
                        prop_assert_eq!(borrowed, expected);
                    }

                    #[test]
                    fn [<prop_ $name _flat_map_flattens>](
                        elements in prop::collection::vec(any::<i16>(), 0..20)
                    ) {
                        let carrier: $carrier = elements.iter().copied().collect();
                        let expand = |value: i16| -> <$carrier as Rebind>::With<i32> {
                            [triple(value), triple(value) + 1].into_iter().collect()
                        };
                        let expected: <$carrier as Rebind>::With<i32> =
                            carrier.iter().copied().flat_map(expand).collect();

                        prop_assert_eq!(<$carrier as Monad<i32>>::flat_map(carrier, expand), expected);
                    }

                    #[test]
                    fn [<prop_ $name _flat_map_left_identity>](value in any::<i16>()) {
                        let expand = |value: i16| -> <$carrier as Rebind>::With<i32> {
                            [triple(value), 0].into_iter().collect()
                        };
                        let unit: $carrier = Pointed::unit(value);

                        prop_assert_eq!(<$carrier as Monad<i32>>::flat_map(unit, expand), expand(value));
                    }

                    #[test]
                    fn [<prop_ $name _flat_map_right_identity>](
                        elements in prop::collection::vec(any::<i16>(), 0..40)
                    ) {
                        let carrier: $carrier = elements.iter().copied().collect();
                        let rebuilt = <$carrier as Monad<i16>>::flat_map(carrier.clone(), |value: i16| {
                            <$carrier as Pointed>::unit(value)
                        });

                        prop_assert_eq!(rebuilt, carrier);
                    }
                )*
            }
        }
    };
}

derivation_laws! {
    vec => Vec<i16>,
    vec_deque => VecDeque<i16>,
    linked_list => LinkedList<i16>,
    hash_set => HashSet<i16>,
    btree_set => BTreeSet<i16>,
}

proptest! {
    #[test]
    fn prop_option_flat_map_matches_and_then(value in any::<Option<i16>>()) {
        let halve = |value: i16| (value % 2 == 0).then_some(i32::from(value / 2));
        prop_assert_eq!(<Option<i16> as Monad<i32>>::flat_map(value, halve), value.and_then(halve));
    }

    #[test]
    fn prop_option_filter_matches_std(value in any::<Option<i16>>()) {
        prop_assert_eq!(
            Filterable::filter(value, |inner: &i16| *inner > 0),
            value.filter(|inner| *inner > 0)
        );
    }
}
