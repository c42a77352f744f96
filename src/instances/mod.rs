//! Typeclass instances for standard and third-party containers.
//!
//! | carrier | Monoid | Foldable | Functor | Filterable | Monad |
//! |---------|--------|----------|---------|------------|-------|
//! | `Vec<T>` | adapted | adapted | adapted | in place | derived |
//! | `VecDeque<T>` | adapted | adapted | derived (singleton) | in place | derived |
//! | `LinkedList<T>` | adapted | adapted | derived (singleton) | derived (singleton) | derived |
//! | `HashSet<T, S>`, `BTreeSet<T>` | union | adapted | derived (singleton) | in place | derived |
//! | `HashMap<K, V, S>`, `BTreeMap<K, V>` | union | adapted | - | derived (singleton) | - |
//! | `Option<T>` | `T: Monoid` | adapted | adapted | adapted | adapted |
//! | `String` | adapted | adapted | - | in place | - |
//! | `SmallVec<[T; N]>` | adapted | adapted | derived | in place | derived |

mod map;
mod option;
mod sequence;
mod set;
mod string;

#[cfg(feature = "smallvec")]
mod smallvec;

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, LinkedList, VecDeque};

crate::pipeable!(impl[T] Vec<T>);
crate::pipeable!(impl[T] VecDeque<T>);
crate::pipeable!(impl[T] LinkedList<T>);
crate::pipeable!(impl[T, S] HashSet<T, S>);
crate::pipeable!(impl[T] BTreeSet<T>);
crate::pipeable!(impl[K, V, S] HashMap<K, V, S>);
crate::pipeable!(impl[K, V] BTreeMap<K, V>);
crate::pipeable!(impl[T] Option<T>);
crate::pipeable!(impl[] String);

#[cfg(feature = "smallvec")]
crate::pipeable!(impl[T, const N: usize] ::smallvec::SmallVec<[T; N]>);
