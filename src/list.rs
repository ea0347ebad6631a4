//! `Vec` conveniences: conditional push, positional partition, separators

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::iterable::InsertBetween;

/// Elements split by the parity of their zero-based position.
///
/// Index 0 goes to `even`, index 1 to `odd`, and so on; each half keeps the
/// original relative order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OddEven<T> {
    /// Elements at positions 1, 3, 5, ...
    pub odd: Vec<T>,
    /// Elements at positions 0, 2, 4, ...
    pub even: Vec<T>,
}

impl<T> OddEven<T> {
    /// Splits any sequence by position parity.
    pub fn partition<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let iter = items.into_iter();
        let (lower, _) = iter.size_hint();
        let mut split = OddEven {
            odd: Vec::with_capacity(lower / 2),
            even: Vec::with_capacity(lower - lower / 2),
        };
        for (index, item) in iter.enumerate() {
            if index % 2 == 0 {
                split.even.push(item);
            } else {
                split.odd.push(item);
            }
        }
        split
    }
}

/// Extension trait adding list conveniences to `Vec<T>`.
pub trait ListExt<T> {
    /// Pushes `element` only when `condition` holds.
    fn add_if(&mut self, element: T, condition: bool);

    /// Clones the elements into even- and odd-position groups.
    fn odd_even(&self) -> OddEven<T>
    where
        T: Clone;

    /// Moves the elements into even- and odd-position groups.
    fn into_odd_even(self) -> OddEven<T>;

    /// A new vector with `separator` between every adjacent pair.
    ///
    /// Empty and single-element vectors come back as plain copies.
    fn insert_between(&self, separator: T) -> Vec<T>
    where
        T: Clone;
}

impl<T> ListExt<T> for Vec<T> {
    #[inline]
    fn add_if(&mut self, element: T, condition: bool) {
        if condition {
            self.push(element);
        }
    }

    fn odd_even(&self) -> OddEven<T>
    where
        T: Clone,
    {
        OddEven::partition(self.iter().cloned())
    }

    fn into_odd_even(self) -> OddEven<T> {
        OddEven::partition(self)
    }

    fn insert_between(&self, separator: T) -> Vec<T>
    where
        T: Clone,
    {
        let mut spaced = Vec::with_capacity((self.len() * 2).saturating_sub(1));
        spaced.extend(InsertBetween::new(self.iter().cloned(), separator));
        spaced
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn test_add_if() {
        let mut list = vec![1, 2, 3, 4, 5];
        list.add_if(6, false);
        assert_eq!(list, vec![1, 2, 3, 4, 5]);
        list.add_if(6, true);
        assert_eq!(list, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_odd_even_by_position() {
        let split = vec![1, 2, 3, 4, 5].odd_even();
        assert_eq!(split.even, vec![1, 3, 5]);
        assert_eq!(split.odd, vec![2, 4]);
    }

    #[test]
    fn test_odd_even_uses_position_not_value() {
        let split = vec![2, 4, 6].into_odd_even();
        assert_eq!(split.even, vec![2, 6]);
        assert_eq!(split.odd, vec![4]);
    }

    #[test]
    fn test_odd_even_empty() {
        assert_eq!(Vec::<u8>::new().odd_even(), OddEven::default());
    }

    #[test]
    fn test_insert_between() {
        assert_eq!(vec![10, 20, 30].insert_between(0), vec![10, 0, 20, 0, 30]);
        assert_eq!(vec![42].insert_between(99), vec![42]);
        assert_eq!(Vec::<i32>::new().insert_between(99), Vec::<i32>::new());
        let words = vec!["a".to_string(), "b".to_string()];
        assert_eq!(words.insert_between(",".to_string()).concat(), "a,b");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_odd_even_serde_shape() {
        let json = serde_json::to_string(&vec![1, 2, 3].odd_even()).expect("test serialization");
        assert_eq!(json, r#"{"odd":[2],"even":[1,3]}"#);
    }

    proptest! {
        #[test]
        fn prop_insert_between_length(items in proptest::collection::vec(any::<i16>(), 0..64)) {
            let spaced = items.insert_between(0);
            prop_assert_eq!(spaced.len(), (items.len() * 2).saturating_sub(1));
        }

        #[test]
        fn prop_odd_even_sizes(items in proptest::collection::vec(any::<u8>(), 0..64)) {
            let split = items.odd_even();
            prop_assert_eq!(split.even.len(), (items.len() + 1) / 2);
            prop_assert_eq!(split.odd.len(), items.len() / 2);
        }
    }
}
