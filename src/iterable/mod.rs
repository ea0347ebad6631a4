//! Iterator conveniences: positional mapping, filtering and lazy adapters
//!
//! Methods ending in `_to_vec` collect eagerly. Everything else returns one of
//! the lazy adapters in [`adapters`], which only touch the source as they are
//! consumed.

pub mod adapters;

pub use adapters::{
    InsertBetween, MapIndexedWithFirstLast, MapWithFirstLast, PeekEach, ReplaceWhere, WhereIndexed,
    WhereNot,
};

//────────────────────────────────────────────────────────────────────────────
// IterableExt – fluent ops for any Iterator
//────────────────────────────────────────────────────────────────────────────

/// Extension trait for iterators providing positional and first/last aware combinators.
///
/// ```rust
/// use sugars_ext::IterableExt;
///
/// let labels: Vec<String> = ["a", "b", "c"]
///     .into_iter()
///     .map_with_first_last(|s, first, last| match (first, last) {
///         (true, _) => format!("[{s}"),
///         (_, true) => format!("{s}]"),
///         _ => s.to_string(),
///     })
///     .collect();
/// assert_eq!(labels, ["[a", "b", "c]"]);
/// ```
pub trait IterableExt: Iterator + Sized {
    /// Applies `f` to every element, collecting the results.
    fn map_to_vec<U, F>(self, f: F) -> Vec<U>
    where
        F: FnMut(Self::Item) -> U,
    {
        self.map(f).collect()
    }

    /// Applies `f` to every element and its zero-based position, collecting the results.
    fn map_indexed_to_vec<U, F>(self, mut f: F) -> Vec<U>
    where
        F: FnMut(usize, Self::Item) -> U,
    {
        self.enumerate().map(|(index, item)| f(index, item)).collect()
    }

    /// Lazily maps each element with `(item, is_first, is_last)`.
    ///
    /// A single element is both first and last.
    fn map_with_first_last<U, F>(self, f: F) -> MapWithFirstLast<Self, F>
    where
        F: FnMut(Self::Item, bool, bool) -> U,
    {
        MapWithFirstLast::new(self, f)
    }

    /// Lazily maps each element with `(index, item, is_first, is_last)`.
    fn map_indexed_with_first_last<U, F>(self, f: F) -> MapIndexedWithFirstLast<Self, F>
    where
        F: FnMut(usize, Self::Item, bool, bool) -> U,
    {
        MapIndexedWithFirstLast::new(self, f)
    }

    /// Collects the elements satisfying `predicate`.
    fn where_to_vec<P>(self, predicate: P) -> Vec<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        self.filter(predicate).collect()
    }

    /// Lazily keeps elements whose `(index, item)` satisfies `predicate`.
    fn where_indexed<P>(self, predicate: P) -> WhereIndexed<Self, P>
    where
        P: FnMut(usize, &Self::Item) -> bool,
    {
        WhereIndexed::new(self, predicate, true)
    }

    /// Lazily drops elements whose `(index, item)` satisfies `predicate`.
    fn where_not_indexed<P>(self, predicate: P) -> WhereIndexed<Self, P>
    where
        P: FnMut(usize, &Self::Item) -> bool,
    {
        WhereIndexed::new(self, predicate, false)
    }

    /// Collects elements whose `(index, item)` satisfies `predicate`.
    fn where_to_vec_indexed<P>(self, predicate: P) -> Vec<Self::Item>
    where
        P: FnMut(usize, &Self::Item) -> bool,
    {
        self.where_indexed(predicate).collect()
    }

    /// Lazily keeps elements for which `predicate` is false.
    fn where_not<P>(self, predicate: P) -> WhereNot<Self, P>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        WhereNot::new(self, predicate)
    }

    /// Collects elements for which `predicate` is false.
    fn where_not_to_vec<P>(self, predicate: P) -> Vec<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        self.where_not(predicate).collect()
    }

    /// Runs `action` on each element as it is consumed, passing it through unchanged.
    ///
    /// Elements the consumer never pulls are never seen by `action`.
    fn peek_each<F>(self, action: F) -> PeekEach<Self, F>
    where
        F: FnMut(&Self::Item),
    {
        PeekEach::new(self, action)
    }

    /// The last element, or `None` when empty.
    fn last_or_none(self) -> Option<Self::Item> {
        self.last()
    }

    /// Lazily swaps elements passing `test` for `replace_with(element)`.
    fn replace_where<T, R>(self, test: T, replace_with: R) -> ReplaceWhere<Self, T, R>
    where
        T: FnMut(&Self::Item) -> bool,
        R: FnMut(Self::Item) -> Self::Item,
    {
        ReplaceWhere::new(self, test, replace_with)
    }

    /// Lazily yields a clone of `separator` between adjacent elements.
    fn insert_between(self, separator: Self::Item) -> InsertBetween<Self>
    where
        Self::Item: Clone,
    {
        InsertBetween::new(self, separator)
    }
}

impl<I: Iterator> IterableExt for I {}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;

    #[test]
    fn test_map_to_vec() {
        assert_eq!(vec![10, 20, 30, 40].into_iter().map_to_vec(|x| x * 2), vec![20, 40, 60, 80]);
        assert_eq!(
            ["a", "b"].into_iter().map_indexed_to_vec(|i, s| format!("{i}{s}")),
            vec!["0a".to_string(), "1b".to_string()]
        );
    }

    #[test]
    fn test_map_with_first_last_flags() {
        let flags: Vec<(i32, bool, bool)> = [1, 2, 3]
            .into_iter()
            .map_with_first_last(|x, first, last| (x, first, last))
            .collect();
        assert_eq!(flags, vec![(1, true, false), (2, false, false), (3, false, true)]);
    }

    #[test]
    fn test_map_with_first_last_single_and_empty() {
        let single: Vec<(bool, bool)> = std::iter::once('x')
            .map_with_first_last(|_, first, last| (first, last))
            .collect();
        assert_eq!(single, vec![(true, true)]);

        let empty: Vec<(bool, bool)> = std::iter::empty::<char>()
            .map_with_first_last(|_, first, last| (first, last))
            .collect();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_map_with_first_last_on_unbounded_iterator() {
        let firsts: Vec<bool> = (0..)
            .map_with_first_last(|_, first, last| first || last)
            .take(3)
            .collect();
        assert_eq!(firsts, vec![true, false, false]);
    }

    #[test]
    fn test_map_indexed_with_first_last() {
        let out: Vec<String> = ["a", "b"]
            .into_iter()
            .map_indexed_with_first_last(|i, s, first, last| format!("{i}:{s}:{first}:{last}"))
            .collect();
        assert_eq!(out, vec!["0:a:true:false", "1:b:false:true"]);
    }

    #[test]
    fn test_where_variants() {
        let data = [10, 20, 30, 40];
        assert_eq!(data.into_iter().where_to_vec(|x| *x > 20), vec![30, 40]);
        assert_eq!(data.into_iter().where_not_to_vec(|x| *x > 20), vec![10, 20]);
        assert_eq!(data.into_iter().where_to_vec_indexed(|i, _| i % 2 == 1), vec![20, 40]);
        let kept: Vec<i32> = data.into_iter().where_indexed(|i, x| i > 0 && *x < 40).collect();
        assert_eq!(kept, vec![20, 30]);
        let dropped: Vec<i32> = data.into_iter().where_not_indexed(|i, _| i == 0).collect();
        assert_eq!(dropped, vec![20, 30, 40]);
        let lazy: Vec<i32> = data.into_iter().where_not(|x| *x == 30).collect();
        assert_eq!(lazy, vec![10, 20, 40]);
    }

    #[test]
    fn test_peek_each_runs_at_consumption_time() {
        let seen = RefCell::new(Vec::new());
        let mut iter = [1, 2, 3, 4].into_iter().peek_each(|x| seen.borrow_mut().push(*x));
        assert!(seen.borrow().is_empty());

        assert_eq!(iter.next(), Some(1));
        assert_eq!(*seen.borrow(), vec![1]);

        let rest: Vec<i32> = iter.take(2).collect();
        assert_eq!(rest, vec![2, 3]);
        assert_eq!(*seen.borrow(), vec![1, 2, 3]);
    }

    #[test]
    fn test_last_or_none() {
        assert_eq!(Vec::<i32>::new().into_iter().last_or_none(), None);
        assert_eq!(vec![40].into_iter().last_or_none(), Some(40));
        assert_eq!(vec![10, 20, 30].into_iter().last_or_none(), Some(30));
    }

    #[test]
    fn test_replace_where_keeps_order() {
        let out: Vec<i32> = [1, -2, 3, -4].into_iter().replace_where(|x| *x < 0, |x| -x).collect();
        assert_eq!(out, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_insert_between_len_tracks_progress() {
        let mut iter = [1, 2, 3].into_iter().insert_between(0);
        let mut expected = 5;
        while iter.next().is_some() {
            expected -= 1;
            assert_eq!(iter.len(), expected);
        }
        assert_eq!(expected, 0);
    }

    #[test]
    fn test_insert_between_lazy() {
        let out: Vec<i32> = [10, 20, 30].into_iter().insert_between(0).collect();
        assert_eq!(out, vec![10, 0, 20, 0, 30]);
        let single: Vec<i32> = [42].into_iter().insert_between(99).collect();
        assert_eq!(single, vec![42]);
        let empty: Vec<i32> = std::iter::empty().insert_between(99).collect();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_size_hints() {
        assert_eq!([1, 2, 3].into_iter().insert_between(0).size_hint(), (5, Some(5)));
        assert_eq!(std::iter::empty::<i32>().insert_between(0).len(), 0);
        assert_eq!([1, 2, 3].into_iter().peek_each(|_| {}).len(), 3);
        assert_eq!([1, 2, 3].into_iter().where_not(|_| false).size_hint(), (0, Some(3)));
    }
}
