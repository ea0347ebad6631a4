//! Lazy iterator adapters returned by [`IterableExt`](super::IterableExt)
//!
//! Each adapter pulls from the wrapped iterator only when it is itself asked
//! for an element, so closures run once per consumed element, in order, and
//! never for elements the consumer did not reach.

use std::iter::{FusedIterator, Peekable};

/// Adds an exact lower bound of `extra` to a `size_hint`.
#[inline]
fn shifted_hint((lower, upper): (usize, Option<usize>), extra: usize) -> (usize, Option<usize>) {
    (
        lower.saturating_add(extra),
        upper.and_then(|upper| upper.checked_add(extra)),
    )
}

//────────────────────────────────────────────────────────────────────────────
// MapWithFirstLast
//────────────────────────────────────────────────────────────────────────────

/// Maps each element together with "is first" and "is last" flags.
///
/// The last flag is decided by looking one element ahead, so the adapter works
/// on unbounded iterators too.
#[must_use = "iterator adapters are lazy and do nothing unless consumed"]
pub struct MapWithFirstLast<I: Iterator, F> {
    iter: Peekable<I>,
    first: bool,
    f: F,
}

impl<I: Iterator, F> MapWithFirstLast<I, F> {
    pub(super) fn new(iter: I, f: F) -> Self {
        Self {
            iter: iter.peekable(),
            first: true,
            f,
        }
    }
}

impl<I, F, U> Iterator for MapWithFirstLast<I, F>
where
    I: Iterator,
    F: FnMut(I::Item, bool, bool) -> U,
{
    type Item = U;

    fn next(&mut self) -> Option<U> {
        let item = self.iter.next()?;
        let first = std::mem::replace(&mut self.first, false);
        let last = self.iter.peek().is_none();
        Some((self.f)(item, first, last))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<I, F, U> FusedIterator for MapWithFirstLast<I, F>
where
    I: FusedIterator,
    F: FnMut(I::Item, bool, bool) -> U,
{
}

//────────────────────────────────────────────────────────────────────────────
// MapIndexedWithFirstLast
//────────────────────────────────────────────────────────────────────────────

/// Maps each element together with its position and first/last flags.
#[must_use = "iterator adapters are lazy and do nothing unless consumed"]
pub struct MapIndexedWithFirstLast<I: Iterator, F> {
    iter: Peekable<I>,
    index: usize,
    f: F,
}

impl<I: Iterator, F> MapIndexedWithFirstLast<I, F> {
    pub(super) fn new(iter: I, f: F) -> Self {
        Self {
            iter: iter.peekable(),
            index: 0,
            f,
        }
    }
}

impl<I, F, U> Iterator for MapIndexedWithFirstLast<I, F>
where
    I: Iterator,
    F: FnMut(usize, I::Item, bool, bool) -> U,
{
    type Item = U;

    fn next(&mut self) -> Option<U> {
        let item = self.iter.next()?;
        let index = self.index;
        self.index += 1;
        let last = self.iter.peek().is_none();
        Some((self.f)(index, item, index == 0, last))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<I, F, U> FusedIterator for MapIndexedWithFirstLast<I, F>
where
    I: FusedIterator,
    F: FnMut(usize, I::Item, bool, bool) -> U,
{
}

//────────────────────────────────────────────────────────────────────────────
// WhereIndexed / WhereNot
//────────────────────────────────────────────────────────────────────────────

/// Keeps elements whose position and value satisfy a predicate.
#[derive(Debug, Clone)]
#[must_use = "iterator adapters are lazy and do nothing unless consumed"]
pub struct WhereIndexed<I, P> {
    iter: I,
    index: usize,
    predicate: P,
    keep: bool,
}

impl<I, P> WhereIndexed<I, P> {
    pub(super) fn new(iter: I, predicate: P, keep: bool) -> Self {
        Self {
            iter,
            index: 0,
            predicate,
            keep,
        }
    }
}

impl<I, P> Iterator for WhereIndexed<I, P>
where
    I: Iterator,
    P: FnMut(usize, &I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        for item in self.iter.by_ref() {
            let index = self.index;
            self.index += 1;
            if (self.predicate)(index, &item) == self.keep {
                return Some(item);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.iter.size_hint().1)
    }
}

impl<I, P> FusedIterator for WhereIndexed<I, P>
where
    I: FusedIterator,
    P: FnMut(usize, &I::Item) -> bool,
{
}

/// Keeps elements for which a predicate is false.
#[derive(Debug, Clone)]
#[must_use = "iterator adapters are lazy and do nothing unless consumed"]
pub struct WhereNot<I, P> {
    iter: I,
    predicate: P,
}

impl<I, P> WhereNot<I, P> {
    pub(super) fn new(iter: I, predicate: P) -> Self {
        Self { iter, predicate }
    }
}

impl<I, P> Iterator for WhereNot<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        let predicate = &mut self.predicate;
        self.iter.find(|item| !predicate(item))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.iter.size_hint().1)
    }
}

impl<I, P> FusedIterator for WhereNot<I, P>
where
    I: FusedIterator,
    P: FnMut(&I::Item) -> bool,
{
}

//────────────────────────────────────────────────────────────────────────────
// PeekEach
//────────────────────────────────────────────────────────────────────────────

/// Passes elements through unchanged, handing each to a side-effect closure
/// at the moment it is consumed.
#[derive(Debug, Clone)]
#[must_use = "iterator adapters are lazy and do nothing unless consumed"]
pub struct PeekEach<I, F> {
    iter: I,
    action: F,
}

impl<I, F> PeekEach<I, F> {
    pub(super) fn new(iter: I, action: F) -> Self {
        Self { iter, action }
    }
}

impl<I, F> Iterator for PeekEach<I, F>
where
    I: Iterator,
    F: FnMut(&I::Item),
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        let item = self.iter.next()?;
        (self.action)(&item);
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<I, F> ExactSizeIterator for PeekEach<I, F>
where
    I: ExactSizeIterator,
    F: FnMut(&I::Item),
{
}

impl<I, F> FusedIterator for PeekEach<I, F>
where
    I: FusedIterator,
    F: FnMut(&I::Item),
{
}

//────────────────────────────────────────────────────────────────────────────
// ReplaceWhere
//────────────────────────────────────────────────────────────────────────────

/// Substitutes elements matching a test with a replacement derived from them.
#[derive(Debug, Clone)]
#[must_use = "iterator adapters are lazy and do nothing unless consumed"]
pub struct ReplaceWhere<I, T, R> {
    iter: I,
    test: T,
    replace_with: R,
}

impl<I, T, R> ReplaceWhere<I, T, R> {
    pub(super) fn new(iter: I, test: T, replace_with: R) -> Self {
        Self {
            iter,
            test,
            replace_with,
        }
    }
}

impl<I, T, R> Iterator for ReplaceWhere<I, T, R>
where
    I: Iterator,
    T: FnMut(&I::Item) -> bool,
    R: FnMut(I::Item) -> I::Item,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        let item = self.iter.next()?;
        if (self.test)(&item) {
            Some((self.replace_with)(item))
        } else {
            Some(item)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<I, T, R> ExactSizeIterator for ReplaceWhere<I, T, R>
where
    I: ExactSizeIterator,
    T: FnMut(&I::Item) -> bool,
    R: FnMut(I::Item) -> I::Item,
{
}

impl<I, T, R> FusedIterator for ReplaceWhere<I, T, R>
where
    I: FusedIterator,
    T: FnMut(&I::Item) -> bool,
    R: FnMut(I::Item) -> I::Item,
{
}

//────────────────────────────────────────────────────────────────────────────
// InsertBetween
//────────────────────────────────────────────────────────────────────────────

/// Yields a clone of a separator between every pair of adjacent elements.
#[must_use = "iterator adapters are lazy and do nothing unless consumed"]
pub struct InsertBetween<I: Iterator> {
    iter: Peekable<I>,
    separator: I::Item,
    separator_next: bool,
}

impl<I: Iterator> InsertBetween<I> {
    pub(crate) fn new(iter: I, separator: I::Item) -> Self {
        Self {
            iter: iter.peekable(),
            separator,
            separator_next: false,
        }
    }
}

impl<I> Iterator for InsertBetween<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if self.separator_next {
            self.separator_next = false;
            // The element after the separator was already peeked.
            return self.iter.peek().map(|_| self.separator.clone());
        }
        let item = self.iter.next()?;
        self.separator_next = self.iter.peek().is_some();
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.iter.size_hint();
        let pending = usize::from(self.separator_next);
        // n remaining elements need n - 1 separators between them.
        let lower = lower.saturating_mul(2).saturating_sub(1);
        let upper = upper
            .and_then(|upper| upper.checked_mul(2))
            .map(|upper| upper.saturating_sub(1));
        shifted_hint((lower, upper), pending)
    }
}

impl<I> ExactSizeIterator for InsertBetween<I>
where
    I: ExactSizeIterator,
    I::Item: Clone,
{
}

impl<I> FusedIterator for InsertBetween<I>
where
    I: FusedIterator,
    I::Item: Clone,
{
}
