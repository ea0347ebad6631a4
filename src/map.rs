//! Map conveniences: filtering, first-match lookup and key/value transformation
//!
//! "First" always means first in the map's own iteration order: sorted for
//! `BTreeMap`, unspecified but stable between mutations for hash maps.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use crate::error::{Result, SugarError};

//────────────────────────────────────────────────────────────────────────────
// MapExt – lookup and transformation over (key, value) entries
//────────────────────────────────────────────────────────────────────────────

/// Extension trait for key/value maps.
///
/// Implementors only supply [`entry_iter`](MapExt::entry_iter); every other
/// method is built on it. Operations producing a new map are generic over the
/// output collection, so the caller chooses the target the way `collect` does.
///
/// ```rust
/// use std::collections::BTreeMap;
/// use sugars_ext::MapExt;
///
/// let users = BTreeMap::from([(1, "Alice"), (2, "Bob"), (3, "Charlie")]);
/// let even = users.where_entries(|id, _| id % 2 == 0);
/// assert_eq!(even, BTreeMap::from([(2, "Bob")]));
/// assert_eq!(users.first_key_where(|_, name| name.starts_with('C')), Ok(&3));
/// ```
pub trait MapExt<K, V> {
    /// Iterates over `(key, value)` pairs in the map's iteration order.
    fn entry_iter<'a>(&'a self) -> impl Iterator<Item = (&'a K, &'a V)>
    where
        K: 'a,
        V: 'a;

    /// A new map holding the entries that satisfy `test`.
    fn where_entries<P>(&self, mut test: P) -> Self
    where
        Self: FromIterator<(K, V)>,
        K: Clone,
        V: Clone,
        P: FnMut(&K, &V) -> bool,
    {
        self.entry_iter()
            .filter(|(k, v)| test(k, v))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// A new map holding the entries that do not satisfy `test`.
    fn where_not_entries<P>(&self, mut test: P) -> Self
    where
        Self: FromIterator<(K, V)>,
        K: Clone,
        V: Clone,
        P: FnMut(&K, &V) -> bool,
    {
        self.where_entries(|k, v| !test(k, v))
    }

    /// The first entry satisfying `test`, or `None`.
    fn first_where_or_none<P>(&self, mut test: P) -> Option<(&K, &V)>
    where
        P: FnMut(&K, &V) -> bool,
    {
        self.entry_iter().find(|(k, v)| test(k, v))
    }

    /// The first entry not satisfying `test`, or `None`.
    fn first_where_not_or_none<P>(&self, mut test: P) -> Option<(&K, &V)>
    where
        P: FnMut(&K, &V) -> bool,
    {
        self.first_where_or_none(|k, v| !test(k, v))
    }

    /// The first entry satisfying `test`.
    ///
    /// # Errors
    /// [`SugarError::NoMatchingElement`] when no entry matches.
    fn first_where<P>(&self, test: P) -> Result<(&K, &V)>
    where
        P: FnMut(&K, &V) -> bool,
    {
        self.first_where_or_none(test)
            .ok_or(SugarError::NoMatchingElement)
    }

    /// The first entry not satisfying `test`.
    ///
    /// # Errors
    /// [`SugarError::NoMatchingElement`] when every entry matches.
    fn first_where_not<P>(&self, test: P) -> Result<(&K, &V)>
    where
        P: FnMut(&K, &V) -> bool,
    {
        self.first_where_not_or_none(test)
            .ok_or(SugarError::NoMatchingElement)
    }

    /// Key of [`first_where`](MapExt::first_where).
    fn first_key_where<'a, P>(&'a self, test: P) -> Result<&'a K>
    where
        V: 'a,
        P: FnMut(&K, &V) -> bool,
    {
        self.first_where(test).map(|(k, _)| k)
    }

    /// Key of [`first_where_not`](MapExt::first_where_not).
    fn first_key_where_not<'a, P>(&'a self, test: P) -> Result<&'a K>
    where
        V: 'a,
        P: FnMut(&K, &V) -> bool,
    {
        self.first_where_not(test).map(|(k, _)| k)
    }

    /// Key of [`first_where_or_none`](MapExt::first_where_or_none).
    fn first_key_where_or_none<'a, P>(&'a self, test: P) -> Option<&'a K>
    where
        V: 'a,
        P: FnMut(&K, &V) -> bool,
    {
        self.first_where_or_none(test).map(|(k, _)| k)
    }

    /// Key of [`first_where_not_or_none`](MapExt::first_where_not_or_none).
    fn first_key_where_not_or_none<'a, P>(&'a self, test: P) -> Option<&'a K>
    where
        V: 'a,
        P: FnMut(&K, &V) -> bool,
    {
        self.first_where_not_or_none(test).map(|(k, _)| k)
    }

    /// Value of [`first_where`](MapExt::first_where).
    fn first_value_where<'a, P>(&'a self, test: P) -> Result<&'a V>
    where
        K: 'a,
        P: FnMut(&K, &V) -> bool,
    {
        self.first_where(test).map(|(_, v)| v)
    }

    /// Value of [`first_where_not`](MapExt::first_where_not).
    fn first_value_where_not<'a, P>(&'a self, test: P) -> Result<&'a V>
    where
        K: 'a,
        P: FnMut(&K, &V) -> bool,
    {
        self.first_where_not(test).map(|(_, v)| v)
    }

    /// Value of [`first_where_or_none`](MapExt::first_where_or_none).
    fn first_value_where_or_none<'a, P>(&'a self, test: P) -> Option<&'a V>
    where
        K: 'a,
        P: FnMut(&K, &V) -> bool,
    {
        self.first_where_or_none(test).map(|(_, v)| v)
    }

    /// Value of [`first_where_not_or_none`](MapExt::first_where_not_or_none).
    fn first_value_where_not_or_none<'a, P>(&'a self, test: P) -> Option<&'a V>
    where
        K: 'a,
        P: FnMut(&K, &V) -> bool,
    {
        self.first_where_not_or_none(test).map(|(_, v)| v)
    }

    /// A new map with the same keys and each value replaced by `f(value)`.
    fn map_values<W, M, F>(&self, mut f: F) -> M
    where
        K: Clone,
        F: FnMut(&V) -> W,
        M: FromIterator<(K, W)>,
    {
        self.entry_iter().map(|(k, v)| (k.clone(), f(v))).collect()
    }

    /// A new map with the same values and each key replaced by `f(key)`.
    ///
    /// When `f` sends two keys to the same result, the entry visited later
    /// overwrites the earlier one.
    fn map_keys<J, M, F>(&self, mut f: F) -> M
    where
        V: Clone,
        F: FnMut(&K) -> J,
        M: FromIterator<(J, V)>,
    {
        self.entry_iter().map(|(k, v)| (f(k), v.clone())).collect()
    }

    /// Applies `f` to every entry, collecting the results in iteration order.
    fn map_to_vec<U, F>(&self, mut f: F) -> Vec<U>
    where
        F: FnMut(&K, &V) -> U,
    {
        self.entry_iter().map(|(k, v)| f(k, v)).collect()
    }
}

impl<K, V, S: BuildHasher> MapExt<K, V> for HashMap<K, V, S> {
    #[inline]
    fn entry_iter<'a>(&'a self) -> impl Iterator<Item = (&'a K, &'a V)>
    where
        K: 'a,
        V: 'a,
    {
        self.iter()
    }
}

impl<K, V> MapExt<K, V> for BTreeMap<K, V> {
    #[inline]
    fn entry_iter<'a>(&'a self) -> impl Iterator<Item = (&'a K, &'a V)>
    where
        K: 'a,
        V: 'a,
    {
        self.iter()
    }
}

#[cfg(feature = "hashbrown")]
impl<K, V, S: BuildHasher> MapExt<K, V> for ::hashbrown::HashMap<K, V, S> {
    #[inline]
    fn entry_iter<'a>(&'a self) -> impl Iterator<Item = (&'a K, &'a V)>
    where
        K: 'a,
        V: 'a,
    {
        self.iter()
    }
}
