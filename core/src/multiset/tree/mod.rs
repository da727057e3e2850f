//!
//! A mutable multiset kept in ascending order.
//!


use crate::{
    common::Count,
    multiset::{MapCounts, Multiset},
};
use ruc::*;
use std::{
    borrow::Borrow,
    collections::{btree_map, BTreeMap},
};

/// Sorted multiset backed by a `BTreeMap` of counts.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct TreeMultiset<T> {
    counts: BTreeMap<T, Count>,
    total: usize,
}

impl<T> TreeMultiset<T> {
    pub fn new() -> Self {
        Self {
            counts: BTreeMap::new(),
            total: 0,
        }
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.total
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        0 == self.total
    }

    #[inline(always)]
    pub fn distinct_len(&self) -> usize {
        self.counts.len()
    }

    /// Smallest element and its count.
    pub fn first(&self) -> Option<(&T, Count)> {
        self.counts.iter().next().map(|(v, n)| (v, *n))
    }

    /// Largest element and its count.
    pub fn last(&self) -> Option<(&T, Count)> {
        self.counts.iter().next_back().map(|(v, n)| (v, *n))
    }

    pub fn clear(&mut self) {
        self.counts.clear();
        self.total = 0;
    }

    pub(crate) fn into_parts(self) -> (BTreeMap<T, Count>, usize) {
        (self.counts, self.total)
    }
}

impl<T: Ord> TreeMultiset<T> {
    pub fn count<Q>(&self, v: &Q) -> Count
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.counts.get(v).copied().unwrap_or(0)
    }

    pub fn contains<Q>(&self, v: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.counts.contains_key(v)
    }

    /// Adds one occurrence, returns the count before.
    ///
    /// Panics if the count overflows, see `add_copies` for the checked form.
    pub fn add(&mut self, v: T) -> Count {
        pnk!(self.add_copies(v, 1))
    }

    /// Adds `n` occurrences, returns the count before.
    pub fn add_copies(&mut self, v: T, n: Count) -> Result<Count> {
        let total = self.total.checked_add(n).c(d!("count overflow"))?;
        if 0 == n {
            return Ok(self.count(&v));
        }
        let slot = self.counts.entry(v).or_insert(0);
        let prev = *slot;
        *slot = prev.checked_add(n).c(d!("count overflow"))?;
        self.total = total;
        Ok(prev)
    }

    /// Removes one occurrence, returns the count before.
    pub fn remove<Q>(&mut self, v: &Q) -> Count
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.remove_copies(v, 1)
    }

    /// Removes up to `n` occurrences, returns the count before.
    pub fn remove_copies<Q>(&mut self, v: &Q, n: Count) -> Count
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let slot = match self.counts.get_mut(v) {
            Some(slot) => slot,
            None => return 0,
        };
        let prev = *slot;
        if prev <= n {
            self.counts.remove(v);
            self.total -= prev;
        } else {
            *slot -= n;
            self.total -= n;
        }
        prev
    }

    /// Drops every occurrence, returns the count before.
    pub fn remove_all<Q>(&mut self, v: &Q) -> Count
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.remove_copies(v, Count::MAX)
    }

    /// Sets the count of `v` to exactly `n`, returns the count before.
    pub fn set_count(&mut self, v: T, n: Count) -> Result<Count> {
        let prev = self.count(&v);
        let total = (self.total - prev).checked_add(n).c(d!("count overflow"))?;
        if 0 == n {
            self.counts.remove(&v);
        } else {
            self.counts.insert(v, n);
        }
        self.total = total;
        Ok(prev)
    }
}

impl<T: Ord> Multiset<T> for TreeMultiset<T> {
    type Entries<'a>
        = MapCounts<btree_map::Iter<'a, T, Count>>
    where
        Self: 'a,
        T: 'a;

    fn count(&self, v: &T) -> Count {
        TreeMultiset::count(self, v)
    }

    fn len(&self) -> usize {
        self.total
    }

    fn distinct_len(&self) -> usize {
        self.counts.len()
    }

    fn entries<'a>(&'a self) -> Self::Entries<'a>
    where
        T: 'a,
    {
        MapCounts {
            inner: self.counts.iter(),
        }
    }
}

impl_multiset_common!(TreeMultiset, TreeMultiset, [Ord]);

impl<T> Default for TreeMultiset<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> FromIterator<T> for TreeMultiset<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut m = Self::new();
        m.extend(iter);
        m
    }
}

impl<T: Ord> Extend<T> for TreeMultiset<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|v| {
            self.add(v);
        });
    }
}
