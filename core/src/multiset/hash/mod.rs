//!
//! A mutable multiset backed by a `HashMap` of counts.
//!
//! # Examples
//!
//! ```
//! use colljson_core::HashMultiset;
//!
//! let mut m = HashMultiset::new();
//! m.add("red");
//! m.add("blue");
//! m.add("red");
//!
//! assert_eq!(2, m.count("red"));
//! assert_eq!(3, m.len());
//! assert_eq!(2, m.distinct_len());
//! ```
//!


use crate::{
    common::Count,
    multiset::{MapCounts, Multiset},
};
use ruc::*;
use std::{
    borrow::Borrow,
    collections::{hash_map, HashMap},
    hash::Hash,
};

/// Unordered multiset, groups come out in hash order.
#[derive(Clone)]
pub struct HashMultiset<T> {
    counts: HashMap<T, Count>,
    total: usize,
}

impl<T> HashMultiset<T> {
    pub fn new() -> Self {
        Self {
            counts: HashMap::new(),
            total: 0,
        }
    }

    pub fn with_capacity(cap: usize) -> Self {
        Self {
            counts: HashMap::with_capacity(cap),
            total: 0,
        }
    }

    /// Total number of occurrences.
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

    pub fn clear(&mut self) {
        self.counts.clear();
        self.total = 0;
    }
}

impl<T: Eq + Hash> HashMultiset<T> {
    pub fn count<Q>(&self, v: &Q) -> Count
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.counts.get(v).copied().unwrap_or(0)
    }

    pub fn contains<Q>(&self, v: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
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
        Q: Hash + Eq + ?Sized,
    {
        self.remove_copies(v, 1)
    }

    /// Removes up to `n` occurrences, returns the count before.
    pub fn remove_copies<Q>(&mut self, v: &Q, n: Count) -> Count
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
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
        Q: Hash + Eq + ?Sized,
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

impl<T: Eq + Hash> Multiset<T> for HashMultiset<T> {
    type Entries<'a>
        = MapCounts<hash_map::Iter<'a, T, Count>>
    where
        Self: 'a,
        T: 'a;

    fn count(&self, v: &T) -> Count {
        HashMultiset::count(self, v)
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

impl_multiset_common!(HashMultiset, HashMultiset, [Eq, Hash]);

impl<T> Default for HashMultiset<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq + Hash> PartialEq for HashMultiset<T> {
    fn eq(&self, other: &Self) -> bool {
        self.total == other.total && self.counts == other.counts
    }
}

impl<T: Eq + Hash> Eq for HashMultiset<T> {}

impl<T: Eq + Hash> FromIterator<T> for HashMultiset<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut m = Self::new();
        m.extend(iter);
        m
    }
}

impl<T: Eq + Hash> Extend<T> for HashMultiset<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|v| {
            self.add(v);
        });
    }
}
