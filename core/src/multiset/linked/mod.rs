//!
//! A mutable multiset that iterates groups in first-occurrence order.
//!
//! Once the count of an element drops to zero its position is forgotten,
//! adding it again appends a new group at the end.
//!


use crate::{
    common::{index::HashIndex, Count},
    multiset::{Multiset, SliceCounts},
};
use ruc::*;
use std::{borrow::Borrow, hash::Hash};

/// Insertion-ordered multiset.
#[derive(Clone)]
pub struct LinkedHashMultiset<T> {
    entries: Vec<(T, Count)>,
    index: HashIndex,
    total: usize,
}

impl<T> LinkedHashMultiset<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashIndex::default(),
            total: 0,
        }
    }

    pub fn with_capacity(cap: usize) -> Self {
        Self {
            entries: Vec::with_capacity(cap),
            index: HashIndex::with_capacity(cap),
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
        self.entries.len()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.index.clear();
        self.total = 0;
    }

    pub(crate) fn into_parts(self) -> (Vec<(T, Count)>, HashIndex, usize) {
        (self.entries, self.index, self.total)
    }
}

impl<T: Eq + Hash> LinkedHashMultiset<T> {
    fn position<Q>(&self, v: &Q) -> Option<usize>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index
            .find(v, |pos| Borrow::<Q>::borrow(&self.entries[pos].0) == v)
    }

    pub fn count<Q>(&self, v: &Q) -> Count
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.position(v).map(|pos| self.entries[pos].1).unwrap_or(0)
    }

    pub fn contains<Q>(&self, v: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.position(v).is_some()
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
        match self.position(&v) {
            Some(pos) => {
                let prev = self.entries[pos].1;
                self.entries[pos].1 = prev.checked_add(n).c(d!("count overflow"))?;
                self.total = total;
                Ok(prev)
            }
            None => {
                if 0 < n {
                    let h = self.index.hash(&v);
                    self.index.insert(h, self.entries.len());
                    self.entries.push((v, n));
                    self.total = total;
                }
                Ok(0)
            }
        }
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
        let pos = match self.position(v) {
            Some(pos) => pos,
            None => return 0,
        };
        let prev = self.entries[pos].1;
        if prev <= n {
            self.drop_entry(pos);
            self.total -= prev;
        } else {
            self.entries[pos].1 -= n;
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
        match self.position(&v) {
            Some(pos) => {
                let prev = self.entries[pos].1;
                self.total = (self.total - prev).checked_add(n).c(d!("count overflow"))?;
                if 0 == n {
                    self.drop_entry(pos);
                } else {
                    self.entries[pos].1 = n;
                }
                Ok(prev)
            }
            None => self.add_copies(v, n),
        }
    }

    // Positions after `pos` shift down by one, so the index is rebuilt.
    fn drop_entry(&mut self, pos: usize) {
        self.entries.remove(pos);
        self.index.rebuild(self.entries.iter().map(|(v, _)| v));
    }
}

impl<T: Eq + Hash> Multiset<T> for LinkedHashMultiset<T> {
    type Entries<'a>
        = SliceCounts<'a, T>
    where
        Self: 'a,
        T: 'a;

    fn count(&self, v: &T) -> Count {
        LinkedHashMultiset::count(self, v)
    }

    fn len(&self) -> usize {
        self.total
    }

    fn distinct_len(&self) -> usize {
        self.entries.len()
    }

    fn entries<'a>(&'a self) -> Self::Entries<'a>
    where
        T: 'a,
    {
        SliceCounts {
            inner: self.entries.iter(),
        }
    }
}

impl_multiset_common!(LinkedHashMultiset, LinkedHashMultiset, [Eq, Hash]);

impl<T> Default for LinkedHashMultiset<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq + Hash> PartialEq for LinkedHashMultiset<T> {
    fn eq(&self, other: &Self) -> bool {
        self.total == other.total
            && self.distinct_len() == other.distinct_len()
            && self.entries.iter().all(|(v, n)| other.count(v) == *n)
    }
}

impl<T: Eq + Hash> Eq for LinkedHashMultiset<T> {}

impl<T: Eq + Hash> FromIterator<T> for LinkedHashMultiset<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut m = Self::new();
        m.extend(iter);
        m
    }
}

impl<T: Eq + Hash> Extend<T> for LinkedHashMultiset<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|v| {
            self.add(v);
        });
    }
}
