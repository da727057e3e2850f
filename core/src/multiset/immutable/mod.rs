//!
//! An immutable multiset keeping groups in first-occurrence order.
//!
//! # Examples
//!
//! ```
//! use colljson_core::ImmutableMultiset;
//!
//! let m = ImmutableMultiset::of(["b", "a", "b"]);
//! assert_eq!(vec!["b", "b", "a"], m.iter().copied().collect::<Vec<_>>());
//! assert_eq!(2, m.count("b"));
//! ```
//!


use crate::{
    common::{index::HashIndex, Count},
    multiset::{linked::LinkedHashMultiset, Multiset, SliceCounts},
};
use ruc::*;
use std::{borrow::Borrow, hash::Hash, sync::Arc};

/// Frozen multiset, clones share the same storage.
#[derive(Clone)]
pub struct ImmutableMultiset<T> {
    entries: Arc<[(T, Count)]>,
    index: Arc<HashIndex>,
    total: usize,
}

impl<T> ImmutableMultiset<T> {
    #[inline(always)]
    pub fn builder() -> ImmutableMultisetBuilder<T> {
        ImmutableMultisetBuilder::default()
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
}

impl<T: Eq + Hash> ImmutableMultiset<T> {
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn of<I: IntoIterator<Item = T>>(items: I) -> Self {
        items.into_iter().collect()
    }

    pub fn count<Q>(&self, v: &Q) -> Count
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index
            .find(v, |pos| Borrow::<Q>::borrow(&self.entries[pos].0) == v)
            .map(|pos| self.entries[pos].1)
            .unwrap_or(0)
    }

    pub fn contains<Q>(&self, v: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        0 < self.count(v)
    }
}

impl<T: Eq + Hash> Multiset<T> for ImmutableMultiset<T> {
    type Entries<'a>
        = SliceCounts<'a, T>
    where
        Self: 'a,
        T: 'a;

    fn count(&self, v: &T) -> Count {
        ImmutableMultiset::count(self, v)
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

impl_multiset_common!(ImmutableMultiset, ImmutableMultiset, [Eq, Hash]);

impl<T: Eq + Hash> Default for ImmutableMultiset<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq + Hash> PartialEq for ImmutableMultiset<T> {
    fn eq(&self, other: &Self) -> bool {
        self.total == other.total
            && self.distinct_len() == other.distinct_len()
            && self.entries.iter().all(|(v, n)| other.count(v) == *n)
    }
}

impl<T: Eq + Hash> Eq for ImmutableMultiset<T> {}

impl<T: Eq + Hash> FromIterator<T> for ImmutableMultiset<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut b = Self::builder();
        b.add_all(iter);
        b.build()
    }
}

impl<T: Eq + Hash> From<LinkedHashMultiset<T>> for ImmutableMultiset<T> {
    fn from(m: LinkedHashMultiset<T>) -> Self {
        let (entries, index, total) = m.into_parts();
        Self {
            entries: entries.into(),
            index: Arc::new(index),
            total,
        }
    }
}

/// Collects occurrences for an [`ImmutableMultiset`].
#[derive(Clone)]
pub struct ImmutableMultisetBuilder<T> {
    inner: LinkedHashMultiset<T>,
}

impl<T> Default for ImmutableMultisetBuilder<T> {
    fn default() -> Self {
        Self {
            inner: LinkedHashMultiset::new(),
        }
    }
}

impl<T: Eq + Hash> ImmutableMultisetBuilder<T> {
    pub fn add(&mut self, v: T) -> &mut Self {
        self.inner.add(v);
        self
    }

    pub fn add_all<I: IntoIterator<Item = T>>(&mut self, items: I) -> &mut Self {
        self.inner.extend(items);
        self
    }

    pub fn add_copies(&mut self, v: T, n: Count) -> Result<&mut Self> {
        self.inner.add_copies(v, n).c(d!())?;
        Ok(self)
    }

    pub fn set_count(&mut self, v: T, n: Count) -> Result<&mut Self> {
        self.inner.set_count(v, n).c(d!())?;
        Ok(self)
    }

    pub fn build(self) -> ImmutableMultiset<T> {
        ImmutableMultiset::from(self.inner)
    }
}

impl<T: Eq + Hash> Extend<T> for ImmutableMultisetBuilder<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.add_all(iter);
    }
}
