//!
//! An immutable multiset kept in ascending order.
//!

#[cfg(test)]
mod test;

use crate::{
    common::Count,
    multiset::{tree::TreeMultiset, Multiset, SliceCounts},
};
use ruc::*;
use std::{borrow::Borrow, sync::Arc};

/// Frozen sorted multiset, clones share the same storage.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ImmutableSortedMultiset<T> {
    entries: Arc<[(T, Count)]>,
    total: usize,
}

impl<T> ImmutableSortedMultiset<T> {
    #[inline(always)]
    pub fn builder() -> ImmutableSortedMultisetBuilder<T> {
        ImmutableSortedMultisetBuilder::default()
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

    pub fn first(&self) -> Option<(&T, Count)> {
        self.entries.first().map(|(v, n)| (v, *n))
    }

    pub fn last(&self) -> Option<(&T, Count)> {
        self.entries.last().map(|(v, n)| (v, *n))
    }
}

impl<T: Ord> ImmutableSortedMultiset<T> {
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn of<I: IntoIterator<Item = T>>(items: I) -> Self {
        items.into_iter().collect()
    }

    pub fn count<Q>(&self, v: &Q) -> Count
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.entries
            .binary_search_by(|(i, _)| Borrow::<Q>::borrow(i).cmp(v))
            .map(|pos| self.entries[pos].1)
            .unwrap_or(0)
    }

    pub fn contains<Q>(&self, v: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        0 < self.count(v)
    }
}

impl<T: Ord> Multiset<T> for ImmutableSortedMultiset<T> {
    type Entries<'a>
        = SliceCounts<'a, T>
    where
        Self: 'a,
        T: 'a;

    fn count(&self, v: &T) -> Count {
        ImmutableSortedMultiset::count(self, v)
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

impl_multiset_common!(ImmutableSortedMultiset, ImmutableSortedMultiset, [Ord]);

impl<T: Ord> Default for ImmutableSortedMultiset<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> FromIterator<T> for ImmutableSortedMultiset<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut b = Self::builder();
        b.add_all(iter);
        b.build()
    }
}

impl<T: Ord> From<TreeMultiset<T>> for ImmutableSortedMultiset<T> {
    fn from(m: TreeMultiset<T>) -> Self {
        let (counts, total) = m.into_parts();
        Self {
            entries: counts.into_iter().collect(),
            total,
        }
    }
}

/// Collects occurrences for an [`ImmutableSortedMultiset`].
#[derive(Clone)]
pub struct ImmutableSortedMultisetBuilder<T> {
    inner: TreeMultiset<T>,
}

impl<T> Default for ImmutableSortedMultisetBuilder<T> {
    fn default() -> Self {
        Self {
            inner: TreeMultiset::new(),
        }
    }
}

impl<T: Ord> ImmutableSortedMultisetBuilder<T> {
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

    pub fn build(self) -> ImmutableSortedMultiset<T> {
        ImmutableSortedMultiset::from(self.inner)
    }
}

impl<T: Ord> Extend<T> for ImmutableSortedMultisetBuilder<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.add_all(iter);
    }
}
