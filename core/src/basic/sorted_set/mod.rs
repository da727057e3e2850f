//!
//! An immutable set kept in ascending (`Ord`) order.
//!


use crate::common::{Container, ContainerKind};
use std::{
    borrow::Borrow,
    fmt,
    ops::{Bound, RangeBounds},
    sync::Arc,
};

/// A sorted, de-duplicated, immutable slice.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ImmutableSortedSet<T> {
    items: Arc<[T]>,
}

impl<T> ImmutableSortedSet<T> {
    #[inline(always)]
    pub fn builder() -> ImmutableSortedSetBuilder<T> {
        ImmutableSortedSetBuilder::default()
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Ascending iteration.
    #[inline(always)]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    #[inline(always)]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    #[inline(always)]
    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }

    #[inline(always)]
    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }
}

impl<T: Ord> ImmutableSortedSet<T> {
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn of(items: impl IntoIterator<Item = T>) -> Self {
        items.into_iter().collect()
    }

    pub fn contains<Q>(&self, v: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.items
            .binary_search_by(|i| Borrow::<Q>::borrow(i).cmp(v))
            .is_ok()
    }

    /// The elements inside `range`, still ascending.
    pub fn range<Q, R>(&self, range: R) -> &[T]
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
        R: RangeBounds<Q>,
    {
        fn key<T: Borrow<Q>, Q: ?Sized>(i: &T) -> &Q {
            i.borrow()
        }
        let lo = match range.start_bound() {
            Bound::Included(lo) => self.items.partition_point(|i| key::<T, Q>(i) < lo),
            Bound::Excluded(lo) => self.items.partition_point(|i| key::<T, Q>(i) <= lo),
            Bound::Unbounded => 0,
        };
        let hi = match range.end_bound() {
            Bound::Included(hi) => self.items.partition_point(|i| key::<T, Q>(i) <= hi),
            Bound::Excluded(hi) => self.items.partition_point(|i| key::<T, Q>(i) < hi),
            Bound::Unbounded => self.items.len(),
        };
        if lo >= hi {
            return &[];
        }
        &self.items[lo..hi]
    }
}

impl<T> Container for ImmutableSortedSet<T> {
    const KIND: ContainerKind = ContainerKind::ImmutableSortedSet;
}

impl<T: Ord> Default for ImmutableSortedSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for ImmutableSortedSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.items.iter()).finish()
    }
}

impl<T: Ord> FromIterator<T> for ImmutableSortedSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut b = Self::builder();
        b.add_all(iter);
        b.build()
    }
}

impl<'a, T> IntoIterator for &'a ImmutableSortedSet<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Accumulates elements for an [`ImmutableSortedSet`], order is settled in `build`.
#[derive(Debug)]
pub struct ImmutableSortedSetBuilder<T> {
    items: Vec<T>,
}

impl<T> Default for ImmutableSortedSetBuilder<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Ord> ImmutableSortedSetBuilder<T> {
    pub fn with_capacity(cap: usize) -> Self {
        Self {
            items: Vec::with_capacity(cap),
        }
    }

    #[inline(always)]
    pub fn add(&mut self, v: T) -> &mut Self {
        self.items.push(v);
        self
    }

    pub fn add_all(&mut self, iter: impl IntoIterator<Item = T>) -> &mut Self {
        self.items.extend(iter);
        self
    }

    pub fn build(mut self) -> ImmutableSortedSet<T> {
        // stable sort, so `dedup` keeps the first added of equal elements
        self.items.sort();
        self.items.dedup();
        ImmutableSortedSet {
            items: Arc::from(self.items),
        }
    }
}

impl<T: Ord> Extend<T> for ImmutableSortedSetBuilder<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.add_all(iter);
    }
}
