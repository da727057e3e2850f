//!
//! An immutable set that remembers insertion order.
//!
//! Adding an element that is already present is a no-op, the first
//! occurrence keeps its position.
//!
//! # Examples
//!
//! ```
//! use colljson_core::ImmutableSet;
//!
//! let s = ImmutableSet::of([3, 1, 3, 2]);
//! assert_eq!(&[3, 1, 2], s.as_slice());
//! assert!(s.contains(&1));
//! ```
//!


use crate::common::{index::HashIndex, Container, ContainerKind};
use std::{borrow::Borrow, fmt, hash::Hash, sync::Arc};

/// A hash set with stable, insertion-ordered iteration.
#[derive(Clone)]
pub struct ImmutableSet<T> {
    items: Arc<[T]>,
    index: Arc<HashIndex>,
}

impl<T> ImmutableSet<T> {
    #[inline(always)]
    pub fn builder() -> ImmutableSetBuilder<T> {
        ImmutableSetBuilder::default()
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline(always)]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    #[inline(always)]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    #[inline(always)]
    pub fn is_the_same_instance(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.items, &other.items)
    }
}

impl<T: Eq + Hash> ImmutableSet<T> {
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn of(items: impl IntoIterator<Item = T>) -> Self {
        items.into_iter().collect()
    }

    pub fn contains<Q>(&self, v: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index_of(v).is_some()
    }

    /// Iteration position of `v`.
    pub fn index_of<Q>(&self, v: &Q) -> Option<usize>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index
            .find(v, |pos| Borrow::<Q>::borrow(&self.items[pos]) == v)
    }
}

impl<T> Container for ImmutableSet<T> {
    const KIND: ContainerKind = ContainerKind::ImmutableSet;
}

impl<T: Eq + Hash> Default for ImmutableSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

// Set equality, iteration order is not part of it.
impl<T: Eq + Hash> PartialEq for ImmutableSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|v| other.contains(v))
    }
}

impl<T: Eq + Hash> Eq for ImmutableSet<T> {}

impl<T: fmt::Debug> fmt::Debug for ImmutableSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.items.iter()).finish()
    }
}

impl<T: Eq + Hash> FromIterator<T> for ImmutableSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut b = Self::builder();
        b.add_all(iter);
        b.build()
    }
}

impl<'a, T> IntoIterator for &'a ImmutableSet<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Accumulates distinct elements for an [`ImmutableSet`].
#[derive(Debug)]
pub struct ImmutableSetBuilder<T> {
    items: Vec<T>,
    index: HashIndex,
}

impl<T> Default for ImmutableSetBuilder<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            index: HashIndex::default(),
        }
    }
}

impl<T> ImmutableSetBuilder<T> {
    pub fn with_capacity(cap: usize) -> Self {
        Self {
            items: Vec::with_capacity(cap),
            index: HashIndex::with_capacity(cap),
        }
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn build(self) -> ImmutableSet<T> {
        ImmutableSet {
            items: Arc::from(self.items),
            index: Arc::new(self.index),
        }
    }
}

impl<T: Eq + Hash> ImmutableSetBuilder<T> {
    /// Returns `false` if an equal element was already added.
    pub fn add(&mut self, v: T) -> bool {
        let items = &self.items;
        if self.index.find(&v, |pos| items[pos] == v).is_some() {
            return false;
        }
        let h = self.index.hash(&v);
        self.index.insert(h, self.items.len());
        self.items.push(v);
        true
    }

    pub fn add_all(&mut self, iter: impl IntoIterator<Item = T>) -> &mut Self {
        iter.into_iter().for_each(|v| {
            self.add(v);
        });
        self
    }
}

impl<T: Eq + Hash> Extend<T> for ImmutableSetBuilder<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.add_all(iter);
    }
}
