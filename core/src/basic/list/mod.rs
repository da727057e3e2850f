//!
//! An ordered, immutable sequence that keeps duplicates.
//!
//! # Examples
//!
//! ```
//! use colljson_core::ImmutableList;
//!
//! let l = ImmutableList::of(["apple", "banana", "apple"]);
//! assert_eq!(3, l.len());
//! assert_eq!(Some(&"banana"), l.get(1));
//!
//! // Clones share the same storage.
//! let l2 = l.clone();
//! assert_eq!(l, l2);
//! ```
//!


use crate::common::{Container, ContainerKind};
use std::{fmt, ops::Deref, sync::Arc};

/// An immutable `Vec`.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ImmutableList<T> {
    items: Arc<[T]>,
}

impl<T> ImmutableList<T> {
    #[inline(always)]
    pub fn new() -> Self {
        Self {
            items: Arc::from(Vec::new()),
        }
    }

    #[inline(always)]
    pub fn builder() -> ImmutableListBuilder<T> {
        ImmutableListBuilder::default()
    }

    pub fn of(items: impl IntoIterator<Item = T>) -> Self {
        items.into_iter().collect()
    }

    pub fn copy_of(items: &[T]) -> Self
    where
        T: Clone,
    {
        Self {
            items: Arc::from(items),
        }
    }

    #[inline(always)]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Position of the first element equal to `v`.
    pub fn index_of(&self, v: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.items.iter().position(|i| i == v)
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.items.to_vec()
    }

    /// Checks whether both handles point at the same storage.
    #[inline(always)]
    pub fn is_the_same_instance(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.items, &other.items)
    }
}

impl<T> Container for ImmutableList<T> {
    const KIND: ContainerKind = ContainerKind::ImmutableList;
}

impl<T> Deref for ImmutableList<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.items
    }
}

impl<T> Default for ImmutableList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for ImmutableList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}

impl<T> From<Vec<T>> for ImmutableList<T> {
    fn from(v: Vec<T>) -> Self {
        Self { items: Arc::from(v) }
    }
}

impl<T> FromIterator<T> for ImmutableList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<'a, T> IntoIterator for &'a ImmutableList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Accumulates elements for an [`ImmutableList`].
#[derive(Debug)]
pub struct ImmutableListBuilder<T> {
    items: Vec<T>,
}

impl<T> Default for ImmutableListBuilder<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> ImmutableListBuilder<T> {
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

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn build(self) -> ImmutableList<T> {
        ImmutableList::from(self.items)
    }
}

impl<T> Extend<T> for ImmutableListBuilder<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.add_all(iter);
    }
}
