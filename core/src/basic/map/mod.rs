//!
//! An immutable, insertion-ordered hash map.
//!
//! Unlike `HashMap::insert`, building a map from entries that repeat a key is
//! an error unless `build_keeping_last` is used explicitly.
//!
//! # Examples
//!
//! ```
//! use colljson_core::ImmutableMap;
//!
//! let mut b = ImmutableMap::builder();
//! b.put("key1", 1).put("key2", 2);
//! let m = b.build().unwrap();
//! assert_eq!(Some(&2), m.get("key2"));
//!
//! let mut b = ImmutableMap::builder();
//! b.put("k", 1).put("k", 2);
//! assert!(b.build().is_err());
//! ```
//!

#[cfg(test)]
mod test;

use crate::common::{index::HashIndex, Container, ContainerKind};
use ruc::*;
use std::{borrow::Borrow, fmt, hash::Hash, sync::Arc};

/// A read-only map that iterates in the order keys were first put.
#[derive(Clone)]
pub struct ImmutableMap<K, V> {
    entries: Arc<[(K, V)]>,
    index: Arc<HashIndex>,
}

impl<K, V> ImmutableMap<K, V> {
    #[inline(always)]
    pub fn builder() -> ImmutableMapBuilder<K, V> {
        ImmutableMapBuilder::default()
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline(always)]
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    pub fn keys(&self) -> impl ExactSizeIterator<Item = &K> + DoubleEndedIterator {
        self.entries.iter().map(|(k, _)| k)
    }

    pub fn values(&self) -> impl ExactSizeIterator<Item = &V> + DoubleEndedIterator {
        self.entries.iter().map(|(_, v)| v)
    }

    pub fn contains_value(&self, v: &V) -> bool
    where
        V: PartialEq,
    {
        self.values().any(|i| i == v)
    }

    #[inline(always)]
    pub fn is_the_same_instance(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.entries, &other.entries)
    }
}

impl<K: Eq + Hash, V> ImmutableMap<K, V> {
    pub fn new() -> Self {
        Self {
            entries: Arc::from(Vec::new()),
            index: Arc::new(HashIndex::default()),
        }
    }

    /// Fails on the first repeated key.
    pub fn of(entries: impl IntoIterator<Item = (K, V)>) -> Result<Self>
    where
        K: fmt::Debug,
    {
        let mut b = Self::builder();
        b.put_all(entries);
        b.build().c(d!())
    }

    pub fn get<Q>(&self, k: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.position(k).map(|pos| &self.entries[pos].1)
    }

    pub fn contains_key<Q>(&self, k: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.position(k).is_some()
    }

    fn position<Q>(&self, k: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index
            .find(k, |pos| Borrow::<Q>::borrow(&self.entries[pos].0) == k)
    }
}

impl<K, V> Container for ImmutableMap<K, V> {
    const KIND: ContainerKind = ContainerKind::ImmutableMap;
}

impl<K: Eq + Hash, V> Default for ImmutableMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

// Map equality, iteration order is not part of it.
impl<K: Eq + Hash, V: PartialEq> PartialEq for ImmutableMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|(k, v)| other.get(k) == Some(v))
    }
}

impl<K: Eq + Hash, V: Eq> Eq for ImmutableMap<K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for ImmutableMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: Eq + Hash + fmt::Debug, V> TryFrom<Vec<(K, V)>> for ImmutableMap<K, V> {
    type Error = Box<dyn RucError>;

    fn try_from(entries: Vec<(K, V)>) -> Result<Self> {
        ImmutableMapBuilder { entries }.build()
    }
}

impl<'a, K, V> IntoIterator for &'a ImmutableMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Entry iterator shared by the map types of this module tree.
#[derive(Clone, Debug)]
pub struct Iter<'a, K, V> {
    pub(crate) inner: std::slice::Iter<'a, (K, V)>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k, v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Iter<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(k, v)| (k, v))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

/// Accumulates entries for an [`ImmutableMap`].
#[derive(Debug)]
pub struct ImmutableMapBuilder<K, V> {
    entries: Vec<(K, V)>,
}

impl<K, V> Default for ImmutableMapBuilder<K, V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<K, V> ImmutableMapBuilder<K, V> {
    pub fn with_capacity(cap: usize) -> Self {
        Self {
            entries: Vec::with_capacity(cap),
        }
    }

    #[inline(always)]
    pub fn put(&mut self, k: K, v: V) -> &mut Self {
        self.entries.push((k, v));
        self
    }

    pub fn put_all(&mut self, iter: impl IntoIterator<Item = (K, V)>) -> &mut Self {
        self.entries.extend(iter);
        self
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Eq + Hash, V> ImmutableMapBuilder<K, V> {
    /// Fails if any key was put more than once.
    pub fn build(self) -> Result<ImmutableMap<K, V>>
    where
        K: fmt::Debug,
    {
        let mut index = HashIndex::with_capacity(self.entries.len());
        for (pos, (k, _)) in self.entries.iter().enumerate() {
            if index.find(k, |i| &self.entries[i].0 == k).is_some() {
                return Err(eg!("multiple entries with same key: {:?}", k));
            }
            let h = index.hash(k);
            index.insert(h, pos);
        }
        Ok(ImmutableMap {
            entries: Arc::from(self.entries),
            index: Arc::new(index),
        })
    }

    /// A repeated key keeps its first position and takes the last value put.
    pub fn build_keeping_last(self) -> ImmutableMap<K, V> {
        let mut index = HashIndex::with_capacity(self.entries.len());
        let mut entries: Vec<(K, V)> = Vec::with_capacity(self.entries.len());
        for (k, v) in self.entries {
            if let Some(pos) = index.find(&k, |i| entries[i].0 == k) {
                entries[pos].1 = v;
                continue;
            }
            let h = index.hash(&k);
            index.insert(h, entries.len());
            entries.push((k, v));
        }
        ImmutableMap {
            entries: Arc::from(entries),
            index: Arc::new(index),
        }
    }
}

impl<K, V> Extend<(K, V)> for ImmutableMapBuilder<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.put_all(iter);
    }
}
