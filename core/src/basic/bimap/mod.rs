//!
//! An immutable one-to-one map: keys are unique and so are values.
//!
//! `inverse` swaps the two sides without copying anything.
//!
//! # Examples
//!
//! ```
//! use colljson_core::ImmutableBiMap;
//!
//! let m = ImmutableBiMap::of([("key1", 1), ("key2", 2)]).unwrap();
//! assert_eq!(Some(&1), m.get("key1"));
//! assert_eq!(Some(&"key2"), m.inverse().get(&2));
//! ```
//!


use crate::common::{index::HashIndex, Container, ContainerKind};
use ruc::*;
use std::{borrow::Borrow, fmt, hash::Hash, iter::Zip, slice, sync::Arc};

/// A bijective, insertion-ordered map.
#[derive(Clone)]
pub struct ImmutableBiMap<K, V> {
    keys: Arc<[K]>,
    values: Arc<[V]>,
    key_index: Arc<HashIndex>,
    value_index: Arc<HashIndex>,
}

impl<K, V> ImmutableBiMap<K, V> {
    #[inline(always)]
    pub fn builder() -> ImmutableBiMapBuilder<K, V> {
        ImmutableBiMapBuilder::default()
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    #[inline(always)]
    pub fn iter(&self) -> Zip<slice::Iter<'_, K>, slice::Iter<'_, V>> {
        self.keys.iter().zip(self.values.iter())
    }

    #[inline(always)]
    pub fn keys(&self) -> slice::Iter<'_, K> {
        self.keys.iter()
    }

    #[inline(always)]
    pub fn values(&self) -> slice::Iter<'_, V> {
        self.values.iter()
    }

    /// The value-to-key view of this map, sharing its storage.
    pub fn inverse(&self) -> ImmutableBiMap<V, K> {
        ImmutableBiMap {
            keys: Arc::clone(&self.values),
            values: Arc::clone(&self.keys),
            key_index: Arc::clone(&self.value_index),
            value_index: Arc::clone(&self.key_index),
        }
    }

    #[inline(always)]
    pub fn is_the_same_instance(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.keys, &other.keys)
    }
}

impl<K: Eq + Hash, V: Eq + Hash> ImmutableBiMap<K, V> {
    pub fn new() -> Self {
        Self::builder().build_unchecked()
    }

    /// Fails on the first repeated key or value.
    pub fn of(entries: impl IntoIterator<Item = (K, V)>) -> Result<Self>
    where
        K: fmt::Debug,
        V: fmt::Debug,
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
        self.key_index
            .find(k, |pos| Borrow::<Q>::borrow(&self.keys[pos]) == k)
            .map(|pos| &self.values[pos])
    }

    pub fn get_key<Q>(&self, v: &Q) -> Option<&K>
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.value_index
            .find(v, |pos| Borrow::<Q>::borrow(&self.values[pos]) == v)
            .map(|pos| &self.keys[pos])
    }

    pub fn contains_key<Q>(&self, k: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get(k).is_some()
    }

    pub fn contains_value<Q>(&self, v: &Q) -> bool
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get_key(v).is_some()
    }
}

impl<K, V> Container for ImmutableBiMap<K, V> {
    const KIND: ContainerKind = ContainerKind::ImmutableBiMap;
}

impl<K: Eq + Hash, V: Eq + Hash> Default for ImmutableBiMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash, V: Eq + Hash> PartialEq for ImmutableBiMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|(k, v)| other.get(k) == Some(v))
    }
}

impl<K: Eq + Hash, V: Eq + Hash> Eq for ImmutableBiMap<K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for ImmutableBiMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<'a, K, V> IntoIterator for &'a ImmutableBiMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Zip<slice::Iter<'a, K>, slice::Iter<'a, V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Accumulates entries for an [`ImmutableBiMap`].
#[derive(Debug)]
pub struct ImmutableBiMapBuilder<K, V> {
    keys: Vec<K>,
    values: Vec<V>,
}

impl<K, V> Default for ImmutableBiMapBuilder<K, V> {
    fn default() -> Self {
        Self {
            keys: Vec::new(),
            values: Vec::new(),
        }
    }
}

impl<K, V> ImmutableBiMapBuilder<K, V> {
    pub fn with_capacity(cap: usize) -> Self {
        Self {
            keys: Vec::with_capacity(cap),
            values: Vec::with_capacity(cap),
        }
    }

    #[inline(always)]
    pub fn put(&mut self, k: K, v: V) -> &mut Self {
        self.keys.push(k);
        self.values.push(v);
        self
    }

    pub fn put_all(&mut self, iter: impl IntoIterator<Item = (K, V)>) -> &mut Self {
        iter.into_iter().for_each(|(k, v)| {
            self.put(k, v);
        });
        self
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl<K: Eq + Hash, V: Eq + Hash> ImmutableBiMapBuilder<K, V> {
    /// Fails if a key, or a value, was put more than once.
    pub fn build(self) -> Result<ImmutableBiMap<K, V>>
    where
        K: fmt::Debug,
        V: fmt::Debug,
    {
        let key_index = unique_index(&self.keys)
            .map_err(|k| eg!("multiple entries with same key: {:?}", k))?;
        let value_index = unique_index(&self.values)
            .map_err(|v| eg!("value already present: {:?}", v))?;
        Ok(ImmutableBiMap {
            keys: Arc::from(self.keys),
            values: Arc::from(self.values),
            key_index: Arc::new(key_index),
            value_index: Arc::new(value_index),
        })
    }

    // Only for inputs that are known to be empty or unique.
    fn build_unchecked(self) -> ImmutableBiMap<K, V> {
        let mut key_index = HashIndex::default();
        key_index.rebuild(self.keys.iter());
        let mut value_index = HashIndex::default();
        value_index.rebuild(self.values.iter());
        ImmutableBiMap {
            keys: Arc::from(self.keys),
            values: Arc::from(self.values),
            key_index: Arc::new(key_index),
            value_index: Arc::new(value_index),
        }
    }
}

impl<K, V> Extend<(K, V)> for ImmutableBiMapBuilder<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.put_all(iter);
    }
}

// Returns the first repeated element on failure.
fn unique_index<T: Eq + Hash>(items: &[T]) -> std::result::Result<HashIndex, &T> {
    let mut index = HashIndex::with_capacity(items.len());
    for (pos, v) in items.iter().enumerate() {
        if index.find(v, |i| &items[i] == v).is_some() {
            return Err(v);
        }
        let h = index.hash(v);
        index.insert(h, pos);
    }
    Ok(index)
}
