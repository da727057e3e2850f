//!
//! Position index for insertion-ordered containers.
//!
//! Elements live in a plain slice; the index only maps an element hash to the
//! positions holding an element with that hash, so no element is ever stored
//! twice and lookups work through `Borrow`.
//!

use std::{
    collections::{hash_map::RandomState, HashMap},
    hash::{BuildHasher, Hash},
};

#[derive(Clone, Debug, Default)]
pub(crate) struct HashIndex {
    state: RandomState,
    slots: HashMap<u64, Vec<usize>>,
}

impl HashIndex {
    pub(crate) fn with_capacity(cap: usize) -> Self {
        Self {
            state: RandomState::new(),
            slots: HashMap::with_capacity(cap),
        }
    }

    #[inline(always)]
    pub(crate) fn hash<Q: Hash + ?Sized>(&self, v: &Q) -> u64 {
        self.state.hash_one(v)
    }

    /// Position of the first candidate accepted by `is_match`.
    pub(crate) fn find<Q: Hash + ?Sized>(
        &self,
        v: &Q,
        mut is_match: impl FnMut(usize) -> bool,
    ) -> Option<usize> {
        self.slots
            .get(&self.hash(v))?
            .iter()
            .copied()
            .find(|&pos| is_match(pos))
    }

    #[inline(always)]
    pub(crate) fn insert(&mut self, hash: u64, pos: usize) {
        self.slots.entry(hash).or_default().push(pos);
    }

    /// Re-index from scratch, positions follow the iteration order.
    pub(crate) fn rebuild<'a, T: Hash + 'a>(&mut self, items: impl Iterator<Item = &'a T>) {
        self.slots.clear();
        items.enumerate().for_each(|(pos, v)| {
            let h = self.hash(v);
            self.insert(h, pos);
        });
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
    }
}
