//! # colljson_core
//!
//! `colljson_core` provides the container types handled by `colljson`:
//! immutable lists, sets, maps and bi-maps, plus the multiset family. Every
//! container ships with a serde adapter, so it can be used as a field of any
//! `#[derive(Serialize, Deserialize)]` struct.

#![recursion_limit = "512"]

/// Container kinds, the `Container` marker trait and shared internals.
pub mod common;

/// Immutable lists, sets, sorted sets, maps and bi-maps.
pub mod basic;

/// Counted collections: one mutable and one immutable flavour per ordering.
pub mod multiset;

/// serde `Serialize`/`Deserialize` impls for every container kind.
pub mod adapters;

pub use basic::{
    bimap::{ImmutableBiMap, ImmutableBiMapBuilder},
    list::{ImmutableList, ImmutableListBuilder},
    map::{ImmutableMap, ImmutableMapBuilder},
    set::{ImmutableSet, ImmutableSetBuilder},
    sorted_set::{ImmutableSortedSet, ImmutableSortedSetBuilder},
};

pub use multiset::{
    hash::HashMultiset,
    immutable::{ImmutableMultiset, ImmutableMultisetBuilder},
    immutable_sorted::{ImmutableSortedMultiset, ImmutableSortedMultisetBuilder},
    linked::LinkedHashMultiset,
    tree::TreeMultiset,
    Multiset, MultisetIter,
};

pub use common::{Container, ContainerKind, Count, Shape};
