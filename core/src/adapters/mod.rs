//!
//! # serde adapters
//!
//! Sequence kinds are written as JSON arrays in iteration order, multisets
//! repeat each element as many times as it was counted. `ImmutableMap` and
//! `ImmutableBiMap` are written as JSON objects in insertion order.
//!
//! Reading goes through each container's own builder, so sets drop
//! duplicates, sorted kinds sort, and maps reject repeated keys.
//!
//! A missing container is modelled as `Option<C>` and is written as `null`.
//!

mod map;
mod seq;
