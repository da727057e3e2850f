//!
//! # Basic Immutable Containers
//!
//! Lists, sets and maps that are fixed once built. Storage is shared behind
//! `Arc`, so cloning a container never copies its elements.
//!

pub mod bimap;
pub mod list;
pub mod map;
pub mod set;
pub mod sorted_set;
