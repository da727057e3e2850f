//!
//! # Common Components
//!
//! Byte codecs, helper macros, and the items re-exported from
//! `colljson_core::common`.
//!

/// Encoding and decoding traits.
pub mod ende;
#[macro_use]
pub mod macros;

pub use colljson_core::common::*;

/// Encoded bytes of a value.
pub type RawBytes = Vec<u8>;
