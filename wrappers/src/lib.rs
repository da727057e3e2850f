#![doc = include_str!("../README.md")]
#![cfg_attr(test, allow(warnings))]
#![recursion_limit = "512"]

#[macro_use]
pub mod common;
pub mod config;
pub mod jsonb;
pub mod registry;

pub use common::ende::{ValueDe, ValueEn, ValueEnDe};

pub use config::JsonbConfig;

pub use jsonb::{default_jsonb, from_json, to_json, JsonType, Jsonb, JsonbBuilder};

pub use registry::{
    Adapter, AdapterFactory, AdapterRegistry, AnyValue, Described, KindFactory, PlainFactory,
    TypeDescriptor,
};

pub use colljson_core::{self, *};
