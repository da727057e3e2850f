//!
//! # Jsonb
//!
//! The entry point: a configured [`AdapterRegistry`] plus the JSON
//! read/write helpers built on it.
//!
//! # Examples
//!
//! ```
//! use colljson::{ImmutableSortedSet, Jsonb};
//!
//! let jsonb = Jsonb::new();
//! let set_type = jsonb.type_of::<ImmutableSortedSet<String>>().unwrap();
//!
//! let set = set_type.from_json(r#"["zebra","apple","zebra"]"#).unwrap();
//! assert_eq!(2, set.len());
//! assert_eq!(r#"["apple","zebra"]"#, set_type.to_json(&set).unwrap());
//! ```
//!

#[cfg(test)]
mod test;

use crate::{
    common::{ende::codec_name, ContainerKind},
    config::JsonbConfig,
    registry::{
        Adapter, AdapterFactory, AdapterRegistry, AnyValue, Described, KindFactory, PlainFactory,
        TypeDescriptor,
    },
};
use once_cell::sync::Lazy;
use ruc::*;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use std::{fmt, marker::PhantomData, sync::Arc};
use tracing::debug;

static DEFAULT: Lazy<Jsonb> = Lazy::new(Jsonb::new);

/// The shared instance behind the free functions of this crate.
pub fn default_jsonb() -> &'static Jsonb {
    &DEFAULT
}

/// Serializes any serde value with the default settings.
pub fn to_json<T: Serialize + ?Sized>(v: &T) -> Result<String> {
    DEFAULT.to_json(v)
}

/// Deserializes any serde value with the default settings.
pub fn from_json<T: DeserializeOwned>(s: &str) -> Result<T> {
    DEFAULT.from_json(s)
}

/// JSON reader/writer bound to an adapter registry.
#[derive(Clone)]
pub struct Jsonb {
    registry: Arc<AdapterRegistry>,
    config: JsonbConfig,
}

impl Jsonb {
    /// All container kinds, compact output.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Settings taken from `COLLJSON_*` environment variables.
    pub fn from_env() -> Self {
        Self::builder().config(JsonbConfig::from_env()).build()
    }

    pub fn builder() -> JsonbBuilder {
        JsonbBuilder::default()
    }

    #[inline(always)]
    pub fn config(&self) -> &JsonbConfig {
        &self.config
    }

    #[inline(always)]
    pub fn registry(&self) -> &AdapterRegistry {
        &self.registry
    }

    /// Writes a serde value, records with container fields included.
    pub fn to_json<T: Serialize + ?Sized>(&self, v: &T) -> Result<String> {
        if self.config.pretty {
            serde_json::to_string_pretty(v).c(d!())
        } else {
            serde_json::to_string(v).c(d!())
        }
    }

    pub fn from_json<T: DeserializeOwned>(&self, s: &str) -> Result<T> {
        serde_json::from_str(s).c(d!())
    }

    pub fn to_value<T: Serialize + ?Sized>(&self, v: &T) -> Result<Value> {
        serde_json::to_value(v).c(d!())
    }

    pub fn from_value<T: DeserializeOwned>(&self, v: Value) -> Result<T> {
        serde_json::from_value(v).c(d!())
    }

    /// The registered adapter of `T`, typed.
    pub fn type_of<T: Described>(&self) -> Result<JsonType<T>> {
        let desc = T::descriptor();
        self.registry.lookup(&desc).c(d!()).map(|adapter| JsonType {
            adapter,
            desc,
            pretty: self.config.pretty,
            _p: PhantomData,
        })
    }
}

impl Default for Jsonb {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Jsonb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Jsonb")
            .field("config", &self.config)
            .field("registry", &self.registry)
            .finish()
    }
}

/// Collects settings and custom adapters for a [`Jsonb`].
#[derive(Default)]
pub struct JsonbBuilder {
    config: JsonbConfig,
    factories: Vec<Arc<dyn AdapterFactory>>,
    adapters: Vec<Adapter>,
}

impl JsonbBuilder {
    /// Replaces every setting at once.
    pub fn config(mut self, config: JsonbConfig) -> Self {
        self.config = config;
        self
    }

    pub fn pretty(mut self, pretty: bool) -> Self {
        self.config.pretty = pretty;
        self
    }

    /// Restricts the built-in factories to these kinds.
    pub fn kinds(mut self, kinds: impl IntoIterator<Item = ContainerKind>) -> Self {
        self.config.kinds = kinds.into_iter().collect();
        self
    }

    /// Custom factories are consulted before the built-in ones,
    /// the last added first.
    pub fn add_factory(mut self, factory: impl AdapterFactory + 'static) -> Self {
        self.factories.push(Arc::new(factory));
        self
    }

    /// Binds an adapter to its type, ahead of every factory.
    pub fn add_adapter(mut self, adapter: Adapter) -> Self {
        self.adapters.push(adapter);
        self
    }

    pub fn build(self) -> Jsonb {
        let mut registry = AdapterRegistry::new();
        registry.add_factory(PlainFactory);
        self.config.kinds.iter().for_each(|k| {
            registry.add_factory(KindFactory(*k));
        });
        self.factories.into_iter().for_each(|f| {
            registry.push_factory(f);
        });
        self.adapters.into_iter().for_each(|a| {
            registry.add_adapter(a);
        });

        debug!(
            pretty = self.config.pretty,
            kinds = self.config.kinds.len(),
            codec = codec_name(),
            ?registry,
            "jsonb built"
        );

        Jsonb {
            registry: Arc::new(registry),
            config: self.config,
        }
    }
}

/// Typed handle on the adapter of `T`.
pub struct JsonType<T> {
    adapter: Arc<Adapter>,
    desc: TypeDescriptor,
    pretty: bool,
    _p: PhantomData<fn() -> T>,
}

impl<T: Described> JsonType<T> {
    #[inline(always)]
    pub fn descriptor(&self) -> &TypeDescriptor {
        &self.desc
    }

    pub fn to_value(&self, v: &T) -> Result<Value> {
        self.adapter.encode(v).c(d!())
    }

    pub fn to_json(&self, v: &T) -> Result<String> {
        let v = self.to_value(v).c(d!())?;
        if self.pretty {
            serde_json::to_string_pretty(&v).c(d!())
        } else {
            serde_json::to_string(&v).c(d!())
        }
    }

    pub fn from_json(&self, s: &str) -> Result<T> {
        self.adapter.decode(s).c(d!()).and_then(downcast::<T>)
    }

    pub fn from_value(&self, v: Value) -> Result<T> {
        self.adapter.decode_value(v).c(d!()).and_then(downcast::<T>)
    }
}

impl<T> Clone for JsonType<T> {
    fn clone(&self) -> Self {
        Self {
            adapter: Arc::clone(&self.adapter),
            desc: self.desc,
            pretty: self.pretty,
            _p: PhantomData,
        }
    }
}

impl<T> fmt::Debug for JsonType<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JsonType").field("desc", &self.desc).finish()
    }
}

fn downcast<T: 'static>(v: AnyValue) -> Result<T> {
    v.downcast::<T>()
        .map(|v| *v)
        .map_err(|_| eg!("adapter produced a value other than {}", std::any::type_name::<T>()))
}
