//!
//! # Adapter registry
//!
//! Maps a [`TypeDescriptor`] to the [`Adapter`] that reads and writes it.
//!
//! Resolution order for a descriptor:
//!
//! 1. an adapter registered explicitly for its type,
//! 2. an adapter created earlier and kept in the cache,
//! 3. the factories, the most recently added one first.
//!
//! The first factory that answers wins and its adapter is cached per type.
//!


use crate::common::{Container, ContainerKind};
use colljson_core::{
    HashMultiset, ImmutableBiMap, ImmutableList, ImmutableMap, ImmutableMultiset,
    ImmutableSet, ImmutableSortedMultiset, ImmutableSortedSet, LinkedHashMultiset,
    TreeMultiset,
};
use parking_lot::RwLock;
use ruc::*;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use std::{
    any::{type_name, Any, TypeId},
    collections::HashMap,
    fmt,
    sync::Arc,
};
use tracing::{debug, trace};

/// A decoded value, to be downcast by the caller.
pub type AnyValue = Box<dyn Any + Send>;

type EncodeFn = dyn Fn(&dyn Any) -> Result<Value> + Send + Sync;
type DecodeStrFn = dyn Fn(&str) -> Result<AnyValue> + Send + Sync;
type DecodeValueFn = dyn Fn(Value) -> Result<AnyValue> + Send + Sync;

/////////////////////////////////////////////////////////////////////////////
/////////////////////////////////////////////////////////////////////////////

/// Runtime description of a serializable type.
///
/// It carries the serde functions of the type it was made from, which is
/// what lets a factory build an adapter without knowing the type statically.
#[derive(Clone, Copy)]
pub struct TypeDescriptor {
    kind: Option<ContainerKind>,
    type_id: TypeId,
    type_name: &'static str,
    serde: SerdeFns,
}

#[derive(Clone, Copy)]
struct SerdeFns {
    encode: fn(&dyn Any) -> Result<Value>,
    decode_str: fn(&str) -> Result<AnyValue>,
    decode_value: fn(Value) -> Result<AnyValue>,
}

impl SerdeFns {
    fn of<T>() -> Self
    where
        T: Serialize + DeserializeOwned + Send + 'static,
    {
        Self {
            encode: encode_as::<T>,
            decode_str: decode_str_as::<T>,
            decode_value: decode_value_as::<T>,
        }
    }
}

fn downcast_ref<T: 'static>(v: &dyn Any) -> Result<&T> {
    v.downcast_ref::<T>()
        .ok_or_else(|| eg!("value is not a {}", type_name::<T>()))
}

fn encode_as<T: Serialize + 'static>(v: &dyn Any) -> Result<Value> {
    downcast_ref::<T>(v).and_then(|v| serde_json::to_value(v).c(d!()))
}

fn decode_str_as<T: DeserializeOwned + Send + 'static>(s: &str) -> Result<AnyValue> {
    serde_json::from_str::<T>(s)
        .c(d!())
        .map(|v| Box::new(v) as AnyValue)
}

fn decode_value_as<T: DeserializeOwned + Send + 'static>(v: Value) -> Result<AnyValue> {
    serde_json::from_value::<T>(v)
        .c(d!())
        .map(|v| Box::new(v) as AnyValue)
}

impl TypeDescriptor {
    /// Descriptor of a container type, records its kind.
    pub fn of<C>() -> Self
    where
        C: Container + Serialize + DeserializeOwned + Send + 'static,
    {
        Self {
            kind: Some(C::KIND),
            type_id: TypeId::of::<C>(),
            type_name: type_name::<C>(),
            serde: SerdeFns::of::<C>(),
        }
    }

    /// Descriptor of any other serde type.
    pub fn plain<T>() -> Self
    where
        T: Serialize + DeserializeOwned + Send + 'static,
    {
        Self {
            kind: None,
            type_id: TypeId::of::<T>(),
            type_name: type_name::<T>(),
            serde: SerdeFns::of::<T>(),
        }
    }

    #[inline(always)]
    pub fn kind(&self) -> Option<ContainerKind> {
        self.kind
    }

    #[inline(always)]
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    #[inline(always)]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Whether this describes a container of the given kind,
    /// whatever its element types are.
    #[inline(always)]
    pub fn is_container_of(&self, kind: ContainerKind) -> bool {
        Some(kind) == self.kind
    }
}

impl PartialEq for TypeDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Eq for TypeDescriptor {}

impl fmt::Debug for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeDescriptor")
            .field("kind", &self.kind)
            .field("type_name", &self.type_name)
            .finish()
    }
}

/// Types that can describe themselves at runtime.
///
/// Implemented for every container of `colljson_core`,
/// use [`described!`](crate::described) for other types.
pub trait Described: Sized + Send + 'static {
    fn descriptor() -> TypeDescriptor;
}

impl_described_container!(
    ImmutableList<T>,
    ImmutableSet<T>,
    ImmutableSortedSet<T>,
    ImmutableMap<K, V>,
    ImmutableBiMap<K, V>,
    ImmutableMultiset<T>,
    ImmutableSortedMultiset<T>,
    HashMultiset<T>,
    LinkedHashMultiset<T>,
    TreeMultiset<T>,
);

/////////////////////////////////////////////////////////////////////////////
/////////////////////////////////////////////////////////////////////////////

/// Reads and writes values of one type.
#[derive(Clone)]
pub struct Adapter {
    type_id: TypeId,
    type_name: &'static str,
    encode: Arc<EncodeFn>,
    decode_str: Arc<DecodeStrFn>,
    decode_value: Arc<DecodeValueFn>,
}

impl Adapter {
    /// The serde-backed adapter of the described type.
    pub fn serde(desc: &TypeDescriptor) -> Self {
        let fns = desc.serde;
        Self {
            type_id: desc.type_id,
            type_name: desc.type_name,
            encode: Arc::new(fns.encode),
            decode_str: Arc::new(fns.decode_str),
            decode_value: Arc::new(fns.decode_value),
        }
    }

    /// An adapter made of custom functions.
    ///
    /// `encode` produces the JSON tree of a value, `decode` rebuilds a value
    /// from a JSON tree.
    pub fn from_fns<T, E, D>(encode: E, decode: D) -> Self
    where
        T: Send + 'static,
        E: Fn(&T) -> Result<Value> + Send + Sync + 'static,
        D: Fn(Value) -> Result<T> + Send + Sync + 'static,
    {
        let decode = Arc::new(decode);
        let decode_from_str = Arc::clone(&decode);
        Self {
            type_id: TypeId::of::<T>(),
            type_name: type_name::<T>(),
            encode: Arc::new(move |v: &dyn Any| downcast_ref::<T>(v).and_then(|v| encode(v))),
            decode_str: Arc::new(move |s: &str| {
                let v = serde_json::from_str::<Value>(s).c(d!())?;
                decode_from_str(v).map(|v| Box::new(v) as AnyValue)
            }),
            decode_value: Arc::new(move |v: Value| decode(v).map(|v| Box::new(v) as AnyValue)),
        }
    }

    #[inline(always)]
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    #[inline(always)]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Whether this adapter is bound to the described type.
    #[inline(always)]
    pub fn handles(&self, desc: &TypeDescriptor) -> bool {
        self.type_id == desc.type_id
    }

    pub fn encode(&self, v: &dyn Any) -> Result<Value> {
        (self.encode)(v).c(d!())
    }

    pub fn decode(&self, s: &str) -> Result<AnyValue> {
        (self.decode_str)(s).c(d!())
    }

    pub fn decode_value(&self, v: Value) -> Result<AnyValue> {
        (self.decode_value)(v).c(d!())
    }
}

impl fmt::Debug for Adapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Adapter")
            .field("type_name", &self.type_name)
            .finish()
    }
}

/////////////////////////////////////////////////////////////////////////////
/////////////////////////////////////////////////////////////////////////////

/// Creates adapters on demand, `None` means "not mine".
pub trait AdapterFactory: Send + Sync {
    fn create(&self, desc: &TypeDescriptor) -> Option<Adapter>;
}

impl<F> AdapterFactory for F
where
    F: Fn(&TypeDescriptor) -> Option<Adapter> + Send + Sync,
{
    fn create(&self, desc: &TypeDescriptor) -> Option<Adapter> {
        self(desc)
    }
}

/// Handles every container of one kind, whatever the element types are.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KindFactory(pub ContainerKind);

impl AdapterFactory for KindFactory {
    fn create(&self, desc: &TypeDescriptor) -> Option<Adapter> {
        if desc.is_container_of(self.0) {
            Some(Adapter::serde(desc))
        } else {
            None
        }
    }
}

/// Handles every non-container type through its serde impls.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlainFactory;

impl AdapterFactory for PlainFactory {
    fn create(&self, desc: &TypeDescriptor) -> Option<Adapter> {
        if desc.kind().is_none() {
            Some(Adapter::serde(desc))
        } else {
            None
        }
    }
}

/////////////////////////////////////////////////////////////////////////////
/////////////////////////////////////////////////////////////////////////////

/// Thread-safe lookup table from types to adapters.
#[derive(Default)]
pub struct AdapterRegistry {
    explicit: HashMap<TypeId, Arc<Adapter>>,
    factories: Vec<Arc<dyn AdapterFactory>>,
    cache: RwLock<HashMap<TypeId, Arc<Adapter>>>,
}

impl AdapterRegistry {
    /// A registry that knows nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry with one factory per container kind.
    pub fn with_builtin() -> Self {
        Self::with_kinds(ContainerKind::ALL)
    }

    /// A registry handling only the given container kinds.
    pub fn with_kinds(kinds: impl IntoIterator<Item = ContainerKind>) -> Self {
        let mut r = Self::new();
        kinds.into_iter().for_each(|k| {
            r.add_factory(KindFactory(k));
        });
        r
    }

    /// The factory added last is consulted first.
    pub fn add_factory(&mut self, factory: impl AdapterFactory + 'static) -> &mut Self {
        self.push_factory(Arc::new(factory))
    }

    pub(crate) fn push_factory(&mut self, factory: Arc<dyn AdapterFactory>) -> &mut Self {
        self.factories.push(factory);
        // earlier answers may now be shadowed
        self.cache.get_mut().clear();
        self
    }

    /// Binds an adapter to its own type, ahead of any factory.
    pub fn add_adapter(&mut self, adapter: Adapter) -> &mut Self {
        self.explicit.insert(adapter.type_id, Arc::new(adapter));
        self
    }

    pub fn factory_count(&self) -> usize {
        self.factories.len()
    }

    /// Finds or creates the adapter of the described type.
    pub fn lookup(&self, desc: &TypeDescriptor) -> Result<Arc<Adapter>> {
        if let Some(a) = self.explicit.get(&desc.type_id) {
            return Ok(Arc::clone(a));
        }

        if let Some(a) = self.cache.read().get(&desc.type_id) {
            trace!(type_name = desc.type_name, "adapter cache hit");
            return Ok(Arc::clone(a));
        }

        let adapter = self
            .factories
            .iter()
            .rev()
            .find_map(|f| f.create(desc))
            .ok_or_else(|| eg!("no adapter found for type {}", desc.type_name))?;

        if !adapter.handles(desc) {
            return Err(eg!(
                "factory returned an adapter for {} when asked for {}",
                adapter.type_name,
                desc.type_name
            ));
        }

        debug!(type_name = desc.type_name, kind = ?desc.kind, "adapter created");

        let mut cache = self.cache.write();
        let a = cache
            .entry(desc.type_id)
            .or_insert_with(|| Arc::new(adapter));
        Ok(Arc::clone(a))
    }

    pub fn encode(&self, desc: &TypeDescriptor, v: &dyn Any) -> Result<Value> {
        self.lookup(desc).c(d!())?.encode(v).c(d!())
    }

    pub fn decode(&self, desc: &TypeDescriptor, s: &str) -> Result<AnyValue> {
        self.lookup(desc).c(d!())?.decode(s).c(d!())
    }

    pub fn decode_value(&self, desc: &TypeDescriptor, v: Value) -> Result<AnyValue> {
        self.lookup(desc).c(d!())?.decode_value(v).c(d!())
    }
}

impl fmt::Debug for AdapterRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdapterRegistry")
            .field("explicit", &self.explicit.len())
            .field("factories", &self.factories.len())
            .field("cached", &self.cache.read().len())
            .finish()
    }
}
