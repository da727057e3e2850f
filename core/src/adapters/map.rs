use crate::{
    common::{Container, ContainerKind},
    ImmutableBiMap, ImmutableBiMapBuilder, ImmutableMap, ImmutableMapBuilder,
};
use serde::{
    de::{Error, MapAccess, Visitor},
    Deserialize, Deserializer, Serialize, Serializer,
};
use std::{fmt, hash::Hash, marker::PhantomData};

macro_rules! impl_map_adapter {
    ($ty:ident, $builder:ident, $visitor:ident, [$($vbound:path),*]) => {
        impl<K, V> Serialize for $ty<K, V>
        where
            K: Serialize,
            V: Serialize,
        {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                serializer.collect_map(self.iter())
            }
        }

        struct $visitor<K, V> {
            kind: ContainerKind,
            _p: PhantomData<fn() -> (K, V)>,
        }

        impl<'de, K, V> Visitor<'de> for $visitor<K, V>
        where
            K: Deserialize<'de> + Eq + Hash + fmt::Debug,
            V: Deserialize<'de> $(+ $vbound)*,
        {
            type Value = $ty<K, V>;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "an object of entries for {}", self.kind)
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut b = $builder::with_capacity(map.size_hint().unwrap_or(0).min(4096));
                while let Some((k, v)) = map.next_entry::<K, V>()? {
                    b.put(k, v);
                }
                b.build().map_err(A::Error::custom)
            }
        }

        impl<'de, K, V> Deserialize<'de> for $ty<K, V>
        where
            K: Deserialize<'de> + Eq + Hash + fmt::Debug,
            V: Deserialize<'de> $(+ $vbound)*,
        {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                deserializer.deserialize_map($visitor {
                    kind: <Self as Container>::KIND,
                    _p: PhantomData,
                })
            }
        }
    };
}

impl_map_adapter!(ImmutableMap, ImmutableMapBuilder, MapVisitor, []);
impl_map_adapter!(
    ImmutableBiMap,
    ImmutableBiMapBuilder,
    BiMapVisitor,
    [Eq, Hash, fmt::Debug]
);
