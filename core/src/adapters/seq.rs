use crate::{
    common::{Container, ContainerKind},
    HashMultiset, ImmutableList, ImmutableMultiset, ImmutableSet, ImmutableSortedMultiset,
    ImmutableSortedSet, LinkedHashMultiset, TreeMultiset,
};
use serde::{
    de::{SeqAccess, Visitor},
    Deserialize, Deserializer, Serialize, Serializer,
};
use std::{fmt, hash::Hash, iter, marker::PhantomData};

/// Reads a JSON array into any container that can be collected into.
pub(crate) struct SeqVisitor<C, T> {
    kind: ContainerKind,
    _p: PhantomData<fn() -> (C, T)>,
}

impl<C, T> SeqVisitor<C, T> {
    pub(crate) fn new(kind: ContainerKind) -> Self {
        Self {
            kind,
            _p: PhantomData,
        }
    }
}

impl<'de, C, T> Visitor<'de> for SeqVisitor<C, T>
where
    C: FromIterator<T>,
    T: Deserialize<'de>,
{
    type Value = C;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "an array of elements for {}", self.kind)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<C, A::Error>
    where
        A: SeqAccess<'de>,
    {
        // `collect` can not stop on an error, keep it aside and end the stream
        let mut err = None;
        let c = iter::from_fn(|| match seq.next_element::<T>() {
            Ok(v) => v,
            Err(e) => {
                err = Some(e);
                None
            }
        })
        .collect::<C>();

        match err {
            Some(e) => Err(e),
            None => Ok(c),
        }
    }
}

macro_rules! impl_seq_adapter {
    ($ty:ident, [$($bound:path),*]) => {
        impl<T> Serialize for $ty<T>
        where
            T: Serialize $(+ $bound)*,
        {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                serializer.collect_seq(self.iter())
            }
        }

        impl<'de, T> Deserialize<'de> for $ty<T>
        where
            T: Deserialize<'de> $(+ $bound)*,
        {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                deserializer.deserialize_seq(SeqVisitor::<Self, T>::new(
                    <Self as Container>::KIND,
                ))
            }
        }
    };
}

impl_seq_adapter!(ImmutableList, []);
impl_seq_adapter!(ImmutableSet, [Eq, Hash]);
impl_seq_adapter!(ImmutableSortedSet, [Ord]);
impl_seq_adapter!(ImmutableMultiset, [Eq, Hash]);
impl_seq_adapter!(ImmutableSortedMultiset, [Ord]);
impl_seq_adapter!(HashMultiset, [Eq, Hash]);
impl_seq_adapter!(LinkedHashMultiset, [Eq, Hash]);
impl_seq_adapter!(TreeMultiset, [Ord]);
