//!
//! # Common components
//!

pub(crate) mod index;

use ruc::*;
use std::{fmt, str::FromStr};

/////////////////////////////////////////////////////////////////////////////
/////////////////////////////////////////////////////////////////////////////

/// Occurrence counter used by every multiset.
pub type Count = usize;

/// The JSON form a container is written as.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Shape {
    /// A JSON array.
    Sequence,
    /// A JSON object.
    Object,
}

/// Identifies which collection type an adapter handles.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub enum ContainerKind {
    ImmutableList,
    ImmutableSet,
    ImmutableSortedSet,
    ImmutableMap,
    ImmutableBiMap,
    ImmutableMultiset,
    ImmutableSortedMultiset,
    HashMultiset,
    LinkedHashMultiset,
    TreeMultiset,
}

impl ContainerKind {
    pub const ALL: [ContainerKind; 10] = [
        ContainerKind::ImmutableList,
        ContainerKind::ImmutableSet,
        ContainerKind::ImmutableSortedSet,
        ContainerKind::ImmutableMap,
        ContainerKind::ImmutableBiMap,
        ContainerKind::ImmutableMultiset,
        ContainerKind::ImmutableSortedMultiset,
        ContainerKind::HashMultiset,
        ContainerKind::LinkedHashMultiset,
        ContainerKind::TreeMultiset,
    ];

    /// The snake_case name, also accepted by `FromStr`.
    pub fn name(self) -> &'static str {
        match self {
            ContainerKind::ImmutableList => "immutable_list",
            ContainerKind::ImmutableSet => "immutable_set",
            ContainerKind::ImmutableSortedSet => "immutable_sorted_set",
            ContainerKind::ImmutableMap => "immutable_map",
            ContainerKind::ImmutableBiMap => "immutable_bi_map",
            ContainerKind::ImmutableMultiset => "immutable_multiset",
            ContainerKind::ImmutableSortedMultiset => "immutable_sorted_multiset",
            ContainerKind::HashMultiset => "hash_multiset",
            ContainerKind::LinkedHashMultiset => "linked_hash_multiset",
            ContainerKind::TreeMultiset => "tree_multiset",
        }
    }

    pub fn shape(self) -> Shape {
        match self {
            ContainerKind::ImmutableMap | ContainerKind::ImmutableBiMap => Shape::Object,
            _ => Shape::Sequence,
        }
    }

    /// Multiset kinds keep a count per distinct element.
    pub fn is_multiset(self) -> bool {
        matches!(
            self,
            ContainerKind::ImmutableMultiset
                | ContainerKind::ImmutableSortedMultiset
                | ContainerKind::HashMultiset
                | ContainerKind::LinkedHashMultiset
                | ContainerKind::TreeMultiset
        )
    }

    /// Only these kinds may be modified after construction.
    pub fn is_mutable(self) -> bool {
        matches!(
            self,
            ContainerKind::HashMultiset
                | ContainerKind::LinkedHashMultiset
                | ContainerKind::TreeMultiset
        )
    }
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ContainerKind {
    type Err = Box<dyn RucError>;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        // both `tree_multiset` and `TreeMultiset` are accepted
        let flat = |n: &str| n.replace('_', "").to_ascii_lowercase();
        let wanted = flat(s);
        ContainerKind::ALL
            .into_iter()
            .find(|k| flat(k.name()) == wanted)
            .ok_or_else(|| eg!("unknown container kind: {}", s))
    }
}

/// Implemented by every container type of this crate.
pub trait Container {
    const KIND: ContainerKind;
}

/////////////////////////////////////////////////////////////////////////////
/////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn kind_names() {
        for k in ContainerKind::ALL {
            assert_eq!(k, pnk!(k.name().parse::<ContainerKind>()));
        }
        assert_eq!(
            ContainerKind::TreeMultiset,
            pnk!(" Tree_Multiset ".parse::<ContainerKind>())
        );
        assert_eq!(
            ContainerKind::ImmutableBiMap,
            pnk!("ImmutableBiMap".parse::<ContainerKind>())
        );
        assert!("array_list".parse::<ContainerKind>().is_err());
    }

    #[test]
    fn kind_shapes() {
        let objects = ContainerKind::ALL
            .into_iter()
            .filter(|k| Shape::Object == k.shape())
            .collect::<Vec<_>>();
        assert_eq!(
            objects,
            vec![ContainerKind::ImmutableMap, ContainerKind::ImmutableBiMap]
        );
        assert_eq!(5, ContainerKind::ALL.iter().filter(|k| k.is_multiset()).count());
        assert!(ContainerKind::HashMultiset.is_mutable());
        assert!(!ContainerKind::ImmutableMultiset.is_mutable());
    }
}
