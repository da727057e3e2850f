//!
//! # Multisets
//!
//! A multiset is a set that remembers how many times each element was added.
//! All variants iterate *grouped*: every occurrence of an element is yielded
//! next to the others, `count` times in a row. They differ in the order of
//! the groups:
//!
//! | type | group order | mutable |
//! |---|---|---|
//! | [`HashMultiset`](hash::HashMultiset) | unspecified | yes |
//! | [`LinkedHashMultiset`](linked::LinkedHashMultiset) | first occurrence | yes |
//! | [`TreeMultiset`](tree::TreeMultiset) | ascending | yes |
//! | [`ImmutableMultiset`](immutable::ImmutableMultiset) | first occurrence | no |
//! | [`ImmutableSortedMultiset`](immutable_sorted::ImmutableSortedMultiset) | ascending | no |
//!
//! Equality between two multisets of the same type only looks at the counts.
//!

use crate::common::Count;

/// Inherent forwarders, `Container`, `Debug` and `IntoIterator` for a multiset type.
macro_rules! impl_multiset_common {
    ($ty:ident, $kind:ident, [$($bound:path),*]) => {
        impl<T> $ty<T>
        where
            T: $($bound +)*,
        {
            /// Every occurrence, grouped.
            #[inline(always)]
            pub fn iter(&self) -> $crate::multiset::MultisetIter<'_, T, <Self as $crate::multiset::Multiset<T>>::Entries<'_>> {
                $crate::multiset::Multiset::iter(self)
            }

            /// `(element, count)` pairs in group order.
            #[inline(always)]
            pub fn entries(&self) -> <Self as $crate::multiset::Multiset<T>>::Entries<'_> {
                $crate::multiset::Multiset::entries(self)
            }

            /// Distinct elements in group order.
            #[inline(always)]
            pub fn element_set(&self) -> $crate::multiset::ElementSet<<Self as $crate::multiset::Multiset<T>>::Entries<'_>> {
                $crate::multiset::Multiset::element_set(self)
            }
        }

        impl<T> $crate::common::Container for $ty<T> {
            const KIND: $crate::common::ContainerKind = $crate::common::ContainerKind::$kind;
        }

        impl<T> std::fmt::Debug for $ty<T>
        where
            T: std::fmt::Debug $(+ $bound)*,
        {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.debug_map().entries(self.entries()).finish()
            }
        }

        impl<'a, T> IntoIterator for &'a $ty<T>
        where
            T: $($bound +)*,
        {
            type Item = &'a T;
            type IntoIter = $crate::multiset::MultisetIter<'a, T, <$ty<T> as $crate::multiset::Multiset<T>>::Entries<'a>>;

            fn into_iter(self) -> Self::IntoIter {
                self.iter()
            }
        }
    };
}

pub mod hash;
pub mod immutable;
pub mod immutable_sorted;
pub mod linked;
pub mod tree;


/// Read access shared by every multiset.
pub trait Multiset<T> {
    type Entries<'a>: Iterator<Item = (&'a T, Count)>
    where
        Self: 'a,
        T: 'a;

    /// Occurrences of `v`, zero if absent.
    fn count(&self, v: &T) -> Count;

    /// Total number of occurrences, duplicates included.
    fn len(&self) -> usize;

    /// Number of distinct elements.
    fn distinct_len(&self) -> usize;

    /// `(element, count)` pairs in group order.
    fn entries<'a>(&'a self) -> Self::Entries<'a>
    where
        T: 'a;

    fn is_empty(&self) -> bool {
        0 == self.len()
    }

    fn contains(&self, v: &T) -> bool {
        0 < self.count(v)
    }

    /// Distinct elements in group order.
    fn element_set<'a>(&'a self) -> ElementSet<Self::Entries<'a>>
    where
        T: 'a,
    {
        ElementSet {
            entries: self.entries(),
        }
    }

    /// Every occurrence, grouped.
    fn iter<'a>(&'a self) -> MultisetIter<'a, T, Self::Entries<'a>>
    where
        T: 'a,
    {
        MultisetIter::new(self.entries(), self.len())
    }
}

/// Expands `(element, count)` pairs into `count` repetitions of each element.
#[derive(Clone, Debug)]
pub struct MultisetIter<'a, T, I> {
    entries: I,
    current: Option<(&'a T, Count)>,
    remaining: usize,
}

impl<'a, T, I> MultisetIter<'a, T, I>
where
    I: Iterator<Item = (&'a T, Count)>,
{
    pub(crate) fn new(entries: I, total: usize) -> Self {
        Self {
            entries,
            current: None,
            remaining: total,
        }
    }
}

impl<'a, T, I> Iterator for MultisetIter<'a, T, I>
where
    I: Iterator<Item = (&'a T, Count)>,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        loop {
            if let Some((v, n)) = self.current.as_mut() {
                if 0 < *n {
                    *n -= 1;
                    self.remaining = self.remaining.saturating_sub(1);
                    return Some(*v);
                }
            }
            self.current = Some(self.entries.next()?);
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T, I> ExactSizeIterator for MultisetIter<'a, T, I> where
    I: Iterator<Item = (&'a T, Count)>
{
}

/// Distinct elements of a multiset.
#[derive(Clone, Debug)]
pub struct ElementSet<I> {
    entries: I,
}

impl<'a, T: 'a, I> Iterator for ElementSet<I>
where
    I: Iterator<Item = (&'a T, Count)>,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.entries.next().map(|(v, _)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

/// Adapts map iterators yielding `(&T, &Count)`.
#[derive(Clone, Debug)]
pub struct MapCounts<I> {
    pub(crate) inner: I,
}

impl<'a, T: 'a, I> Iterator for MapCounts<I>
where
    I: Iterator<Item = (&'a T, &'a Count)>,
{
    type Item = (&'a T, Count);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(v, n)| (v, *n))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

/// Adapts slices of `(T, Count)` pairs.
#[derive(Clone, Debug)]
pub struct SliceCounts<'a, T> {
    pub(crate) inner: std::slice::Iter<'a, (T, Count)>,
}

impl<'a, T> Iterator for SliceCounts<'a, T> {
    type Item = (&'a T, Count);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(v, n)| (v, *n))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for SliceCounts<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(v, n)| (v, *n))
    }
}
