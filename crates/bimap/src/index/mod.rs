#![forbid(unsafe_code)]

//! Backing index structures.
//!
//! Each side of a [`BiMap`](crate::BiMap) is indexed by one of these. An index
//! maps a key to the [`PairId`] of the arena slot holding the pair, and knows
//! how to walk its keys in order. The index of the first side defines the
//! iteration order of the whole map.

mod hashed;
mod ordered;

pub use hashed::{HashedIds, HashedIndex};
pub use ordered::{OrderedIds, OrderedIndex};

use slotmap::new_key_type;

new_key_type! {
    /// Handle of a pair slot. Both indices refer to a pair through it.
    pub struct PairId;
}

/// Point lookup by any borrowed form of the key.
pub trait Lookup<Q: ?Sized> {
    fn lookup(&self, key: &Q) -> Option<PairId>;
}

/// A key → [`PairId`] index with a defined walk order.
///
/// Implemented by [`OrderedIndex`] and [`HashedIndex`] only.
pub trait KeyIndex<K>: Lookup<K> + Default + private::Sealed {
    type Ids<'a>: DoubleEndedIterator<Item = PairId>
    where
        Self: 'a;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Add `key`. The caller guarantees it is not present yet.
    fn insert(&mut self, key: K, id: PairId);

    fn remove(&mut self, key: &K) -> Option<PairId>;

    fn clear(&mut self);

    fn reserve(&mut self, additional: usize);

    fn first(&self) -> Option<PairId>;

    fn last(&self) -> Option<PairId>;

    /// Entry that follows `key` in walk order.
    fn next(&self, key: &K) -> Option<PairId>;

    /// Entry that precedes `key` in walk order.
    fn prev(&self, key: &K) -> Option<PairId>;

    /// All entries in walk order.
    fn ids(&self) -> Self::Ids<'_>;

    /// Entries from `key` (inclusive) to the end, in walk order.
    fn ids_from(&self, key: &K) -> Self::Ids<'_>;
}

mod private {
    pub trait Sealed {}
}
