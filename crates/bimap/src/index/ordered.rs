#![forbid(unsafe_code)]

use super::{KeyIndex, Lookup, PairId, private};
use std::{
    borrow::Borrow,
    collections::{BTreeMap, btree_map},
    ops::Bound,
};

/// Comparison-based index. Walks keys in ascending order.
#[derive(Debug, Clone)]
pub struct OrderedIndex<K> {
    map: BTreeMap<K, PairId>,
}

impl<K> Default for OrderedIndex<K> {
    fn default() -> Self {
        Self {
            map: BTreeMap::new(),
        }
    }
}

impl<K> private::Sealed for OrderedIndex<K> {}

impl<K, Q> Lookup<Q> for OrderedIndex<K>
where
    K: Borrow<Q> + Ord,
    Q: Ord + ?Sized,
{
    #[inline]
    fn lookup(&self, key: &Q) -> Option<PairId> {
        self.map.get(key).copied()
    }
}

impl<K: Ord> KeyIndex<K> for OrderedIndex<K> {
    type Ids<'a>
        = OrderedIds<'a, K>
    where
        Self: 'a;

    fn len(&self) -> usize {
        self.map.len()
    }

    fn insert(&mut self, key: K, id: PairId) {
        let old = self.map.insert(key, id);
        debug_assert!(old.is_none(), "ordered index already held the key");
    }

    fn remove(&mut self, key: &K) -> Option<PairId> {
        self.map.remove(key)
    }

    fn clear(&mut self) {
        self.map.clear();
    }

    // B-trees allocate per node; nothing to reserve.
    fn reserve(&mut self, _additional: usize) {}

    fn first(&self) -> Option<PairId> {
        self.map.first_key_value().map(|(_, id)| *id)
    }

    fn last(&self) -> Option<PairId> {
        self.map.last_key_value().map(|(_, id)| *id)
    }

    fn next(&self, key: &K) -> Option<PairId> {
        self.map
            .range((Bound::Excluded(key), Bound::Unbounded))
            .next()
            .map(|(_, id)| *id)
    }

    fn prev(&self, key: &K) -> Option<PairId> {
        self.map
            .range((Bound::Unbounded, Bound::Excluded(key)))
            .next_back()
            .map(|(_, id)| *id)
    }

    fn ids(&self) -> Self::Ids<'_> {
        OrderedIds(self.map.range::<K, _>(..))
    }

    fn ids_from(&self, key: &K) -> Self::Ids<'_> {
        OrderedIds(self.map.range((Bound::Included(key), Bound::Unbounded)))
    }
}

/// Handles of an [`OrderedIndex`] in key order.
pub struct OrderedIds<'a, K>(btree_map::Range<'a, K, PairId>);

impl<K> Iterator for OrderedIds<'_, K> {
    type Item = PairId;

    fn next(&mut self) -> Option<PairId> {
        self.0.next().map(|(_, id)| *id)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<K> DoubleEndedIterator for OrderedIds<'_, K> {
    fn next_back(&mut self) -> Option<PairId> {
        self.0.next_back().map(|(_, id)| *id)
    }
}
