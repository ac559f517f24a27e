#![forbid(unsafe_code)]

use super::{KeyIndex, Lookup, PairId, private};
use slotmap::SecondaryMap;
use std::{borrow::Borrow, collections::HashMap, hash::Hash};

#[derive(Debug, Clone, Copy, Default)]
struct Link {
    prev: Option<PairId>,
    next: Option<PairId>,
}

/// Hash-based index. Walks keys in insertion order.
///
/// Lookups go through a `HashMap`. The walk order is a doubly linked list
/// threaded through the pair handles, so removing an entry never moves the
/// others and neighbours are found in O(1).
#[derive(Debug, Clone)]
pub struct HashedIndex<K> {
    map: HashMap<K, PairId>,
    links: SecondaryMap<PairId, Link>,
    head: Option<PairId>,
    tail: Option<PairId>,
}

impl<K> Default for HashedIndex<K> {
    fn default() -> Self {
        Self {
            map: HashMap::new(),
            links: SecondaryMap::new(),
            head: None,
            tail: None,
        }
    }
}

impl<K> HashedIndex<K> {
    fn unlink(&mut self, id: PairId) {
        let Some(link) = self.links.remove(id) else {
            return;
        };
        match link.prev.and_then(|prev| self.links.get_mut(prev)) {
            Some(prev) => prev.next = link.next,
            None => self.head = link.next,
        }
        match link.next.and_then(|next| self.links.get_mut(next)) {
            Some(next) => next.prev = link.prev,
            None => self.tail = link.prev,
        }
    }
}

impl<K> private::Sealed for HashedIndex<K> {}

impl<K, Q> Lookup<Q> for HashedIndex<K>
where
    K: Borrow<Q> + Hash + Eq,
    Q: Hash + Eq + ?Sized,
{
    #[inline]
    fn lookup(&self, key: &Q) -> Option<PairId> {
        self.map.get(key).copied()
    }
}

impl<K: Hash + Eq> KeyIndex<K> for HashedIndex<K> {
    type Ids<'a>
        = HashedIds<'a>
    where
        Self: 'a;

    fn len(&self) -> usize {
        self.map.len()
    }

    fn insert(&mut self, key: K, id: PairId) {
        let old = self.map.insert(key, id);
        debug_assert!(old.is_none(), "hashed index already held the key");

        self.links.insert(
            id,
            Link {
                prev: self.tail,
                next: None,
            },
        );
        match self.tail.and_then(|tail| self.links.get_mut(tail)) {
            Some(tail) => tail.next = Some(id),
            None => self.head = Some(id),
        }
        self.tail = Some(id);
    }

    fn remove(&mut self, key: &K) -> Option<PairId> {
        let id = self.map.remove(key)?;
        self.unlink(id);
        Some(id)
    }

    fn clear(&mut self) {
        self.map.clear();
        self.links.clear();
        self.head = None;
        self.tail = None;
    }

    // Links are keyed by arena slot and grow with the arena.
    fn reserve(&mut self, additional: usize) {
        self.map.reserve(additional);
    }

    fn first(&self) -> Option<PairId> {
        self.head
    }

    fn last(&self) -> Option<PairId> {
        self.tail
    }

    fn next(&self, key: &K) -> Option<PairId> {
        let id = self.map.get(key)?;
        self.links.get(*id)?.next
    }

    fn prev(&self, key: &K) -> Option<PairId> {
        let id = self.map.get(key)?;
        self.links.get(*id)?.prev
    }

    fn ids(&self) -> Self::Ids<'_> {
        HashedIds {
            links: &self.links,
            front: self.head,
            back: self.tail,
        }
    }

    fn ids_from(&self, key: &K) -> Self::Ids<'_> {
        let front = self.map.get(key).copied();
        HashedIds {
            links: &self.links,
            front,
            back: front.and(self.tail),
        }
    }
}

/// Handles of a [`HashedIndex`] in insertion order.
pub struct HashedIds<'a> {
    links: &'a SecondaryMap<PairId, Link>,
    front: Option<PairId>,
    back: Option<PairId>,
}

impl HashedIds<'_> {
    /// Empties the walk once both ends point at the same entry.
    fn ends_met(&mut self) -> bool {
        if self.front == self.back {
            self.front = None;
            self.back = None;
            return true;
        }
        false
    }
}

impl Iterator for HashedIds<'_> {
    type Item = PairId;

    fn next(&mut self) -> Option<PairId> {
        let id = self.front?;
        if !self.ends_met() {
            self.front = self.links.get(id).and_then(|link| link.next);
        }
        Some(id)
    }
}

impl DoubleEndedIterator for HashedIds<'_> {
    fn next_back(&mut self) -> Option<PairId> {
        let id = self.back?;
        if !self.ends_met() {
            self.back = self.links.get(id).and_then(|link| link.prev);
        }
        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use slotmap::SlotMap;

    fn ids(n: usize) -> Vec<PairId> {
        let mut arena = SlotMap::<PairId, ()>::with_key();
        (0..n).map(|_| arena.insert(())).collect()
    }

    fn filled(keys: &[&'static str]) -> (HashedIndex<&'static str>, Vec<PairId>) {
        let ids = ids(keys.len());
        let mut index = HashedIndex::default();
        for (key, id) in keys.iter().zip(&ids) {
            index.insert(*key, *id);
        }
        (index, ids)
    }

    #[test]
    fn walks_in_insertion_order() {
        let (index, ids) = filled(&["c", "a", "b"]);

        assert_eq!(index.ids().collect::<Vec<_>>(), ids);
        assert_eq!(
            index.ids().rev().collect::<Vec<_>>(),
            ids.iter().rev().copied().collect::<Vec<_>>()
        );
        assert_eq!(index.first(), Some(ids[0]));
        assert_eq!(index.last(), Some(ids[2]));
    }

    #[test]
    fn removal_keeps_remaining_order() {
        let (mut index, ids) = filled(&["a", "b", "c", "d"]);

        assert_eq!(index.remove(&"b"), Some(ids[1]));
        assert_eq!(index.ids().collect::<Vec<_>>(), vec![ids[0], ids[2], ids[3]]);
        assert_eq!(index.next(&"a"), Some(ids[2]));
        assert_eq!(index.prev(&"c"), Some(ids[0]));

        assert_eq!(index.remove(&"a"), Some(ids[0]));
        assert_eq!(index.remove(&"d"), Some(ids[3]));
        assert_eq!(index.first(), Some(ids[2]));
        assert_eq!(index.last(), Some(ids[2]));
        assert_eq!(index.remove(&"d"), None);
    }

    #[test]
    fn front_and_back_meet() {
        let (index, ids) = filled(&["a", "b", "c"]);

        let mut walk = index.ids();
        assert_eq!(walk.next(), Some(ids[0]));
        assert_eq!(walk.next_back(), Some(ids[2]));
        assert_eq!(walk.next(), Some(ids[1]));
        assert_eq!(walk.next(), None);
        assert_eq!(walk.next_back(), None);
    }

    #[test]
    fn walk_from_key() {
        let (index, ids) = filled(&["a", "b", "c"]);

        assert_eq!(index.ids_from(&"b").collect::<Vec<_>>(), vec![ids[1], ids[2]]);
        assert_eq!(index.ids_from(&"z").count(), 0);
    }

    #[test]
    fn reserve_keeps_walk() {
        let ids = ids(3);
        let mut index = HashedIndex::default();
        index.insert("a", ids[0]);
        index.insert("b", ids[1]);
        index.reserve(64);
        index.insert("c", ids[2]);

        assert_eq!(index.ids().collect::<Vec<_>>(), ids);
        assert_eq!(index.prev(&"c"), Some(ids[1]));
        assert_eq!(index.last(), Some(ids[2]));
    }

    #[test]
    fn clear_resets_ends() {
        let (mut index, _) = filled(&["a", "b"]);
        index.clear();

        assert!(index.is_empty());
        assert_eq!(index.first(), None);
        assert_eq!(index.ids().count(), 0);
    }
}
