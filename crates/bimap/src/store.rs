#![forbid(unsafe_code)]

use crate::{
    Conflict, Side, ValidationError,
    index::{KeyIndex, PairId},
};
use slotmap::SlotMap;

/// Canonical storage of one association.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Pair<A, B> {
    pub first: A,
    pub second: B,
}

impl<A, B> Pair<A, B> {
    pub fn refs(&self) -> (&A, &B) {
        (&self.first, &self.second)
    }

    pub fn into_tuple(self) -> (A, B) {
        (self.first, self.second)
    }
}

/// Pair arena plus one index per side.
///
/// Invariant: `forward`, `reverse` and `pairs` always hold the same number of
/// entries, and for every slot `id` holding `(a, b)`, `forward` maps `a` to
/// `id` and `reverse` maps `b` to `id`. Only [`Store::link`] and
/// [`Store::unlink`] mutate single pairs, and each touches all three.
#[derive(Debug, Clone)]
pub(crate) struct Store<A, B, F, R> {
    pairs: SlotMap<PairId, Pair<A, B>>,
    forward: F,
    reverse: R,
}

impl<A, B, F, R> Default for Store<A, B, F, R>
where
    F: Default,
    R: Default,
{
    fn default() -> Self {
        Self {
            pairs: SlotMap::with_key(),
            forward: F::default(),
            reverse: R::default(),
        }
    }
}

impl<A, B, F, R> Store<A, B, F, R>
where
    F: KeyIndex<A>,
    R: KeyIndex<B>,
{
    pub fn with_capacity(capacity: usize) -> Self {
        let mut store = Self {
            pairs: SlotMap::with_capacity_and_key(capacity),
            forward: F::default(),
            reverse: R::default(),
        };
        store.forward.reserve(capacity);
        store.reverse.reserve(capacity);
        store
    }

    pub fn reserve(&mut self, additional: usize) {
        self.pairs.reserve(additional);
        self.forward.reserve(additional);
        self.reverse.reserve(additional);
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn pairs(&self) -> &SlotMap<PairId, Pair<A, B>> {
        &self.pairs
    }

    pub fn forward(&self) -> &F {
        &self.forward
    }

    pub fn reverse(&self) -> &R {
        &self.reverse
    }

    pub fn pair(&self, id: PairId) -> Option<&Pair<A, B>> {
        self.pairs.get(id)
    }

    /// Which of the proposed keys already belong to a pair.
    pub fn conflict(&self, first: &A, second: &B) -> Option<Conflict> {
        Conflict::from_hits(
            self.forward.lookup(first).is_some(),
            self.reverse.lookup(second).is_some(),
        )
    }

    /// Handle of the pair after `id` in forward order.
    pub fn next_of(&self, id: PairId) -> Option<PairId> {
        let pair = self.pairs.get(id)?;
        self.forward.next(&pair.first)
    }

    /// Handle of the pair before `id` in forward order.
    pub fn prev_of(&self, id: PairId) -> Option<PairId> {
        let pair = self.pairs.get(id)?;
        self.forward.prev(&pair.first)
    }

    /// Commit a new pair to the arena and both indices.
    ///
    /// The caller has checked [`Store::conflict`] first.
    pub fn link(&mut self, first: A, second: B) -> PairId
    where
        A: Clone,
        B: Clone,
    {
        debug_assert!(self.conflict(&first, &second).is_none());
        let id = self.pairs.insert(Pair {
            first: first.clone(),
            second: second.clone(),
        });
        self.forward.insert(first, id);
        self.reverse.insert(second, id);
        id
    }

    /// Remove a pair from the arena and both indices. `None` if `id` is stale.
    pub fn unlink(&mut self, id: PairId) -> Option<Pair<A, B>> {
        let pair = self.pairs.remove(id)?;
        self.forward.remove(&pair.first);
        self.reverse.remove(&pair.second);
        Some(pair)
    }

    pub fn clear(&mut self) {
        self.pairs.clear();
        self.forward.clear();
        self.reverse.clear();
    }

    /// Hand out the arena together with the forward walk order.
    pub fn into_parts(self) -> (Vec<PairId>, SlotMap<PairId, Pair<A, B>>) {
        let order = self.forward.ids().collect();
        (order, self.pairs)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        let (pairs, first, second) = (self.pairs.len(), self.forward.len(), self.reverse.len());
        if pairs != first || pairs != second {
            return Err(ValidationError::SizeMismatch {
                pairs,
                first,
                second,
            });
        }

        for (id, pair) in &self.pairs {
            if self.forward.lookup(&pair.first) != Some(id) {
                return Err(ValidationError::BrokenLink { side: Side::First });
            }
            if self.reverse.lookup(&pair.second) != Some(id) {
                return Err(ValidationError::BrokenLink { side: Side::Second });
            }
        }

        check_walk(Side::First, self.forward.ids(), &self.pairs)?;
        check_walk(Side::Second, self.reverse.ids(), &self.pairs)?;
        Ok(())
    }
}

/// Every handle of a walk must be live, and the walk must visit each pair once.
fn check_walk<A, B>(
    side: Side,
    ids: impl Iterator<Item = PairId>,
    pairs: &SlotMap<PairId, Pair<A, B>>,
) -> Result<(), ValidationError> {
    let mut visited = 0;
    for id in ids {
        if !pairs.contains_key(id) {
            return Err(ValidationError::Dangling { side });
        }
        visited += 1;
        if visited > pairs.len() {
            break;
        }
    }
    if visited != pairs.len() {
        return Err(ValidationError::OrderMismatch {
            side,
            visited,
            expected: pairs.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::{HashedIndex, Lookup, OrderedIndex};
    use pretty_assertions::assert_eq;

    type OrderedStore = Store<u32, char, OrderedIndex<u32>, OrderedIndex<char>>;
    type HashedStore = Store<u32, char, HashedIndex<u32>, HashedIndex<char>>;

    #[test]
    fn link_touches_all_three() {
        let mut store = OrderedStore::default();
        let id = store.link(1, 'a');

        assert_eq!(store.len(), 1);
        assert_eq!(store.forward().lookup(&1), Some(id));
        assert_eq!(store.reverse().lookup(&'a'), Some(id));
        assert_eq!(store.pair(id).map(Pair::refs), Some((&1, &'a')));
        assert_eq!(store.validate(), Ok(()));
    }

    #[test]
    fn unlink_touches_all_three() {
        let mut store = HashedStore::with_capacity(4);
        let id = store.link(1, 'a');
        store.link(2, 'b');

        assert_eq!(store.unlink(id).map(Pair::into_tuple), Some((1, 'a')));
        assert_eq!(store.unlink(id), None);
        assert_eq!(store.forward().lookup(&1), None);
        assert_eq!(store.reverse().lookup(&'a'), None);
        assert_eq!(store.len(), 1);
        assert_eq!(store.validate(), Ok(()));
    }

    #[test]
    fn conflict_reports_each_side() {
        let mut store = OrderedStore::default();
        store.link(1, 'a');
        store.link(2, 'b');

        assert_eq!(store.conflict(&3, &'c'), None);
        assert_eq!(store.conflict(&1, &'c'), Some(Conflict::First));
        assert_eq!(store.conflict(&3, &'a'), Some(Conflict::Second));
        assert_eq!(store.conflict(&1, &'b'), Some(Conflict::Both));
    }

    #[test]
    fn neighbours_follow_forward_order() {
        let mut store = OrderedStore::default();
        let two = store.link(2, 'a');
        let one = store.link(1, 'z');

        assert_eq!(store.next_of(one), Some(two));
        assert_eq!(store.prev_of(two), Some(one));
        assert_eq!(store.next_of(two), None);
    }

    #[test]
    fn into_parts_keeps_order() {
        let mut store = OrderedStore::default();
        store.link(3, 'c');
        store.link(1, 'a');
        store.link(2, 'b');

        let (order, pairs) = store.into_parts();
        let firsts: Vec<u32> = order.into_iter().map(|id| pairs[id].first).collect();
        assert_eq!(firsts, vec![1, 2, 3]);
    }

    #[test]
    fn validate_catches_out_of_band_edits() {
        let mut store = OrderedStore::default();
        let id = store.link(1, 'a');
        store.reverse.remove(&'a');

        assert_eq!(
            store.validate(),
            Err(ValidationError::SizeMismatch {
                pairs: 1,
                first: 1,
                second: 0
            })
        );

        store.reverse.insert('b', id);
        assert_eq!(
            store.validate(),
            Err(ValidationError::BrokenLink { side: Side::Second })
        );
    }
}
