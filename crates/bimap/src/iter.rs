#![forbid(unsafe_code)]

use crate::{
    index::{KeyIndex, PairId},
    store::Pair,
};
use slotmap::SlotMap;
use std::vec;

/// Borrowing iterator over the pairs of a [`BiMap`](crate::BiMap), in the
/// order of the first side's index.
pub struct Iter<'a, A, B, F>
where
    F: KeyIndex<A> + 'a,
{
    pub(crate) ids: F::Ids<'a>,
    pub(crate) pairs: &'a SlotMap<PairId, Pair<A, B>>,
    pub(crate) remaining: usize,
}

impl<'a, A, B, F: KeyIndex<A>> Iterator for Iter<'a, A, B, F> {
    type Item = (&'a A, &'a B);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.ids.next()?;
        self.remaining = self.remaining.saturating_sub(1);
        self.pairs.get(id).map(Pair::refs)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<A, B, F: KeyIndex<A>> DoubleEndedIterator for Iter<'_, A, B, F> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let id = self.ids.next_back()?;
        self.remaining = self.remaining.saturating_sub(1);
        self.pairs.get(id).map(Pair::refs)
    }
}

impl<A, B, F: KeyIndex<A>> ExactSizeIterator for Iter<'_, A, B, F> {}

/// Borrowing iterator that starts at a [`Locator`](crate::Locator).
///
/// Created by [`BiMap::iter_from`](crate::BiMap::iter_from). Empty when the
/// locator is stale.
pub struct IterFrom<'a, A, B, F>
where
    F: KeyIndex<A> + 'a,
{
    pub(crate) ids: Option<F::Ids<'a>>,
    pub(crate) pairs: &'a SlotMap<PairId, Pair<A, B>>,
}

impl<'a, A, B, F: KeyIndex<A>> Iterator for IterFrom<'a, A, B, F> {
    type Item = (&'a A, &'a B);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.ids.as_mut()?.next()?;
        self.pairs.get(id).map(Pair::refs)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let upper = self.ids.as_ref().map_or(0, |_| self.pairs.len());
        (0, Some(upper))
    }
}

impl<A, B, F: KeyIndex<A>> DoubleEndedIterator for IterFrom<'_, A, B, F> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let id = self.ids.as_mut()?.next_back()?;
        self.pairs.get(id).map(Pair::refs)
    }
}

/// Owning iterator over the pairs of a [`BiMap`](crate::BiMap), in the order
/// of the first side's index.
pub struct IntoIter<A, B> {
    pub(crate) order: vec::IntoIter<PairId>,
    pub(crate) pairs: SlotMap<PairId, Pair<A, B>>,
}

impl<A, B> Iterator for IntoIter<A, B> {
    type Item = (A, B);

    fn next(&mut self) -> Option<(A, B)> {
        let id = self.order.next()?;
        self.pairs.remove(id).map(Pair::into_tuple)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.order.size_hint()
    }
}

impl<A, B> DoubleEndedIterator for IntoIter<A, B> {
    fn next_back(&mut self) -> Option<(A, B)> {
        let id = self.order.next_back()?;
        self.pairs.remove(id).map(Pair::into_tuple)
    }
}

impl<A, B> ExactSizeIterator for IntoIter<A, B> {}
