#![forbid(unsafe_code)]

use crate::{
    Error, Insertion, Locator, Side, ValidationError,
    index::{HashedIndex, KeyIndex, Lookup, OrderedIndex},
    iter::{IntoIter, Iter, IterFrom},
    store::{Pair, Store},
};
use std::{fmt, mem};
use tracing::trace;

/// A one-to-one map between keys of type `A` (the first side) and keys of
/// type `B` (the second side).
///
/// `F` and `R` pick the index behind each side, [`OrderedIndex`] or
/// [`HashedIndex`]. The first side's index decides the iteration order.
/// See [`BiBTreeMap`] and [`BiHashMap`] for the common combinations.
#[derive(Clone)]
pub struct BiMap<A, B, F = OrderedIndex<A>, R = OrderedIndex<B>> {
    store: Store<A, B, F, R>,
}

/// Both sides ordered; iterates in ascending order of the first key.
pub type BiBTreeMap<A, B> = BiMap<A, B, OrderedIndex<A>, OrderedIndex<B>>;

/// Both sides hashed; iterates in insertion order.
pub type BiHashMap<A, B> = BiMap<A, B, HashedIndex<A>, HashedIndex<B>>;

impl<A, B, F, R> BiMap<A, B, F, R>
where
    F: KeyIndex<A>,
    R: KeyIndex<B>,
{
    pub fn new() -> Self {
        Self {
            store: Store::default(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            store: Store::with_capacity(capacity),
        }
    }

    pub fn reserve(&mut self, additional: usize) {
        self.store.reserve(additional);
    }

    /// Number of pairs.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains_first<Q>(&self, key: &Q) -> bool
    where
        F: Lookup<Q>,
        Q: ?Sized,
    {
        self.store.forward().lookup(key).is_some()
    }

    pub fn contains_second<Q>(&self, key: &Q) -> bool
    where
        R: Lookup<Q>,
        Q: ?Sized,
    {
        self.store.reverse().lookup(key).is_some()
    }

    /// Partner of a first-side key, or `None` if the key is absent.
    pub fn get_by_first<Q>(&self, key: &Q) -> Option<&B>
    where
        F: Lookup<Q>,
        Q: ?Sized,
    {
        let id = self.store.forward().lookup(key)?;
        self.store.pair(id).map(|pair| &pair.second)
    }

    /// Partner of a second-side key, or `None` if the key is absent.
    pub fn get_by_second<Q>(&self, key: &Q) -> Option<&A>
    where
        R: Lookup<Q>,
        Q: ?Sized,
    {
        let id = self.store.reverse().lookup(key)?;
        self.store.pair(id).map(|pair| &pair.first)
    }

    /// Partner of a first-side key.
    ///
    /// Use this when the key is expected to be present; use
    /// [`get_by_first`](Self::get_by_first) to test for membership.
    ///
    /// ```
    /// # use bimap::{BiBTreeMap, Error, Side};
    /// let map = BiBTreeMap::from([(1, 'a')]);
    /// assert_eq!(map.at_first(&1), Ok(&'a'));
    /// assert_eq!(map.at_first(&2), Err(Error::NotFound { side: Side::First }));
    /// ```
    pub fn at_first<Q>(&self, key: &Q) -> Result<&B, Error>
    where
        F: Lookup<Q>,
        Q: ?Sized,
    {
        self.get_by_first(key).ok_or(Error::NotFound { side: Side::First })
    }

    /// Partner of a second-side key. Fails like [`at_first`](Self::at_first).
    pub fn at_second<Q>(&self, key: &Q) -> Result<&A, Error>
    where
        R: Lookup<Q>,
        Q: ?Sized,
    {
        self.get_by_second(key).ok_or(Error::NotFound { side: Side::Second })
    }

    pub fn find_by_first<Q>(&self, key: &Q) -> Option<Locator>
    where
        F: Lookup<Q>,
        Q: ?Sized,
    {
        self.store.forward().lookup(key).map(Locator)
    }

    /// Locator of the pair holding a second-side key.
    ///
    /// The result is the same locator [`find_by_first`](Self::find_by_first)
    /// returns for the partner, and walks in first-side order.
    pub fn find_by_second<Q>(&self, key: &Q) -> Option<Locator>
    where
        R: Lookup<Q>,
        Q: ?Sized,
    {
        self.store.reverse().lookup(key).map(Locator)
    }

    /// The pair a locator points at, or `None` if the locator is stale.
    pub fn get(&self, locator: Locator) -> Option<(&A, &B)> {
        self.store.pair(locator.0).map(Pair::refs)
    }

    pub fn first(&self) -> Option<(&A, &B)> {
        self.get(self.first_locator()?)
    }

    pub fn last(&self) -> Option<(&A, &B)> {
        self.get(self.last_locator()?)
    }

    /// Locator of the first pair in iteration order. `None` means the map is
    /// empty.
    pub fn first_locator(&self) -> Option<Locator> {
        self.store.forward().first().map(Locator)
    }

    pub fn last_locator(&self) -> Option<Locator> {
        self.store.forward().last().map(Locator)
    }

    /// Locator of the pair after `locator`. `None` past the end, or when
    /// `locator` is stale.
    pub fn next_locator(&self, locator: Locator) -> Option<Locator> {
        self.store.next_of(locator.0).map(Locator)
    }

    /// Locator of the pair before `locator`. `None` before the start, or when
    /// `locator` is stale.
    pub fn prev_locator(&self, locator: Locator) -> Option<Locator> {
        self.store.prev_of(locator.0).map(Locator)
    }

    pub fn iter(&self) -> Iter<'_, A, B, F> {
        Iter {
            ids: self.store.forward().ids(),
            pairs: self.store.pairs(),
            remaining: self.len(),
        }
    }

    /// Iterate from the pair at `locator` (inclusive) to the end.
    pub fn iter_from(&self, locator: Locator) -> IterFrom<'_, A, B, F> {
        let ids = self
            .store
            .pair(locator.0)
            .map(|pair| self.store.forward().ids_from(&pair.first));
        IterFrom {
            ids,
            pairs: self.store.pairs(),
        }
    }

    /// Associate `first` with `second`.
    ///
    /// If either key already belongs to a pair the map is left unchanged and
    /// the keys come back in [`Insertion::Rejected`].
    ///
    /// ```
    /// # use bimap::{BiBTreeMap, Conflict, Insertion};
    /// let mut map = BiBTreeMap::new();
    /// assert!(map.insert(1, "x").is_inserted());
    /// assert_eq!(
    ///     map.insert(2, "x"),
    ///     Insertion::Rejected { first: 2, second: "x", conflict: Conflict::Second },
    /// );
    /// assert_eq!(map.get_by_second("x"), Some(&1));
    /// ```
    pub fn insert(&mut self, first: A, second: B) -> Insertion<A, B>
    where
        A: Clone,
        B: Clone,
    {
        if let Some(conflict) = self.store.conflict(&first, &second) {
            trace!(%conflict, "insertion rejected");
            return Insertion::Rejected {
                first,
                second,
                conflict,
            };
        }
        let id = self.store.link(first, second);
        trace!(len = self.len(), "pair inserted");
        Insertion::Inserted(Locator(id))
    }

    /// Remove the pair at `locator` and return the locator of the pair that
    /// followed it, so erasure can be chained while walking the map.
    ///
    /// # Panics
    ///
    /// Panics if `locator` is stale. [`try_erase`](Self::try_erase) does not.
    ///
    /// ```
    /// # use bimap::BiBTreeMap;
    /// let mut map: BiBTreeMap<u32, char> = (1..=6).zip('a'..).collect();
    /// let mut cursor = map.first_locator();
    /// while let Some(locator) = cursor {
    ///     let even = map.get(locator).is_some_and(|(n, _)| n % 2 == 0);
    ///     cursor = if even {
    ///         map.erase(locator)
    ///     } else {
    ///         map.next_locator(locator)
    ///     };
    /// }
    /// assert_eq!(map.iter().collect::<Vec<_>>(), [(&1, &'a'), (&3, &'c'), (&5, &'e')]);
    /// ```
    pub fn erase(&mut self, locator: Locator) -> Option<Locator> {
        let next = self.store.next_of(locator.0);
        if self.store.unlink(locator.0).is_none() {
            panic!("BiMap::erase called with a stale locator");
        }
        trace!(len = self.len(), "pair erased");
        next.map(Locator)
    }

    /// Remove the pair at `locator` and hand it back. `None` if the locator is
    /// stale.
    pub fn try_erase(&mut self, locator: Locator) -> Option<(A, B)> {
        let pair = self.store.unlink(locator.0)?;
        trace!(len = self.len(), "pair erased");
        Some(pair.into_tuple())
    }

    /// Remove every pair from `first` up to, but not including, `last`.
    /// `last = None` removes through the end. Returns `last`.
    ///
    /// # Panics
    ///
    /// Panics, before removing anything, if a locator is stale or `last` does
    /// not come at or after `first` in iteration order.
    pub fn erase_range(&mut self, first: Locator, last: Option<Locator>) -> Option<Locator> {
        let mut doomed = Vec::new();
        let mut cursor = Some(first);
        while cursor != last {
            let Some(locator) = cursor else {
                panic!("BiMap::erase_range: `last` is not reachable from `first`");
            };
            if self.store.pair(locator.0).is_none() {
                panic!("BiMap::erase_range called with a stale locator");
            }
            doomed.push(locator.0);
            cursor = self.next_locator(locator);
        }

        for id in &doomed {
            self.store.unlink(*id);
        }
        trace!(removed = doomed.len(), len = self.len(), "range erased");
        last
    }

    /// Remove the pair holding a first-side key and hand it back.
    pub fn remove_by_first<Q>(&mut self, key: &Q) -> Option<(A, B)>
    where
        F: Lookup<Q>,
        Q: ?Sized,
    {
        let id = self.store.forward().lookup(key)?;
        self.try_erase(Locator(id))
    }

    /// Remove the pair holding a second-side key and hand it back.
    pub fn remove_by_second<Q>(&mut self, key: &Q) -> Option<(A, B)>
    where
        R: Lookup<Q>,
        Q: ?Sized,
    {
        let id = self.store.reverse().lookup(key)?;
        self.try_erase(Locator(id))
    }

    /// Remove the pair holding a first-side key. Returns how many pairs were
    /// removed, 0 or 1.
    pub fn erase_by_first<Q>(&mut self, key: &Q) -> usize
    where
        F: Lookup<Q>,
        Q: ?Sized,
    {
        usize::from(self.remove_by_first(key).is_some())
    }

    /// Remove the pair holding a second-side key. Returns how many pairs were
    /// removed, 0 or 1.
    pub fn erase_by_second<Q>(&mut self, key: &Q) -> usize
    where
        R: Lookup<Q>,
        Q: ?Sized,
    {
        usize::from(self.remove_by_second(key).is_some())
    }

    /// Keep only the pairs for which `keep` returns `true`.
    pub fn retain(&mut self, mut keep: impl FnMut(&A, &B) -> bool) {
        let doomed: Vec<_> = self
            .store
            .forward()
            .ids()
            .filter(|id| {
                self.store
                    .pair(*id)
                    .is_some_and(|pair| !keep(&pair.first, &pair.second))
            })
            .collect();

        for id in &doomed {
            self.store.unlink(*id);
        }
        trace!(removed = doomed.len(), len = self.len(), "pairs retained");
    }

    /// Take every pair out, in iteration order, leaving the map empty.
    pub fn drain(&mut self) -> IntoIter<A, B> {
        let (order, pairs) = mem::take(&mut self.store).into_parts();
        IntoIter {
            order: order.into_iter(),
            pairs,
        }
    }

    pub fn clear(&mut self) {
        let len = self.len();
        self.store.clear();
        trace!(removed = len, "map cleared");
    }

    /// Check the internal invariants.
    #[doc(hidden)]
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.store.validate()
    }
}

impl<A, B, F, R> Default for BiMap<A, B, F, R>
where
    F: KeyIndex<A>,
    R: KeyIndex<B>,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<A, B, F, R> fmt::Debug for BiMap<A, B, F, R>
where
    A: fmt::Debug,
    B: fmt::Debug,
    F: KeyIndex<A>,
    R: KeyIndex<B>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Two maps are equal when they hold the same pairs, whatever their order.
impl<A, B, F, R> PartialEq for BiMap<A, B, F, R>
where
    B: PartialEq,
    F: KeyIndex<A>,
    R: KeyIndex<B>,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(first, second)| other.get_by_first(first) == Some(second))
    }
}

impl<A, B, F, R> Eq for BiMap<A, B, F, R>
where
    B: Eq,
    F: KeyIndex<A>,
    R: KeyIndex<B>,
{
}

/// Pairs whose keys are already taken are skipped.
impl<A, B, F, R> Extend<(A, B)> for BiMap<A, B, F, R>
where
    A: Clone,
    B: Clone,
    F: KeyIndex<A>,
    R: KeyIndex<B>,
{
    fn extend<I: IntoIterator<Item = (A, B)>>(&mut self, iter: I) {
        for (first, second) in iter {
            let _ = self.insert(first, second);
        }
    }
}

/// Pairs whose keys are already taken are skipped.
impl<A, B, F, R> FromIterator<(A, B)> for BiMap<A, B, F, R>
where
    A: Clone,
    B: Clone,
    F: KeyIndex<A>,
    R: KeyIndex<B>,
{
    fn from_iter<I: IntoIterator<Item = (A, B)>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut map = Self::with_capacity(iter.size_hint().0);
        map.extend(iter);
        map
    }
}

impl<A, B, F, R, const N: usize> From<[(A, B); N]> for BiMap<A, B, F, R>
where
    A: Clone,
    B: Clone,
    F: KeyIndex<A>,
    R: KeyIndex<B>,
{
    fn from(pairs: [(A, B); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl<A, B, F, R> IntoIterator for BiMap<A, B, F, R>
where
    F: KeyIndex<A>,
    R: KeyIndex<B>,
{
    type Item = (A, B);
    type IntoIter = IntoIter<A, B>;

    fn into_iter(self) -> IntoIter<A, B> {
        let (order, pairs) = self.store.into_parts();
        IntoIter {
            order: order.into_iter(),
            pairs,
        }
    }
}

impl<'a, A, B, F, R> IntoIterator for &'a BiMap<A, B, F, R>
where
    F: KeyIndex<A>,
    R: KeyIndex<B>,
{
    type Item = (&'a A, &'a B);
    type IntoIter = Iter<'a, A, B, F>;

    fn into_iter(self) -> Iter<'a, A, B, F> {
        self.iter()
    }
}
