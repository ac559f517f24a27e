#![forbid(unsafe_code)]

use crate::{Conflict, index::PairId};

/// Position of one pair inside a [`BiMap`](crate::BiMap).
///
/// A locator stays valid until its own pair is erased, no matter what else is
/// inserted or removed. Locators obtained from either side compare equal when
/// they address the same pair. Once the pair is gone the locator is stale: it
/// dereferences to nothing, even if an equal pair is inserted again later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Locator(pub(crate) PairId);

/// Outcome of [`BiMap::insert`](crate::BiMap::insert).
///
/// A rejection is a normal result, not an error: the map is left untouched and
/// the proposed keys are handed back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Insertion<A, B> {
    Inserted(Locator),
    Rejected { first: A, second: B, conflict: Conflict },
}

impl<A, B> Insertion<A, B> {
    pub fn is_inserted(&self) -> bool {
        matches!(self, Insertion::Inserted(_))
    }

    pub fn locator(&self) -> Option<Locator> {
        match self {
            Insertion::Inserted(locator) => Some(*locator),
            Insertion::Rejected { .. } => None,
        }
    }

    pub fn conflict(&self) -> Option<Conflict> {
        match self {
            Insertion::Inserted(_) => None,
            Insertion::Rejected { conflict, .. } => Some(*conflict),
        }
    }

    /// The new pair's locator, or the rejected keys.
    pub fn into_result(self) -> Result<Locator, (A, B)> {
        match self {
            Insertion::Inserted(locator) => Ok(locator),
            Insertion::Rejected { first, second, .. } => Err((first, second)),
        }
    }
}
