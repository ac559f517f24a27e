#![forbid(unsafe_code)]

use std::fmt;

/// One of the two key domains of a [`BiMap`](crate::BiMap).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Side {
    /// Keys of type `A`, which also define iteration order.
    First,
    /// Keys of type `B`.
    Second,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Side::First => "first",
            Side::Second => "second",
        })
    }
}

/// Which proposed key(s) of a rejected insertion already belong to a pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Conflict {
    First,
    Second,
    Both,
}

impl Conflict {
    pub(crate) fn from_hits(first: bool, second: bool) -> Option<Self> {
        match (first, second) {
            (false, false) => None,
            (true, false) => Some(Conflict::First),
            (false, true) => Some(Conflict::Second),
            (true, true) => Some(Conflict::Both),
        }
    }

    /// Whether the key on `side` was already taken.
    pub fn involves(self, side: Side) -> bool {
        matches!(
            (self, side),
            (Conflict::Both, _) | (Conflict::First, Side::First) | (Conflict::Second, Side::Second)
        )
    }
}

impl fmt::Display for Conflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Conflict::First => "first key taken",
            Conflict::Second => "second key taken",
            Conflict::Both => "both keys taken",
        })
    }
}
