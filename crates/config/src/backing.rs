#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};

/// Index structure used for both sides of the table.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Backing {
    /// Sorted by key; pairs are listed in first-key order.
    #[default]
    Ordered,
    /// Hashed; pairs are listed in the order they were accepted.
    Hashed,
}
