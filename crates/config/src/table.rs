#![forbid(unsafe_code)]

use crate::Backing;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Table {
    pub backing: Backing,

    /// Candidate pairs, in insertion order. Later entries that reuse a key are
    /// dropped when the table is built.
    pub pairs: Vec<Entry>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Entry {
    pub first: String,
    pub second: String,
}

impl Entry {
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
        }
    }
}
