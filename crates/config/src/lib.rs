#![forbid(unsafe_code)]

mod backing;
mod error;
mod table;

pub use backing::Backing;
pub use error::Error;
pub use table::{Entry, Table};

use serde::{Deserialize, Serialize};
use std::{fs, path::Path};
use tracing::debug;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub table: Table,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a config from a TOML file. Missing fields take their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let config = Self::from_toml(&fs::read_to_string(path)?)?;
        debug!(
            ?path,
            backing = ?config.table.backing,
            pairs = config.table.pairs.len(),
            "loaded config"
        );
        Ok(config)
    }

    pub fn from_toml(text: &str) -> Result<Self, Error> {
        Ok(toml_edit::de::from_str(text)?)
    }

    pub fn to_toml(&self) -> Result<String, Error> {
        Ok(toml_edit::ser::to_string_pretty(self)?)
    }
}
