use clap::{Parser, Subcommand};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use std::path::{Path, PathBuf};

/// Look up pairs in a one-to-one table.
///
/// The table is read from a TOML file listing `first`/`second` pairs. Pairs
/// that reuse a key already taken by an earlier pair are dropped with a
/// warning.
#[derive(Debug, Parser, Clone)]
#[command(about, long_about, version)]
pub(crate) struct Cli {
    /// Path to the table file.
    ///
    /// Without one the table is empty.
    #[arg(short, long, value_parser = validate_file)]
    pub(crate) conffile: Option<PathBuf>,

    #[command(subcommand)]
    pub(crate) command: Command,

    #[command(flatten)]
    pub(crate) verbosity: Verbosity<WarnLevel>,
}

#[derive(Debug, Subcommand, Clone, PartialEq, Eq)]
pub(crate) enum Command {
    /// Print every pair, one `first = second` per line.
    List,

    /// Print the partner of a first-side key.
    First { key: String },

    /// Print the partner of a second-side key.
    Second { key: String },

    /// Print the table as TOML, without the dropped pairs.
    Normalize,
}

/// Check if the file exists.
#[inline(always)]
fn validate_file(file: &str) -> Result<PathBuf, String> {
    let path = Path::new(file);
    if path.exists() {
        Ok(path.to_owned())
    } else {
        Err(format!("File not found: {:?}", path))
    }
}
