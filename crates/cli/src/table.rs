use crate::cli::Command;
use crate::error::Error;
use bimap::index::KeyIndex;
use bimap::{BiMap, HashedIndex, Insertion, OrderedIndex};
use config::{Backing, Config, Entry, Table};
use std::io::Write;
use tracing::{debug, warn};

/// Build the map described by `table` and answer `command` into `out`.
pub(crate) fn execute(
    table: &Table,
    command: &Command,
    out: &mut impl Write,
) -> Result<(), Error> {
    match table.backing {
        Backing::Ordered => run::<OrderedIndex<String>, OrderedIndex<String>>(table, command, out),
        Backing::Hashed => run::<HashedIndex<String>, HashedIndex<String>>(table, command, out),
    }
}

fn run<F, R>(table: &Table, command: &Command, out: &mut impl Write) -> Result<(), Error>
where
    F: KeyIndex<String>,
    R: KeyIndex<String>,
{
    let map = build::<F, R>(&table.pairs);

    match command {
        Command::List => {
            for (first, second) in &map {
                writeln!(out, "{first} = {second}")?;
            }
        }
        Command::First { key } => {
            let second = map.at_first(key).map_err(|source| Error::Lookup {
                key: key.clone(),
                source,
            })?;
            writeln!(out, "{second}")?;
        }
        Command::Second { key } => {
            let first = map.at_second(key).map_err(|source| Error::Lookup {
                key: key.clone(),
                source,
            })?;
            writeln!(out, "{first}")?;
        }
        Command::Normalize => {
            let config = Config {
                table: Table {
                    backing: table.backing,
                    pairs: map
                        .iter()
                        .map(|(first, second)| Entry::new(first.as_str(), second.as_str()))
                        .collect(),
                },
            };
            write!(out, "{}", config.to_toml()?)?;
        }
    }
    Ok(())
}

/// Insert entries in file order; the first pair to claim a key wins.
fn build<F, R>(entries: &[Entry]) -> BiMap<String, String, F, R>
where
    F: KeyIndex<String>,
    R: KeyIndex<String>,
{
    let mut map = BiMap::with_capacity(entries.len());
    for entry in entries {
        let outcome = map.insert(entry.first.clone(), entry.second.clone());
        if let Insertion::Rejected {
            first,
            second,
            conflict,
        } = outcome
        {
            warn!(%first, %second, %conflict, "dropping pair");
        }
    }
    debug!(pairs = map.len(), dropped = entries.len() - map.len(), "table built");
    map
}
