use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("no pair holds {key:?}: {source}")]
    Lookup { key: String, source: bimap::Error },

    #[error("normalize failed: {0}")]
    Render(#[from] config::Error),

    #[error("failed to write output: {0}")]
    Write(#[from] io::Error),
}
