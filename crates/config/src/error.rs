#![forbid(unsafe_code)]

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read table file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed table file: {0}")]
    TomlDe(#[from] toml_edit::de::Error),

    #[error("failed to render table as TOML: {0}")]
    TomlSer(#[from] toml_edit::ser::Error),
}
