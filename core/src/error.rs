//! Error type shared by the query paths and configuration loading.
use std::path::PathBuf;

/// Errors surfaced by `wordtrie-core`.
///
/// "No word has this prefix" is not an error: prefix queries return `None`
/// for that case so callers can fall back to correction.
#[derive(Debug, thiserror::Error)]
pub enum SuggestError {
    /// The edit-distance row buffers could not be allocated.
    #[error("could not allocate {cells} edit-distance cells")]
    ResourceExhausted { cells: usize },

    #[error("failed to read config {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("failed to write config {}: {source}", .path.display())]
    ConfigWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, SuggestError>;
