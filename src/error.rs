//! Crate-wide error type

/// Errors surfaced by refinar operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Plot specification could not be read, parsed, or validated
    #[error("Config error: {0}")]
    Config(String),

    /// Dataset snapshot or loss log could not be read or is malformed
    #[error("Dataset error: {0}")]
    Dataset(String),

    /// The plotting backend failed while rendering an image
    #[error("Render error: {0}")]
    Render(String),

    /// Underlying I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for refinar operations
pub type Result<T> = std::result::Result<T, Error>;
