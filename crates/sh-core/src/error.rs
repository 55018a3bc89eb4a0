use std::path::PathBuf;

/// Errors produced while loading scene assets or projecting a cubemap.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Input data cannot be processed (degenerate face, bad buffer length, zero step).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A face image or mesh file is absent or cannot be decoded.
    #[error("missing resource {resource}: {reason}")]
    MissingResource { resource: PathBuf, reason: String },

    /// Malformed OBJ content.
    #[error("mesh parse error: {0}")]
    MeshParse(String),
}

pub type Result<T> = std::result::Result<T, Error>;
