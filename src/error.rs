//! Error types shared by the codec, the access paths and the file collaborators.
use thiserror::Error;

/// Every failure the crate can report. All of these are deterministic for a given input,
/// so callers should not retry.
#[derive(Debug, Error)]
pub enum SeqError {
    /// Negative position/index, a sentinel in transform input, or an unrepresentable count
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Row index outside the bounds of the compressed collection
    #[error("Index {index} out of range for {len} sequences")]
    IndexOutOfRange { index: i64, len: usize },

    /// BWT string without exactly one sentinel, or a malformed RLE token stream
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// No sequences available from an upstream source
    #[error("Empty input: {0}")]
    EmptyInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SeqError>;
