use thiserror::Error;

/// Reasons a move request can't be applied to a sequence.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReorderError {
    #[error("got {sources} source indices but {destinations} destination indices")]
    LengthMismatch { sources: usize, destinations: usize },
    #[error("source index {index} is out of range for a sequence of length {len}")]
    SourceOutOfRange { index: usize, len: usize },
    #[error("destination index {index} is out of range for a sequence of length {len}")]
    DestinationOutOfRange { index: usize, len: usize },
    #[error("invalid sortable config: {0}")]
    Config(String),
}

pub type Result<T, E = ReorderError> = std::result::Result<T, E>;
