use thiserror::Error;

/// Errors that can occur when editing a list in place.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ListError {
    #[error("index {index} is out of bounds for a list of length {len}")]
    OutOfBounds { index: usize, len: usize },
}
