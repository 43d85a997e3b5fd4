use thiserror::Error;

/// Errors that can occur when building a sequence pipeline.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SequenceError {
    #[error("a sequence needs at least one step")]
    Empty,

    #[error("the final sequence entry (index {index}) is absent")]
    AbsentFinalStep { index: usize },
}
