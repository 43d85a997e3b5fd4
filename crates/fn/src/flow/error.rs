use thiserror::Error;

/// Errors that can occur when starting a flow.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FlowError {
    #[error("a flow needs at least one step before the terminal")]
    Empty,
}
