use thiserror::Error;

/// Errors that can occur when building a [`BitmaskEnum`](crate::BitmaskEnum).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BitmaskError {
    #[error("a bitmask enum needs at least one name")]
    Empty,

    #[error("too many names: {count} given, at most {max} allowed", max = crate::MAX_NAMES)]
    TooMany { count: usize },

    #[error("duplicate name: {name}")]
    Duplicate { name: String },
}
