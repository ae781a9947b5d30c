//! Column registry violations.

use thiserror::Error;

/// Problems that make a set of columns unusable as a registry
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ColumnViolation {
    #[error("Column at position {position} has an empty key")]
    EmptyKey { position: usize },

    #[error("Column key '{key}' is used at positions {first} and {duplicate}")]
    DuplicateKey {
        key: String,
        first: usize,
        duplicate: usize,
    },
}
