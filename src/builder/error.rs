//! Build errors for column registries and tables.

use crate::registry::ColumnViolation;
use thiserror::Error;

/// Errors that can occur when building column registries.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Invalid columns: {}", join(.0))]
    InvalidColumns(Vec<ColumnViolation>),
}

fn join(violations: &[ColumnViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
