//! Registry validation using Validation.

use crate::core::Column;
use crate::registry::violations::ColumnViolation;
use std::collections::HashMap;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Check every column, accumulating ALL violations.
///
/// Returns `Validation::Success(())` when keys are non-empty and unique.
/// Returns `Validation::Failure` with every violation found otherwise.
pub fn validate<T>(columns: &[Column<T>]) -> Validation<(), NonEmptyVec<ColumnViolation>> {
    let mut checks: Vec<Validation<(), NonEmptyVec<ColumnViolation>>> = Vec::new();
    let mut seen: HashMap<&str, usize> = HashMap::new();

    for (position, column) in columns.iter().enumerate() {
        // Empty keys
        if column.key.is_empty() {
            checks.push(Validation::fail(ColumnViolation::EmptyKey { position }));
            continue;
        }

        // Duplicate keys, reported against the first occurrence
        match seen.get(column.key.as_str()) {
            Some(&first) => checks.push(Validation::fail(ColumnViolation::DuplicateKey {
                key: column.key.clone(),
                first,
                duplicate: position,
            })),
            None => {
                seen.insert(column.key.as_str(), position);
                checks.push(Validation::success(()));
            }
        }
    }

    Validation::all_vec(checks).map(|_| ())
}
