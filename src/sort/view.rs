//! Deriving the sorted view.

use super::{SortConfig, SortDirection};
use crate::core::compare_present;
use crate::registry::ColumnRegistry;
use serde_json::Value;
use std::cmp::Ordering;

/// Compare two extracted sort keys.
///
/// Absent keys always sort after present ones, in both directions. Only the
/// comparison between two present keys is oriented by `direction`.
pub fn compare_keys(a: Option<&Value>, b: Option<&Value>, direction: SortDirection) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) => direction.apply(compare_present(a, b)),
    }
}

/// Produce the displayed order of `records`.
///
/// Returns the input order unchanged when there is no sort, or when the
/// sort refers to a column that is missing or no longer actionably sortable.
/// Otherwise returns a new, stably sorted sequence; `records` itself is never
/// reordered.
pub fn derive_view<'a, T>(
    records: &'a [T],
    columns: &ColumnRegistry<T>,
    sort: Option<&SortConfig>,
) -> Vec<&'a T> {
    let Some(config) = sort else {
        return records.iter().collect();
    };

    let Some(index) = columns.sort_field(&config.key) else {
        log::trace!(
            "sort key '{}' is not sortable in this registry, keeping input order",
            config.key
        );
        return records.iter().collect();
    };

    // Extract each key once instead of once per comparison
    let mut keyed: Vec<(Option<Value>, &'a T)> =
        records.iter().map(|r| (index.extract(r), r)).collect();

    // sort_by is stable, so equal keys keep their input order
    keyed.sort_by(|(a, _), (b, _)| compare_keys(a.as_ref(), b.as_ref(), config.direction));

    log::trace!(
        "sorted {} records by '{}' {}",
        keyed.len(),
        config.key,
        config.direction.name()
    );

    keyed.into_iter().map(|(_, record)| record).collect()
}
