//! Single-column sort state and the sorted view.
//!
//! Sort state is a plain value: `Option<SortConfig>`, where `None` means the
//! input order is shown unchanged. Header activations move the state forward
//! with [`activate`]; [`derive_view`] turns records plus state into the
//! displayed order.
//!
//! # Example
//!
//! ```rust
//! use datatable::core::Column;
//! use datatable::registry::ColumnRegistry;
//! use datatable::sort::{activate, derive_view, SortDirection};
//! use serde::Serialize;
//!
//! #[derive(Clone, Debug, Serialize)]
//! struct Item {
//!     value: u32,
//! }
//!
//! let columns = ColumnRegistry::new(vec![
//!     Column::<Item>::new("value", "Value").field("value").sortable(),
//! ])
//! .unwrap();
//! let records = vec![Item { value: 200 }, Item { value: 100 }];
//!
//! let sort = activate(None, "value", &columns);
//! assert_eq!(sort.as_ref().map(|s| s.direction), Some(SortDirection::Ascending));
//!
//! let view = derive_view(&records, &columns, sort.as_ref());
//! assert_eq!(view[0].value, 100);
//! ```

mod view;

pub use view::{compare_keys, derive_view};

use crate::registry::ColumnRegistry;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Sort direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortDirection {
    /// Smallest first
    Ascending,
    /// Largest first
    Descending,
}

impl SortDirection {
    /// The other direction.
    pub fn flip(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Orient an ascending comparison result to this direction.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }

    /// Get the direction's name for display/logging.
    pub fn name(&self) -> &str {
        match self {
            Self::Ascending => "ascending",
            Self::Descending => "descending",
        }
    }
}

/// The active sort: which column, which direction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortConfig {
    /// Key of the active column
    pub key: String,
    /// Current direction
    pub direction: SortDirection,
}

impl SortConfig {
    /// Sort ascending on `key`.
    pub fn ascending(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            direction: SortDirection::Ascending,
        }
    }

    /// Sort descending on `key`.
    pub fn descending(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            direction: SortDirection::Descending,
        }
    }
}

/// Compute the sort state after a header activation on `key`.
///
/// Returns `None` when the activation is inert: the column is missing or not
/// actionably sortable. The current state then stays as it is. Otherwise:
/// - same column as the active one: the direction flips;
/// - any other column: ascending on that column.
///
/// This is a pure function; the caller stores the result.
pub fn activate<T>(
    current: Option<&SortConfig>,
    key: &str,
    columns: &ColumnRegistry<T>,
) -> Option<SortConfig> {
    columns.sort_field(key)?;

    let next = match current {
        Some(config) if config.key == key => SortConfig {
            key: config.key.clone(),
            direction: config.direction.flip(),
        },
        _ => SortConfig::ascending(key),
    };
    Some(next)
}
