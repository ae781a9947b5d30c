//! Column registry: the ordered, validated set of column descriptors.
//!
//! Registries are owned by the caller and handed to the engine on every
//! derivation. Lookups never fail; they return `Option` and callers fall
//! back to a defined default (an inert activation, an unchanged order).
//!
//! Construction validates the whole column list in one pass using
//! Stillwater's `Validation`, so every bad key is reported at once.
//!
//! # Example
//!
//! ```rust
//! use datatable::core::Column;
//! use datatable::registry::ColumnRegistry;
//! use serde::Serialize;
//!
//! #[derive(Clone, Debug, Serialize)]
//! struct Item {
//!     name: String,
//!     value: u32,
//! }
//!
//! let columns = ColumnRegistry::new(vec![
//!     Column::<Item>::new("name", "Name").field("name").sortable(),
//!     Column::new("value", "Value").field("value"),
//! ])
//! .unwrap();
//!
//! assert!(columns.sort_field("name").is_some());
//! assert!(columns.sort_field("value").is_none()); // not marked sortable
//! assert!(columns.find("missing").is_none());
//! ```

pub mod rules;
pub mod violations;

pub use rules::validate;
pub use violations::ColumnViolation;

use crate::builder::BuildError;
use crate::core::{Column, DataIndex};
use stillwater::validation::Validation;

/// Ordered list of columns with unique, non-empty keys.
#[derive(Debug)]
pub struct ColumnRegistry<T> {
    columns: Vec<Column<T>>,
}

impl<T> ColumnRegistry<T> {
    /// Validate and wrap a list of columns.
    ///
    /// Returns [`BuildError::InvalidColumns`] carrying every violation when
    /// any key is empty or repeated.
    pub fn new(columns: Vec<Column<T>>) -> Result<Self, BuildError> {
        match validate(&columns) {
            Validation::Success(()) => Ok(Self { columns }),
            Validation::Failure(errors) => Err(BuildError::InvalidColumns(
                errors.iter().cloned().collect(),
            )),
        }
    }

    /// A registry with no columns.
    pub fn empty() -> Self {
        Self {
            columns: Vec::new(),
        }
    }

    /// Look up a column by key.
    pub fn find(&self, key: &str) -> Option<&Column<T>> {
        self.columns.iter().find(|c| c.key == key)
    }

    /// Look up the field to sort on when `key` is activated.
    ///
    /// `None` when the column is missing or not actionably sortable.
    pub fn sort_field(&self, key: &str) -> Option<&DataIndex<T>> {
        self.find(key)
            .filter(|c| c.is_sortable())
            .and_then(|c| c.data_index.as_ref())
    }

    /// Columns in display order.
    pub fn columns(&self) -> &[Column<T>] {
        &self.columns
    }

    /// Iterate over columns in display order.
    pub fn iter(&self) -> std::slice::Iter<'_, Column<T>> {
        self.columns.iter()
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether the registry has no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl<T> Clone for ColumnRegistry<T> {
    fn clone(&self) -> Self {
        Self {
            columns: self.columns.clone(),
        }
    }
}

impl<T> Default for ColumnRegistry<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<'a, T> IntoIterator for &'a ColumnRegistry<T> {
    type Item = &'a Column<T>;
    type IntoIter = std::slice::Iter<'a, Column<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
