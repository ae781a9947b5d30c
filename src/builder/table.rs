//! Builder for constructing table engines.

use crate::core::Record;
use crate::selection::{DuplicatePolicy, RowIdentity};
use crate::table::{DataTable, SelectionListener};

/// Builder for constructing [`DataTable`] engines with a fluent API.
///
/// Every option has a default, so `build()` cannot fail.
pub struct DataTableBuilder<T: Record> {
    selectable: bool,
    identity: RowIdentity<T>,
    duplicates: DuplicatePolicy,
    on_selection_change: Option<SelectionListener<T>>,
}

impl<T: Record> DataTableBuilder<T> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            selectable: false,
            identity: RowIdentity::default(),
            duplicates: DuplicatePolicy::default(),
            on_selection_change: None,
        }
    }

    /// Show selection checkboxes in the render model.
    pub fn selectable(mut self, selectable: bool) -> Self {
        self.selectable = selectable;
        self
    }

    /// Set how selected records are matched (default: structural).
    pub fn identity(mut self, identity: RowIdentity<T>) -> Self {
        self.identity = identity;
        self
    }

    /// Match selected records by a caller-supplied key.
    pub fn key<F>(self, key: F) -> Self
    where
        F: Fn(&T) -> String + Send + Sync + 'static,
    {
        self.identity(RowIdentity::key(key))
    }

    /// Set what happens when an already selected record is selected again
    /// (default: deduplicate).
    pub fn duplicates(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicates = policy;
        self
    }

    /// Register the selection listener.
    pub fn on_selection_change<F>(mut self, listener: F) -> Self
    where
        F: Fn(&[T]) + Send + Sync + 'static,
    {
        self.on_selection_change = Some(Box::new(listener));
        self
    }

    /// Build the engine.
    pub fn build(self) -> DataTable<T> {
        DataTable::from_parts(
            self.selectable,
            self.identity,
            self.duplicates,
            self.on_selection_change,
        )
    }
}

impl<T: Record> Default for DataTableBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}
