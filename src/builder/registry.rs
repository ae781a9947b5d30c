//! Builder for constructing column registries.

use crate::builder::error::BuildError;
use crate::core::Column;
use crate::registry::ColumnRegistry;

/// Builder for constructing column registries with a fluent API.
pub struct ColumnRegistryBuilder<T> {
    columns: Vec<Column<T>>,
}

impl<T> ColumnRegistryBuilder<T> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            columns: Vec::new(),
        }
    }

    /// Append a column.
    pub fn column(mut self, column: Column<T>) -> Self {
        self.columns.push(column);
        self
    }

    /// Append multiple columns at once.
    pub fn columns(mut self, columns: impl IntoIterator<Item = Column<T>>) -> Self {
        self.columns.extend(columns);
        self
    }

    /// Build the registry.
    /// Returns an error listing every empty or repeated key.
    pub fn build(self) -> Result<ColumnRegistry<T>, BuildError> {
        ColumnRegistry::new(self.columns)
    }
}

impl<T> Default for ColumnRegistryBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}
