//! Column descriptors.

use super::cell::Cell;
use super::field::DataIndex;
use super::record::Record;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Custom cell renderer: `(extracted value, record, row index) -> cell`.
///
/// The extracted value is `None` when the column has no data index or the
/// field is absent for this record.
pub type Renderer<T> = Arc<dyn Fn(Option<&Value>, &T, usize) -> Cell + Send + Sync>;

/// Column configuration.
///
/// Columns define the structure of the table: a unique key, header text,
/// an optional field selector, whether the column is sortable and an
/// optional custom renderer.
///
/// A column is only *actionably* sortable when it is marked sortable **and**
/// has a data index; see [`Column::is_sortable`]. A sortable flag without a
/// field to sort on is inert.
///
/// # Examples
///
/// ```rust
/// use datatable::core::{Cell, Column};
/// use serde::Serialize;
///
/// #[derive(Clone, Debug, Serialize)]
/// struct Item {
///     name: String,
///     value: u32,
/// }
///
/// let columns: Vec<Column<Item>> = vec![
///     Column::new("name", "Name").field("name").sortable(),
///     Column::new("value", "Value").field("value"),
///     Column::new("actions", "Actions")
///         .sortable()
///         .render(|_, item: &Item, _| Cell::text(format!("Edit {}", item.name))),
/// ];
///
/// assert!(columns[0].is_sortable());
/// assert!(!columns[1].is_sortable());
/// assert!(!columns[2].is_sortable()); // no data index
/// ```
pub struct Column<T> {
    /// Unique key within a registry
    pub key: String,
    /// Header text
    pub title: String,
    /// Field selector
    pub data_index: Option<DataIndex<T>>,
    /// Whether the column was marked sortable
    pub sortable: bool,
    /// Custom renderer, with full authority over the cell output
    pub render: Option<Renderer<T>>,
}

impl<T> Column<T> {
    /// Create a column with no field, not sortable, default rendering.
    pub fn new(key: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            data_index: None,
            sortable: false,
            render: None,
        }
    }

    /// Set the field selector.
    pub fn data_index(mut self, index: DataIndex<T>) -> Self {
        self.data_index = Some(index);
        self
    }

    /// Mark the column sortable.
    ///
    /// Has no effect on behavior unless the column also has a data index.
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Set a custom renderer.
    pub fn render<F>(mut self, render: F) -> Self
    where
        F: Fn(Option<&Value>, &T, usize) -> Cell + Send + Sync + 'static,
    {
        self.render = Some(Arc::new(render));
        self
    }

    /// Whether header activation on this column changes the sort.
    ///
    /// True iff the column is marked sortable and has a data index. Every
    /// sortability check in the crate goes through here.
    pub fn is_sortable(&self) -> bool {
        self.sortable && self.data_index.is_some()
    }
}

impl<T: Record + 'static> Column<T> {
    /// Select a top-level field by name. Shorthand for
    /// `.data_index(DataIndex::field(name))`.
    pub fn field(self, name: impl Into<String>) -> Self {
        self.data_index(DataIndex::field(name))
    }
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            title: self.title.clone(),
            data_index: self.data_index.clone(),
            sortable: self.sortable,
            render: self.render.clone(),
        }
    }
}

impl<T> fmt::Debug for Column<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("title", &self.title)
            .field("data_index", &self.data_index)
            .field("sortable", &self.sortable)
            .field("render", &self.render.as_ref().map(|_| "<renderer>"))
            .finish()
    }
}
