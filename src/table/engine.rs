//! Table engine that owns sort and selection state.

use crate::builder::DataTableBuilder;
use crate::core::Record;
use crate::registry::ColumnRegistry;
use crate::selection::{DuplicatePolicy, RowIdentity, Selection};
use crate::sort::{self, SortConfig, SortDirection};
use crate::table::view::{self, TableView};
use log::debug;
use std::fmt;

/// Callback invoked with the full selection after every selection change.
pub type SelectionListener<T> = Box<dyn Fn(&[T]) + Send + Sync>;

/// Table engine: the single owner of one table's sort state and selection.
///
/// Records and columns belong to the caller and are passed in on every
/// call, so the engine always works against the latest data. Its own state
/// only changes through the activation methods below; nothing resets
/// automatically when records or columns change.
///
/// # Example
///
/// ```rust
/// use datatable::core::Column;
/// use datatable::registry::ColumnRegistry;
/// use datatable::sort::SortDirection;
/// use datatable::DataTable;
/// use serde::Serialize;
///
/// #[derive(Clone, Debug, Serialize)]
/// struct Item {
///     name: String,
///     value: u32,
/// }
///
/// let columns = ColumnRegistry::new(vec![
///     Column::<Item>::new("name", "Name").field("name").sortable(),
///     Column::new("value", "Value").field("value").sortable(),
/// ])
/// .unwrap();
/// let records = vec![
///     Item { name: "Item 1".into(), value: 100 },
///     Item { name: "Item 2".into(), value: 200 },
///     Item { name: "Item 3".into(), value: 300 },
/// ];
///
/// let mut table = DataTable::builder().selectable(true).build();
///
/// table.activate_sort("value", &columns);
/// table.activate_sort("value", &columns);
/// assert_eq!(table.sort_indicator("value", &columns), Some(SortDirection::Descending));
///
/// let view: Vec<u32> = table
///     .sorted_view(&records, &columns)
///     .iter()
///     .map(|i| i.value)
///     .collect();
/// assert_eq!(view, vec![300, 200, 100]);
///
/// table.toggle_row(&records[0], true);
/// assert!(table.is_selected(&records[0]));
/// ```
pub struct DataTable<T: Record> {
    sort: Option<SortConfig>,
    selection: Selection<T>,
    selectable: bool,
    on_selection_change: Option<SelectionListener<T>>,
}

impl<T: Record> DataTable<T> {
    /// Create an engine with default options: not selectable, structural
    /// identity, deduplicated inserts, no listener.
    pub fn new() -> Self {
        Self::from_parts(
            false,
            RowIdentity::default(),
            DuplicatePolicy::default(),
            None,
        )
    }

    /// Start building an engine with custom options.
    pub fn builder() -> DataTableBuilder<T> {
        DataTableBuilder::new()
    }

    pub(crate) fn from_parts(
        selectable: bool,
        identity: RowIdentity<T>,
        duplicates: DuplicatePolicy,
        on_selection_change: Option<SelectionListener<T>>,
    ) -> Self {
        Self {
            sort: None,
            selection: Selection::with_strategy(identity, duplicates),
            selectable,
            on_selection_change,
        }
    }

    /// Whether the render model carries selection checkboxes.
    pub fn is_selectable(&self) -> bool {
        self.selectable
    }

    // -------------------------------------------------------------------------
    // Sort
    // -------------------------------------------------------------------------

    /// Current sort state (pure)
    pub fn sort(&self) -> Option<&SortConfig> {
        self.sort.as_ref()
    }

    /// Handle a header activation on `key`.
    ///
    /// Returns whether the sort state changed. Missing columns and columns
    /// that are not actionably sortable leave the state untouched.
    pub fn activate_sort(&mut self, key: &str, columns: &ColumnRegistry<T>) -> bool {
        match sort::activate(self.sort.as_ref(), key, columns) {
            Some(next) => {
                debug!("sort activated on '{}': {}", next.key, next.direction.name());
                self.sort = Some(next);
                true
            }
            None => {
                debug!("ignoring sort activation on non-sortable column '{}'", key);
                false
            }
        }
    }

    /// Replace the sort state, e.g. to restore a stashed [`SortConfig`].
    ///
    /// The value is not checked against any registry; derivations fall back
    /// to input order if it does not name a sortable column.
    pub fn set_sort(&mut self, sort: Option<SortConfig>) {
        debug!("sort set to {:?}", sort);
        self.sort = sort;
    }

    /// Return to input order.
    pub fn clear_sort(&mut self) {
        self.set_sort(None);
    }

    /// Records in display order (pure). See [`sort::derive_view`].
    pub fn sorted_view<'a>(&self, records: &'a [T], columns: &ColumnRegistry<T>) -> Vec<&'a T> {
        sort::derive_view(records, columns, self.sort.as_ref())
    }

    /// Direction indicator for a column header (pure).
    ///
    /// `Some` only for the active column, and only while it is actionably
    /// sortable in `columns`.
    pub fn sort_indicator(&self, key: &str, columns: &ColumnRegistry<T>) -> Option<SortDirection> {
        let config = self.sort.as_ref().filter(|s| s.key == key)?;
        columns.sort_field(key).map(|_| config.direction)
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// Current selection (pure)
    pub fn selection(&self) -> &Selection<T> {
        &self.selection
    }

    /// Selected records in insertion order (pure)
    pub fn selected(&self) -> &[T] {
        self.selection.records()
    }

    /// Handle the header checkbox: select every record or none.
    pub fn toggle_all(&mut self, select: bool, records: &[T]) {
        let next = self.selection.toggle_all(select, records);
        self.commit_selection(next);
    }

    /// Handle a row checkbox.
    pub fn toggle_row(&mut self, record: &T, select: bool) {
        let next = self.selection.toggle_row(record, select);
        self.commit_selection(next);
    }

    /// Deselect everything.
    pub fn clear_selection(&mut self) {
        let next = self.selection.toggle_all(false, &[]);
        self.commit_selection(next);
    }

    /// Whether `record` is selected (pure)
    pub fn is_selected(&self, record: &T) -> bool {
        self.selection.is_selected(record)
    }

    /// Whether the header checkbox is checked (pure)
    pub fn is_all_selected(&self, records: &[T]) -> bool {
        self.selection.is_all_selected(records)
    }

    fn commit_selection(&mut self, next: Selection<T>) {
        self.selection = next;
        debug!("selection changed: {} selected", self.selection.len());
        if let Some(listener) = &self.on_selection_change {
            listener(self.selection.records());
        }
    }

    // -------------------------------------------------------------------------
    // Render model
    // -------------------------------------------------------------------------

    /// Derive the render-ready view for the current records (pure).
    pub fn view<'a>(
        &'a self,
        records: &'a [T],
        columns: &'a ColumnRegistry<T>,
        loading: bool,
    ) -> TableView<'a, T> {
        view::build(self, records, columns, loading)
    }
}

impl<T: Record> Default for DataTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> fmt::Debug for DataTable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataTable")
            .field("sort", &self.sort)
            .field("selection", &self.selection)
            .field("selectable", &self.selectable)
            .field(
                "on_selection_change",
                &self.on_selection_change.as_ref().map(|_| "<listener>"),
            )
            .finish()
    }
}
