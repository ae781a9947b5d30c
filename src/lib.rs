//! Datatable: a headless sort and selection engine for tabular records
//!
//! Datatable follows the "pure core, imperative shell" philosophy. Sorting,
//! selection membership, display mode selection and cell resolution are pure
//! functions over plain values; a small stateful engine owns the sort state
//! and the selection set and applies activations one at a time.
//!
//! # Core Concepts
//!
//! - **Records**: any `Clone + Debug + Serialize` type, no identity field needed
//! - **Columns**: keyed descriptors with an optional field selector, sortable
//!   flag and custom renderer, collected in a validated registry
//! - **Sort**: single-column, toggled by header activation, absent values last
//! - **Selection**: multi-row, membership by structural equality or a caller key
//! - **Display mode**: loading, empty or populated
//!
//! Invalid references never fail: an unknown or non-sortable column is simply
//! ignored. The only fallible step is building a column registry.
//!
//! # Example
//!
//! ```rust
//! use datatable::core::{select_mode, Column, DisplayMode};
//! use datatable::registry::ColumnRegistry;
//! use datatable::DataTable;
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
//!     Column::new("value", "Value").field("value").sortable(),
//! ])
//! .unwrap();
//!
//! let records = vec![
//!     Item { name: "Item 1".into(), value: 100 },
//!     Item { name: "Item 2".into(), value: 200 },
//!     Item { name: "Item 3".into(), value: 300 },
//! ];
//!
//! assert_eq!(select_mode(records.len(), false), DisplayMode::Populated);
//!
//! let mut table = DataTable::builder().selectable(true).build();
//! table.activate_sort("value", &columns);
//! table.activate_sort("value", &columns);
//! table.toggle_row(&records[0], true);
//!
//! let sorted: Vec<u32> = table
//!     .sorted_view(&records, &columns)
//!     .iter()
//!     .map(|i| i.value)
//!     .collect();
//! assert_eq!(sorted, vec![300, 200, 100]);
//! assert!(table.is_selected(&records[0]));
//! ```

pub mod builder;
pub mod core;
pub mod registry;
pub mod selection;
pub mod sort;
pub mod table;

// Re-export commonly used types
pub use builder::{BuildError, ColumnRegistryBuilder, DataTableBuilder};
pub use crate::core::{resolve_cell, select_mode, Cell, Column, DataIndex, DisplayMode, Record};
pub use registry::ColumnRegistry;
pub use selection::{DuplicatePolicy, RowIdentity, Selection};
pub use sort::{SortConfig, SortDirection};
pub use table::{DataTable, TableView};
