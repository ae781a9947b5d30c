//! The stateful table engine and its render model.
//!
//! This module is the imperative shell around the pure core: [`DataTable`]
//! owns the mutable sort and selection state, applies header and checkbox
//! activations one at a time, and notifies the host after every selection
//! change. Everything it derives (sorted view, flags, [`TableView`]) is
//! recomputed from the current state on demand.

mod engine;
mod view;

pub use engine::{DataTable, SelectionListener};
pub use view::{HeaderCell, RowView, TableView, EMPTY_DETAIL, EMPTY_TITLE, SKELETON_ROWS};
