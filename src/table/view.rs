//! Render-ready table model.
//!
//! The view is what a rendering layer draws: header cells with their sort
//! affordances, and for a populated table the rows in display order with
//! their selection state and resolved cells. Markup and styling are left
//! to the renderer.

use crate::core::{resolve_cell, select_mode, Cell, Column, DisplayMode, Record};
use crate::registry::ColumnRegistry;
use crate::sort::{SortConfig, SortDirection};
use crate::table::engine::DataTable;

/// Number of placeholder rows shown while loading.
pub const SKELETON_ROWS: usize = 3;

/// Headline of the empty display.
pub const EMPTY_TITLE: &str = "No data available";

/// Secondary line of the empty display.
pub const EMPTY_DETAIL: &str = "There are no records to display";

/// One column header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeaderCell<'a> {
    pub key: &'a str,
    pub title: &'a str,
    /// Whether activating this header changes the sort
    pub sortable: bool,
    /// Direction indicator, set only on the active sortable column
    pub sort: Option<SortDirection>,
}

/// One displayed row.
#[derive(Debug)]
pub struct RowView<'a, T> {
    /// Position in the displayed (sorted) order
    pub index: usize,
    pub record: &'a T,
    pub selected: bool,
    /// One cell per column, in column order
    pub cells: Vec<Cell>,
}

/// The whole table as the renderer should draw it.
#[derive(Debug)]
pub enum TableView<'a, T> {
    /// Titles only, inert headers, placeholder rows. Checkboxes, when
    /// `selectable`, are shown disabled.
    Loading {
        headers: Vec<HeaderCell<'a>>,
        skeleton_rows: usize,
        selectable: bool,
    },
    /// No records and not loading.
    Empty {
        title: &'static str,
        detail: &'static str,
    },
    /// Records in display order.
    Populated {
        headers: Vec<HeaderCell<'a>>,
        /// Header checkbox state; `None` when the table is not selectable
        select_all: Option<bool>,
        rows: Vec<RowView<'a, T>>,
    },
}

impl<T> TableView<'_, T> {
    /// The display mode this view was built for.
    pub fn mode(&self) -> DisplayMode {
        match self {
            TableView::Loading { .. } => DisplayMode::Loading,
            TableView::Empty { .. } => DisplayMode::Empty,
            TableView::Populated { .. } => DisplayMode::Populated,
        }
    }
}

fn header<'a, T>(column: &'a Column<T>, sort: Option<&SortConfig>) -> HeaderCell<'a> {
    let sortable = column.is_sortable();
    HeaderCell {
        key: &column.key,
        title: &column.title,
        sortable,
        sort: sort
            .filter(|s| sortable && s.key == column.key)
            .map(|s| s.direction),
    }
}

pub(crate) fn build<'a, T: Record>(
    table: &'a DataTable<T>,
    records: &'a [T],
    columns: &'a ColumnRegistry<T>,
    loading: bool,
) -> TableView<'a, T> {
    let mode = select_mode(records.len(), loading);
    log::trace!("building {} view for {} records", mode.name(), records.len());

    match mode {
        DisplayMode::Loading => TableView::Loading {
            headers: columns.iter().map(|c| header(c, None)).map(inert).collect(),
            skeleton_rows: SKELETON_ROWS,
            selectable: table.is_selectable(),
        },
        DisplayMode::Empty => TableView::Empty {
            title: EMPTY_TITLE,
            detail: EMPTY_DETAIL,
        },
        DisplayMode::Populated => {
            let headers = columns.iter().map(|c| header(c, table.sort())).collect();
            let select_all = table
                .is_selectable()
                .then(|| table.is_all_selected(records));
            let rows = table
                .sorted_view(records, columns)
                .into_iter()
                .enumerate()
                .map(|(index, record)| RowView {
                    index,
                    record,
                    selected: table.is_selected(record),
                    cells: columns
                        .iter()
                        .map(|column| resolve_cell(record, column, index))
                        .collect(),
                })
                .collect();

            TableView::Populated {
                headers,
                select_all,
                rows,
            }
        }
    }
}

fn inert(header: HeaderCell<'_>) -> HeaderCell<'_> {
    HeaderCell {
        sortable: false,
        ..header
    }
}
