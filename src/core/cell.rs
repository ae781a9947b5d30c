//! Cell resolution.

use super::column::Column;
use super::value::display_text;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Render-ready content of a single table cell.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    /// Text content
    Text(String),
    /// Nothing to show
    #[default]
    Empty,
}

impl Cell {
    /// Create a text cell.
    pub fn text(text: impl Into<String>) -> Self {
        Cell::Text(text.into())
    }

    /// Cell content as a string slice; empty for [`Cell::Empty`].
    pub fn as_str(&self) -> &str {
        match self {
            Cell::Text(text) => text,
            Cell::Empty => "",
        }
    }

    /// Whether there is nothing to show.
    pub fn is_empty(&self) -> bool {
        self.as_str().is_empty()
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for Cell {
    fn from(text: String) -> Self {
        Cell::Text(text)
    }
}

impl From<&str> for Cell {
    fn from(text: &str) -> Self {
        Cell::Text(text.to_string())
    }
}

/// Produce the value displayed for `record` in `column`.
///
/// - With a custom renderer, the renderer decides. It receives the extracted
///   field value (`None` without a data index or for an absent field), the
///   record and the row's position in the displayed view.
/// - Otherwise, with a data index, the stringified field value, blank for
///   absent and falsy values.
/// - Otherwise, an empty cell.
///
/// Resolution is total: every record/column pair yields a cell.
///
/// # Example
///
/// ```rust
/// use datatable::core::{resolve_cell, Cell, Column};
/// use serde::Serialize;
///
/// #[derive(Clone, Debug, Serialize)]
/// struct Item {
///     name: String,
///     value: u32,
/// }
///
/// let item = Item { name: "Item 1".into(), value: 100 };
///
/// let value = Column::new("value", "Value").field("value");
/// assert_eq!(resolve_cell(&item, &value, 0), Cell::text("100"));
///
/// let actions = Column::new("actions", "Actions")
///     .render(|_, item: &Item, _| Cell::text(format!("Edit {}", item.name)));
/// assert_eq!(resolve_cell(&item, &actions, 0), Cell::text("Edit Item 1"));
///
/// let bare = Column::<Item>::new("bare", "Bare");
/// assert_eq!(resolve_cell(&item, &bare, 0), Cell::Empty);
/// ```
pub fn resolve_cell<T>(record: &T, column: &Column<T>, row_index: usize) -> Cell {
    let value = column.data_index.as_ref().and_then(|index| index.extract(record));

    if let Some(render) = &column.render {
        return render(value.as_ref(), record, row_index);
    }

    if column.data_index.is_some() {
        return Cell::Text(display_text(value.as_ref()));
    }

    Cell::Empty
}
