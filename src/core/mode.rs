//! Display mode selection.

use serde::{Deserialize, Serialize};

/// Which of the three mutually exclusive table displays is active.
///
/// Only `Populated` consults the sort and selection state. The state itself
/// is kept while the table is loading or empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DisplayMode {
    /// Data is being fetched; shown regardless of record count
    Loading,
    /// Not loading and there are no records
    Empty,
    /// Not loading and there is at least one record
    Populated,
}

impl DisplayMode {
    /// Get the mode's name for display/logging.
    pub fn name(&self) -> &str {
        match self {
            Self::Loading => "Loading",
            Self::Empty => "Empty",
            Self::Populated => "Populated",
        }
    }
}

/// Choose the display mode. Loading dominates, then emptiness.
///
/// # Example
///
/// ```rust
/// use datatable::core::{select_mode, DisplayMode};
///
/// assert_eq!(select_mode(0, true), DisplayMode::Loading);
/// assert_eq!(select_mode(0, false), DisplayMode::Empty);
/// assert_eq!(select_mode(3, false), DisplayMode::Populated);
/// assert_eq!(select_mode(3, true), DisplayMode::Loading);
/// ```
pub fn select_mode(record_count: usize, loading: bool) -> DisplayMode {
    if loading {
        DisplayMode::Loading
    } else if record_count == 0 {
        DisplayMode::Empty
    } else {
        DisplayMode::Populated
    }
}
