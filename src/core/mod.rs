//! Core table types and logic.
//!
//! This module contains the pure functional core of the table engine:
//! - Records via the `Record` trait
//! - Field selectors and column descriptors
//! - Value ordering and stringification
//! - Display mode selection and cell resolution
//!
//! Nothing in this module holds state or performs side effects beyond
//! logging.

mod cell;
mod column;
mod field;
mod mode;
mod record;
mod value;

pub use cell::{resolve_cell, Cell};
pub use column::{Column, Renderer};
pub use field::DataIndex;
pub use mode::{select_mode, DisplayMode};
pub use record::Record;
pub(crate) use record::to_json;
pub use value::{compare_present, display_text, is_truthy};
