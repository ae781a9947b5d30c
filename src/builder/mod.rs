//! Builder API for ergonomic registry and engine construction.
//!
//! This module provides fluent builders for column registries and table
//! engines. Registry construction validates keys and is the only fallible
//! step in the crate.

pub mod error;
pub mod registry;
pub mod table;

pub use error::BuildError;
pub use registry::ColumnRegistryBuilder;
pub use table::DataTableBuilder;
