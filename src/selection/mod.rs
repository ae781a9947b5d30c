//! Multi-row selection without an identity field.
//!
//! A [`Selection`] holds copies of the selected records and decides
//! membership through a pluggable [`RowIdentity`]: full structural
//! comparison by default, or a caller-supplied key.

mod identity;
mod set;

pub use identity::{RowIdentity, RowKey};
pub use set::{DuplicatePolicy, Selection};
