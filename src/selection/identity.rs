//! Row identity: deciding when two records are "the same row".

use crate::core::{to_json, Record};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

type KeyFn<T> = Arc<dyn Fn(&T) -> String + Send + Sync>;

/// Strategy used by the selection set to compare records.
///
/// - `Structural` (default): two records are the same row iff their
///   serialized field-by-field content is identical. Needs no identity field,
///   but field-for-field duplicates are indistinguishable.
/// - `Key`: two records are the same row iff a caller-supplied key function
///   returns the same string for both.
///
/// # Example
///
/// ```rust
/// use datatable::selection::RowIdentity;
/// use serde::Serialize;
///
/// #[derive(Clone, Debug, Serialize)]
/// struct Item {
///     id: u32,
///     name: String,
/// }
///
/// let a = Item { id: 1, name: "old".into() };
/// let b = Item { id: 1, name: "new".into() };
///
/// let structural = RowIdentity::<Item>::Structural;
/// assert!(!structural.same(&a, &b));
///
/// let by_id = RowIdentity::key(|i: &Item| i.id.to_string());
/// assert!(by_id.same(&a, &b));
/// ```
pub enum RowIdentity<T> {
    Structural,
    Key(KeyFn<T>),
}

/// Comparable identity of one record under a [`RowIdentity`].
#[derive(Clone, Debug)]
pub enum RowKey {
    /// Serialized record content
    Structural(Value),
    /// Caller-supplied key
    Key(String),
    /// Record could not be serialized; matches nothing, not even itself
    Opaque,
}

impl RowKey {
    /// Whether two keys identify the same row.
    pub fn matches(&self, other: &RowKey) -> bool {
        match (self, other) {
            (RowKey::Structural(a), RowKey::Structural(b)) => a == b,
            (RowKey::Key(a), RowKey::Key(b)) => a == b,
            _ => false,
        }
    }
}

impl<T> RowIdentity<T> {
    /// Identify rows by a caller-supplied key.
    pub fn key<F>(key: F) -> Self
    where
        F: Fn(&T) -> String + Send + Sync + 'static,
    {
        RowIdentity::Key(Arc::new(key))
    }
}

impl<T: Record> RowIdentity<T> {
    /// Compute the identity of a record.
    pub fn key_of(&self, record: &T) -> RowKey {
        match self {
            RowIdentity::Structural => to_json(record)
                .map(RowKey::Structural)
                .unwrap_or(RowKey::Opaque),
            RowIdentity::Key(key) => RowKey::Key(key(record)),
        }
    }

    /// Whether two records are the same row.
    pub fn same(&self, a: &T, b: &T) -> bool {
        self.key_of(a).matches(&self.key_of(b))
    }
}

impl<T> Default for RowIdentity<T> {
    fn default() -> Self {
        RowIdentity::Structural
    }
}

impl<T> Clone for RowIdentity<T> {
    fn clone(&self) -> Self {
        match self {
            RowIdentity::Structural => RowIdentity::Structural,
            RowIdentity::Key(key) => RowIdentity::Key(Arc::clone(key)),
        }
    }
}

impl<T> fmt::Debug for RowIdentity<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowIdentity::Structural => f.write_str("Structural"),
            RowIdentity::Key(_) => f.write_str("Key(<fn>)"),
        }
    }
}
