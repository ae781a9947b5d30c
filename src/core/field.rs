//! Field selectors for reaching into records.
//!
//! A `DataIndex` is the typed counterpart of a column's field name: given a
//! record it yields the value stored in that field, or `None` when the field
//! is absent or `null`.

use super::record::{to_json, Record};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

type Accessor<T> = Arc<dyn Fn(&T) -> Option<Value> + Send + Sync>;

/// Selector that extracts a single field value from a record.
///
/// # Example
///
/// ```rust
/// use datatable::core::DataIndex;
/// use serde::Serialize;
/// use serde_json::json;
///
/// #[derive(Clone, Debug, Serialize)]
/// struct Item {
///     name: String,
///     value: Option<u32>,
/// }
///
/// let item = Item { name: "Item 1".into(), value: None };
///
/// // Named field, resolved through the record's serialized form
/// let name = DataIndex::field("name");
/// assert_eq!(name.extract(&item), Some(json!("Item 1")));
///
/// // `null` and missing fields are both absent
/// assert_eq!(DataIndex::field("value").extract(&item), None);
/// assert_eq!(DataIndex::<Item>::field("missing").extract(&item), None);
///
/// // Typed accessor, no serialization involved
/// let len = DataIndex::new(|i: &Item| Some(json!(i.name.len())));
/// assert_eq!(len.extract(&item), Some(json!(6)));
/// ```
pub struct DataIndex<T> {
    name: Option<String>,
    accessor: Accessor<T>,
}

impl<T> DataIndex<T> {
    /// Create a selector from an accessor function.
    ///
    /// The accessor must be pure: the sort engine may call it once per
    /// record per derivation, and renderers see whatever it returns.
    pub fn new<F>(accessor: F) -> Self
    where
        F: Fn(&T) -> Option<Value> + Send + Sync + 'static,
    {
        DataIndex {
            name: None,
            accessor: Arc::new(accessor),
        }
    }

    /// Field name for selectors built with [`DataIndex::field`].
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Extract the field value from a record.
    ///
    /// JSON `null` is normalized to `None`, so callers only ever have to
    /// check one "absent" case.
    pub fn extract(&self, record: &T) -> Option<Value> {
        (self.accessor)(record).filter(|v| !v.is_null())
    }
}

impl<T: Record + 'static> DataIndex<T> {
    /// Select a top-level field by its serialized name.
    pub fn field(name: impl Into<String>) -> Self {
        let name = name.into();
        let key = name.clone();
        DataIndex {
            name: Some(name),
            accessor: Arc::new(move |record: &T| {
                to_json(record).and_then(|mut json| json.get_mut(&key).map(Value::take))
            }),
        }
    }
}

impl<T> Clone for DataIndex<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            accessor: Arc::clone(&self.accessor),
        }
    }
}

impl<T> fmt::Debug for DataIndex<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => f.debug_tuple("DataIndex").field(name).finish(),
            None => f.write_str("DataIndex(<accessor>)"),
        }
    }
}
