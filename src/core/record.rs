//! Core Record trait for table rows.
//!
//! Records are opaque application values. The engine never needs an identity
//! field: it reaches into a record only through its serialized form or through
//! caller-supplied accessors.

use serde::Serialize;
use std::fmt::Debug;

/// Trait for values that can be displayed as table rows.
///
/// Blanket-implemented for every `Clone + Debug + Serialize` type, so plain
/// `#[derive]`d structs work without any extra code.
///
/// # Required Traits
///
/// - `Clone`: the selection set keeps its own copies of selected records
/// - `Debug`: records are debuggable for diagnostics
/// - `Serialize`: named fields and structural equality go through `serde_json`
///
/// # Example
///
/// ```rust
/// use datatable::core::Record;
/// use serde::Serialize;
///
/// #[derive(Clone, Debug, Serialize)]
/// struct Item {
///     name: String,
///     value: u32,
/// }
///
/// fn assert_record<T: Record>() {}
/// assert_record::<Item>();
/// ```
pub trait Record: Clone + Debug + Serialize {}

impl<T: Clone + Debug + Serialize> Record for T {}

/// Serialize a record into a JSON value.
///
/// Returns `None` (and logs a warning) when the record cannot be represented
/// as JSON, e.g. a map keyed by non-string values.
pub(crate) fn to_json<T: Serialize + Debug>(record: &T) -> Option<serde_json::Value> {
    match serde_json::to_value(record) {
        Ok(value) => Some(value),
        Err(err) => {
            log::warn!("record {:?} is not serializable: {}", record, err);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[derive(Clone, Debug, Serialize)]
    struct Item {
        name: String,
        value: u32,
    }

    #[test]
    fn to_json_serializes_fields() {
        let item = Item {
            name: "Item 1".to_string(),
            value: 100,
        };
        let json = to_json(&item).unwrap();

        assert_eq!(json["name"], "Item 1");
        assert_eq!(json["value"], 100);
    }

    #[test]
    fn to_json_rejects_non_string_map_keys() {
        let mut map = HashMap::new();
        map.insert((1, 2), "pair");

        assert!(to_json(&map).is_none());
    }

    #[test]
    fn equal_records_serialize_identically() {
        let a = Item {
            name: "Same".to_string(),
            value: 1,
        };
        let b = a.clone();

        assert_eq!(to_json(&a), to_json(&b));
    }
}
