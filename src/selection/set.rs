//! The selection set.

use super::identity::{RowIdentity, RowKey};
use crate::core::Record;
use std::fmt;

/// What `toggle_row(record, true)` does when an equal record is already selected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// Leave the selection unchanged
    #[default]
    Dedupe,
    /// Append anyway; the set may then hold equal members
    Allow,
}

/// Set of selected records.
///
/// Membership is decided by the set's [`RowIdentity`], never by reference.
/// Each operation returns a new selection and leaves `self` unchanged,
/// following functional programming principles.
///
/// # Example
///
/// ```rust
/// use datatable::selection::Selection;
/// use serde::Serialize;
///
/// #[derive(Clone, Debug, Serialize)]
/// struct Item {
///     name: String,
///     value: u32,
/// }
///
/// let records = vec![
///     Item { name: "Item 1".into(), value: 100 },
///     Item { name: "Item 2".into(), value: 200 },
///     Item { name: "Item 3".into(), value: 300 },
/// ];
///
/// let selection = Selection::new()
///     .toggle_row(&records[0], true)
///     .toggle_row(&records[1], true);
///
/// assert_eq!(selection.len(), 2);
/// assert!(!selection.is_selected(&records[2]));
/// assert!(!selection.is_all_selected(&records));
///
/// let everything = selection.toggle_all(true, &records);
/// assert!(everything.is_all_selected(&records));
/// assert_eq!(selection.len(), 2); // original unchanged
/// ```
pub struct Selection<T> {
    records: Vec<T>,
    keys: Vec<RowKey>,
    identity: RowIdentity<T>,
    duplicates: DuplicatePolicy,
}

impl<T: Record> Default for Selection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> Selection<T> {
    /// Create an empty selection with structural identity and deduplication.
    pub fn new() -> Self {
        Self::with_strategy(RowIdentity::default(), DuplicatePolicy::default())
    }

    /// Create an empty selection with an explicit identity and duplicate policy.
    pub fn with_strategy(identity: RowIdentity<T>, duplicates: DuplicatePolicy) -> Self {
        Self {
            records: Vec::new(),
            keys: Vec::new(),
            identity,
            duplicates,
        }
    }

    fn with_records(&self, records: Vec<T>) -> Self {
        let keys = records.iter().map(|r| self.identity.key_of(r)).collect();
        Self {
            records,
            keys,
            identity: self.identity.clone(),
            duplicates: self.duplicates,
        }
    }

    /// Select every record (`select == true`) or nothing (`select == false`).
    ///
    /// Selecting all copies `records` exactly, duplicates included.
    pub fn toggle_all(&self, select: bool, records: &[T]) -> Self {
        if select {
            self.with_records(records.to_vec())
        } else {
            self.with_records(Vec::new())
        }
    }

    /// Add (`select == true`) or remove (`select == false`) one record.
    ///
    /// Removal drops every member equal to `record`. Adding an already
    /// selected record is a no-op under [`DuplicatePolicy::Dedupe`] and
    /// appends a second member under [`DuplicatePolicy::Allow`].
    pub fn toggle_row(&self, record: &T, select: bool) -> Self {
        let key = self.identity.key_of(record);

        if select {
            let mut next = self.clone();
            if self.duplicates == DuplicatePolicy::Allow || !self.contains_key(&key) {
                next.records.push(record.clone());
                next.keys.push(key);
            }
            next
        } else {
            let (records, keys) = self
                .records
                .iter()
                .zip(&self.keys)
                .filter(|(_, k)| !k.matches(&key))
                .map(|(r, k)| (r.clone(), k.clone()))
                .unzip();
            Self {
                records,
                keys,
                identity: self.identity.clone(),
                duplicates: self.duplicates,
            }
        }
    }

    fn contains_key(&self, key: &RowKey) -> bool {
        self.keys.iter().any(|k| k.matches(key))
    }

    /// Whether some member is equal to `record`.
    pub fn is_selected(&self, record: &T) -> bool {
        self.contains_key(&self.identity.key_of(record))
    }

    /// Whether the header "select all" box is checked.
    ///
    /// True iff there is at least one record and the selection holds exactly
    /// as many members as there are records. This compares counts only.
    pub fn is_all_selected(&self, records: &[T]) -> bool {
        !records.is_empty() && self.records.len() == records.len()
    }
}

impl<T> Selection<T> {
    /// Selected records in insertion order.
    pub fn records(&self) -> &[T] {
        &self.records
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The identity strategy used for membership.
    pub fn identity(&self) -> &RowIdentity<T> {
        &self.identity
    }

    /// The duplicate policy applied on insert.
    pub fn duplicate_policy(&self) -> DuplicatePolicy {
        self.duplicates
    }
}

impl<T: Clone> Clone for Selection<T> {
    fn clone(&self) -> Self {
        Self {
            records: self.records.clone(),
            keys: self.keys.clone(),
            identity: self.identity.clone(),
            duplicates: self.duplicates,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Selection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Selection")
            .field("records", &self.records)
            .field("identity", &self.identity)
            .field("duplicates", &self.duplicates)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Clone, Debug, Serialize, PartialEq)]
    struct Item {
        id: u32,
        name: String,
        value: u32,
    }

    fn records() -> Vec<Item> {
        (1..=3)
            .map(|i| Item {
                id: i,
                name: format!("Item {}", i),
                value: i * 100,
            })
            .collect()
    }

    #[test]
    fn new_selection_is_empty() {
        let selection = Selection::<Item>::new();

        assert!(selection.is_empty());
        assert_eq!(selection.duplicate_policy(), DuplicatePolicy::Dedupe);
        assert!(matches!(selection.identity(), RowIdentity::Structural));
    }

    #[test]
    fn toggle_all_selects_exactly_the_records() {
        let records = records();

        let selection = Selection::new().toggle_all(true, &records);

        assert_eq!(selection.records(), records.as_slice());
        assert!(selection.is_all_selected(&records));
    }

    #[test]
    fn toggle_all_false_clears() {
        let records = records();

        let selection = Selection::new()
            .toggle_all(true, &records)
            .toggle_all(false, &records);

        assert!(selection.is_empty());
        assert!(!selection.is_all_selected(&records));
    }

    #[test]
    fn toggle_row_adds_and_removes() {
        let records = records();

        let selection = Selection::new()
            .toggle_row(&records[0], true)
            .toggle_row(&records[1], true);
        assert_eq!(selection.len(), 2);
        assert!(selection.is_selected(&records[0]));
        assert!(!selection.is_selected(&records[2]));

        let selection = selection.toggle_row(&records[0], false);
        assert_eq!(selection.records(), &records[1..2]);
    }

    #[test]
    fn membership_is_structural_not_by_reference() {
        let records = records();
        let copy = records[0].clone();

        let selection = Selection::new().toggle_row(&copy, true);

        assert!(selection.is_selected(&records[0]));
    }

    #[test]
    fn dedupe_skips_equal_members() {
        let records = records();

        let selection = Selection::new()
            .toggle_row(&records[0], true)
            .toggle_row(&records[0].clone(), true);

        assert_eq!(selection.len(), 1);
    }

    #[test]
    fn allow_keeps_duplicates_and_removal_drops_all() {
        let records = records();
        let empty = Selection::with_strategy(RowIdentity::Structural, DuplicatePolicy::Allow);

        let selection = empty
            .toggle_row(&records[0], true)
            .toggle_row(&records[0], true)
            .toggle_row(&records[1], true);
        assert_eq!(selection.len(), 3);

        let selection = selection.toggle_row(&records[0], false);
        assert_eq!(selection.records(), &records[1..2]);
    }

    #[test]
    fn all_selected_is_a_count_check() {
        let records = records();
        let empty = Selection::with_strategy(RowIdentity::Structural, DuplicatePolicy::Allow);

        let selection = empty
            .toggle_row(&records[0], true)
            .toggle_row(&records[0], true)
            .toggle_row(&records[0], true);

        assert!(selection.is_all_selected(&records));
        assert!(!selection.is_selected(&records[1]));
    }

    #[test]
    fn all_selected_is_false_without_records() {
        let selection = Selection::<Item>::new();

        assert!(!selection.is_all_selected(&[]));
    }

    #[test]
    fn key_identity_matches_edited_records() {
        let records = records();
        let identity = RowIdentity::key(|i: &Item| i.id.to_string());
        let selection =
            Selection::with_strategy(identity, DuplicatePolicy::Dedupe).toggle_row(&records[0], true);

        let edited = Item {
            value: 999,
            ..records[0].clone()
        };

        assert!(selection.is_selected(&edited));
        assert!(selection.toggle_row(&edited, false).is_empty());
    }

    #[test]
    fn operations_do_not_mutate_the_original() {
        let records = records();
        let selection = Selection::new().toggle_row(&records[0], true);

        let _ = selection.toggle_row(&records[1], true);
        let _ = selection.toggle_all(false, &records);

        assert_eq!(selection.len(), 1);
    }

    #[test]
    fn stale_members_are_kept() {
        let records = records();
        let selection = Selection::new().toggle_all(true, &records);

        let fewer = &records[..1];

        assert_eq!(selection.len(), 3);
        assert!(!selection.is_all_selected(fewer));
    }
}
