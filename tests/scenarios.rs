//! End-to-end scenarios driving the engine the way a rendering layer does:
//! header clicks and checkbox toggles in, sorted rows and flags out.

use datatable::core::{select_mode, Cell, Column, DisplayMode};
use datatable::registry::ColumnRegistry;
use datatable::sort::SortDirection;
use datatable::table::TableView;
use datatable::{DataTable, DuplicatePolicy};
use serde::Serialize;
use std::sync::{Arc, Mutex};

#[derive(Clone, Debug, PartialEq, Serialize)]
struct TestData {
    id: u32,
    name: String,
    value: u32,
}

fn test_data() -> Vec<TestData> {
    vec![
        TestData {
            id: 1,
            name: "Item 1".to_string(),
            value: 100,
        },
        TestData {
            id: 2,
            name: "Item 2".to_string(),
            value: 200,
        },
        TestData {
            id: 3,
            name: "Item 3".to_string(),
            value: 300,
        },
    ]
}

fn columns() -> ColumnRegistry<TestData> {
    ColumnRegistry::new(vec![
        Column::new("name", "Name").field("name").sortable(),
        Column::new("value", "Value").field("value").sortable(),
    ])
    .unwrap()
}

fn first_column(view: &TableView<'_, TestData>) -> Vec<String> {
    match view {
        TableView::Populated { rows, .. } => rows
            .iter()
            .map(|r| r.cells[0].as_str().to_string())
            .collect(),
        _ => Vec::new(),
    }
}

#[test]
fn scenario_a_sorting_toggles_direction() {
    let records = test_data();
    let columns = columns();
    let mut table = DataTable::new();

    table.activate_sort("value", &columns);
    let first: Vec<u32> = table
        .sorted_view(&records, &columns)
        .iter()
        .map(|r| r.value)
        .collect();

    table.activate_sort("value", &columns);
    let second: Vec<u32> = table
        .sorted_view(&records, &columns)
        .iter()
        .map(|r| r.value)
        .collect();

    assert_eq!(first, vec![100, 200, 300]);
    assert_eq!(second, vec![300, 200, 100]);
    assert_eq!(
        table.sort_indicator("value", &columns),
        Some(SortDirection::Descending)
    );
}

#[test]
fn scenario_b_row_selection() {
    let records = test_data();
    let calls = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&calls);
    let mut table = DataTable::builder()
        .selectable(true)
        .on_selection_change(move |rows: &[TestData]| sink.lock().unwrap().push(rows.to_vec()))
        .build();

    table.toggle_row(&records[0], true);
    table.toggle_row(&records[1], true);

    assert_eq!(table.selected().len(), 2);
    assert!(!table.is_selected(&records[2]));
    assert!(!table.is_all_selected(&records));

    let calls = calls.lock().unwrap();
    assert_eq!(calls[0], vec![records[0].clone()]);
    assert_eq!(calls[1], records[..2].to_vec());
}

#[test]
fn scenario_c_display_modes() {
    assert_eq!(select_mode(0, true), DisplayMode::Loading);
    assert_eq!(select_mode(0, false), DisplayMode::Empty);
    assert_eq!(select_mode(3, false), DisplayMode::Populated);
    assert_eq!(select_mode(3, true), DisplayMode::Loading);
}

#[test]
fn scenario_d_sortable_flag_without_field_is_inert() {
    let records = test_data();
    let columns = ColumnRegistry::new(vec![
        Column::new("name", "Name").field("name").sortable(),
        Column::new("actions", "Actions")
            .sortable()
            .render(|_, record: &TestData, _| Cell::text(format!("Edit {}", record.name))),
    ])
    .unwrap();
    let mut table = DataTable::new();

    assert!(!table.activate_sort("actions", &columns));
    assert!(table.sort().is_none());

    let view = table.view(&records, &columns, false);
    assert_eq!(first_column(&view), vec!["Item 1", "Item 2", "Item 3"]);
    if let TableView::Populated { rows, headers, .. } = &view {
        assert_eq!(rows[0].cells[1], Cell::text("Edit Item 1"));
        assert!(!headers[1].sortable);
    }
}

#[test]
fn select_all_then_clear() {
    let records = test_data();
    let calls = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&calls);
    let mut table = DataTable::builder()
        .selectable(true)
        .on_selection_change(move |rows: &[TestData]| sink.lock().unwrap().push(rows.to_vec()))
        .build();

    table.toggle_all(true, &records);
    table.toggle_all(false, &records);

    let calls = calls.lock().unwrap();
    assert_eq!(calls[0], records);
    assert!(calls[1].is_empty());
}

#[test]
fn non_sortable_columns_keep_input_order() {
    let records = test_data();
    let columns = ColumnRegistry::new(vec![
        Column::new("name", "Name").field("name"),
        Column::new("value", "Value").field("value"),
    ])
    .unwrap();
    let mut table = DataTable::new();

    table.activate_sort("name", &columns);
    table.activate_sort("name", &columns);

    let view = table.view(&records, &columns, false);
    assert_eq!(first_column(&view), vec!["Item 1", "Item 2", "Item 3"]);
}

#[test]
fn sorting_by_name_descending() {
    let records = test_data();
    let columns = columns();
    let mut table = DataTable::new();

    table.activate_sort("name", &columns);
    table.activate_sort("name", &columns);

    let view = table.view(&records, &columns, false);
    assert_eq!(first_column(&view), vec!["Item 3", "Item 2", "Item 1"]);
}

#[test]
fn switching_columns_restarts_ascending() {
    let records = test_data();
    let columns = columns();
    let mut table = DataTable::new();

    table.activate_sort("value", &columns);
    table.activate_sort("value", &columns);
    table.activate_sort("name", &columns);

    assert_eq!(
        table.sort_indicator("name", &columns),
        Some(SortDirection::Ascending)
    );
    assert_eq!(table.sort_indicator("value", &columns), None);
    let view = table.view(&records, &columns, false);
    assert_eq!(first_column(&view), vec!["Item 1", "Item 2", "Item 3"]);
}

#[test]
fn loading_hides_rows_but_keeps_state() {
    let records = test_data();
    let columns = columns();
    let mut table = DataTable::builder().selectable(true).build();
    table.activate_sort("value", &columns);
    table.activate_sort("value", &columns);
    table.toggle_row(&records[2], true);

    let loading = table.view(&records, &columns, true);
    assert!(matches!(
        loading,
        TableView::Loading {
            skeleton_rows: 3,
            selectable: true,
            ..
        }
    ));

    let view = table.view(&records, &columns, false);
    assert_eq!(first_column(&view), vec!["Item 3", "Item 2", "Item 1"]);
    if let TableView::Populated { rows, .. } = &view {
        assert!(rows[0].selected);
    }
}

#[test]
fn duplicate_records_with_allow_policy() {
    let records = test_data();
    let mut table = DataTable::builder()
        .duplicates(DuplicatePolicy::Allow)
        .build();

    table.toggle_row(&records[0], true);
    table.toggle_row(&records[0], true);
    table.toggle_row(&records[0], true);

    // Count-only check: three copies of one row look like "all selected"
    assert!(table.is_all_selected(&records));

    table.toggle_row(&records[0], false);
    assert!(table.selected().is_empty());
}

#[test]
fn key_identity_survives_edits() {
    let records = test_data();
    let mut table = DataTable::builder()
        .key(|r: &TestData| r.id.to_string())
        .build();

    table.toggle_row(&records[0], true);

    let edited = TestData {
        value: 999,
        ..records[0].clone()
    };
    assert!(table.is_selected(&edited));
}
