use serde_json::json;

use super::*;

fn rows() -> Vec<Value> {
    vec![
        json!({"id": 1, "name": "berlin", "address": {"city": "Berlin"}, "totalEmployees": 12}),
        json!({"id": 2, "name": "Aachen", "address": {"city": "Aachen"}, "totalEmployees": 4}),
        json!({"id": 3, "name": "Cologne", "totalEmployees": 12}),
    ]
}

fn names(rows: &[Value]) -> Vec<String> {
    rows.iter().map(|r| display_at(r, "name")).collect()
}

// =============================================================
// ColumnDescriptor
// =============================================================

#[test]
fn cell_text_follows_dot_path_and_blanks_missing() {
    let column = ColumnDescriptor::new("address.city", "City");
    let data = rows();
    assert_eq!(column.cell_text(&data[0]), "Berlin");
    assert_eq!(column.cell_text(&data[2]), "");
    assert!(column.cell(&data[2]).is_none());
}

#[test]
fn column_sortable_builder() {
    assert!(ColumnDescriptor::new("name", "Name").sortable().sortable);
    assert!(!ColumnDescriptor::new("name", "Name").sortable);
}

// =============================================================
// Pagination
// =============================================================

#[test]
fn page_count_and_range_label() {
    let p = Pagination { page: 1, limit: 25, total_count: 57 };
    assert_eq!(p.page_count(), 3);
    assert_eq!(p.offset(), 25);
    assert_eq!(p.range_label(), "26–50 of 57");
    assert_eq!(p.with_page(2).range_label(), "51–57 of 57");
    assert!(p.has_previous());
    assert!(p.has_next());
    assert!(!p.with_page(2).has_next());
}

#[test]
fn out_of_range_page_is_legal_and_labelled_empty() {
    let p = Pagination { page: 9, limit: 10, total_count: 12 };
    assert!(p.is_out_of_range());
    assert_eq!(p.range_label(), "0–0 of 12");
}

#[test]
fn empty_total_still_has_one_page() {
    let p = Pagination::default();
    assert_eq!(p.page_count(), 1);
    assert!(!p.is_out_of_range());
    assert_eq!(p.range_label(), "0–0 of 0");
}

#[test]
fn new_limit_resets_to_first_page() {
    let p = Pagination { page: 3, limit: 5, total_count: 40 }.with_limit(25);
    assert_eq!(p.page, 0);
    assert_eq!(p.limit, 25);
    assert_eq!(Pagination::new(0).limit, 1);
}

// =============================================================
// RowActions
// =============================================================

#[test]
fn actions_column_needs_a_handler_and_the_default_flag() {
    assert!(!RowActions::default().visible());
    assert!(RowActions { edit: true, ..RowActions::default() }.visible());
    assert!(!RowActions { show_default: false, ..RowActions::all() }.visible());
}

// =============================================================
// Sorting
// =============================================================

#[test]
fn sort_is_case_insensitive_and_toggles() {
    let mut data = rows();
    let mut sort = SortState::default();
    sort.toggle("name");
    sort.apply(&mut data);
    assert_eq!(names(&data), vec!["Aachen", "berlin", "Cologne"]);

    sort.toggle("name");
    assert_eq!(sort.direction_for("name"), Some(SortDirection::Desc));
    sort.apply(&mut data);
    assert_eq!(names(&data), vec!["Cologne", "berlin", "Aachen"]);
}

#[test]
fn sort_is_stable_for_equal_keys() {
    let mut data = rows();
    let mut sort = SortState::default();
    sort.toggle("totalEmployees");
    sort.apply(&mut data);
    assert_eq!(names(&data), vec!["Aachen", "berlin", "Cologne"]);
}

#[test]
fn switching_column_restarts_ascending_and_missing_sorts_first() {
    let mut data = rows();
    let mut sort = SortState::default();
    sort.toggle("name");
    sort.toggle("name");
    sort.toggle("address.city");
    assert_eq!(sort.direction, SortDirection::Asc);
    assert_eq!(sort.direction_for("name"), None);
    sort.apply(&mut data);
    assert_eq!(names(&data), vec!["Cologne", "Aachen", "berlin"]);
}

#[test]
fn no_sort_field_leaves_rows_untouched() {
    let mut data = rows();
    SortState::default().apply(&mut data);
    assert_eq!(names(&data), vec!["berlin", "Aachen", "Cologne"]);
}

// =============================================================
// RowSelection
// =============================================================

#[test]
fn toggle_one_row() {
    let mut sel = RowSelection::default();
    sel.toggle(&RowId::Int(2));
    assert!(sel.is_selected(&RowId::Int(2)));
    assert!(sel.is_partial(&rows()));
    sel.toggle(&RowId::Int(2));
    assert!(sel.is_empty());
    assert_eq!(sel.delete_event(), None);
}

#[test]
fn toggle_all_selects_then_clears() {
    let data = rows();
    let mut sel = RowSelection::default();
    sel.toggle(&RowId::Int(3));
    sel.toggle_all(&data);
    assert!(sel.all_selected(&data));
    assert_eq!(sel.ids(), &[RowId::Int(3), RowId::Int(1), RowId::Int(2)]);
    assert_eq!(
        sel.delete_event(),
        Some(TableEvent::Delete(vec![RowId::Int(3), RowId::Int(1), RowId::Int(2)]))
    );

    sel.toggle_all(&data);
    assert!(sel.is_empty());
}

#[test]
fn selection_survives_unchanged_rows_and_drops_vanished_ones() {
    let data = rows();
    let mut sel = RowSelection::default();
    sel.toggle(&RowId::Int(1));
    sel.toggle(&RowId::Int(3));

    assert!(!sel.retain_rows(&data));
    assert_eq!(sel.ids(), &[RowId::Int(1), RowId::Int(3)]);

    let next_page = vec![json!({"id": 3, "name": "Cologne"}), json!({"id": 9, "name": "Dresden"})];
    assert!(sel.retain_rows(&next_page));
    assert_eq!(sel.ids(), &[RowId::Int(3)]);

    assert!(sel.retain_rows(&[]));
    assert!(sel.is_empty());
}

#[test]
fn all_selected_is_false_for_empty_page() {
    assert!(!RowSelection::default().all_selected(&[]));
}

// =============================================================
// TableBody
// =============================================================

#[test]
fn body_state_prefers_loading() {
    assert_eq!(TableBody::of(true, &rows()), TableBody::Loading);
    assert_eq!(TableBody::of(false, &[]), TableBody::Empty);
    assert_eq!(TableBody::of(false, &rows()), TableBody::Rows);
}
