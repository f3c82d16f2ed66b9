use serde_json::json;

use super::*;

fn location() -> Value {
    json!({
        "id": 4,
        "name": "Mitte",
        "city": "",
        "franchise": {"name": "Berlin", "status": 1},
        "subjects": ["Math", "", "Physics"],
        "teachers": [
            {"id": 10, "firstName": "X", "lastName": "Ray"},
            {"id": 11, "firstName": "Ada", "lastName": "Lovelace"},
        ],
        "password": "secret",
    })
}

fn teacher_columns() -> Vec<ColumnDescriptor> {
    vec![ColumnDescriptor::new("firstName", "First Name"), ColumnDescriptor::new("lastName", "Last Name")]
}

#[test]
fn nested_table_rows_have_stable_keys_and_cells() {
    let fields = vec![DetailField::table("teachers", "Teachers", teacher_columns()).section("Teachers")];
    let sections = build_detail(&fields, &location());

    let DetailItem::Table { rows, columns, link_label, .. } = &sections[0].items[0] else {
        panic!("expected table");
    };
    assert_eq!(columns.len(), 2);
    assert_eq!(rows[0].key, "teachers-0");
    assert_eq!(rows[0].cells, vec!["X", "Ray"]);
    assert_eq!(rows[1].key, "teachers-1");
    assert_eq!(*link_label, None);
}

#[test]
fn row_link_template_uses_row_id() {
    let fields = vec![
        DetailField::table("teachers", "Teachers", teacher_columns())
            .row_link(RowLink::new("View", "/teachers/view/{id}")),
    ];
    let sections = build_detail(&fields, &location());
    let DetailItem::Table { rows, link_label, .. } = &sections[0].items[0] else {
        panic!("expected table");
    };
    assert_eq!(rows[1].link.as_deref(), Some("/teachers/view/11"));
    assert_eq!(*link_label, Some("View"));
}

#[test]
fn table_without_columns_reports_missing_columns() {
    let fields = vec![DetailField::table("teachers", "Teachers", Vec::new())];
    let sections = build_detail(&fields, &location());
    assert!(matches!(sections[0].items[0], DetailItem::MissingColumns { .. }));
}

#[test]
fn table_over_non_array_has_no_rows() {
    let fields = vec![DetailField::table("name", "Name", teacher_columns())];
    let sections = build_detail(&fields, &location());
    let DetailItem::Table { rows, .. } = &sections[0].items[0] else {
        panic!("expected table");
    };
    assert!(rows.is_empty());
}

#[test]
fn scalars_follow_dot_paths_and_show_na_when_missing() {
    let fields = vec![
        DetailField::scalar("name", "Name"),
        DetailField::scalar("city", "City"),
        DetailField::scalar("zip", "Zip"),
        DetailField::scalar("franchise.name", "Franchise"),
    ];
    let sections = build_detail(&fields, &location());
    let texts: Vec<String> = sections[0]
        .items
        .iter()
        .map(|item| match item {
            DetailItem::Scalar { text, .. } => text.clone(),
            other => panic!("unexpected {other:?}"),
        })
        .collect();
    assert_eq!(texts, vec!["Mitte", "N/A", "N/A", "Berlin"]);
}

#[test]
fn value_override_wins_over_record() {
    let fields = vec![DetailField::scalar("createdAt", "Created").value("Jan 1, 2024")];
    let sections = build_detail(&fields, &location());
    assert!(matches!(&sections[0].items[0], DetailItem::Scalar { text, .. } if text == "Jan 1, 2024"));
}

#[test]
fn text_list_skips_empty_entries() {
    let fields = vec![DetailField::text_list("subjects", "Subjects"), DetailField::text_list("tags", "Tags")];
    let sections = build_detail(&fields, &location());
    assert!(matches!(&sections[0].items[0], DetailItem::TextList { items, .. } if items == &["Math", "Physics"]));
    assert!(matches!(&sections[0].items[1], DetailItem::TextList { items, .. } if items.is_empty()));
}

#[test]
fn sections_keep_order_and_general_trails_with_first_expanded() {
    let fields = vec![
        DetailField::scalar("name", "Name"),
        DetailField::scalar("franchise.name", "Franchise").section("Franchise"),
        DetailField::table("teachers", "Teachers", teacher_columns()).section("Teachers"),
    ];
    let sections = build_detail(&fields, &location());
    let names: Vec<&str> = sections.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Franchise", "Teachers", "General"]);
    let expanded: Vec<bool> = sections.iter().map(|s| s.expanded).collect();
    assert_eq!(expanded, vec![true, false, false]);
}

#[test]
fn form_descriptors_convert_with_choice_labels_and_masking() {
    let descriptors = vec![
        FieldDescriptor::select("franchise.status", "Status", vec![
            SelectOption::new("Active", 1),
            SelectOption::new("Inactive", 0),
        ]),
        FieldDescriptor::password("password", "Password"),
        FieldDescriptor::custom("logo", "Logo", RendererId::new("logo")),
    ];
    let fields: Vec<DetailField> = descriptors.iter().map(DetailField::from).collect();
    let sections = build_detail(&fields, &location());
    let items = &sections[0].items;

    assert!(matches!(&items[0], DetailItem::Scalar { text, .. } if text == "Active"));
    assert!(matches!(&items[1], DetailItem::Scalar { text, .. } if text == MASKED_VALUE));
    assert!(matches!(&items[2], DetailItem::Custom { renderer, .. } if renderer.0 == "logo"));
    assert_eq!(items[2].field().label, "Logo");
}

#[test]
fn heading_names_entity() {
    assert_eq!(heading("Location"), "Location Details");
}
