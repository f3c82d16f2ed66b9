use super::*;
use crate::field::FieldDescriptor;

fn field_names(section: &Section<'_, FieldDescriptor>) -> Vec<String> {
    section.items.iter().map(|f| f.name.clone()).collect()
}

#[test]
fn preserves_first_seen_section_order_and_field_order() {
    let fields = vec![
        FieldDescriptor::text("name", "Name").section("Franchise"),
        FieldDescriptor::email("email", "Email").section("Contact"),
        FieldDescriptor::text("owner", "Owner").section("Franchise"),
        FieldDescriptor::tel("phone", "Phone").section("Contact"),
        FieldDescriptor::text("city", "City").section("Franchise"),
    ];
    let sections = group_sections(&fields, DEFAULT_FORM_SECTION);

    assert_eq!(sections.len(), 2);
    assert_eq!(sections[0].name, "Franchise");
    assert_eq!(field_names(&sections[0]), vec!["name", "owner", "city"]);
    assert_eq!(sections[1].name, "Contact");
    assert_eq!(field_names(&sections[1]), vec!["email", "phone"]);
}

#[test]
fn unsectioned_fields_land_in_one_trailing_other_group() {
    let fields = vec![
        FieldDescriptor::text("notes", "Notes"),
        FieldDescriptor::text("name", "Name").section("Franchise"),
        FieldDescriptor::text("extra", "Extra"),
        FieldDescriptor::email("email", "Email").section("Contact"),
    ];
    let sections = group_sections(&fields, DEFAULT_FORM_SECTION);

    let order: Vec<&str> = sections.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(order, vec!["Franchise", "Contact", "Other"]);
    assert_eq!(field_names(&sections[2]), vec!["notes", "extra"]);
}

#[test]
fn blank_and_explicit_fallback_names_join_the_fallback_group() {
    let fields = vec![
        FieldDescriptor::text("a", "A").section("  "),
        FieldDescriptor::text("b", "B").section("Other"),
        FieldDescriptor::text("c", "C").section("Main"),
    ];
    let sections = group_sections(&fields, DEFAULT_FORM_SECTION);

    assert_eq!(sections.len(), 2);
    assert_eq!(sections[0].name, "Main");
    assert_eq!(sections[1].name, "Other");
    assert_eq!(field_names(&sections[1]), vec!["a", "b"]);
}

#[test]
fn all_unsectioned_yields_single_group() {
    let fields = vec![FieldDescriptor::text("a", "A"), FieldDescriptor::text("b", "B")];
    let sections = group_sections(&fields, DEFAULT_DETAIL_SECTION);
    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].name, "General");
    assert_eq!(sections[0].len(), 2);
}

#[test]
fn empty_input_yields_no_sections() {
    let fields: Vec<FieldDescriptor> = Vec::new();
    assert!(group_sections(&fields, DEFAULT_FORM_SECTION).is_empty());
}

#[test]
fn divider_between_groups_but_not_after_last() {
    assert!(divider_after(0, 3));
    assert!(divider_after(1, 3));
    assert!(!divider_after(2, 3));
    assert!(!divider_after(0, 1));
}
