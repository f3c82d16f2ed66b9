use serde_json::json;

use super::*;

fn page_of(total: u64, ids: &[i64]) -> Page {
    Page { data: ids.iter().map(|id| json!({"id": id})).collect(), total, page: 1, page_count: 1 }
}

#[test]
fn page_change_fetches_that_page_with_one_based_api_page() {
    let mut list = ListState::new("/franchises", 25);
    let first = list.begin_fetch();
    assert!(list.complete(first.seq, Ok(page_of(57, &[1, 2]))));
    assert_eq!(list.pagination().total_count, 57);

    let ListEffect::Fetch(query) = list.apply(TableEvent::PageChange(2)) else {
        panic!("expected fetch");
    };
    assert_eq!(query.page, 2);
    assert_eq!(query.limit, 25);
    assert_eq!(query.api_page(), 3);
    assert!(list.is_loading());
}

#[test]
fn limit_and_search_changes_restart_at_first_page() {
    let mut list = ListState::new("/franchises", 10);
    list.apply(TableEvent::PageChange(4));

    let ListEffect::Fetch(query) = list.apply(TableEvent::LimitChange(25)) else {
        panic!("expected fetch");
    };
    assert_eq!((query.page, query.limit), (0, 25));

    list.apply(TableEvent::PageChange(2));
    let ListEffect::Fetch(query) = list.apply(TableEvent::SearchChange("berlin".into())) else {
        panic!("expected fetch");
    };
    assert_eq!(query.page, 0);
    assert_eq!(query.search, "berlin");
    assert_eq!(list.search(), "berlin");
}

#[test]
fn stale_response_is_dropped() {
    let mut list = ListState::new("/franchises", 10);
    let slow = list.begin_fetch();
    let fast = list.begin_fetch();

    assert!(list.complete(fast.seq, Ok(page_of(2, &[2]))));
    assert!(!list.complete(slow.seq, Ok(page_of(9, &[1]))));
    assert_eq!(list.rows(), &[json!({"id": 2})]);
    assert_eq!(list.pagination().total_count, 2);
}

#[test]
fn failed_fetch_empties_rows_and_records_error() {
    let mut list = ListState::new("/franchises", 10);
    let query = list.begin_fetch();
    list.complete(query.seq, Err("503".into()));
    assert!(list.rows().is_empty());
    assert!(!list.is_loading());
    assert_eq!(list.error(), Some("503"));
}

#[test]
fn row_actions_become_navigation_and_confirmation() {
    let mut list = ListState::new("/franchises", 10);
    assert_eq!(
        list.apply(TableEvent::Edit(RowId::Int(7))),
        ListEffect::Navigate("/franchises/edit/7".into())
    );
    assert_eq!(
        list.apply(TableEvent::View(RowId::Text("abc".into()))),
        ListEffect::Navigate("/franchises/view/abc".into())
    );
    assert_eq!(
        list.apply(TableEvent::Delete(vec![RowId::Int(1)])),
        ListEffect::ConfirmDelete(vec![RowId::Int(1)])
    );
    assert_eq!(list.create_route(), "/franchises/create");
}

#[test]
fn query_params_skip_blank_search() {
    let query = ListQuery { page: 0, limit: 10, search: "  ".into(), seq: 1 };
    assert_eq!(query.params(), vec![("page", "1".to_owned()), ("limit", "10".to_owned())]);
    let query = ListQuery { search: " mitte ".into(), ..query };
    assert_eq!(query.params()[2], ("search", "mitte".to_owned()));
}

#[test]
fn page_envelope_parses_camel_case() {
    let page: Page = serde_json::from_value(json!({
        "data": [{"id": 1}],
        "total": 57,
        "page": 3,
        "pageCount": 3,
    }))
    .unwrap();
    assert_eq!(page.total, 57);
    assert_eq!(page.page_count, 3);
}

#[test]
fn remove_rows_drops_deleted_ids() {
    let mut list = ListState::new("/franchises", 10);
    let query = list.begin_fetch();
    list.complete(query.seq, Ok(page_of(3, &[1, 2, 3])));
    list.remove_rows(&[RowId::Int(2)]);
    assert_eq!(list.rows().len(), 2);
}
