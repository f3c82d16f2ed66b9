use super::*;

#[test]
fn collection_url_joins_base_and_resource() {
    assert_eq!(collection_url("/api", "franchises"), "/api/franchises");
    assert_eq!(collection_url("/api/", "/franchises/"), "/api/franchises");
    assert_eq!(collection_url("http://localhost:8080", "locations"), "http://localhost:8080/locations");
}

#[test]
fn item_url_appends_id() {
    assert_eq!(item_url("/api", "franchises", &RowId::Int(7)), "/api/franchises/7");
    assert_eq!(item_url("/api", "franchises", &RowId::Text("f-7".into())), "/api/franchises/f-7");
}

#[test]
fn delete_url_targets_bulk_endpoint() {
    assert_eq!(delete_url("/api", "franchises"), "/api/franchises/delete");
}

#[test]
fn empty_success_body_decodes_as_empty_object() {
    let resp: SubmitResponse = decode_body("").unwrap();
    assert_eq!(resp.message, "");
    let resp: SubmitResponse = decode_body(r#"{"message": "Franchise created"}"#).unwrap();
    assert_eq!(resp.message, "Franchise created");
}

#[test]
fn page_envelope_decodes() {
    let page: Page = decode_body(r#"{"data": [{"id": 1}], "total": 1, "page": 1, "pageCount": 1}"#).unwrap();
    assert_eq!(page.data.len(), 1);
}

#[test]
fn malformed_body_is_decode_error() {
    assert!(matches!(decode_body::<Page>("{"), Err(ApiError::Decode(_))));
}
