use super::*;

#[test]
fn status_error_uses_backend_message() {
    let err = ApiError::from_status(409, r#"{"message": "Franchise name already exists"}"#);
    assert_eq!(err.to_string(), "Franchise name already exists");
    assert_eq!(err.status(), Some(409));
}

#[test]
fn status_error_falls_back_for_empty_or_foreign_bodies() {
    assert_eq!(ApiError::from_status(500, "").to_string(), "request failed: 500");
    assert_eq!(ApiError::from_status(502, "<html>").to_string(), "request failed: 502");
    assert_eq!(ApiError::from_status(400, r#"{"message": " "}"#).to_string(), "request failed: 400");
}

#[test]
fn other_variants_have_no_status() {
    assert_eq!(ApiError::Network("offline".into()).status(), None);
    assert_eq!(ApiError::Decode("eof".into()).to_string(), "unexpected response: eof");
}

#[test]
fn delete_request_serializes_mixed_ids() {
    let body = DeleteRequest { ids: vec![RowId::Int(1), RowId::Text("a-2".into())] };
    assert_eq!(serde_json::to_value(&body).unwrap(), serde_json::json!({"ids": [1, "a-2"]}));
}
