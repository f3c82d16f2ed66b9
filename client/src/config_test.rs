use super::*;

#[test]
fn valid_document_overrides_defaults() {
    let config = parse_or_default(r#"{"api_base": "https://admin.example.com/api", "surface_fetch_errors": true}"#);
    assert_eq!(config.api_base, "https://admin.example.com/api");
    assert!(config.surface_fetch_errors);
    assert_eq!(config.default_page_size, 10);
}

#[test]
fn malformed_document_falls_back_to_defaults() {
    assert_eq!(parse_or_default("not json"), UiConfig::default());
    assert_eq!(parse_or_default(r#"{"page_size_options": []}"#), UiConfig::default());
}
