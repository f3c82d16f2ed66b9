use serde_json::json;

use super::*;

fn franchises() -> Vec<Value> {
    vec![json!({"id": 1, "name": "Berlin Mitte"}), json!({"id": 2, "name": "Hamburg Nord"})]
}

fn waited(step: SelectorStep) -> Ticket {
    match step {
        SelectorStep::Wait(ticket, _) => ticket,
        other => panic!("expected wait, got {other:?}"),
    }
}

// =============================================================
// Default fetch on focus
// =============================================================

#[test]
fn first_focus_fetches_default_list_once() {
    let mut state = SelectorState::new(SelectorConfig::new("name"));
    let request = state.focus().unwrap();
    assert_eq!(request.query, None);
    assert!(state.is_loading());
    assert_eq!(state.focus(), None);

    assert!(state.complete(request.seq, Ok(franchises())));
    assert_eq!(state.options().len(), 2);
    assert_eq!(state.focus(), None);
}

#[test]
fn empty_default_list_is_not_refetched_on_every_focus() {
    let mut state = SelectorState::new(SelectorConfig::new("name"));
    let request = state.focus().unwrap();
    state.complete(request.seq, Ok(Vec::new()));
    assert_eq!(state.focus(), None);
}

#[test]
fn refocus_after_failed_default_fetch_retries() {
    let mut state = SelectorState::new(SelectorConfig::new("name"));
    let failed = state.focus().unwrap();
    state.complete(failed.seq, Err("network down".into()));
    assert!(state.options().is_empty());

    let retry = state.focus().expect("failed load is retried on focus");
    assert_eq!(retry.query, None);
    state.complete(retry.seq, Ok(franchises()));
    assert_eq!(state.focus(), None);
}

// =============================================================
// Debounced typing
// =============================================================

#[test]
fn burst_of_keystrokes_yields_one_fetch_with_last_text() {
    let mut state = SelectorState::new(SelectorConfig::new("name"));
    let a = waited(state.input("a"));
    let ab = waited(state.input("ab"));
    let abc = waited(state.input("abc"));

    assert_eq!(state.settle(a), None);
    assert_eq!(state.settle(ab), None);
    let request = state.settle(abc).unwrap();
    assert_eq!(request.query.as_deref(), Some("abc"));
    assert_eq!(state.query(), "abc");
}

#[test]
fn immediate_policy_fetches_on_every_keystroke() {
    let config = SelectorConfig::new("name").debounce(DebouncePolicy::Immediate);
    let mut state = SelectorState::new(config);
    let SelectorStep::Fetch(first) = state.input("b") else { panic!("expected fetch") };
    let SelectorStep::Fetch(second) = state.input("be") else { panic!("expected fetch") };
    assert!(second.seq > first.seq);
    assert_eq!(second.query.as_deref(), Some("be"));
}

#[test]
fn blank_text_asks_for_default_list() {
    let mut state = SelectorState::new(SelectorConfig::new("name"));
    let ticket = waited(state.input("   "));
    assert_eq!(state.settle(ticket).unwrap().query, None);
}

// =============================================================
// Sequencing
// =============================================================

#[test]
fn stale_response_is_discarded() {
    let mut state = SelectorState::new(SelectorConfig::new("name"));
    let slow = state.begin_fetch(Some("b".into()));
    let fast = state.begin_fetch(Some("be".into()));

    assert!(state.complete(fast.seq, Ok(vec![json!({"id": 1, "name": "Berlin Mitte"})])));
    assert!(!state.complete(slow.seq, Ok(franchises())));
    assert_eq!(state.options().len(), 1);
}

#[test]
fn reset_invalidates_in_flight_and_pending() {
    let mut state = SelectorState::new(SelectorConfig::new("name"));
    let request = state.focus().unwrap();
    let ticket = waited(state.input("ber"));
    state.select(json!({"id": 1, "name": "Berlin Mitte"}));

    state.reset();
    assert!(!state.complete(request.seq, Ok(franchises())));
    assert_eq!(state.settle(ticket), None);
    assert!(state.options().is_empty());
    assert!(state.selection().is_empty());
    assert_eq!(state.query(), "");
    assert!(!state.is_loading());

    let again = state.focus().unwrap();
    assert_eq!(again.query, None);
}

#[test]
fn detach_drops_pending_work_but_keeps_state_usable() {
    let mut state = SelectorState::new(SelectorConfig::new("name"));
    let request = state.focus().unwrap();
    let ticket = waited(state.input("ham"));
    state.detach();

    assert_eq!(state.settle(ticket), None);
    assert!(!state.complete(request.seq, Ok(franchises())));

    let again = state.focus().unwrap();
    assert!(state.complete(again.seq, Ok(franchises())));
}

// =============================================================
// Failures
// =============================================================

#[test]
fn silent_failure_clears_options_without_message() {
    let mut state = SelectorState::new(SelectorConfig::new("name"));
    let first = state.begin_fetch(None);
    state.complete(first.seq, Ok(franchises()));

    let second = state.begin_fetch(Some("x".into()));
    assert!(state.complete(second.seq, Err("503 Service Unavailable".into())));
    assert!(state.options().is_empty());
    assert_eq!(state.error(), None);
    assert!(!state.is_loading());
}

#[test]
fn surfaced_failure_keeps_message_until_next_success() {
    let config = SelectorConfig::new("name").error_policy(FetchErrorPolicy::Surface);
    let mut state = SelectorState::new(config);
    let failed = state.begin_fetch(None);
    state.complete(failed.seq, Err("offline".into()));
    assert_eq!(state.error(), Some("offline"));

    let ok = state.begin_fetch(None);
    state.complete(ok.seq, Ok(franchises()));
    assert_eq!(state.error(), None);
}

// =============================================================
// Selection
// =============================================================

#[test]
fn single_select_replaces_and_shows_label() {
    let mut state = SelectorState::new(SelectorConfig::new("name"));
    state.select(json!({"id": 1, "name": "Berlin Mitte"}));
    state.select(json!({"id": 2, "name": "Hamburg Nord"}));
    assert_eq!(state.selection().len(), 1);
    assert_eq!(state.value(), json!({"id": 2, "name": "Hamburg Nord"}));
    assert_eq!(state.query(), "Hamburg Nord");

    state.clear_selection();
    assert_eq!(state.value(), Value::Null);
    assert_eq!(state.query(), "");
}

#[test]
fn multi_select_toggles_by_identity() {
    let mut state = SelectorState::new(SelectorConfig::new("name").multi());
    state.select(json!({"id": 1, "name": "Berlin Mitte"}));
    state.select(json!({"id": 2, "name": "Hamburg Nord"}));
    state.select(json!({"id": 1, "name": "renamed"}));
    assert_eq!(state.value(), json!([{"id": 2, "name": "Hamburg Nord"}]));
}

#[test]
fn multi_select_keeps_selected_items_missing_from_new_page() {
    let mut state = SelectorState::new(SelectorConfig::new("name").multi());
    state.select(json!({"id": 1, "name": "Berlin Mitte"}));

    let request = state.begin_fetch(Some("ham".into()));
    state.complete(request.seq, Ok(vec![json!({"id": 2, "name": "Hamburg Nord"})]));

    assert_eq!(state.options(), &[
        json!({"id": 2, "name": "Hamburg Nord"}),
        json!({"id": 1, "name": "Berlin Mitte"}),
    ]);
}

#[test]
fn primitives_compare_by_exact_value() {
    let mut state = SelectorState::new(SelectorConfig::new("name").multi());
    state.select(json!("Math"));
    state.select(json!("Physics"));
    assert!(state.is_selected(&json!("Math")));
    state.remove(&json!("Math"));
    assert_eq!(state.value(), json!(["Physics"]));
    assert_eq!(state.option_label(&json!("Physics")), "Physics");
}

#[test]
fn controlled_value_collapses_duplicates_and_truncates_single() {
    let multi = SelectorState::new(SelectorConfig::new("name").multi())
        .with_value(&json!([{"id": 1}, {"id": 1}, {"id": 2}]));
    assert_eq!(multi.selection().len(), 2);

    let single = SelectorState::new(SelectorConfig::new("name"))
        .with_value(&json!([{"id": 1, "name": "Berlin Mitte"}, {"id": 2}]));
    assert_eq!(single.selection().len(), 1);
    assert_eq!(single.query(), "Berlin Mitte");

    let empty = SelectorState::new(SelectorConfig::new("name")).with_value(&Value::Null);
    assert!(empty.selection().is_empty());
}

#[test]
fn display_path_reaches_nested_labels() {
    let state = SelectorState::new(SelectorConfig::new("address.city"));
    assert_eq!(state.option_label(&json!({"id": 1, "address": {"city": "Köln"}})), "Köln");
}
