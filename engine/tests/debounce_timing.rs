//! Selector debouncing against a real (paused) clock.
//!
//! Each keystroke spawns a timer task the way the browser component schedules
//! a timeout; the fetch log records every request the selector actually issues.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use engine::selector::{SelectorConfig, SelectorState, SelectorStep};
use serde_json::json;
use tokio::task::JoinHandle;

type Shared = Arc<Mutex<SelectorState>>;
type FetchLog = Arc<Mutex<Vec<Option<String>>>>;

fn keystroke(state: &Shared, log: &FetchLog, text: &str) -> Option<JoinHandle<()>> {
    let step = state.lock().unwrap().input(text);
    match step {
        SelectorStep::Wait(ticket, delay) => {
            let state = Arc::clone(state);
            let log = Arc::clone(log);
            let timer = tokio::time::sleep(delay);
            Some(tokio::spawn(async move {
                timer.await;
                let request = state.lock().unwrap().settle(ticket);
                if let Some(request) = request {
                    log.lock().unwrap().push(request.query);
                }
            }))
        }
        SelectorStep::Fetch(request) => {
            log.lock().unwrap().push(request.query);
            None
        }
        SelectorStep::Idle => None,
    }
}

async fn join_all(handles: Vec<JoinHandle<()>>) {
    for handle in handles {
        handle.await.unwrap();
    }
}

#[tokio::test(start_paused = true)]
async fn burst_within_settle_delay_fetches_once_with_last_text() {
    let state: Shared = Arc::new(Mutex::new(SelectorState::new(SelectorConfig::new("name"))));
    let log: FetchLog = Arc::default();

    let mut handles = Vec::new();
    handles.extend(keystroke(&state, &log, "a"));
    tokio::time::advance(Duration::from_millis(100)).await;
    handles.extend(keystroke(&state, &log, "ab"));
    tokio::time::advance(Duration::from_millis(100)).await;
    handles.extend(keystroke(&state, &log, "abc"));

    tokio::time::advance(Duration::from_millis(299)).await;
    assert!(log.lock().unwrap().is_empty());

    join_all(handles).await;
    assert_eq!(*log.lock().unwrap(), vec![Some("abc".to_owned())]);
}

#[tokio::test(start_paused = true)]
async fn keystrokes_further_apart_than_delay_each_fetch() {
    let state: Shared = Arc::new(Mutex::new(SelectorState::new(SelectorConfig::new("name"))));
    let log: FetchLog = Arc::default();

    let first = keystroke(&state, &log, "be");
    tokio::time::sleep(Duration::from_millis(400)).await;
    let second = keystroke(&state, &log, "ber");

    join_all(first.into_iter().chain(second).collect()).await;
    assert_eq!(*log.lock().unwrap(), vec![Some("be".to_owned()), Some("ber".to_owned())]);
}

#[tokio::test(start_paused = true)]
async fn reset_before_settling_cancels_the_pending_fetch() {
    let state: Shared = Arc::new(Mutex::new(SelectorState::new(SelectorConfig::new("name"))));
    let log: FetchLog = Arc::default();

    let pending = keystroke(&state, &log, "ham");
    state.lock().unwrap().reset();
    join_all(pending.into_iter().collect()).await;
    assert!(log.lock().unwrap().is_empty());

    let request = state.lock().unwrap().focus().unwrap();
    assert_eq!(request.query, None);
    assert!(state.lock().unwrap().complete(request.seq, Ok(vec![json!({"id": 1, "name": "Hamburg"})])));
}
