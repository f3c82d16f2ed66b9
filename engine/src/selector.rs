//! Debounced remote selector state.
//!
//! SYSTEM CONTEXT
//! ==============
//! The parent screen owns a [`SelectorState`] (in the client, inside a Leptos
//! signal) and hands it to the `RemoteSelector` component as a controlled
//! value. The component translates focus, keystrokes and clicks into calls on
//! this state and performs whatever fetch or timer the state asks for. Reset
//! and selection reads are plain method calls by the parent.
//!
//! DESIGN
//! ======
//! - Keystrokes arm a [`DebounceGate`]; only the ticket of the last keystroke
//!   produces a fetch once the settle delay elapses.
//! - Every fetch gets a sequence tag. [`SelectorState::complete`] applies a
//!   response only when its tag is the latest issued; [`SelectorState::reset`]
//!   bumps the tag so in-flight responses become inert.
//! - In multi mode selected items missing from a fetched page are appended to
//!   the option cache so their chips keep resolving.

#[cfg(test)]
#[path = "selector_test.rs"]
mod selector_test;

use std::time::Duration;

use serde_json::Value;

use crate::debounce::{DebounceGate, DebouncePolicy, Ticket};
use crate::value::{DEFAULT_IDENTITY_KEY, display_at, display_text, same_identity};

/// Single value or a set of values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SelectMode {
    #[default]
    Single,
    Multi,
}

/// What a failed fetch leaves behind.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FetchErrorPolicy {
    /// Options are cleared, nothing is shown.
    #[default]
    Silent,
    /// Options are cleared and the message is kept for display.
    Surface,
}

/// Static configuration of one selector.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectorConfig {
    pub mode: SelectMode,
    pub identity_key: String,
    pub display_path: String,
    pub debounce: DebouncePolicy,
    pub error_policy: FetchErrorPolicy,
}

impl SelectorConfig {
    /// Single-select config showing `display_path` of each item.
    pub fn new(display_path: impl Into<String>) -> Self {
        Self {
            mode: SelectMode::Single,
            identity_key: DEFAULT_IDENTITY_KEY.to_owned(),
            display_path: display_path.into(),
            debounce: DebouncePolicy::default(),
            error_policy: FetchErrorPolicy::default(),
        }
    }

    #[must_use]
    pub fn multi(mut self) -> Self {
        self.mode = SelectMode::Multi;
        self
    }

    #[must_use]
    pub fn identity_key(mut self, key: impl Into<String>) -> Self {
        self.identity_key = key.into();
        self
    }

    #[must_use]
    pub fn debounce(mut self, policy: DebouncePolicy) -> Self {
        self.debounce = policy;
        self
    }

    #[must_use]
    pub fn error_policy(mut self, policy: FetchErrorPolicy) -> Self {
        self.error_policy = policy;
        self
    }
}

/// A fetch the component must perform and report back with the same `seq`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchRequest {
    pub seq: u64,
    /// `None` asks for the default (unfiltered) list.
    pub query: Option<String>,
}

/// What the component should do after a keystroke.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectorStep {
    Fetch(FetchRequest),
    /// Start a timer for the delay and call [`SelectorState::settle`] with the ticket.
    Wait(Ticket, Duration),
    Idle,
}

#[derive(Clone, Debug)]
pub struct SelectorState {
    config: SelectorConfig,
    query: String,
    options: Vec<Value>,
    selection: Vec<Value>,
    loading: bool,
    error: Option<String>,
    gate: DebounceGate<String>,
    seq: u64,
    loaded: bool,
}

impl SelectorState {
    #[must_use]
    pub fn new(config: SelectorConfig) -> Self {
        Self {
            config,
            query: String::new(),
            options: Vec::new(),
            selection: Vec::new(),
            loading: false,
            error: None,
            gate: DebounceGate::new(),
            seq: 0,
            loaded: false,
        }
    }

    /// Start with a controlled initial value (`null`, one item, or an array).
    #[must_use]
    pub fn with_value(mut self, value: &Value) -> Self {
        self.set_value(value);
        self
    }

    #[must_use]
    pub fn config(&self) -> &SelectorConfig {
        &self.config
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub fn options(&self) -> &[Value] {
        &self.options
    }

    #[must_use]
    pub fn selection(&self) -> &[Value] {
        &self.selection
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Last fetch error, only kept under [`FetchErrorPolicy::Surface`].
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    // =========================================================================
    // FETCHING
    // =========================================================================

    /// Input gained focus. Fetches the default list until one load has succeeded.
    pub fn focus(&mut self) -> Option<FetchRequest> {
        if self.loaded || self.loading || !self.options.is_empty() {
            return None;
        }
        Some(self.begin_fetch(None))
    }

    /// User typed. Typing is never blocked by an in-flight fetch.
    pub fn input(&mut self, text: &str) -> SelectorStep {
        text.clone_into(&mut self.query);
        match self.config.debounce.delay() {
            None => SelectorStep::Fetch(self.begin_fetch(query_param(text))),
            Some(delay) => match self.gate.arm(text.to_owned()) {
                Some(ticket) => SelectorStep::Wait(ticket, delay),
                None => SelectorStep::Idle,
            },
        }
    }

    /// Debounce timer fired. Only the latest keystroke's ticket yields a fetch.
    pub fn settle(&mut self, ticket: Ticket) -> Option<FetchRequest> {
        let text = self.gate.fire(ticket)?;
        Some(self.begin_fetch(query_param(&text)))
    }

    /// Tag a new fetch and mark the selector loading.
    pub fn begin_fetch(&mut self, query: Option<String>) -> FetchRequest {
        self.seq = self.seq.wrapping_add(1);
        self.loading = true;
        FetchRequest { seq: self.seq, query }
    }

    /// Apply a fetch outcome. Returns `false` when it was stale and discarded.
    pub fn complete(&mut self, seq: u64, result: Result<Vec<Value>, String>) -> bool {
        if seq != self.seq {
            log::debug!("selector: dropping stale response seq={seq} latest={}", self.seq);
            return false;
        }
        self.loading = false;
        match result {
            Ok(items) => {
                self.loaded = true;
                self.options = items;
                self.error = None;
                if self.config.mode == SelectMode::Multi {
                    self.merge_selection_into_options();
                }
            }
            Err(message) => {
                log::warn!("selector: fetch failed: {message}");
                self.loaded = false;
                self.options.clear();
                self.error = match self.config.error_policy {
                    FetchErrorPolicy::Silent => None,
                    FetchErrorPolicy::Surface => Some(message),
                };
            }
        }
        true
    }

    fn merge_selection_into_options(&mut self) {
        let key = self.config.identity_key.clone();
        for item in &self.selection {
            if !self.options.iter().any(|opt| same_identity(opt, item, &key)) {
                self.options.push(item.clone());
            }
        }
    }

    // =========================================================================
    // SELECTION
    // =========================================================================

    #[must_use]
    pub fn is_selected(&self, item: &Value) -> bool {
        let key = &self.config.identity_key;
        self.selection.iter().any(|s| same_identity(s, item, key))
    }

    /// User picked an option: replaces in single mode, toggles in multi mode.
    pub fn select(&mut self, item: Value) {
        match self.config.mode {
            SelectMode::Single => {
                self.query = self.option_label(&item);
                self.selection = vec![item];
            }
            SelectMode::Multi => {
                if self.is_selected(&item) {
                    self.remove(&item);
                } else {
                    self.selection.push(item);
                }
            }
        }
    }

    /// Remove one selected item (a chip's delete button).
    pub fn remove(&mut self, item: &Value) {
        let key = self.config.identity_key.clone();
        self.selection.retain(|s| !same_identity(s, item, &key));
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
        if self.config.mode == SelectMode::Single {
            self.query.clear();
        }
    }

    /// Replace the selection from a controlled value; duplicates collapse.
    pub fn set_value(&mut self, value: &Value) {
        let items: Vec<Value> = match value {
            Value::Null => Vec::new(),
            Value::Array(items) => items.clone(),
            other => vec![other.clone()],
        };
        self.selection.clear();
        for item in items {
            if !self.is_selected(&item) {
                self.selection.push(item);
            }
        }
        if self.config.mode == SelectMode::Single {
            self.selection.truncate(1);
            self.query = self.selection.first().map(|item| self.option_label(item)).unwrap_or_default();
        }
    }

    /// Selection as a controlled value: the item or `null` in single mode, an array in multi mode.
    #[must_use]
    pub fn value(&self) -> Value {
        match self.config.mode {
            SelectMode::Single => self.selection.first().cloned().unwrap_or(Value::Null),
            SelectMode::Multi => Value::Array(self.selection.clone()),
        }
    }

    /// Text shown for an option.
    #[must_use]
    pub fn option_label(&self, item: &Value) -> String {
        if item.is_object() { display_at(item, &self.config.display_path) } else { display_text(item) }
    }

    // =========================================================================
    // LIFECYCLE
    // =========================================================================

    /// Clear query, selection and options; the next focus fetches defaults again.
    pub fn reset(&mut self) {
        self.query.clear();
        self.selection.clear();
        self.options.clear();
        self.error = None;
        self.loading = false;
        self.loaded = false;
        self.gate.cancel();
        self.seq = self.seq.wrapping_add(1);
    }

    /// Component unmounted: pending keystrokes and in-flight responses become inert.
    ///
    /// The state stays usable; another selector may mount on it.
    pub fn detach(&mut self) {
        self.gate.cancel();
        self.loading = false;
        self.seq = self.seq.wrapping_add(1);
    }
}

fn query_param(text: &str) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}
