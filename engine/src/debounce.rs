//! Debounce gate: only the latest of a burst of values is released.
//!
//! DESIGN
//! ======
//! The gate never owns a timer. Arming it stores a value and hands back a
//! [`Ticket`]; the caller schedules whatever timer its runtime offers and
//! presents the ticket when the timer fires. Only the ticket from the most
//! recent arm can take the value, so earlier timers that still fire are inert
//! and cancellation is just a generation bump.

#[cfg(test)]
#[path = "debounce_test.rs"]
mod debounce_test;

use std::time::Duration;

/// Default settle delay for search input.
pub const SEARCH_SETTLE_DELAY: Duration = Duration::from_millis(300);

/// How user input is turned into outgoing queries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DebouncePolicy {
    /// Every change is emitted immediately.
    Immediate,
    /// Changes settle for the given delay; only the last one is emitted.
    Settle(Duration),
}

impl Default for DebouncePolicy {
    fn default() -> Self {
        Self::Settle(SEARCH_SETTLE_DELAY)
    }
}

impl DebouncePolicy {
    /// Build a policy from a millisecond count; `0` means immediate.
    #[must_use]
    pub fn from_millis(ms: u64) -> Self {
        if ms == 0 { Self::Immediate } else { Self::Settle(Duration::from_millis(ms)) }
    }

    /// The settle delay, or `None` for immediate emission.
    #[must_use]
    pub fn delay(self) -> Option<Duration> {
        match self {
            Self::Immediate => None,
            Self::Settle(delay) => Some(delay),
        }
    }
}

/// Proof of one arm; redeem it with [`DebounceGate::fire`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

/// Holder of the latest pending value.
#[derive(Clone, Debug)]
pub struct DebounceGate<T> {
    generation: u64,
    pending: Option<T>,
    disposed: bool,
}

impl<T> Default for DebounceGate<T> {
    fn default() -> Self {
        Self { generation: 0, pending: None, disposed: false }
    }
}

impl<T> DebounceGate<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value` as the pending one, superseding any earlier arm.
    ///
    /// Returns `None` once the gate is disposed.
    pub fn arm(&mut self, value: T) -> Option<Ticket> {
        if self.disposed {
            return None;
        }
        self.generation = self.generation.wrapping_add(1);
        self.pending = Some(value);
        Some(Ticket(self.generation))
    }

    /// Take the pending value if `ticket` belongs to the most recent arm.
    pub fn fire(&mut self, ticket: Ticket) -> Option<T> {
        if self.disposed || ticket.0 != self.generation {
            return None;
        }
        self.pending.take()
    }

    /// Drop the pending value and invalidate every outstanding ticket.
    pub fn cancel(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.pending = None;
    }

    /// Cancel and refuse all future arms.
    pub fn dispose(&mut self) {
        self.cancel();
        self.disposed = true;
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }
}

/// What a caller should do after feeding a change into [`DebouncedInput`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputStep {
    /// Emit this text now.
    Emit(String),
    /// Wait the delay, then call [`DebouncedInput::settle`] with the ticket.
    Wait(Ticket, Duration),
    /// Nothing to do.
    Idle,
}

/// A text input whose changes leave through a [`DebouncePolicy`].
///
/// Used by the table's search bar; the remote selector embeds its own gate.
#[derive(Clone, Debug, Default)]
pub struct DebouncedInput {
    policy: DebouncePolicy,
    text: String,
    gate: DebounceGate<String>,
}

impl DebouncedInput {
    #[must_use]
    pub fn new(policy: DebouncePolicy) -> Self {
        Self { policy, text: String::new(), gate: DebounceGate::new() }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn policy(&self) -> DebouncePolicy {
        self.policy
    }

    /// Record new input text.
    pub fn change(&mut self, text: &str) -> InputStep {
        text.clone_into(&mut self.text);
        match self.policy.delay() {
            None => InputStep::Emit(self.text.clone()),
            Some(delay) => match self.gate.arm(self.text.clone()) {
                Some(ticket) => InputStep::Wait(ticket, delay),
                None => InputStep::Idle,
            },
        }
    }

    /// Timer callback: the settled text, if `ticket` is still current.
    pub fn settle(&mut self, ticket: Ticket) -> Option<String> {
        self.gate.fire(ticket)
    }

    pub fn dispose(&mut self) {
        self.gate.dispose();
    }
}
