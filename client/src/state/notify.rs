//! Transient notification state behind the snackbar.
//!
//! DESIGN
//! ======
//! Every CRUD action reports its outcome here. Each notice carries a sequence
//! number so a hide timer scheduled for an older notice cannot dismiss a
//! newer one.

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

/// Fallback text when the backend confirms success without a message.
pub const DEFAULT_SUCCESS: &str = "Saved successfully";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub seq: u64,
    pub message: String,
    pub severity: Severity,
}

/// The currently visible notice, if any.
#[derive(Clone, Debug, Default)]
pub struct NotifyState {
    current: Option<Notice>,
    seq: u64,
}

impl NotifyState {
    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }

    /// Show a success notice; returns its sequence number.
    pub fn success(&mut self, message: &str) -> u64 {
        let message = if message.trim().is_empty() { DEFAULT_SUCCESS } else { message };
        self.show(message.to_owned(), Severity::Success)
    }

    /// Show an error notice; returns its sequence number.
    pub fn error(&mut self, message: impl Into<String>) -> u64 {
        self.show(message.into(), Severity::Error)
    }

    /// Hide the notice `seq` if it is still the one shown.
    pub fn dismiss(&mut self, seq: u64) -> bool {
        if self.current.as_ref().is_some_and(|n| n.seq == seq) {
            self.current = None;
            true
        } else {
            false
        }
    }

    fn show(&mut self, message: String, severity: Severity) -> u64 {
        self.seq += 1;
        self.current = Some(Notice { seq: self.seq, message, severity });
        self.seq
    }
}
