//! Browser timer handle backing the debounced inputs.
//!
//! DESIGN
//! ======
//! The decision of *when* to emit lives in `engine::debounce`; this type only
//! owns the pending browser timeout. Scheduling again drops (and so cancels)
//! the previous timeout, and the owning component's cleanup cancels whatever
//! is still pending. On the server nothing is ever scheduled.

use std::time::Duration;

use leptos::prelude::*;

/// A single replaceable timeout tied to the current reactive owner.
#[derive(Clone, Copy)]
pub struct DebounceTimer {
    #[cfg(feature = "hydrate")]
    pending: StoredValue<Option<gloo_timers::callback::Timeout>, LocalStorage>,
}

impl Default for DebounceTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl DebounceTimer {
    pub fn new() -> Self {
        let timer = Self {
            #[cfg(feature = "hydrate")]
            pending: StoredValue::new_local(None),
        };
        on_cleanup(move || timer.cancel());
        timer
    }

    /// Run `f` after `delay`, replacing any pending run.
    pub fn schedule(&self, delay: Duration, f: impl FnOnce() + 'static) {
        #[cfg(feature = "hydrate")]
        {
            let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
            let timeout = gloo_timers::callback::Timeout::new(millis, f);
            self.pending.try_update_value(|slot| *slot = Some(timeout));
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = delay;
            drop(f);
        }
    }

    pub fn cancel(&self) {
        #[cfg(feature = "hydrate")]
        if let Some(Some(timeout)) = self.pending.try_update_value(Option::take) {
            drop(timeout);
        }
    }
}
