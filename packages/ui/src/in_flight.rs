//! Submit guard for mutating requests.

use dioxus::prelude::*;

/// Tracks whether a request started from this view is still outstanding.
///
/// A second submit while one is in flight is ignored; views also use
/// [`is_active`](InFlight::is_active) to disable their buttons.
#[derive(Clone, Copy, PartialEq)]
pub struct InFlight(Signal<bool>);

pub fn use_in_flight() -> InFlight {
    InFlight(use_signal(|| false))
}

impl InFlight {
    pub fn is_active(&self) -> bool {
        *self.0.read()
    }

    /// Mark a request as started. Returns `None` if one is already running.
    ///
    /// The flag clears when the returned guard drops, whatever the outcome.
    pub fn try_begin(mut self) -> Option<InFlightGuard> {
        if *self.0.peek() {
            return None;
        }
        self.0.set(true);
        Some(InFlightGuard(self.0))
    }
}

pub struct InFlightGuard(Signal<bool>);

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        // The owning view may already be gone.
        if let Ok(mut active) = self.0.try_write() {
            *active = false;
        }
    }
}
