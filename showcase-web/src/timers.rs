//! `setTimeout`-backed timer host for the debounce/throttle wrappers.
use gloo::timers::callback::Timeout;
use showcase_core::TimerHost;

/// Dropping the returned [`Timeout`] clears the browser timer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BrowserTimers;

impl TimerHost for BrowserTimers {
    type Handle = Timeout;

    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Self::Handle {
        Timeout::new(delay_ms, callback)
    }
}
