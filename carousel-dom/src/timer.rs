//! `setTimeout` wakeups.
//!
//! [`Timeout`] owns one JS closure and at most one pending `setTimeout` for it. Re-arming
//! clears the pending timeout first, so only the most recent one can fire.

use std::cell::Cell;

use wasm_bindgen::JsCast as _;
use wasm_bindgen::closure::Closure;
use web_sys::Window;

pub(crate) struct Timeout {
    window: Window,
    closure: Closure<dyn FnMut()>,
    /// The handle returned by the most recent `setTimeout`, while it is pending.
    handle: Cell<Option<i32>>,
}

impl Timeout {
    pub(crate) fn new(window: Window, callback: impl FnMut() + 'static) -> Self {
        Self {
            window,
            closure: Closure::wrap(Box::new(callback) as Box<dyn FnMut()>),
            handle: Cell::new(None),
        }
    }

    /// Cancels any pending timeout and schedules a new one `delay_ms` from now.
    pub(crate) fn arm(&self, delay_ms: u64) {
        self.cancel();
        let delay = i32::try_from(delay_ms).unwrap_or(i32::MAX);
        match self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                self.closure.as_ref().unchecked_ref::<js_sys::Function>(),
                delay,
            ) {
            Ok(handle) => self.handle.set(Some(handle)),
            Err(err) => {
                dwarn!(
                    error = %crate::mount::js_message(&err),
                    "setTimeout failed"
                );
            }
        }
    }

    pub(crate) fn cancel(&self) {
        if let Some(handle) = self.handle.take() {
            self.window.clear_timeout_with_handle(handle);
        }
    }

    /// Forgets the pending handle; call this from the callback once it has fired.
    pub(crate) fn mark_fired(&self) {
        self.handle.set(None);
    }
}

impl Drop for Timeout {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl core::fmt::Debug for Timeout {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Timeout")
            .field("handle", &self.handle.get())
            .finish_non_exhaustive()
    }
}
