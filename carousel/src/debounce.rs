/// A trailing-edge debouncer driven by an adapter-supplied millisecond clock.
///
/// Every [`notify`](Self::notify) restarts the quiet period; the debouncer becomes due once
/// `delay_ms` have passed since the most recent event. It holds no timers itself: the UI layer
/// schedules a wakeup and asks [`take_due`](Self::take_due) when it fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Debouncer {
    delay_ms: u64,
    last_event_ms: Option<u64>,
}

impl Debouncer {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            last_event_ms: None,
        }
    }

    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }

    pub fn set_delay_ms(&mut self, delay_ms: u64) {
        self.delay_ms = delay_ms;
    }

    pub fn notify(&mut self, now_ms: u64) {
        self.last_event_ms = Some(now_ms);
    }

    pub fn is_pending(&self) -> bool {
        self.last_event_ms.is_some()
    }

    pub fn cancel(&mut self) {
        self.last_event_ms = None;
    }

    pub fn is_due(&self, now_ms: u64) -> bool {
        let Some(last) = self.last_event_ms else {
            return false;
        };
        now_ms.saturating_sub(last) >= self.delay_ms
    }

    /// Milliseconds left until the debouncer is due, or `None` when nothing is pending.
    pub fn remaining_ms(&self, now_ms: u64) -> Option<u64> {
        let last = self.last_event_ms?;
        Some(self.delay_ms.saturating_sub(now_ms.saturating_sub(last)))
    }

    /// Returns `true` (and clears the pending event) if the debouncer is due.
    pub fn take_due(&mut self, now_ms: u64) -> bool {
        if !self.is_due(now_ms) {
            return false;
        }
        self.last_event_ms = None;
        true
    }
}
