//! One-shot scheduled outcomes that stand in for network latency.
//!
//! A [`Deferred`] is plain data owned by the screen that scheduled it. It is
//! polled from the screen's `tick` and fires at most once. Because it lives
//! inside the screen state, navigating away drops it and nothing can fire
//! against a screen that is no longer mounted.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct Deferred<T> {
    deadline: Instant,
    payload: Option<T>,
}

impl<T> Deferred<T> {
    /// Schedule `payload` to be released `delay` after `now`.
    pub fn after(now: Instant, delay: Duration, payload: T) -> Self {
        Self::at(now + delay, payload)
    }

    /// Schedule `payload` for an explicit deadline.
    pub fn at(deadline: Instant, payload: T) -> Self {
        Self {
            deadline,
            payload: Some(payload),
        }
    }

    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    /// Whether the task still has to fire.
    pub fn is_pending(&self) -> bool {
        self.payload.is_some()
    }

    /// Time left until the deadline (zero once due).
    pub fn remaining(&self, now: Instant) -> Duration {
        self.deadline.saturating_duration_since(now)
    }

    /// Release the payload if the deadline has passed. Fires once.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        if now >= self.deadline {
            self.payload.take()
        } else {
            None
        }
    }

    /// Drop the payload without firing.
    pub fn cancel(&mut self) {
        self.payload = None;
    }
}

/// Poll an optional slot, clearing it once it has fired.
pub fn poll_slot<T>(slot: &mut Option<Deferred<T>>, now: Instant) -> Option<T> {
    let fired = slot.as_mut().and_then(|d| d.poll(now));
    if fired.is_some() {
        *slot = None;
    }
    fired
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_after_deadline() {
        let start = Instant::now();
        let mut task = Deferred::at(start + Duration::from_millis(1500), "go");

        assert_eq!(task.poll(start), None);
        assert_eq!(task.poll(start + Duration::from_millis(1499)), None);
        assert_eq!(task.poll(start + Duration::from_millis(1500)), Some("go"));
        assert_eq!(task.poll(start + Duration::from_secs(10)), None);
        assert!(!task.is_pending());
    }

    #[test]
    fn cancelled_task_never_fires() {
        let start = Instant::now();
        let mut task = Deferred::at(start, 1);
        task.cancel();
        assert_eq!(task.poll(start + Duration::from_secs(1)), None);
    }

    #[test]
    fn remaining_saturates_at_zero() {
        let start = Instant::now();
        let task = Deferred::at(start + Duration::from_secs(3), ());
        assert_eq!(task.remaining(start), Duration::from_secs(3));
        assert_eq!(task.remaining(start + Duration::from_secs(5)), Duration::ZERO);
    }

    #[test]
    fn poll_slot_clears_after_firing() {
        let start = Instant::now();
        let mut slot = Some(Deferred::at(start + Duration::from_secs(1), 7));
        assert_eq!(poll_slot(&mut slot, start), None);
        assert!(slot.is_some());
        assert_eq!(poll_slot(&mut slot, start + Duration::from_secs(1)), Some(7));
        assert!(slot.is_none());
    }
}
