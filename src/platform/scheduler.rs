//! One-shot timer queue
//!
//! Stands in for a toolkit's "call this after N ms" primitive. Timers carry a
//! payload instead of a callback; whoever drains the queue decides what to do
//! and re-arms explicitly.

/// An armed timer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timer<T> {
    /// Clock time (ms) at which the timer fires
    pub due_ms: u64,
    seq: u64,
    pub payload: T,
}

/// Pending one-shot timers, fired in due order (ties in arming order)
#[derive(Debug, Clone)]
pub struct Scheduler<T> {
    timers: Vec<Timer<T>>,
    next_seq: u64,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Scheduler<T> {
    pub fn new() -> Self {
        Self {
            timers: Vec::new(),
            next_seq: 0,
        }
    }

    /// Arm a timer `delay_ms` after `now_ms`
    pub fn schedule_after(&mut self, now_ms: u64, delay_ms: u64, payload: T) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.timers.push(Timer {
            due_ms: now_ms.saturating_add(delay_ms),
            seq,
            payload,
        });
    }

    /// Remove and return the earliest timer due at or before `now_ms`
    pub fn pop_due(&mut self, now_ms: u64) -> Option<Timer<T>> {
        let index = self
            .timers
            .iter()
            .enumerate()
            .filter(|(_, timer)| timer.due_ms <= now_ms)
            .min_by_key(|(_, timer)| (timer.due_ms, timer.seq))
            .map(|(i, _)| i)?;
        Some(self.timers.swap_remove(index))
    }

    /// Drop pending timers whose payload matches, returning how many went
    pub fn cancel(&mut self, mut matches: impl FnMut(&T) -> bool) -> usize {
        let before = self.timers.len();
        self.timers.retain(|timer| !matches(&timer.payload));
        before - self.timers.len()
    }
}
