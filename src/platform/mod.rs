//! Platform abstraction layer
//!
//! Handles host differences for:
//! - Time/ticks (one-shot timers driven by an external clock)

pub mod scheduler;

pub use scheduler::Scheduler;
