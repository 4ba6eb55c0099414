//! Time-derived record id allocation.
//!
//! # Responsibility
//! - Turn wall-clock milliseconds into unique, increasing `RecordId`s.
//!
//! # Invariants
//! - Every id handed out by one allocator is strictly greater than the
//!   previous one, even when the clock stalls or steps backwards.
//! - Once `i64::MAX` has been issued the allocator is exhausted and
//!   `next_id` returns `None` instead of repeating a value.

use crate::model::record::RecordId;
use std::time::{SystemTime, UNIX_EPOCH};

/// Source of the current time in Unix epoch milliseconds.
pub trait Clock {
    /// Current time in Unix epoch milliseconds.
    fn now_epoch_ms(&self) -> i64;
}

/// Wall-clock implementation backed by `SystemTime`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_epoch_ms(&self) -> i64 {
        // A clock set before 1970 collapses to 0; the allocator still keeps
        // ids increasing from there.
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX))
            .unwrap_or(0)
    }
}

/// Frozen clock for deterministic tests and replays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn now_epoch_ms(&self) -> i64 {
        self.0
    }
}

/// Allocates `RecordId`s from a clock.
#[derive(Debug, Clone)]
pub struct RecordIdAllocator<C: Clock = SystemClock> {
    clock: C,
    last: Option<i64>,
}

impl RecordIdAllocator<SystemClock> {
    /// Creates an allocator reading the wall clock.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for RecordIdAllocator<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> RecordIdAllocator<C> {
    /// Creates an allocator reading time from `clock`.
    pub fn with_clock(clock: C) -> Self {
        Self { clock, last: None }
    }

    /// Returns the next id, or `None` once the id space is exhausted.
    ///
    /// Uses the current timestamp when it is ahead of the last issued id,
    /// otherwise `last + 1`.
    pub fn next_id(&mut self) -> Option<RecordId> {
        let now = self.clock.now_epoch_ms();
        let value = match self.last {
            Some(last) if now <= last => last.checked_add(1)?,
            _ => now,
        };
        self.last = Some(value);
        Some(RecordId::from_raw(value))
    }
}
