//! Timeline and ready-queue trace models.
//!
//! A simulation produces two traces: the execution timeline (what ran when)
//! and the ready-queue history (what was eligible at each decision point).
//! Both are suitable for direct visualization (Gantt chart, queue view).

use serde::{Deserialize, Serialize};

/// One contiguous, uninterrupted execution slice.
///
/// Non-preemptive algorithms emit exactly one slice per process, equal to
/// its full burst; round-robin emits one slice per quantum-bounded dispatch.
/// Always `start < end`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineSlice {
    /// Id of the executing process.
    #[serde(rename = "id")]
    pub process_id: String,
    /// Slice start time (ticks).
    pub start: u32,
    /// Slice end time (ticks).
    pub end: u32,
}

impl TimelineSlice {
    /// Creates a new slice.
    pub fn new(process_id: impl Into<String>, start: u32, end: u32) -> Self {
        Self {
            process_id: process_id.into(),
            start,
            end,
        }
    }

    /// Slice duration (end - start) in ticks.
    #[inline]
    pub fn duration(&self) -> u32 {
        self.end - self.start
    }
}

/// Ready-queue contents captured immediately before a scheduling decision.
///
/// Which processes count as "eligible" differs per algorithm: FCFS lists
/// every process arrived by `time` other than the one about to run, SJF and
/// priority list the not-yet-scheduled arrivals (ids sorted ascending), and
/// round-robin lists the FIFO queue in queue order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadyQueueSnapshot {
    /// Decision time (ticks).
    pub time: u32,
    /// Eligible process ids, in algorithm-defined order.
    pub queue: Vec<String>,
}

impl ReadyQueueSnapshot {
    /// Creates a new snapshot.
    pub fn new(time: u32, queue: Vec<String>) -> Self {
        Self { time, queue }
    }
}
