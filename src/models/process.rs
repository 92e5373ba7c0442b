//! Process (scheduling input) model.
//!
//! A process is the immutable input unit of a simulation: it arrives at a
//! fixed time, requires a fixed amount of CPU time, and optionally carries
//! a priority. Simulators never mutate processes; all per-run bookkeeping
//! (remaining time, queue membership) lives in working structures scoped
//! to a single simulation.

use serde::{Deserialize, Serialize};

/// A process to be scheduled.
///
/// # Time Representation
/// All times are integer ticks relative to the simulation epoch (t=0).
/// The consumer defines the tick unit (ms, time slices, ...).
///
/// # Priority Convention
/// Lower numeric value = higher priority. A missing priority resolves to 0,
/// which is therefore the *highest* priority.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier (uniqueness is the validator's contract).
    pub id: String,
    /// Arrival time (ticks, >= 0).
    pub arrival_time: u32,
    /// Total CPU time required (ticks, >= 1).
    pub burst_time: u32,
    /// Scheduling priority. `None` = unset, resolved to 0 (highest).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<u32>,
}

impl Process {
    /// Creates a new process with no explicit priority.
    pub fn new(id: impl Into<String>, arrival_time: u32, burst_time: u32) -> Self {
        Self {
            id: id.into(),
            arrival_time,
            burst_time,
            priority: None,
        }
    }

    /// Sets the scheduling priority (lower = more urgent).
    pub fn with_priority(mut self, priority: u32) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Priority used by the priority scheduler; unset resolves to 0 (highest).
    #[inline]
    pub fn effective_priority(&self) -> u32 {
        self.priority.unwrap_or(0)
    }
}
