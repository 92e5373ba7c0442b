//! Scheduling algorithm simulators and performance metrics.
//!
//! Four classical single-CPU disciplines, each a deterministic batch
//! computation over an already-validated process set:
//!
//! - **FCFS** — non-preemptive, strict arrival order
//! - **SJF** — non-preemptive, shortest available burst first
//! - **Priority** — non-preemptive, lowest priority number first
//! - **Round Robin** — preemptive, fixed time quantum
//!
//! Each simulator produces a [`Trace`]: the execution timeline plus the
//! ready-queue history recorded at every scheduling decision. The
//! [`Metrics`] calculator derives waiting/turnaround times from a completed
//! timeline.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub(crate) mod fcfs;
mod metrics;
pub(crate) mod priority;
pub(crate) mod round_robin;
pub(crate) mod sjf;

pub use metrics::Metrics;

use crate::models::{ReadyQueueSnapshot, TimelineSlice};

/// Raw simulator output, before metrics assembly.
///
/// Produced by [`crate::Algorithm::run`] and consumed by the dispatcher,
/// which pairs it with [`Metrics`] into a
/// [`SimulationResult`](crate::SimulationResult).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trace {
    /// Execution slices in non-decreasing time order.
    pub timeline: Vec<TimelineSlice>,
    /// Ready-queue contents at each scheduling decision.
    pub ready_queue: Vec<ReadyQueueSnapshot>,
}
