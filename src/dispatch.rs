//! Algorithm selection and result assembly.
//!
//! The dispatcher maps a wire-level algorithm name to one of the closed set
//! of strategies, runs the simulation, and pairs the resulting trace with
//! computed metrics into a normalized [`SimulationResult`]. It is the only
//! entry point the surrounding request layer needs.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{Process, ReadyQueueSnapshot, TimelineSlice};
use crate::sim::{self, Metrics, Trace};

/// Dispatch failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    /// The requested algorithm name is not one of `FCFS`, `SJF`,
    /// `Priority`, `RR`.
    #[error("unknown scheduling algorithm: {0}")]
    UnknownAlgorithm(String),
}

/// A scheduling discipline.
///
/// The closed set of strategies behind one
/// [`run`](Algorithm::run) contract; the quantum travels with the
/// round-robin variant so a constructed `Algorithm` is always runnable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Algorithm {
    /// First-Come-First-Served (non-preemptive, arrival order).
    Fcfs,
    /// Shortest-Job-First (non-preemptive, smallest burst first).
    Sjf,
    /// Priority scheduling (non-preemptive, lowest number first).
    Priority,
    /// Round Robin (preemptive, fixed quantum per turn).
    RoundRobin {
        /// Maximum contiguous ticks per turn (>= 1).
        quantum: u32,
    },
}

impl Algorithm {
    /// Resolves a wire-level algorithm name and optional quantum.
    ///
    /// A missing quantum defaults to 1, matching the service's request
    /// defaults. Unrecognized names fail with
    /// [`ScheduleError::UnknownAlgorithm`].
    ///
    /// ```
    /// use cpu_sched::Algorithm;
    ///
    /// let rr = Algorithm::from_request("RR", Some(4)).unwrap();
    /// assert_eq!(rr, Algorithm::RoundRobin { quantum: 4 });
    /// assert!(Algorithm::from_request("MLFQ", None).is_err());
    /// ```
    pub fn from_request(name: &str, time_quantum: Option<u32>) -> Result<Self, ScheduleError> {
        match name {
            "FCFS" => Ok(Self::Fcfs),
            "SJF" => Ok(Self::Sjf),
            "Priority" => Ok(Self::Priority),
            "RR" => Ok(Self::RoundRobin {
                quantum: time_quantum.unwrap_or(1),
            }),
            other => Err(ScheduleError::UnknownAlgorithm(other.to_string())),
        }
    }

    /// Wire-level name of this algorithm.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Fcfs => "FCFS",
            Self::Sjf => "SJF",
            Self::Priority => "Priority",
            Self::RoundRobin { .. } => "RR",
        }
    }

    /// Runs the simulation, producing the timeline and ready-queue history.
    ///
    /// Assumes an already-validated process set (see
    /// [`validation`](crate::validation)); the input is never mutated.
    pub fn run(&self, processes: &[Process]) -> Trace {
        match self {
            Self::Fcfs => sim::fcfs::run(processes),
            Self::Sjf => sim::sjf::run(processes),
            Self::Priority => sim::priority::run(processes),
            Self::RoundRobin { quantum } => sim::round_robin::run(processes, *quantum),
        }
    }
}

/// A complete simulation result.
///
/// Always carries all three parts; an algorithm that produced no snapshots
/// would yield an empty history rather than omitting the field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Execution slices in non-decreasing time order.
    pub timeline: Vec<TimelineSlice>,
    /// Per-process and aggregate performance metrics.
    pub metrics: Metrics,
    /// Ready-queue contents at each scheduling decision.
    #[serde(rename = "readyQueueHistory")]
    pub ready_queue_history: Vec<ReadyQueueSnapshot>,
}

/// Runs one simulation and assembles the normalized result.
///
/// The process set is borrowed immutably; each simulator builds its own
/// per-invocation working structures, so the caller's data is never
/// aliased into the result or mutated.
///
/// ```
/// use cpu_sched::{schedule, Algorithm, Process};
///
/// let processes = vec![Process::new("A", 0, 5), Process::new("B", 1, 3)];
/// let result = schedule(&processes, &Algorithm::Fcfs);
///
/// assert_eq!(result.timeline.len(), 2);
/// assert_eq!(result.metrics.waiting_times["B"], 4);
/// ```
pub fn schedule(processes: &[Process], algorithm: &Algorithm) -> SimulationResult {
    log::debug!(
        "scheduling {} processes with {}",
        processes.len(),
        algorithm.name()
    );

    let Trace {
        timeline,
        ready_queue,
    } = algorithm.run(processes);
    let metrics = Metrics::calculate(processes, &timeline);

    SimulationResult {
        timeline,
        metrics,
        ready_queue_history: ready_queue,
    }
}

fn default_algorithm() -> String {
    "FCFS".to_string()
}

/// Wire-level simulation request, as posted by the surrounding service.
///
/// ```
/// use cpu_sched::ScheduleRequest;
///
/// let request: ScheduleRequest = serde_json::from_str(
///     r#"{
///         "processes": [
///             {"id": "A", "arrival_time": 0, "burst_time": 5},
///             {"id": "B", "arrival_time": 0, "burst_time": 3}
///         ],
///         "algorithm": "RR",
///         "time_quantum": 2
///     }"#,
/// ).unwrap();
///
/// let result = request.run().unwrap();
/// assert_eq!(result.timeline.len(), 5);
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleRequest {
    /// Processes to schedule (validated by the caller).
    pub processes: Vec<Process>,
    /// Algorithm name; defaults to `FCFS` when absent.
    #[serde(default = "default_algorithm")]
    pub algorithm: String,
    /// Round-robin quantum; defaults to 1 when absent.
    #[serde(default)]
    pub time_quantum: Option<u32>,
}

impl ScheduleRequest {
    /// Dispatches this request.
    pub fn run(&self) -> Result<SimulationResult, ScheduleError> {
        let algorithm = Algorithm::from_request(&self.algorithm, self.time_quantum)?;
        Ok(schedule(&self.processes, &algorithm))
    }
}
