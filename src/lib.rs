//! CPU scheduling simulator.
//!
//! Simulates single-CPU process scheduling under four classical
//! disciplines — FCFS, SJF (non-preemptive), priority (non-preemptive),
//! and round robin — producing an execution timeline, per-process
//! performance metrics, and a ready-queue history suitable for
//! visualization.
//!
//! # Modules
//!
//! - **`models`**: Domain types — [`Process`], [`TimelineSlice`],
//!   [`ReadyQueueSnapshot`]
//! - **`sim`**: The four algorithm simulators and the [`Metrics`] calculator
//! - **`dispatch`**: [`Algorithm`] selection and [`SimulationResult`] assembly
//! - **`validation`**: Input integrity checks (duplicate ids, zero bursts)
//!
//! # Usage
//!
//! ```
//! use cpu_sched::{schedule, validate_input, Algorithm, Process};
//!
//! let processes = vec![
//!     Process::new("A", 0, 5),
//!     Process::new("B", 0, 3),
//! ];
//! validate_input(&processes).expect("well-formed process set");
//!
//! let result = schedule(&processes, &Algorithm::RoundRobin { quantum: 2 });
//! assert_eq!(result.timeline.first().unwrap().process_id, "A");
//! ```
//!
//! Every simulation is a synchronous, deterministic batch computation:
//! working structures are scoped to the call and the caller's process set
//! is never mutated, so independent simulations may run concurrently with
//! no coordination.
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2015), "Modern Operating Systems", Ch. 2.4

pub mod dispatch;
pub mod models;
pub mod sim;
pub mod validation;

pub use dispatch::{schedule, Algorithm, ScheduleError, ScheduleRequest, SimulationResult};
pub use models::{Process, ReadyQueueSnapshot, TimelineSlice};
pub use sim::Metrics;
pub use validation::{validate_input, ValidationError, ValidationErrorKind};
