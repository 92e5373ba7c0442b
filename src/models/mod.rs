//! Scheduling domain models.
//!
//! Core data types shared by every simulator: the immutable [`Process`]
//! input record and the two output traces, [`TimelineSlice`] and
//! [`ReadyQueueSnapshot`].
//!
//! # Invariants
//!
//! For any correct schedule over valid inputs:
//! - each process's slice durations sum to its burst time,
//! - its finish time is the `end` of its last timeline slice,
//! - `turnaround = finish - arrival` and `waiting = turnaround - burst`
//!   are both non-negative.

mod process;
mod timeline;

pub use process::Process;
pub use timeline::{ReadyQueueSnapshot, TimelineSlice};
