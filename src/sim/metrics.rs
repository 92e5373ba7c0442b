//! Per-process performance metrics.
//!
//! Derived from a completed timeline and the original process set:
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Turnaround time | finish - arrival |
//! | Waiting time | turnaround - burst |
//! | Averages | arithmetic mean, rounded to 2 decimals |
//!
//! A process's finish time is the `end` of its *last* timeline slice;
//! slices are visited in timeline order, so the last write is the final
//! completion even under round-robin preemption.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::models::{Process, TimelineSlice};

/// Per-process and aggregate scheduling metrics.
///
/// All time values are in ticks; averages are rounded half away from zero
/// to 2 decimal places. The per-process maps are ordered by id so that a
/// serialized result is byte-identical across runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    /// Waiting time per process (ticks spent ready but not executing).
    #[serde(rename = "waitingTimes")]
    pub waiting_times: BTreeMap<String, u32>,
    /// Turnaround time per process (arrival to completion).
    #[serde(rename = "turnaroundTimes")]
    pub turnaround_times: BTreeMap<String, u32>,
    /// Mean waiting time across all processes.
    #[serde(rename = "avgWaitingTime")]
    pub avg_waiting_time: f64,
    /// Mean turnaround time across all processes.
    #[serde(rename = "avgTurnaroundTime")]
    pub avg_turnaround_time: f64,
}

impl Metrics {
    /// Computes metrics from the original process set and its completed
    /// timeline.
    ///
    /// Assumes the timeline covers every process in full (the simulators
    /// guarantee this); the process set must be non-empty for the averages
    /// to be meaningful.
    pub fn calculate(processes: &[Process], timeline: &[TimelineSlice]) -> Self {
        let mut finish_times: HashMap<&str, u32> = HashMap::new();
        for slice in timeline {
            // Last write wins: final slice = completion.
            finish_times.insert(slice.process_id.as_str(), slice.end);
        }

        let mut waiting_times = BTreeMap::new();
        let mut turnaround_times = BTreeMap::new();
        let mut total_waiting = 0u64;
        let mut total_turnaround = 0u64;

        for p in processes {
            if let Some(&finish) = finish_times.get(p.id.as_str()) {
                let turnaround = finish - p.arrival_time;
                let waiting = turnaround - p.burst_time;
                total_turnaround += u64::from(turnaround);
                total_waiting += u64::from(waiting);
                turnaround_times.insert(p.id.clone(), turnaround);
                waiting_times.insert(p.id.clone(), waiting);
            }
        }

        let count = processes.len();
        let (avg_waiting_time, avg_turnaround_time) = if count == 0 {
            (0.0, 0.0)
        } else {
            (
                round2(total_waiting as f64 / count as f64),
                round2(total_turnaround as f64 / count as f64),
            )
        };

        Self {
            waiting_times,
            turnaround_times,
            avg_waiting_time,
            avg_turnaround_time,
        }
    }
}

/// Rounds to 2 decimal places, half away from zero.
#[inline]
fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fcfs_example() {
        let processes = vec![Process::new("A", 0, 5), Process::new("B", 1, 3)];
        let timeline = vec![
            TimelineSlice::new("A", 0, 5),
            TimelineSlice::new("B", 5, 8),
        ];
        let m = Metrics::calculate(&processes, &timeline);

        assert_eq!(m.waiting_times["A"], 0);
        assert_eq!(m.waiting_times["B"], 4);
        assert_eq!(m.turnaround_times["A"], 5);
        assert_eq!(m.turnaround_times["B"], 7);
        assert!((m.avg_waiting_time - 2.0).abs() < 1e-10);
        assert!((m.avg_turnaround_time - 6.0).abs() < 1e-10);
    }

    #[test]
    fn test_preempted_process_uses_last_slice() {
        let processes = vec![Process::new("A", 0, 5), Process::new("B", 0, 3)];
        let timeline = vec![
            TimelineSlice::new("A", 0, 2),
            TimelineSlice::new("B", 2, 4),
            TimelineSlice::new("A", 4, 6),
            TimelineSlice::new("B", 6, 7),
            TimelineSlice::new("A", 7, 8),
        ];
        let m = Metrics::calculate(&processes, &timeline);

        // A finishes at 8, B at 7.
        assert_eq!(m.turnaround_times["A"], 8);
        assert_eq!(m.turnaround_times["B"], 7);
        assert_eq!(m.waiting_times["A"], 3);
        assert_eq!(m.waiting_times["B"], 4);
    }

    #[test]
    fn test_averages_rounded_to_two_decimals() {
        // Turnarounds 1, 1, 2 → mean 4/3 = 1.333… → 1.33
        let processes = vec![
            Process::new("A", 0, 1),
            Process::new("B", 0, 1),
            Process::new("C", 0, 2),
        ];
        let timeline = vec![
            TimelineSlice::new("A", 0, 1),
            TimelineSlice::new("B", 0, 1),
            TimelineSlice::new("C", 0, 2),
        ];
        let m = Metrics::calculate(&processes, &timeline);

        assert!((m.avg_turnaround_time - 1.33).abs() < 1e-10);
        assert!((m.avg_waiting_time - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_half_rounds_away_from_zero() {
        // 0.125 is exact in binary; half-to-even would yield 0.12.
        assert!((round2(0.125) - 0.13).abs() < 1e-10);
        assert!((round2(1.0 / 3.0) - 0.33).abs() < 1e-10);
        assert!((round2(2.0 / 3.0) - 0.67).abs() < 1e-10);
    }

    #[test]
    fn test_serialized_map_order_is_stable() {
        let processes = vec![
            Process::new("C", 0, 2),
            Process::new("A", 0, 3),
            Process::new("B", 0, 1),
        ];
        let timeline = vec![
            TimelineSlice::new("C", 0, 2),
            TimelineSlice::new("A", 2, 5),
            TimelineSlice::new("B", 5, 6),
        ];

        let first = serde_json::to_string(&Metrics::calculate(&processes, &timeline)).unwrap();
        let second = serde_json::to_string(&Metrics::calculate(&processes, &timeline)).unwrap();
        assert_eq!(first, second);

        // Keys are ordered by id regardless of input order.
        let waiting = &serde_json::to_value(&Metrics::calculate(&processes, &timeline)).unwrap()
            ["waitingTimes"];
        let keys: Vec<&String> = waiting.as_object().unwrap().keys().collect();
        assert_eq!(keys, ["A", "B", "C"]);
    }

    #[test]
    fn test_wire_keys() {
        let processes = vec![Process::new("A", 0, 1)];
        let timeline = vec![TimelineSlice::new("A", 0, 1)];
        let m = Metrics::calculate(&processes, &timeline);

        let json = serde_json::to_value(&m).unwrap();
        assert!(json.get("waitingTimes").is_some());
        assert!(json.get("turnaroundTimes").is_some());
        assert!(json.get("avgWaitingTime").is_some());
        assert!(json.get("avgTurnaroundTime").is_some());
    }
}
