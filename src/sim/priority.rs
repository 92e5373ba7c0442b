//! Priority scheduling (non-preemptive).
//!
//! Among the processes that have arrived, run the one with the lowest
//! priority number to completion; ties break on `(arrival_time, id)`.
//! A process without an explicit priority gets 0, the highest.
//!
//! # Idle handling
//!
//! When nothing has arrived the clock jumps directly to the earliest
//! remaining arrival (no per-tick polling, unlike SJF). The idle decision
//! point still records an empty snapshot before the jump.

use crate::models::{Process, ReadyQueueSnapshot, TimelineSlice};

use super::Trace;

pub(crate) fn run(processes: &[Process]) -> Trace {
    let mut pending: Vec<&Process> = processes.iter().collect();
    let mut timeline = Vec::with_capacity(pending.len());
    let mut ready_queue = Vec::new();
    let mut now = 0u32;

    while !pending.is_empty() {
        let ready: Vec<usize> = (0..pending.len())
            .filter(|&i| pending[i].arrival_time <= now)
            .collect();

        let mut ids: Vec<String> = ready.iter().map(|&i| pending[i].id.clone()).collect();
        ids.sort();
        ready_queue.push(ReadyQueueSnapshot::new(now, ids));

        let Some(&next) = ready.iter().min_by_key(|&&i| {
            let p = pending[i];
            (p.effective_priority(), p.arrival_time, p.id.as_str())
        }) else {
            // CPU idle: jump straight to the next arrival.
            if let Some(next_arrival) = pending.iter().map(|p| p.arrival_time).min() {
                now = next_arrival;
            }
            continue;
        };

        let p = pending.remove(next);
        timeline.push(TimelineSlice::new(&p.id, now, now + p.burst_time));
        now += p.burst_time;
    }

    Trace {
        timeline,
        ready_queue,
    }
}
