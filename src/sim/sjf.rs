//! Shortest-Job-First (non-preemptive).
//!
//! Among the processes that have arrived, run the one with the smallest
//! burst time to completion. Ties break on `(arrival_time, id)`.
//!
//! # Idle handling
//!
//! When nothing has arrived the clock advances one tick at a time, and a
//! snapshot (empty) is still recorded for every polled tick. The priority
//! scheduler jumps straight to the next arrival instead; the two idle
//! histories intentionally differ.

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
            (p.burst_time, p.arrival_time, p.id.as_str())
        }) else {
            // CPU idle: poll tick by tick until the next arrival.
            now += 1;
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
