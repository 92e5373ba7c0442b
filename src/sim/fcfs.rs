//! First-Come-First-Served (non-preemptive).
//!
//! Processes run to completion in ascending arrival order; ties keep input
//! order (the sort is stable). Idle gaps advance the clock without emitting
//! a timeline slice.
//!
//! # Ready-queue trace
//!
//! The snapshot taken before each dispatch lists every process (other than
//! the one about to run) that has arrived by the current time, including
//! processes that already finished: the trace records arrivals, not
//! residency, and consumers depend on that shape.

use crate::models::{Process, ReadyQueueSnapshot, TimelineSlice};

use super::Trace;

pub(crate) fn run(processes: &[Process]) -> Trace {
    let mut order: Vec<&Process> = processes.iter().collect();
    order.sort_by_key(|p| p.arrival_time);

    let mut timeline = Vec::with_capacity(order.len());
    let mut ready_queue = Vec::with_capacity(order.len());
    let mut now = 0u32;

    for (turn, p) in order.iter().enumerate() {
        if now < p.arrival_time {
            now = p.arrival_time;
        }

        let queue: Vec<String> = order
            .iter()
            .enumerate()
            .filter(|&(other, q)| other != turn && q.arrival_time <= now)
            .map(|(_, q)| q.id.clone())
            .collect();
        ready_queue.push(ReadyQueueSnapshot::new(now, queue));

        timeline.push(TimelineSlice::new(&p.id, now, now + p.burst_time));
        now += p.burst_time;
    }

    Trace {
        timeline,
        ready_queue,
    }
}
