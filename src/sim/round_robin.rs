//! Round Robin (preemptive, fixed quantum).
//!
//! A FIFO ready queue grants each process at most `quantum` contiguous
//! ticks per turn. Processes arriving during a slice are admitted to the
//! tail before the preempted process re-enters, so same-slice arrivals are
//! always served ahead of the re-queued process.
//!
//! # Queue lifecycle
//!
//! The queue is seeded in ascending-arrival order with every process
//! arriving at t=0. After each slice, an admission scan (ascending arrival)
//! appends every process whose arrival is strictly after the dispatched
//! process's own arrival and at or before the current time, still has work
//! left, and is not already queued. If the queue drains while unfinished
//! processes remain (every remaining arrival lies in the future), the clock
//! jumps to the earliest pending arrival and admits everything arrived by
//! then; without this refill, late-arrival sets would never be scheduled.

use std::collections::VecDeque;

use crate::models::{Process, ReadyQueueSnapshot, TimelineSlice};

use super::Trace;

/// Runs the simulation with the given time quantum (>= 1, caller-checked).
pub(crate) fn run(processes: &[Process], quantum: u32) -> Trace {
    let mut order: Vec<&Process> = processes.iter().collect();
    order.sort_by_key(|p| p.arrival_time);

    let mut remaining: Vec<u32> = order.iter().map(|p| p.burst_time).collect();
    let mut in_queue = vec![false; order.len()];
    let mut queue: VecDeque<usize> = VecDeque::with_capacity(order.len());
    let mut timeline = Vec::new();
    let mut ready_queue = Vec::new();
    let mut now = 0u32;

    for (i, p) in order.iter().enumerate() {
        if p.arrival_time == 0 {
            queue.push_back(i);
            in_queue[i] = true;
        }
    }

    loop {
        if queue.is_empty() {
            let Some(first) = (0..order.len()).find(|&i| remaining[i] > 0) else {
                break;
            };
            if now < order[first].arrival_time {
                now = order[first].arrival_time;
            }
            for (i, p) in order.iter().enumerate() {
                if p.arrival_time <= now && remaining[i] > 0 && !in_queue[i] {
                    queue.push_back(i);
                    in_queue[i] = true;
                }
            }
        }

        ready_queue.push(ReadyQueueSnapshot::new(
            now,
            queue.iter().map(|&i| order[i].id.clone()).collect(),
        ));

        let Some(head) = queue.pop_front() else {
            break;
        };
        in_queue[head] = false;
        let p = order[head];
        if now < p.arrival_time {
            // Defensive; admission only queues arrived processes.
            now = p.arrival_time;
        }

        let exec = remaining[head].min(quantum);
        timeline.push(TimelineSlice::new(&p.id, now, now + exec));
        now += exec;
        remaining[head] -= exec;

        // Admit arrivals from during this slice, ahead of any re-entry.
        for (i, q) in order.iter().enumerate() {
            if q.arrival_time > p.arrival_time
                && q.arrival_time <= now
                && remaining[i] > 0
                && !in_queue[i]
            {
                queue.push_back(i);
                in_queue[i] = true;
            }
        }

        if remaining[head] > 0 {
            queue.push_back(head);
            in_queue[head] = true;
        }
    }

    Trace {
        timeline,
        ready_queue,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alternating_quantum_slices() {
        let processes = vec![Process::new("A", 0, 5), Process::new("B", 0, 3)];
        let trace = run(&processes, 2);

        // A's final turn gets only its 1 remaining tick, not a full quantum.
        assert_eq!(
            trace.timeline,
            vec![
                TimelineSlice::new("A", 0, 2),
                TimelineSlice::new("B", 2, 4),
                TimelineSlice::new("A", 4, 6),
                TimelineSlice::new("B", 6, 7),
                TimelineSlice::new("A", 7, 8),
            ]
        );
    }

    #[test]
    fn test_snapshot_taken_before_pop() {
        let processes = vec![Process::new("A", 0, 5), Process::new("B", 0, 3)];
        let trace = run(&processes, 2);

        assert_eq!(
            trace.ready_queue[0],
            ReadyQueueSnapshot::new(0, vec!["A".into(), "B".into()])
        );
        assert_eq!(
            trace.ready_queue[1],
            ReadyQueueSnapshot::new(2, vec!["B".into(), "A".into()])
        );
    }

    #[test]
    fn test_mid_slice_arrival_queued_before_reentry() {
        // B arrives during A's first slice: it must run before A resumes.
        let processes = vec![Process::new("A", 0, 5), Process::new("B", 1, 1)];
        let trace = run(&processes, 2);

        assert_eq!(
            trace.timeline,
            vec![
                TimelineSlice::new("A", 0, 2),
                TimelineSlice::new("B", 2, 3),
                TimelineSlice::new("A", 3, 5),
                TimelineSlice::new("A", 5, 6),
            ]
        );
    }

    #[test]
    fn test_idle_gap_refills_queue() {
        let processes = vec![Process::new("A", 0, 2), Process::new("B", 5, 1)];
        let trace = run(&processes, 2);

        assert_eq!(
            trace.timeline,
            vec![
                TimelineSlice::new("A", 0, 2),
                TimelineSlice::new("B", 5, 6),
            ]
        );
        assert_eq!(
            trace.ready_queue,
            vec![
                ReadyQueueSnapshot::new(0, vec!["A".into()]),
                ReadyQueueSnapshot::new(5, vec!["B".into()]),
            ]
        );
    }

    #[test]
    fn test_no_time_zero_arrivals() {
        // Empty initial queue: the refill jump seeds it at the first arrival.
        let processes = vec![Process::new("A", 3, 2), Process::new("B", 4, 2)];
        let trace = run(&processes, 2);

        assert_eq!(
            trace.timeline,
            vec![
                TimelineSlice::new("A", 3, 5),
                TimelineSlice::new("B", 5, 7),
            ]
        );
    }

    #[test]
    fn test_large_quantum_degenerates_to_fcfs() {
        let processes = vec![Process::new("A", 0, 5), Process::new("B", 1, 3)];
        let trace = run(&processes, 100);

        assert_eq!(
            trace.timeline,
            vec![
                TimelineSlice::new("A", 0, 5),
                TimelineSlice::new("B", 5, 8),
            ]
        );
    }

    #[test]
    fn test_burst_totals_preserved() {
        let processes = vec![
            Process::new("A", 0, 7),
            Process::new("B", 2, 4),
            Process::new("C", 9, 3),
        ];
        let trace = run(&processes, 3);

        for p in &processes {
            let total: u32 = trace
                .timeline
                .iter()
                .filter(|s| s.process_id == p.id)
                .map(|s| s.duration())
                .sum();
            assert_eq!(total, p.burst_time, "process {}", p.id);
        }
    }
}
