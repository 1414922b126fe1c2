use keyed_priority_queue::KeyedPriorityQueue;

use super::{Policy, PolicyError, arrival_order, validate_switch_cost};
use crate::core::{ProcKey, ProcTable, Time, Timeline};

/// Ready-queue rank: shortest burst wins, ties broken by admission order.
/// KeyedPriorityQueue is a max-heap, so Ord is flipped.
#[derive(Debug, PartialEq, Eq)]
struct Rank {
    burst: OrderedTime,
    seq: u64,
}

#[derive(Debug, PartialEq)]
struct OrderedTime(Time);

impl Eq for OrderedTime {}

impl PartialOrd for Rank {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rank {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other
            .burst
            .0
            .total_cmp(&self.burst.0)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Shortest-Job-First: non-preemptive; at every decision point the arrived
/// process with the smallest burst runs to completion.
#[derive(Debug, Clone)]
pub struct Sjf {
    switch_cost: Time,
}

impl Sjf {
    pub fn new(switch_cost: Time) -> Result<Self, PolicyError> {
        validate_switch_cost(switch_cost)?;
        Ok(Self { switch_cost })
    }
}

impl Policy for Sjf {
    fn name(&self) -> &'static str {
        "Shortest-Job-First"
    }

    fn switch_cost(&self) -> Time {
        self.switch_cost
    }

    fn schedule(&self, table: &mut ProcTable, timeline: &mut Timeline) -> Vec<ProcKey> {
        let order = arrival_order(table);
        let mut ready: KeyedPriorityQueue<ProcKey, Rank> = KeyedPriorityQueue::new();
        let mut now: Time = 0.0;
        let mut cursor = 0;
        let mut seq = 0u64;
        let mut completed = Vec::with_capacity(order.len());

        while completed.len() < order.len() {
            while cursor < order.len() && table[order[cursor]].arrival <= now {
                ready.push(
                    order[cursor],
                    Rank {
                        burst: OrderedTime(table[order[cursor]].burst),
                        seq,
                    },
                );
                seq += 1;
                cursor += 1;
            }

            let Some((key, _)) = ready.pop() else {
                // Nothing arrived yet; jump to the next arrival for free.
                now = table[order[cursor]].arrival;
                continue;
            };

            if !completed.is_empty() {
                timeline.record_switch(now);
                now += self.switch_cost;
            }

            let process = &mut table[key];
            let granted = process.execute(process.burst, now);
            timeline.record_run(process.pid, now, granted);
            now += granted;

            completed.push(key);
        }

        completed
    }
}
