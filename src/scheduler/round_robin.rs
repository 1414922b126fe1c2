use std::collections::VecDeque;

use super::{Policy, PolicyError, arrival_order, validate_switch_cost};
use crate::core::{ProcKey, ProcTable, Time, Timeline};

/// Round-Robin: preemptive, fixed quantum, FIFO ready queue. A preempted
/// process re-enters the queue behind anything that arrived during its
/// slice.
#[derive(Debug, Clone)]
pub struct RoundRobin {
    quantum: Time,
    switch_cost: Time,
}

impl RoundRobin {
    pub fn new(quantum: Time, switch_cost: Time) -> Result<Self, PolicyError> {
        if quantum <= 0.0 {
            return Err(PolicyError::NonPositiveQuantum(quantum));
        }
        validate_switch_cost(switch_cost)?;
        Ok(Self {
            quantum,
            switch_cost,
        })
    }

    pub fn quantum(&self) -> Time {
        self.quantum
    }
}

impl Policy for RoundRobin {
    fn name(&self) -> &'static str {
        "Round-Robin"
    }

    fn switch_cost(&self) -> Time {
        self.switch_cost
    }

    fn schedule(&self, table: &mut ProcTable, timeline: &mut Timeline) -> Vec<ProcKey> {
        let order = arrival_order(table);
        let mut ready: VecDeque<ProcKey> = VecDeque::new();
        let mut now: Time = 0.0;
        let mut cursor = 0;
        let mut completed = Vec::with_capacity(order.len());

        while completed.len() < order.len() {
            while cursor < order.len() && table[order[cursor]].arrival <= now {
                ready.push_back(order[cursor]);
                cursor += 1;
            }

            let Some(key) = ready.pop_front() else {
                if cursor < order.len() {
                    now = table[order[cursor]].arrival;
                    continue;
                }
                break;
            };

            // The CPU only pays a switch when it was actually running
            // something; after an idle jump or a previous switch it is free.
            if timeline.last_is_run() {
                timeline.record_switch(now);
                now += self.switch_cost;
            }

            let process = &mut table[key];
            let granted = process.execute(self.quantum.min(process.remaining()), now);
            timeline.record_run(process.pid, now, granted);
            now += granted;

            // Arrivals during the slice enter ahead of the preempted
            // process.
            while cursor < order.len() && table[order[cursor]].arrival <= now {
                ready.push_back(order[cursor]);
                cursor += 1;
            }

            if table[key].is_completed() {
                completed.push(key);
            } else {
                ready.push_back(key);
            }
        }

        completed
    }
}
