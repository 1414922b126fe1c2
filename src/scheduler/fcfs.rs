use super::{Policy, PolicyError, arrival_order, validate_switch_cost};
use crate::core::{ProcKey, ProcTable, Time, Timeline};

/// First-Come-First-Served: non-preemptive, strict arrival order, each
/// process runs to completion in one dispatch.
#[derive(Debug, Clone)]
pub struct Fcfs {
    switch_cost: Time,
}

impl Fcfs {
    pub fn new(switch_cost: Time) -> Result<Self, PolicyError> {
        validate_switch_cost(switch_cost)?;
        Ok(Self { switch_cost })
    }
}

impl Policy for Fcfs {
    fn name(&self) -> &'static str {
        "First-Come-First-Served"
    }

    fn switch_cost(&self) -> Time {
        self.switch_cost
    }

    fn schedule(&self, table: &mut ProcTable, timeline: &mut Timeline) -> Vec<ProcKey> {
        let order = arrival_order(table);
        let mut now: Time = 0.0;
        let mut completed = Vec::with_capacity(order.len());

        for (i, &key) in order.iter().enumerate() {
            let arrival = table[key].arrival;
            if now < arrival {
                // CPU idles until the next arrival; the jump is free.
                now = arrival;
            }

            if i > 0 {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Process, Segment};

    fn run(workload: &[Process], switch_cost: Time) -> (ProcTable, Timeline, Vec<ProcKey>) {
        let policy = Fcfs::new(switch_cost).unwrap();
        let mut table = ProcTable::with_key();
        for p in workload {
            table.insert(p.clone());
        }
        let mut timeline = Timeline::new(switch_cost);
        let order = policy.schedule(&mut table, &mut timeline);
        (table, timeline, order)
    }

    #[test]
    fn two_processes_with_switch_overhead() {
        let workload = [Process::new(1, 0.0, 5.0), Process::new(2, 1.0, 3.0)];
        let (table, timeline, order) = run(&workload, 1.0);

        assert_eq!(
            timeline.segments(),
            &[
                Segment::Run { pid: 1, start: 0.0, duration: 5.0 },
                Segment::Switch { start: 5.0, duration: 1.0 },
                Segment::Run { pid: 2, start: 6.0, duration: 3.0 },
            ]
        );
        assert_eq!(timeline.context_switches(), 1);
        assert_eq!(timeline.total_time(), 9.0);

        let p1 = table[order[0]].report().unwrap();
        assert_eq!((p1.completion, p1.turnaround, p1.waiting, p1.response), (5.0, 5.0, 0.0, 0.0));
        let p2 = table[order[1]].report().unwrap();
        assert_eq!((p2.completion, p2.turnaround, p2.waiting, p2.response), (9.0, 8.0, 5.0, 5.0));
    }

    #[test]
    fn clock_jumps_over_idle_gap() {
        let workload = [Process::new(1, 0.0, 2.0), Process::new(2, 10.0, 1.0)];
        let (table, timeline, order) = run(&workload, 1.0);

        // Switch is charged at the late arrival, not across the gap.
        assert_eq!(timeline.segments()[1], Segment::Switch { start: 10.0, duration: 1.0 });
        assert_eq!(table[order[1]].report().unwrap().completion, 12.0);
    }

    #[test]
    fn arrival_ties_keep_input_order() {
        let workload = [
            Process::new(1, 2.0, 3.0),
            Process::new(2, 2.0, 1.0),
            Process::new(3, 0.0, 1.0),
        ];
        let (table, _, order) = run(&workload, 0.0);

        let pids: Vec<_> = order.iter().map(|&k| table[k].pid).collect();
        assert_eq!(pids, vec![3, 1, 2]);
    }

    #[test]
    fn rejects_negative_switch_cost() {
        assert_eq!(Fcfs::new(-1.0).unwrap_err(), PolicyError::NegativeSwitchCost(-1.0));
    }
}
