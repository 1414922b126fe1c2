use log::debug;

use crate::core::{Observer, ProcTable, ProcessReport, Process, Time, Timeline};
use crate::scheduler::Policy;

/// Everything a presentation layer needs from one finished run: the
/// chronological timeline and the completed processes in dispatch-completion
/// order.
#[derive(Debug, Clone)]
pub struct SimReport {
    pub policy: &'static str,
    pub timeline: Timeline,
    pub processes: Vec<ProcessReport>,
}

impl SimReport {
    pub fn total_time(&self) -> Time {
        self.timeline.total_time()
    }

    pub fn context_switches(&self) -> u32 {
        self.timeline.context_switches()
    }
}

/// Run `policy` over `workload` in one synchronous step.
///
/// The workload is copied into a private table, so the caller's processes
/// stay untouched and the same slice can be fed to several policies. An
/// empty workload yields an empty report, not an error.
pub fn simulate<P: Policy + ?Sized>(policy: &P, workload: &[Process]) -> SimReport {
    debug!(
        "simulating {} over {} processes (switch cost {})",
        policy.name(),
        workload.len(),
        policy.switch_cost()
    );

    let mut table = ProcTable::with_key();
    for process in workload {
        table.insert(process.clone());
    }

    let mut timeline = Timeline::new(policy.switch_cost());
    let order = policy.schedule(&mut table, &mut timeline);

    Observer::observe(&table, &timeline);
    debug_assert_eq!(
        order.len(),
        workload.len(),
        "{} left processes unscheduled",
        policy.name()
    );

    let processes = order
        .iter()
        .filter_map(|&key| table[key].report())
        .collect();

    SimReport {
        policy: policy.name(),
        timeline,
        processes,
    }
}
