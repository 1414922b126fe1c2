use super::process::{Pid, Time};

/// One interval of the Gantt chart: CPU either ran a process or spent the
/// configured overhead switching between processes. Idle periods are clock
/// jumps, not segments.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    Run { pid: Pid, start: Time, duration: Time },
    Switch { start: Time, duration: Time },
}

impl Segment {
    pub fn start(&self) -> Time {
        match self {
            Self::Run { start, .. } | Self::Switch { start, .. } => *start,
        }
    }

    pub fn duration(&self) -> Time {
        match self {
            Self::Run { duration, .. } | Self::Switch { duration, .. } => *duration,
        }
    }

    pub fn end(&self) -> Time {
        self.start() + self.duration()
    }

    pub fn is_run(&self) -> bool {
        matches!(self, Self::Run { .. })
    }
}

/// Append-only execution log plus the bookkeeping every policy shares:
/// switch-overhead configuration, switch counter and total-time accumulator.
/// Owned exclusively by one simulation run.
#[derive(Debug, Clone)]
pub struct Timeline {
    segments: Vec<Segment>,
    switch_cost: Time,
    context_switches: u32,
    total_time: Time,
}

impl Timeline {
    pub fn new(switch_cost: Time) -> Self {
        debug_assert!(switch_cost >= 0.0, "switch cost validated at policy construction");
        Self {
            segments: Vec::new(),
            switch_cost,
            context_switches: 0,
            total_time: 0.0,
        }
    }

    /// Charge one context switch starting at `at`. The caller advances its
    /// clock by `switch_cost` afterwards.
    pub fn record_switch(&mut self, at: Time) {
        self.segments.push(Segment::Switch {
            start: at,
            duration: self.switch_cost,
        });
        self.context_switches += 1;
        self.total_time += self.switch_cost;
    }

    /// Log `duration` units of CPU granted to `pid` starting at `at`.
    pub fn record_run(&mut self, pid: Pid, at: Time, duration: Time) {
        self.segments.push(Segment::Run {
            pid,
            start: at,
            duration,
        });
        self.total_time += duration;
    }

    /// Whether the most recent segment is a process execution. Round-Robin
    /// charges a switch only in that case, so the log never carries two
    /// consecutive switches.
    pub fn last_is_run(&self) -> bool {
        self.segments.last().is_some_and(Segment::is_run)
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn switch_cost(&self) -> Time {
        self.switch_cost
    }

    pub fn context_switches(&self) -> u32 {
        self.context_switches
    }

    pub fn total_time(&self) -> Time {
        self.total_time
    }
}
