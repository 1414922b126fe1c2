use slotmap::{SlotMap, new_key_type};

pub type Pid = u32;
pub type Time = f64;

new_key_type! {
    pub struct ProcKey;
}

/// Working table a policy schedules over. Keys are private to one
/// simulation; queues hold keys, never processes.
pub type ProcTable = SlotMap<ProcKey, Process>;

#[derive(Debug, Clone)]
pub struct Process {
    pub pid: Pid,
    pub arrival: Time,
    pub burst: Time,
    remaining: Time,
    first_run: Option<Time>,
    completed_at: Option<Time>,
}

/// Fully resolved timing for a completed process.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessReport {
    pub pid: Pid,
    pub arrival: Time,
    pub burst: Time,
    pub start: Time,
    pub completion: Time,
    pub turnaround: Time,
    pub waiting: Time,
    pub response: Time,
}

impl Process {
    pub fn new(pid: Pid, arrival: Time, burst: Time) -> Self {
        Self {
            pid,
            arrival,
            burst,
            remaining: burst,
            first_run: None,
            completed_at: None,
        }
    }

    /// Grant up to `requested` units of CPU time starting at `now`.
    ///
    /// The first call marks the dispatch time (response time derives from
    /// it); the call that drains `remaining` marks completion. Returns the
    /// granted duration so the caller advances its clock by the same
    /// amount. Dispatching a completed process is a caller bug.
    pub fn execute(&mut self, requested: Time, now: Time) -> Time {
        debug_assert!(
            !self.is_completed(),
            "Process {} dispatched past completion",
            self.pid
        );

        if self.first_run.is_none() {
            self.first_run = Some(now);
        }

        let granted = requested.min(self.remaining);
        self.remaining -= granted;

        if self.remaining <= 0.0 {
            self.remaining = 0.0;
            self.completed_at = Some(now + granted);
        }

        granted
    }

    pub fn is_completed(&self) -> bool {
        self.remaining == 0.0
    }

    pub fn remaining(&self) -> Time {
        self.remaining
    }

    pub fn first_run(&self) -> Option<Time> {
        self.first_run
    }

    pub fn completed_at(&self) -> Option<Time> {
        self.completed_at
    }

    /// `Some` only once the process has run to completion.
    pub fn report(&self) -> Option<ProcessReport> {
        let start = self.first_run?;
        let completion = self.completed_at?;
        let turnaround = completion - self.arrival;

        Some(ProcessReport {
            pid: self.pid,
            arrival: self.arrival,
            burst: self.burst,
            start,
            completion,
            turnaround,
            waiting: turnaround - self.burst,
            response: start - self.arrival,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_slice_runs_to_completion() {
        let mut p = Process::new(1, 0.0, 5.0);
        assert!(!p.is_completed());

        let granted = p.execute(5.0, 2.0);
        assert_eq!(granted, 5.0);
        assert!(p.is_completed());

        let report = p.report().unwrap();
        assert_eq!(report.start, 2.0);
        assert_eq!(report.completion, 7.0);
        assert_eq!(report.turnaround, 7.0);
        assert_eq!(report.waiting, 2.0);
        assert_eq!(report.response, 2.0);
    }

    #[test]
    fn grant_is_clamped_to_remaining() {
        let mut p = Process::new(1, 0.0, 3.0);
        assert_eq!(p.execute(10.0, 0.0), 3.0);
        assert_eq!(p.remaining(), 0.0);
    }

    #[test]
    fn first_run_marked_once() {
        let mut p = Process::new(1, 1.0, 4.0);
        p.execute(2.0, 3.0);
        p.execute(2.0, 8.0);

        assert_eq!(p.first_run(), Some(3.0));
        let report = p.report().unwrap();
        assert_eq!(report.response, 2.0);
        assert_eq!(report.completion, 10.0);
    }

    #[test]
    fn report_absent_until_completed() {
        let mut p = Process::new(1, 0.0, 4.0);
        p.execute(2.0, 0.0);
        assert!(p.report().is_none());
        p.execute(2.0, 2.0);
        assert!(p.report().is_some());
    }
}
