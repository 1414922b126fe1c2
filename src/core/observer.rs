use rustc_hash::FxHashMap;

use super::process::{Pid, ProcTable, Time};
use super::timeline::{Segment, Timeline};

const TOLERANCE: Time = 1e-9;

/// Post-run invariant checks over a finished simulation. Violations are
/// internal defects, so everything here is a `debug_assert`.
#[derive(Debug)]
pub struct Observer;

impl Observer {
    pub fn observe(table: &ProcTable, timeline: &Timeline) {
        Self::check_segments(timeline);
        Self::check_conservation(table, timeline);
        Self::check_process_metrics(table);
    }

    fn check_segments(timeline: &Timeline) {
        let mut total = 0.0;
        let mut prev: Option<&Segment> = None;

        for seg in timeline.segments() {
            debug_assert!(
                seg.duration() >= 0.0,
                "Segment with negative duration: {seg:?}"
            );
            if !seg.is_run() {
                debug_assert!(
                    (seg.duration() - timeline.switch_cost()).abs() <= TOLERANCE,
                    "Switch segment length differs from configured cost: {seg:?}"
                );
            }

            if let Some(prev) = prev {
                // Idle jumps leave a gap; segments must never overlap or
                // run backwards.
                debug_assert!(
                    seg.start() >= prev.end() - TOLERANCE,
                    "Overlapping segments: {prev:?} then {seg:?}"
                );
                debug_assert!(
                    seg.is_run() || prev.is_run(),
                    "Two consecutive switch segments: {prev:?} then {seg:?}"
                );
            }

            total += seg.duration();
            prev = Some(seg);
        }

        debug_assert!(
            (total - timeline.total_time()).abs() <= TOLERANCE,
            "total_time {} disagrees with segment sum {}",
            timeline.total_time(),
            total
        );
    }

    // Every unit of CPU granted must show up in the log, and completed
    // processes must have received exactly their burst.
    fn check_conservation(table: &ProcTable, timeline: &Timeline) {
        let mut granted: FxHashMap<Pid, Time> = FxHashMap::default();
        for seg in timeline.segments() {
            if let Segment::Run { pid, duration, .. } = seg {
                *granted.entry(*pid).or_insert(0.0) += duration;
            }
        }

        for process in table.values() {
            if process.is_completed() {
                let ran = granted.get(&process.pid).copied().unwrap_or(0.0);
                debug_assert!(
                    (ran - process.burst).abs() <= TOLERANCE,
                    "Process {} granted {} units, burst is {}",
                    process.pid,
                    ran,
                    process.burst
                );
            }
        }
    }

    fn check_process_metrics(table: &ProcTable) {
        for process in table.values() {
            debug_assert!(
                process.remaining() >= 0.0,
                "Process {} has negative remaining time",
                process.pid
            );

            if let Some(report) = process.report() {
                debug_assert!(
                    report.waiting >= -TOLERANCE,
                    "Process {} has negative waiting time {}",
                    report.pid,
                    report.waiting
                );
                debug_assert!(
                    report.response >= -TOLERANCE,
                    "Process {} dispatched before arrival",
                    report.pid
                );
                debug_assert!(
                    report.turnaround >= report.burst - TOLERANCE,
                    "Process {} turnaround {} shorter than burst {}",
                    report.pid,
                    report.turnaround,
                    report.burst
                );
            }
        }
    }
}
