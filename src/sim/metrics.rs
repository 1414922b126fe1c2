use average::{Estimate, Mean};

use crate::core::{ProcessReport, Time};

use super::driver::SimReport;

/// Aggregate statistics over one completed simulation. A pure function of
/// the completed processes and the timeline totals.
#[derive(Debug, Clone, PartialEq)]
pub struct Metrics {
    pub avg_turnaround: Time,
    pub avg_waiting: Time,
    pub avg_response: Time,
    /// Completed processes per unit of elapsed time.
    pub throughput: f64,
    /// Percentage of elapsed time spent running processes; anything below
    /// 100 is idle time plus switch overhead.
    pub cpu_utilization: f64,
    pub context_switches: u32,
    pub total_time: Time,
}

impl Metrics {
    pub fn from_report(report: &SimReport) -> Self {
        Self::compute(
            &report.processes,
            report.total_time(),
            report.context_switches(),
        )
    }

    pub fn compute(processes: &[ProcessReport], total_time: Time, context_switches: u32) -> Self {
        if processes.is_empty() {
            return Self {
                avg_turnaround: 0.0,
                avg_waiting: 0.0,
                avg_response: 0.0,
                throughput: 0.0,
                cpu_utilization: 0.0,
                context_switches,
                total_time,
            };
        }

        // A non-empty run always has positive total time; floor the
        // denominator at one unit regardless.
        let elapsed = if total_time > 0.0 { total_time } else { 1.0 };
        let total_burst: Time = processes.iter().map(|p| p.burst).sum();

        Self {
            avg_turnaround: mean(processes.iter().map(|p| p.turnaround)),
            avg_waiting: mean(processes.iter().map(|p| p.waiting)),
            avg_response: mean(processes.iter().map(|p| p.response)),
            throughput: processes.len() as f64 / elapsed,
            cpu_utilization: total_burst / elapsed * 100.0,
            context_switches,
            total_time,
        }
    }
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    values.collect::<Mean>().estimate()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(pid: u32, arrival: Time, burst: Time, start: Time, completion: Time) -> ProcessReport {
        let turnaround = completion - arrival;
        ProcessReport {
            pid,
            arrival,
            burst,
            start,
            completion,
            turnaround,
            waiting: turnaround - burst,
            response: start - arrival,
        }
    }

    #[test]
    fn averages_over_completed_processes() {
        let processes = vec![
            report(1, 0.0, 5.0, 0.0, 5.0),
            report(2, 1.0, 3.0, 6.0, 9.0),
        ];
        let metrics = Metrics::compute(&processes, 9.0, 1);

        assert_eq!(metrics.avg_turnaround, 6.5);
        assert_eq!(metrics.avg_waiting, 2.5);
        assert_eq!(metrics.avg_response, 2.5);
        assert_eq!(metrics.throughput, 2.0 / 9.0);
        assert!((metrics.cpu_utilization - 8.0 / 9.0 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn empty_run_yields_zero_metrics() {
        let metrics = Metrics::compute(&[], 0.0, 0);

        assert_eq!(metrics.avg_turnaround, 0.0);
        assert_eq!(metrics.avg_waiting, 0.0);
        assert_eq!(metrics.avg_response, 0.0);
        assert_eq!(metrics.throughput, 0.0);
        assert_eq!(metrics.cpu_utilization, 0.0);
    }

    #[test]
    fn utilization_never_exceeds_hundred_with_overhead() {
        let processes = vec![report(1, 0.0, 4.0, 0.0, 4.0)];
        // One unit of switch overhead in the log.
        let metrics = Metrics::compute(&processes, 5.0, 1);
        assert!(metrics.cpu_utilization <= 100.0);
        assert_eq!(metrics.cpu_utilization, 80.0);
    }
}
