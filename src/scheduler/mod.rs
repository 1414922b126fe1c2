pub mod fcfs;
pub mod round_robin;
pub mod sjf;

use thiserror::Error;

use crate::core::{ProcKey, ProcTable, Time, Timeline};

pub use fcfs::Fcfs;
pub use round_robin::RoundRobin;
pub use sjf::Sjf;

#[derive(Debug, Error, PartialEq)]
pub enum PolicyError {
    #[error("time quantum must be positive, got {0}")]
    NonPositiveQuantum(Time),
    #[error("context switch cost cannot be negative, got {0}")]
    NegativeSwitchCost(Time),
}

pub trait Policy {
    fn name(&self) -> &'static str;

    /// Fixed overhead charged whenever the CPU changes processes.
    fn switch_cost(&self) -> Time;

    /// Run the policy over its private working table, appending every
    /// dispatch and switch to `timeline`. Returns keys in
    /// dispatch-completion order; on return every process in `table` is
    /// completed.
    fn schedule(&self, table: &mut ProcTable, timeline: &mut Timeline) -> Vec<ProcKey>;
}

/// Table keys sorted by arrival time, ties kept in insertion order.
pub(crate) fn arrival_order(table: &ProcTable) -> Vec<ProcKey> {
    let mut order: Vec<ProcKey> = table.keys().collect();
    order.sort_by(|a, b| table[*a].arrival.total_cmp(&table[*b].arrival));
    order
}

pub(crate) fn validate_switch_cost(switch_cost: Time) -> Result<(), PolicyError> {
    if switch_cost < 0.0 {
        return Err(PolicyError::NegativeSwitchCost(switch_cost));
    }
    Ok(())
}
