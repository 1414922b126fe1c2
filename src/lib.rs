pub mod core;
pub mod scheduler;
pub mod sim;

pub use crate::core::{Process, ProcessReport, Segment, Timeline};
pub use scheduler::{Fcfs, Policy, PolicyError, RoundRobin, Sjf};
pub use sim::{Generator, Metrics, SimReport, simulate};
