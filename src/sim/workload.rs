use rand::prelude::*;

use crate::core::{Pid, Process};

const MAX_ARRIVAL: f64 = 10.0;
const MIN_BURST: f64 = 1.0;
const BURST_SPREAD: f64 = 9.0;

/// Seeded random workload factory. All randomness lives here; the engine
/// itself is deterministic.
pub struct Generator {
    rng: StdRng,
    next_pid: Pid,
}

impl Generator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            next_pid: 1,
        }
    }

    /// Produce `count` processes with arrivals in `[0, 10)` and bursts in
    /// `[1, 10)`. Bursts are strictly positive by construction, which is
    /// the contract the policies rely on.
    pub fn generate(&mut self, count: usize) -> Vec<Process> {
        (0..count)
            .map(|_| {
                let arrival = self.rng.random::<f64>() * MAX_ARRIVAL;
                let burst = MIN_BURST + self.rng.random::<f64>() * BURST_SPREAD;
                let pid = self.next_pid;
                self.next_pid += 1;
                Process::new(pid, arrival, burst)
            })
            .collect()
    }
}
