//! Facilities: the graph's node payload.

use std::collections::HashMap;

use lane_core::{Duration, Movement, Process, TimeOfDay};

/// A facility (graph node): a human-identified location with a cutoff time
/// and a small table of per-movement processing latencies.
///
/// Latency defaults to zero if a `(movement, process)` key is absent.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Facility {
    pub code: String,
    pub name: String,
    pub cutoff: TimeOfDay,
    latencies: HashMap<(Movement, Process), Duration>,
}

impl Facility {
    pub fn new(code: impl Into<String>, name: impl Into<String>, cutoff: TimeOfDay) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            cutoff,
            latencies: HashMap::new(),
        }
    }

    /// Processing latency for `(movement, process)`, or zero if unset.
    pub fn latency(&self, movement: Movement, process: Process) -> Duration {
        self.latencies
            .get(&(movement, process))
            .copied()
            .unwrap_or(Duration::ZERO)
    }

    pub fn set_latency(&mut self, movement: Movement, process: Process, latency: Duration) {
        self.latencies.insert((movement, process), latency);
    }
}
