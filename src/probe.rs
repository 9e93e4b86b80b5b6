use crate::status::HostStatus;
use std::time::{Duration, SystemTime};

/// Outcome of one reachability probe. `Down` carries no latency, so a
/// latency reading always belongs to a reachable service.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ProbeResult {
    Up { latency: Duration },
    Down,
}

impl ProbeResult {
    pub fn is_up(&self) -> bool {
        matches!(self, ProbeResult::Up { .. })
    }

    pub fn latency(&self) -> Option<Duration> {
        match self {
            ProbeResult::Up { latency } => Some(*latency),
            ProbeResult::Down => None,
        }
    }

    pub fn latency_ms(&self) -> Option<u128> {
        self.latency().map(|latency| latency.as_millis())
    }
}

/// One probe outcome, addressed to a service card by id.
#[derive(Clone, Debug)]
pub struct ServiceProbe {
    pub service_id: String,
    pub result: ProbeResult,
}

/// The single batch a refresh cycle publishes to the UI thread. `host` is
/// `None` when the status endpoint could not be read, for any reason.
#[derive(Clone, Debug)]
pub struct RefreshSnapshot {
    pub ts: SystemTime,
    pub probes: Vec<ServiceProbe>,
    pub host: Option<HostStatus>,
}
