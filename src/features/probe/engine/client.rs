use crate::config::ServiceConfig;
use crate::probe::{ProbeResult, ServiceProbe};
use curl::Error as CurlError;
use curl::easy::{Easy2, Handler, WriteError};
use std::time::Instant;

/// Swallows the response body. The probe only cares whether the transfer
/// completed, never what came back.
#[derive(Default)]
struct DiscardBody {
    bytes: u64,
}

impl DiscardBody {
    fn reset(&mut self) {
        self.bytes = 0;
    }
}

impl Handler for DiscardBody {
    fn write(&mut self, data: &[u8]) -> Result<usize, WriteError> {
        self.bytes = self.bytes.saturating_add(data.len() as u64);
        Ok(data.len())
    }
}

pub struct ProbeClient {
    easy: Easy2<DiscardBody>,
}

impl ProbeClient {
    pub fn new() -> Result<Self, CurlError> {
        let mut easy = Easy2::new(DiscardBody::default());
        easy.follow_location(false)?;
        easy.accept_encoding("")?;
        Ok(Self { easy })
    }

    /// Issues one opaque GET against the service URL. Any transport failure
    /// collapses into `Down`; the HTTP status code is never consulted, so a
    /// 4xx or 5xx answer still counts as reachable.
    pub fn probe(&mut self, service: &ServiceConfig) -> ServiceProbe {
        ServiceProbe {
            service_id: service.id.clone(),
            result: self.probe_url(service.url.as_str()),
        }
    }

    fn probe_url(&mut self, url: &str) -> ProbeResult {
        self.easy.reset();
        self.easy.get_mut().reset();
        let _ = self.easy.follow_location(false);
        let _ = self.easy.accept_encoding("");
        let _ = self.easy.get(true);
        if self.easy.url(url).is_err() {
            return ProbeResult::Down;
        }

        let started = Instant::now();
        match self.easy.perform() {
            Ok(()) => ProbeResult::Up {
                latency: started.elapsed(),
            },
            Err(_) => ProbeResult::Down,
        }
    }
}
