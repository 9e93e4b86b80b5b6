use crate::config::{DashboardConfig, ServiceConfig};
use crate::probe::{ProbeResult, RefreshSnapshot, ServiceProbe};
use crate::probe_engine::ProbeClient;
use crate::status_fetch::StatusClient;
use crossbeam_channel::{Receiver, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::SystemTime;

#[derive(Clone, Copy, Debug)]
pub enum ControlMessage {
    RefreshNow,
    Stop,
}

pub struct RefreshHandle {
    pub sender: Sender<ControlMessage>,
    pub join: Option<JoinHandle<()>>,
}

impl RefreshHandle {
    /// Asks the worker to run a cycle ahead of the interval. A request
    /// arriving mid-cycle queues the next cycle instead of racing it.
    pub fn refresh_now(&self) {
        let _ = self.sender.send(ControlMessage::RefreshNow);
    }

    pub fn stop(&mut self) {
        let _ = self.sender.send(ControlMessage::Stop);
        if let Some(join) = self.join.take() {
            let _ = join.join();
        }
    }
}

pub fn spawn_refresh_worker(
    config: DashboardConfig,
    snapshot_tx: Sender<RefreshSnapshot>,
) -> RefreshHandle {
    let (tx, rx) = crossbeam_channel::unbounded();
    let join = thread::spawn(move || run_worker(config, rx, snapshot_tx));
    RefreshHandle {
        sender: tx,
        join: Some(join),
    }
}

fn run_worker(
    config: DashboardConfig,
    control_rx: Receiver<ControlMessage>,
    snapshot_tx: Sender<RefreshSnapshot>,
) {
    // Run the first cycle immediately (don't wait for the interval)
    let _ = snapshot_tx.send(run_cycle(&config));

    loop {
        match control_rx.recv_timeout(config.refresh_interval) {
            Ok(ControlMessage::RefreshNow) | Err(RecvTimeoutError::Timeout) => {
                let _ = snapshot_tx.send(run_cycle(&config));
            }
            Ok(ControlMessage::Stop) | Err(RecvTimeoutError::Disconnected) => break,
        }
    }
}

/// One full refresh cycle: probe every service concurrently, join all,
/// fetch the status document, publish a single snapshot.
pub fn run_cycle(config: &DashboardConfig) -> RefreshSnapshot {
    let probes = probe_services(&config.services);

    let host = match StatusClient::new() {
        Ok(mut client) => client.fetch(&config.status_url),
        Err(_) => None,
    };

    RefreshSnapshot {
        ts: SystemTime::now(),
        probes,
        host,
    }
}

fn probe_services(services: &[ServiceConfig]) -> Vec<ServiceProbe> {
    thread::scope(|scope| {
        let handles: Vec<_> = services
            .iter()
            .map(|service| scope.spawn(move || probe_service(service)))
            .collect();

        services
            .iter()
            .zip(handles)
            .map(|(service, handle)| handle.join().unwrap_or_else(|_| down_probe(service)))
            .collect()
    })
}

fn probe_service(service: &ServiceConfig) -> ServiceProbe {
    match ProbeClient::new() {
        Ok(mut client) => client.probe(service),
        Err(_) => down_probe(service),
    }
}

fn down_probe(service: &ServiceConfig) -> ServiceProbe {
    ServiceProbe {
        service_id: service.id.clone(),
        result: ProbeResult::Down,
    }
}
