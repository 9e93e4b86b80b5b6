use crate::config::{DashboardConfig, ProjectConfig, ServiceConfig};
use crate::probe::{ProbeResult, RefreshSnapshot};
use crate::runtime::RefreshHandle;
use crate::status::HostStatus;
use std::time::SystemTime;

/// Which card column takes keyboard focus.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FocusColumn {
    Services,
    Projects,
}

impl FocusColumn {
    pub fn toggle(self) -> Self {
        match self {
            FocusColumn::Services => FocusColumn::Projects,
            FocusColumn::Projects => FocusColumn::Services,
        }
    }
}

pub struct ServiceCard {
    pub config: ServiceConfig,
    /// Latest probe outcome; `None` until the first cycle completes.
    pub result: Option<ProbeResult>,
}

pub struct AppState {
    pub config: DashboardConfig,
    pub cards: Vec<ServiceCard>,
    pub host: Option<HostStatus>,
    pub last_refresh: Option<SystemTime>,
    pub refreshing: bool,
    pub focus: FocusColumn,
    pub selected_service: usize,
    pub selected_project: usize,
}

impl AppState {
    pub fn new(config: DashboardConfig) -> Self {
        let cards = config
            .services
            .iter()
            .map(|service| ServiceCard {
                config: service.clone(),
                result: None,
            })
            .collect();
        Self {
            config,
            cards,
            host: None,
            last_refresh: None,
            refreshing: true,
            focus: FocusColumn::Services,
            selected_service: 0,
            selected_project: 0,
        }
    }

    /// Applies one refresh batch. Probes land on their cards by id, each
    /// independently of its siblings; the host document is replaced
    /// wholesale, so a failed fetch clears stale telemetry rather than
    /// keeping it on screen.
    pub fn apply_snapshot(&mut self, snapshot: RefreshSnapshot) {
        for probe in snapshot.probes {
            if let Some(card) = self
                .cards
                .iter_mut()
                .find(|card| card.config.id == probe.service_id)
            {
                card.result = Some(probe.result);
            }
        }
        self.host = snapshot.host;
        self.last_refresh = Some(snapshot.ts);
        self.refreshing = false;
    }

    pub fn request_refresh(&mut self, worker: &RefreshHandle) {
        self.refreshing = true;
        worker.refresh_now();
    }

    pub fn toggle_focus(&mut self) {
        self.focus = self.focus.toggle();
    }

    pub fn select_next(&mut self) {
        match self.focus {
            FocusColumn::Services => {
                if self.selected_service + 1 < self.cards.len() {
                    self.selected_service += 1;
                }
            }
            FocusColumn::Projects => {
                if self.selected_project + 1 < self.config.projects.len() {
                    self.selected_project += 1;
                }
            }
        }
    }

    pub fn select_prev(&mut self) {
        match self.focus {
            FocusColumn::Services => {
                self.selected_service = self.selected_service.saturating_sub(1);
            }
            FocusColumn::Projects => {
                self.selected_project = self.selected_project.saturating_sub(1);
            }
        }
    }

    /// URL the open action would launch, if the selection has one.
    /// Placeholder projects never navigate.
    pub fn open_target(&self) -> Option<&str> {
        match self.focus {
            FocusColumn::Services => self
                .cards
                .get(self.selected_service)
                .map(|card| card.config.url.as_str()),
            FocusColumn::Projects => self
                .config
                .projects
                .get(self.selected_project)
                .and_then(ProjectConfig::link),
        }
    }
}
