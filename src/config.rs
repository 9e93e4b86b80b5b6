use std::time::Duration;
use url::Url;

/// Project link value meaning "no destination yet"; such cards never open.
pub const LINK_PLACEHOLDER: &str = "#";

pub const DEFAULT_STATUS_URL: &str = "http://127.0.0.1:5050/api/status";
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(30);
pub const DEFAULT_UI_REFRESH_HZ: u16 = 4;

#[derive(Clone, Debug)]
pub struct ServiceConfig {
    pub id: String,
    pub name: String,
    pub url: Url,
}

impl ServiceConfig {
    pub fn new(id: impl Into<String>, name: impl Into<String>, url: Url) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            url,
        }
    }
}

#[derive(Clone, Debug)]
pub struct ProjectConfig {
    pub name: String,
    pub description: String,
    pub url: String,
}

impl ProjectConfig {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            url: url.into(),
        }
    }

    /// Returns the destination URL, or `None` for placeholder cards.
    pub fn link(&self) -> Option<&str> {
        if self.url == LINK_PLACEHOLDER {
            None
        } else {
            Some(&self.url)
        }
    }
}

/// Immutable dashboard configuration, built once at startup and cloned
/// into the refresh worker.
#[derive(Clone, Debug)]
pub struct DashboardConfig {
    pub status_url: Url,
    pub refresh_interval: Duration,
    pub ui_refresh_hz: u16,
    pub services: Vec<ServiceConfig>,
    pub projects: Vec<ProjectConfig>,
}

pub fn default_services() -> Vec<ServiceConfig> {
    [
        ("home", "Home Site", "https://example.com"),
        ("dev", "Dev Site", "https://dev.example.com"),
        ("admin", "Admin Portal", "https://admin.example.com"),
    ]
    .into_iter()
    .filter_map(|(id, name, url)| Some(ServiceConfig::new(id, name, Url::parse(url).ok()?)))
    .collect()
}

pub fn default_projects() -> Vec<ProjectConfig> {
    vec![
        ProjectConfig::new(
            "Status API",
            "Host telemetry endpoint behind this dashboard",
            "https://example.com/api/status",
        ),
        ProjectConfig::new(
            "Media Library",
            "Self-hosted media server",
            "https://media.example.com",
        ),
        ProjectConfig::new(
            "Wiki",
            "Notes and runbooks",
            "https://wiki.example.com",
        ),
        ProjectConfig::new("Backup Node", "Offsite sync, not public yet", LINK_PLACEHOLDER),
    ]
}
