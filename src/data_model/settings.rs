use std::time::Duration;
use url::Url;

/// Validated startup settings, produced once from the CLI.
#[derive(Debug, Clone)]
pub struct AppSettings {
    pub services: Vec<String>,
    pub status_url: Url,
    pub refresh_interval: Duration,
    pub refresh_hz: u16,
}
