use crate::app::parse_service_specs;
use crate::config::{
    DEFAULT_REFRESH_INTERVAL, DEFAULT_STATUS_URL, DEFAULT_UI_REFRESH_HZ, DashboardConfig,
    default_projects,
};
use crate::data_model::settings::AppSettings;
use clap::Parser;
use std::time::Duration;
use thiserror::Error;
use url::Url;

#[derive(Parser, Debug)]
#[command(name = "statusdeck")]
#[command(about = "Terminal status dashboard for self-hosted services and host telemetry", long_about = None)]
pub struct CliArgs {
    /// Service to probe, as id=name=url (repeatable)
    #[arg(short, long, value_name = "SPEC")]
    service: Vec<String>,

    /// Status endpoint URL
    #[arg(long, value_name = "URL", default_value = DEFAULT_STATUS_URL)]
    status_url: String,

    /// Seconds between refresh cycles
    #[arg(long, default_value_t = DEFAULT_REFRESH_INTERVAL.as_secs())]
    interval: u64,

    /// UI refresh rate (Hz)
    #[arg(long, default_value_t = DEFAULT_UI_REFRESH_HZ)]
    refresh_hz: u16,
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("ui refresh rate must be greater than zero (got {value})")]
    InvalidRefreshHz { value: u16 },
    #[error("refresh interval must be greater than zero (got {value})")]
    InvalidInterval { value: u64 },
    #[error("status url is not a valid URL: {value}")]
    InvalidStatusUrl { value: String },
}

pub fn load_from_cli() -> Result<AppSettings, SettingsError> {
    let args = CliArgs::parse();
    from_args(args)
}

pub fn from_args(args: CliArgs) -> Result<AppSettings, SettingsError> {
    if args.refresh_hz == 0 {
        return Err(SettingsError::InvalidRefreshHz {
            value: args.refresh_hz,
        });
    }
    if args.interval == 0 {
        return Err(SettingsError::InvalidInterval {
            value: args.interval,
        });
    }

    let status_url = Url::parse(&args.status_url).map_err(|_| SettingsError::InvalidStatusUrl {
        value: args.status_url.clone(),
    })?;

    Ok(AppSettings {
        services: args.service,
        status_url,
        refresh_interval: Duration::from_secs(args.interval),
        refresh_hz: args.refresh_hz,
    })
}

/// Builds the immutable dashboard configuration the worker and UI share.
/// Service specs that fail to parse are dropped; an empty list falls back
/// to the built-in fleet.
pub fn build_config(settings: &AppSettings) -> DashboardConfig {
    DashboardConfig {
        status_url: settings.status_url.clone(),
        refresh_interval: settings.refresh_interval,
        ui_refresh_hz: settings.refresh_hz,
        services: parse_service_specs(&settings.services),
        projects: default_projects(),
    }
}
