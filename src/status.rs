use serde::Deserialize;
use std::collections::BTreeMap;

/// Status document returned by the `/api/status` endpoint. Every field may
/// be absent; rendering substitutes a placeholder per missing field, so a
/// partial document never fails or hides its siblings.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct HostStatus {
    pub ts: Option<String>,
    #[serde(rename = "pi")]
    pub host: Option<HostReport>,
    pub services: BTreeMap<String, UnitState>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct HostReport {
    pub uptime_seconds: Option<u64>,
    #[serde(rename = "uptime_human")]
    pub uptime_text: Option<String>,
    pub cpu_temp_c: Option<f64>,
    pub load_1m: Option<f64>,
    #[serde(rename = "mem")]
    pub memory: Option<UsageStats>,
    pub disk: Option<UsageStats>,
    #[serde(rename = "net")]
    pub network: Option<NetCounters>,
    pub health: Option<String>,
}

#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(default)]
pub struct UsageStats {
    pub total_bytes: Option<u64>,
    pub used_bytes: Option<u64>,
    pub used_pct: Option<f64>,
}

#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(default)]
pub struct NetCounters {
    pub tx_bytes: Option<u64>,
    pub rx_bytes: Option<u64>,
}

/// State of one systemd unit as reported by the status endpoint.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct UnitState {
    pub unit: Option<String>,
    pub active_state: Option<String>,
    pub sub_state: Option<String>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum HealthLevel {
    Good,
    Warn,
    Bad,
    Unknown,
}

impl HealthLevel {
    /// Case-insensitive parse; anything unrecognized is `Unknown`.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "good" => HealthLevel::Good,
            "warn" => HealthLevel::Warn,
            "bad" => HealthLevel::Bad,
            _ => HealthLevel::Unknown,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            HealthLevel::Good => "good",
            HealthLevel::Warn => "warn",
            HealthLevel::Bad => "bad",
            HealthLevel::Unknown => "unknown",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_level_parses_case_insensitively() {
        assert_eq!(HealthLevel::parse("good"), HealthLevel::Good);
        assert_eq!(HealthLevel::parse("GOOD"), HealthLevel::Good);
        assert_eq!(HealthLevel::parse(" Warn "), HealthLevel::Warn);
        assert_eq!(HealthLevel::parse("bad"), HealthLevel::Bad);
    }

    #[test]
    fn health_level_defaults_unknown() {
        assert_eq!(HealthLevel::parse(""), HealthLevel::Unknown);
        assert_eq!(HealthLevel::parse("degraded"), HealthLevel::Unknown);
        assert_eq!(HealthLevel::Unknown.label(), "unknown");
    }
}
