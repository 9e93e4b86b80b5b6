use crate::probe::ProbeResult;
use crate::status::HealthLevel;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};

/// Fallback shown for any value the status document did not provide.
pub(super) const PLACEHOLDER: &str = "—";

const BYTE_UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) struct Badge {
    pub(super) text: String,
    pub(super) tone: BadgeTone,
}

impl Badge {
    pub(super) fn up() -> Self {
        Self {
            text: "UP".to_string(),
            tone: BadgeTone::Good,
        }
    }

    pub(super) fn down() -> Self {
        Self {
            text: "DOWN".to_string(),
            tone: BadgeTone::Bad,
        }
    }

    pub(super) fn neutral() -> Self {
        Self {
            text: PLACEHOLDER.to_string(),
            tone: BadgeTone::Neutral,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum BadgeTone {
    Good,
    Warn,
    Bad,
    Neutral,
}

impl BadgeTone {
    #[cfg(test)]
    pub(super) fn label(self) -> &'static str {
        match self {
            BadgeTone::Good => "good",
            BadgeTone::Warn => "warn",
            BadgeTone::Bad => "bad",
            BadgeTone::Neutral => "neutral",
        }
    }

    pub(super) fn color(self) -> Color {
        match self {
            BadgeTone::Good => Color::Green,
            BadgeTone::Warn => Color::Yellow,
            BadgeTone::Bad => Color::Red,
            BadgeTone::Neutral => Color::DarkGray,
        }
    }
}

/// The one fallback helper every optional display value goes through.
pub(super) fn value_or_dash<T>(value: Option<T>, format: impl FnOnce(T) -> String) -> String {
    match value {
        Some(value) => format(value),
        None => PLACEHOLDER.to_string(),
    }
}

pub(super) fn format_bytes(value: Option<u64>) -> String {
    let value = match value {
        Some(value) => value,
        None => return PLACEHOLDER.to_string(),
    };

    let mut scaled = value as f64;
    let mut unit = 0;
    while scaled >= 1024.0 && unit + 1 < BYTE_UNITS.len() {
        scaled /= 1024.0;
        unit += 1;
    }

    if unit == 0 {
        format!("{scaled:.0} {}", BYTE_UNITS[unit])
    } else {
        format!("{scaled:.1} {}", BYTE_UNITS[unit])
    }
}

pub(super) fn format_percent(value: Option<f64>) -> String {
    let value = match value {
        Some(value) => value,
        None => return PLACEHOLDER.to_string(),
    };
    format!("{}%", value.round())
}

pub(super) fn format_uptime(seconds: u64) -> String {
    let days = seconds / 86_400;
    let hours = (seconds % 86_400) / 3_600;
    let minutes = (seconds % 3_600) / 60;
    if days > 0 {
        format!("{days}d {hours}h {minutes}m")
    } else if hours > 0 {
        format!("{hours}h {minutes}m")
    } else {
        format!("{minutes}m")
    }
}

/// Maps a reported health string onto a colored badge. The text keeps the
/// report's spelling uppercased; anything unrecognized (or absent) gets the
/// neutral placeholder badge.
pub(super) fn badge_from_health(health: Option<&str>) -> Badge {
    let text = match health {
        Some(text) => text,
        None => return Badge::neutral(),
    };
    let tone = match HealthLevel::parse(text) {
        HealthLevel::Good => BadgeTone::Good,
        HealthLevel::Warn => BadgeTone::Warn,
        HealthLevel::Bad => BadgeTone::Bad,
        HealthLevel::Unknown => return Badge::neutral(),
    };
    Badge {
        text: text.trim().to_ascii_uppercase(),
        tone,
    }
}

pub(super) fn status_badge(result: Option<ProbeResult>) -> Badge {
    match result {
        Some(result) if result.is_up() => Badge::up(),
        Some(_) => Badge::down(),
        None => Badge::neutral(),
    }
}

pub(super) fn reachable_text(result: Option<ProbeResult>) -> &'static str {
    match result {
        Some(result) if result.is_up() => "yes",
        Some(_) => "no",
        None => PLACEHOLDER,
    }
}

pub(super) fn latency_text(result: Option<ProbeResult>) -> String {
    match result {
        Some(result) => value_or_dash(result.latency_ms(), |ms| format!("{ms} ms")),
        None => PLACEHOLDER.to_string(),
    }
}

pub(super) fn style_for_unit(active_state: Option<&str>) -> Style {
    match active_state {
        Some("active") => Style::default().fg(Color::Green),
        Some("failed") => Style::default().fg(Color::Red),
        Some(_) => Style::default().fg(Color::Yellow),
        None => Style::default().fg(Color::DarkGray),
    }
}

/// Caps a display string at `max_len` characters. Counts chars, not bytes;
/// service and project names come from the CLI and may be non-ASCII.
pub(super) fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}

pub(super) fn list_state(selected: usize) -> ratatui::widgets::ListState {
    let mut state = ratatui::widgets::ListState::default();
    state.select(Some(selected));
    state
}

pub(super) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn format_bytes_handles_absent_and_zero() {
        assert_eq!(format_bytes(None), "—");
        assert_eq!(format_bytes(Some(0)), "0 B");
    }

    #[test]
    fn format_bytes_scales_through_units() {
        assert_eq!(format_bytes(Some(512)), "512 B");
        assert_eq!(format_bytes(Some(1536)), "1.5 KB");
        assert_eq!(format_bytes(Some(1 << 20)), "1.0 MB");
        assert_eq!(format_bytes(Some(1 << 30)), "1.0 GB");
        assert_eq!(format_bytes(Some(3 * (1 << 30) / 2)), "1.5 GB");
    }

    #[test]
    fn format_bytes_caps_at_terabytes() {
        assert!(format_bytes(Some(u64::MAX)).ends_with(" TB"));
    }

    #[test]
    fn format_percent_rounds_to_whole() {
        assert_eq!(format_percent(None), "—");
        assert_eq!(format_percent(Some(57.6)), "58%");
        assert_eq!(format_percent(Some(0.0)), "0%");
        assert_eq!(format_percent(Some(99.4)), "99%");
    }

    #[test]
    fn format_uptime_tiers_by_magnitude() {
        assert_eq!(format_uptime(0), "0m");
        assert_eq!(format_uptime(59), "0m");
        assert_eq!(format_uptime(3 * 3_600 + 5 * 60), "3h 5m");
        assert_eq!(format_uptime(90_061), "1d 1h 1m");
    }

    #[test]
    fn badge_from_health_maps_known_levels() {
        let badge = badge_from_health(Some("GOOD"));
        assert_eq!(badge.text, "GOOD");
        assert_eq!(badge.tone.label(), "good");

        let badge = badge_from_health(Some("warn"));
        assert_eq!(badge.text, "WARN");
        assert_eq!(badge.tone, BadgeTone::Warn);

        let badge = badge_from_health(Some("bad"));
        assert_eq!(badge.tone, BadgeTone::Bad);
    }

    #[test]
    fn badge_from_health_falls_back_to_neutral() {
        assert_eq!(badge_from_health(None), Badge::neutral());
        assert_eq!(badge_from_health(Some("degraded")), Badge::neutral());
        assert_eq!(badge_from_health(Some("")), Badge::neutral());
        assert_eq!(Badge::neutral().text, "—");
    }

    #[test]
    fn status_badge_covers_all_three_states() {
        let up = ProbeResult::Up {
            latency: Duration::from_millis(10),
        };
        assert_eq!(status_badge(Some(up)).text, "UP");
        assert_eq!(status_badge(Some(ProbeResult::Down)).text, "DOWN");
        assert_eq!(status_badge(None), Badge::neutral());
    }

    #[test]
    fn card_triple_reflects_probe_outcome() {
        let up = ProbeResult::Up {
            latency: Duration::from_millis(123),
        };
        assert_eq!(reachable_text(Some(up)), "yes");
        assert_eq!(latency_text(Some(up)), "123 ms");

        assert_eq!(reachable_text(Some(ProbeResult::Down)), "no");
        assert_eq!(latency_text(Some(ProbeResult::Down)), "—");

        assert_eq!(reachable_text(None), "—");
        assert_eq!(latency_text(None), "—");
    }

    #[test]
    fn value_or_dash_applies_formatter_only_when_present() {
        assert_eq!(value_or_dash(Some(7), |v| format!("{v}!")), "7!");
        assert_eq!(value_or_dash(None::<u64>, |v| format!("{v}!")), "—");
    }

    #[test]
    fn truncate_string_limits_length() {
        assert_eq!(truncate_string("short", 10), "short");
        assert_eq!(truncate_string("somewhat-longer", 10), "somewha...");
    }

    #[test]
    fn truncate_string_counts_chars_not_bytes() {
        // 19 two-byte chars; a byte-offset slice would split one in half.
        let name = "é".repeat(19);
        assert_eq!(truncate_string(&name, 18), format!("{}...", "é".repeat(15)));

        let exact = "é".repeat(18);
        assert_eq!(truncate_string(&exact, 18), exact);

        assert_eq!(truncate_string("日本語サービス", 6), "日本語...");
    }
}
