use crate::app::AppState;
use crate::common::time::{Clock, SystemClock};
use crate::status::{HostReport, NetCounters, UnitState, UsageStats};
use chrono::{DateTime, FixedOffset, Local};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use super::format::{
    PLACEHOLDER, badge_from_health, format_bytes, format_percent, format_uptime, style_for_unit,
    value_or_dash,
};

pub(in crate::features::ui) fn draw_host_pane(
    frame: &mut ratatui::Frame,
    area: Rect,
    app: &AppState,
) {
    let report = app.host.as_ref().and_then(|status| status.host.as_ref());
    let health = badge_from_health(report.and_then(|r| r.health.as_deref()));

    let mut lines: Vec<Line> = Vec::new();
    lines.push(section_header("─ Host ─", Color::Cyan));

    for (label, value) in host_rows(report) {
        let value_style = if label == "Health" {
            Style::default().fg(health.tone.color())
        } else {
            Style::default().fg(Color::White)
        };
        lines.push(Line::from(vec![
            Span::styled(format!(" {label:<9} "), Style::default().fg(Color::DarkGray)),
            Span::styled(value, value_style),
        ]));
    }

    lines.push(section_header("─ Services ─", Color::Magenta));
    let units = app.host.as_ref().map(|status| &status.services);
    match units {
        Some(units) if !units.is_empty() => {
            for (name, unit) in units {
                lines.push(Line::from(vec![
                    Span::styled(format!(" {name:<9} "), Style::default().fg(Color::DarkGray)),
                    Span::styled(
                        unit_state_text(unit),
                        style_for_unit(unit.active_state.as_deref()),
                    ),
                ]));
            }
        }
        _ => {
            lines.push(Line::styled(
                " (no data)",
                Style::default().fg(Color::DarkGray),
            ));
        }
    }

    lines.push(Line::from(""));
    let doc_ts = app.host.as_ref().and_then(|status| status.ts.as_deref());
    lines.push(Line::styled(
        format!(" Updated {}", display_timestamp(doc_ts, &SystemClock)),
        Style::default().fg(Color::DarkGray),
    ));

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Host Status ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Blue)),
    );
    frame.render_widget(paragraph, area);
}

fn section_header(title: &'static str, color: Color) -> Line<'static> {
    Line::styled(title, Style::default().fg(color).add_modifier(Modifier::BOLD))
}

/// Builds the seven host display rows. Every field binds independently, so
/// any subset of the report may be missing without disturbing its siblings.
fn host_rows(report: Option<&HostReport>) -> Vec<(&'static str, String)> {
    let uptime = match report {
        Some(report) => match &report.uptime_text {
            Some(text) => text.clone(),
            None => value_or_dash(report.uptime_seconds, format_uptime),
        },
        None => PLACEHOLDER.to_string(),
    };

    vec![
        ("Uptime", uptime),
        (
            "CPU temp",
            value_or_dash(report.and_then(|r| r.cpu_temp_c), |c| format!("{c:.1}°C")),
        ),
        (
            "Load (1m)",
            value_or_dash(report.and_then(|r| r.load_1m), |load| format!("{load:.2}")),
        ),
        ("Memory", usage_line(report.and_then(|r| r.memory.as_ref()))),
        ("Disk", usage_line(report.and_then(|r| r.disk.as_ref()))),
        ("Network", net_line(report.and_then(|r| r.network.as_ref()))),
        (
            "Health",
            badge_from_health(report.and_then(|r| r.health.as_deref())).text,
        ),
    ]
}

fn usage_line(usage: Option<&UsageStats>) -> String {
    let usage = match usage {
        Some(usage) => usage,
        None => return PLACEHOLDER.to_string(),
    };
    format!(
        "{} ({} / {})",
        format_percent(usage.used_pct),
        format_bytes(usage.used_bytes),
        format_bytes(usage.total_bytes),
    )
}

fn net_line(net: Option<&NetCounters>) -> String {
    let net = match net {
        Some(net) => net,
        None => return PLACEHOLDER.to_string(),
    };
    format!(
        "↑ {}  ↓ {}",
        format_bytes(net.tx_bytes),
        format_bytes(net.rx_bytes),
    )
}

fn unit_state_text(unit: &UnitState) -> String {
    match (&unit.active_state, &unit.sub_state) {
        (Some(active), Some(sub)) => format!("{active} ({sub})"),
        (Some(active), None) => active.clone(),
        (None, _) => PLACEHOLDER.to_string(),
    }
}

fn parse_doc_timestamp(value: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(value).ok()
}

/// Local wall-clock line for the pane footer. Prefers the document's own
/// timestamp; falls back to the render-time clock when it is absent or
/// unparsable.
fn display_timestamp(doc_ts: Option<&str>, clock: &dyn Clock) -> String {
    match doc_ts.and_then(parse_doc_timestamp) {
        Some(ts) => ts.with_timezone(&Local).format("%H:%M:%S").to_string(),
        None => DateTime::<Local>::from(clock.now())
            .format("%H:%M:%S")
            .to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, SystemTime, UNIX_EPOCH};

    struct FixedClock(SystemTime);

    impl Clock for FixedClock {
        fn now(&self) -> SystemTime {
            self.0
        }
    }

    fn full_report() -> HostReport {
        HostReport {
            uptime_seconds: Some(273_906),
            uptime_text: Some("3d 4h 5m".to_string()),
            cpu_temp_c: Some(51.2),
            load_1m: Some(0.42),
            memory: Some(UsageStats {
                total_bytes: Some(8 << 30),
                used_bytes: Some(4 << 30),
                used_pct: Some(50.0),
            }),
            disk: Some(UsageStats {
                total_bytes: Some(58 << 30),
                used_bytes: Some(23 << 30),
                used_pct: Some(40.2),
            }),
            network: Some(NetCounters {
                tx_bytes: Some(3 * (1 << 30) / 2),
                rx_bytes: Some(12 << 30),
            }),
            health: Some("good".to_string()),
        }
    }

    #[test]
    fn host_rows_cover_seven_fields() {
        let rows = host_rows(None);
        assert_eq!(rows.len(), 7);
        let labels: Vec<_> = rows.iter().map(|(label, _)| *label).collect();
        assert_eq!(
            labels,
            vec![
                "Uptime",
                "CPU temp",
                "Load (1m)",
                "Memory",
                "Disk",
                "Network",
                "Health"
            ]
        );
    }

    #[test]
    fn missing_report_renders_all_placeholders() {
        for (_, value) in host_rows(None) {
            assert_eq!(value, PLACEHOLDER);
        }
    }

    #[test]
    fn full_report_renders_no_placeholders() {
        let report = full_report();
        let rows = host_rows(Some(&report));
        for (label, value) in &rows {
            assert_ne!(value, PLACEHOLDER, "field {label} fell back");
        }
        assert_eq!(rows[0].1, "3d 4h 5m");
        assert_eq!(rows[1].1, "51.2°C");
        assert_eq!(rows[2].1, "0.42");
        assert_eq!(rows[3].1, "50% (4.0 GB / 8.0 GB)");
        assert_eq!(rows[5].1, "↑ 1.5 GB  ↓ 12.0 GB");
        assert_eq!(rows[6].1, "GOOD");
    }

    #[test]
    fn each_field_falls_back_independently() {
        let report = HostReport {
            cpu_temp_c: Some(44.0),
            ..HostReport::default()
        };
        let rows = host_rows(Some(&report));
        assert_eq!(rows[1].1, "44.0°C");
        assert_eq!(rows[0].1, PLACEHOLDER);
        assert_eq!(rows[3].1, PLACEHOLDER);
        assert_eq!(rows[6].1, PLACEHOLDER);
    }

    #[test]
    fn partial_usage_dashes_only_missing_parts() {
        let usage = UsageStats {
            total_bytes: Some(8 << 30),
            used_bytes: None,
            used_pct: Some(50.0),
        };
        assert_eq!(usage_line(Some(&usage)), "50% (— / 8.0 GB)");
    }

    #[test]
    fn uptime_prefers_text_over_seconds() {
        let mut report = full_report();
        assert_eq!(host_rows(Some(&report))[0].1, "3d 4h 5m");

        report.uptime_text = None;
        assert_eq!(host_rows(Some(&report))[0].1, "3d 4h 5m");

        report.uptime_seconds = None;
        assert_eq!(host_rows(Some(&report))[0].1, PLACEHOLDER);
    }

    #[test]
    fn host_rows_are_idempotent() {
        let report = full_report();
        assert_eq!(host_rows(Some(&report)), host_rows(Some(&report)));
        assert_eq!(host_rows(None), host_rows(None));
    }

    #[test]
    fn unit_state_text_folds_sub_state() {
        let unit = UnitState {
            unit: Some("nginx.service".to_string()),
            active_state: Some("active".to_string()),
            sub_state: Some("running".to_string()),
        };
        assert_eq!(unit_state_text(&unit), "active (running)");

        let bare = UnitState {
            active_state: Some("inactive".to_string()),
            ..UnitState::default()
        };
        assert_eq!(unit_state_text(&bare), "inactive");
        assert_eq!(unit_state_text(&UnitState::default()), PLACEHOLDER);
    }

    #[test]
    fn doc_timestamp_parses_rfc3339() {
        assert!(parse_doc_timestamp("2026-08-26T12:00:00Z").is_some());
        assert!(parse_doc_timestamp("2026-08-26T12:00:00+02:00").is_some());
        assert!(parse_doc_timestamp("yesterday").is_none());
        assert!(parse_doc_timestamp("").is_none());
    }

    #[test]
    fn display_timestamp_is_wall_clock_shaped() {
        let clock = FixedClock(UNIX_EPOCH + Duration::from_secs(1_700_000_000));

        for input in [Some("2026-08-26T12:00:00Z"), Some("garbage"), None] {
            let text = display_timestamp(input, &clock);
            let bytes = text.as_bytes();
            assert_eq!(text.len(), 8, "unexpected shape: {text}");
            assert_eq!(bytes[2], b':');
            assert_eq!(bytes[5], b':');
            assert!(text.chars().filter(|c| c.is_ascii_digit()).count() == 6);
        }
    }

    #[test]
    fn display_timestamp_uses_document_time_when_valid() {
        let clock = FixedClock(UNIX_EPOCH);
        let from_doc = display_timestamp(Some("2026-08-26T12:34:56Z"), &clock);
        let from_clock = display_timestamp(None, &clock);
        // Different instants, different wall-clock readings.
        assert_ne!(from_doc, from_clock);
    }
}
