use crate::app::AppState;
use chrono::{DateTime, Local};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::super::state::InputMode;

pub(in crate::features::ui) fn draw_header(frame: &mut ratatui::Frame, area: Rect, app: &AppState) {
    let refresh_str = if app.refreshing {
        "refreshing…".to_string()
    } else {
        match app.last_refresh {
            Some(ts) => format!("updated {}", DateTime::<Local>::from(ts).format("%H:%M:%S")),
            None => "waiting".to_string(),
        }
    };

    let header = Line::from(vec![
        Span::styled(
            " statusdeck",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("│ "),
        Span::styled("Refresh:", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!(" {refresh_str} "),
            Style::default().fg(Color::Green),
        ),
        Span::raw("│ "),
        Span::styled("Every:", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!(" {}s ", app.config.refresh_interval.as_secs()),
            Style::default().fg(Color::Yellow),
        ),
        Span::raw("│ "),
        Span::styled("Services:", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!(" {} ", app.cards.len()),
            Style::default().fg(Color::White),
        ),
    ]);

    let paragraph = Paragraph::new(header).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(paragraph, area);
}

pub(in crate::features::ui) fn draw_footer(
    frame: &mut ratatui::Frame,
    area: Rect,
    mode: InputMode,
) {
    let hints = match mode {
        InputMode::Normal => vec![
            ("q", "Quit"),
            ("?", "Help"),
            ("r", "Refresh"),
            ("j/k", "Select"),
            ("Tab", "Column"),
            ("Enter", "Open"),
        ],
        InputMode::Help => vec![("Esc", "Close")],
    };

    let spans: Vec<Span> = hints
        .iter()
        .flat_map(|(key, action)| {
            vec![
                Span::styled(format!(" {key} "), Style::default().fg(Color::Yellow)),
                Span::styled(format!("{action} "), Style::default().fg(Color::Gray)),
            ]
        })
        .collect();

    let footer = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(footer, area);
}
