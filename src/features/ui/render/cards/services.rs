use crate::app::{AppState, FocusColumn};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, List, ListItem};

use super::super::format::{
    latency_text, list_state, reachable_text, status_badge, truncate_string,
};

pub(in crate::features::ui) fn draw_service_column(
    frame: &mut ratatui::Frame,
    area: Rect,
    app: &AppState,
) {
    let focused = app.focus == FocusColumn::Services;

    let items: Vec<ListItem> = app
        .cards
        .iter()
        .enumerate()
        .map(|(idx, card)| {
            let badge = status_badge(card.result);
            let is_selected = focused && idx == app.selected_service;

            let name_style = if is_selected {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };

            let title = Line::from(vec![
                Span::styled(
                    format!(" {} ", badge.text),
                    Style::default()
                        .fg(Color::Black)
                        .bg(badge.tone.color())
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(" "),
                Span::styled(truncate_string(&card.config.name, 18), name_style),
                Span::raw(" "),
                Span::styled(
                    truncate_string(card.config.url.host_str().unwrap_or("?"), 20),
                    Style::default().fg(Color::DarkGray),
                ),
            ]);
            let detail = Line::from(vec![
                Span::styled("   reachable ", Style::default().fg(Color::DarkGray)),
                Span::styled(reachable_text(card.result), Style::default().fg(Color::White)),
                Span::styled("  latency ", Style::default().fg(Color::DarkGray)),
                Span::styled(latency_text(card.result), Style::default().fg(Color::White)),
            ]);

            ListItem::new(Text::from(vec![title, detail]))
        })
        .collect();

    let border_color = if focused { Color::Cyan } else { Color::Blue };
    let list = List::new(items)
        .block(
            Block::default()
                .title(" Services ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color)),
        )
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("│");
    let mut state = list_state(app.selected_service);
    frame.render_stateful_widget(list, area, &mut state);
}
