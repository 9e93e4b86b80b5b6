use crate::app::{AppState, FocusColumn};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, List, ListItem};

use super::super::format::{list_state, truncate_string};

pub(in crate::features::ui) fn draw_project_column(
    frame: &mut ratatui::Frame,
    area: Rect,
    app: &AppState,
) {
    let focused = app.focus == FocusColumn::Projects;

    let items: Vec<ListItem> = app
        .config
        .projects
        .iter()
        .enumerate()
        .map(|(idx, project)| {
            let is_selected = focused && idx == app.selected_project;
            // Placeholder links render without the jump marker.
            let marker = if project.link().is_some() { "↗" } else { " " };

            let name_style = if is_selected {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };

            let title = Line::from(vec![
                Span::styled(format!(" {marker} "), Style::default().fg(Color::Cyan)),
                Span::styled(truncate_string(&project.name, 24), name_style),
            ]);
            let detail = Line::styled(
                format!("   {}", truncate_string(&project.description, 32)),
                Style::default().fg(Color::DarkGray),
            );

            ListItem::new(Text::from(vec![title, detail]))
        })
        .collect();

    let border_color = if focused { Color::Cyan } else { Color::Blue };
    let list = List::new(items)
        .block(
            Block::default()
                .title(" Projects ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color)),
        )
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("│");
    let mut state = list_state(app.selected_project);
    frame.render_stateful_widget(list, area, &mut state);
}
