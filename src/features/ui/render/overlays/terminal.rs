use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use super::super::super::state::{MIN_TERMINAL_HEIGHT, MIN_TERMINAL_WIDTH};

/// Replaces the dashboard when the terminal is below the minimum size;
/// the three card columns would otherwise wrap into garbage.
pub(in crate::features::ui) fn draw_resize_notice(frame: &mut ratatui::Frame, area: Rect) {
    frame.render_widget(Clear, area);

    let lines = vec![
        Line::from(""),
        Line::styled(
            "Window too small",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::styled(
            format!(
                "{}x{} now, at least {MIN_TERMINAL_WIDTH}x{MIN_TERMINAL_HEIGHT} needed",
                area.width, area.height,
            ),
            Style::default().fg(Color::Yellow),
        ),
        Line::from(""),
        Line::styled(
            "Enlarge the window to bring the dashboard back",
            Style::default().fg(Color::DarkGray),
        ),
    ];

    let notice = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" statusdeck ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red)),
    );

    frame.render_widget(notice, area);
}
