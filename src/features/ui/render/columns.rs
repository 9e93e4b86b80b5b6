use crate::app::AppState;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

use super::cards::{draw_project_column, draw_service_column};
use super::host::draw_host_pane;

pub(in crate::features::ui) fn draw_main(frame: &mut ratatui::Frame, area: Rect, app: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(36),
            Constraint::Percentage(28),
            Constraint::Percentage(36),
        ])
        .split(area);

    draw_service_column(frame, chunks[0], app);
    draw_project_column(frame, chunks[1], app);
    draw_host_pane(frame, chunks[2], app);
}
