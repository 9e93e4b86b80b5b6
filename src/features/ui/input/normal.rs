use crate::app::AppState;
use crate::runtime::RefreshHandle;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::super::state::InputMode;

pub(in crate::features::ui) fn handle_normal_key(
    key: KeyEvent,
    app: &mut AppState,
    input_mode: &mut InputMode,
    worker: &RefreshHandle,
) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return true;
    }
    match key.code {
        KeyCode::Char('q') => return true,
        KeyCode::Char('?') => {
            *input_mode = InputMode::Help;
        }
        KeyCode::Char('r') => app.request_refresh(worker),
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Up | KeyCode::Char('k') => app.select_prev(),
        KeyCode::Tab
        | KeyCode::Left
        | KeyCode::Right
        | KeyCode::Char('h')
        | KeyCode::Char('l') => app.toggle_focus(),
        KeyCode::Enter | KeyCode::Char('o') => open_selected(app),
        _ => {}
    }
    false
}

fn open_selected(app: &AppState) {
    if let Some(url) = app.open_target() {
        let _ = webbrowser::open(url);
    }
}
