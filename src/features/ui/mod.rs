mod input;
mod render;
mod state;

use crate::app::AppState;
use crate::probe::RefreshSnapshot;
use crate::runtime::RefreshHandle;
use crossbeam_channel::Receiver;
use crossterm::event::{self, Event};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use crossterm::{QueueableCommand, execute};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout};
use std::io::{self, Stdout, Write};
use std::time::{Duration, Instant};

use input::{handle_help_key, handle_normal_key};
use render::{draw_footer, draw_header, draw_help_popup, draw_main, draw_resize_notice};
use state::{InputMode, MIN_TERMINAL_HEIGHT, MIN_TERMINAL_WIDTH};

pub fn run_ui(
    mut app: AppState,
    snapshot_rx: Receiver<RefreshSnapshot>,
    mut worker: RefreshHandle,
) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut input_mode = InputMode::Normal;
    let mut should_quit = false;
    let mut last_tick = Instant::now();

    while !should_quit {
        while let Ok(snapshot) = snapshot_rx.try_recv() {
            app.apply_snapshot(snapshot);
        }

        terminal.draw(|frame| {
            let size = frame.area();

            // Check minimum terminal size
            if size.width < MIN_TERMINAL_WIDTH || size.height < MIN_TERMINAL_HEIGHT {
                draw_resize_notice(frame, size);
                return;
            }

            // Main layout: Header, Content, Footer
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(1),
                    Constraint::Min(10),
                    Constraint::Length(1),
                ])
                .split(size);

            draw_header(frame, chunks[0], &app);
            draw_main(frame, chunks[1], &app);
            draw_footer(frame, chunks[2], input_mode);

            if input_mode == InputMode::Help {
                draw_help_popup(frame, size);
            }
        })?;

        let tick_rate = Duration::from_secs_f64(1.0 / app.config.ui_refresh_hz as f64);
        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)?
            && let Event::Key(key) = event::read()?
        {
            match input_mode {
                InputMode::Normal => {
                    if handle_normal_key(key, &mut app, &mut input_mode, &worker) {
                        should_quit = true;
                    }
                }
                InputMode::Help => {
                    handle_help_key(key, &mut input_mode);
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            last_tick = Instant::now();
        }
    }

    worker.stop();
    cleanup_terminal(&mut terminal)?;
    Ok(())
}

fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    terminal.backend_mut().queue(LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    terminal.backend_mut().flush()?;
    Ok(())
}
