//! safemark-tui: Terminal widgets for safe text presentation
//!
//! This crate provides the terminal layer for safemark, including:
//! - [`TextPreviewToggle`](widgets::TextPreviewToggle), a collapsible text widget
//! - [`MarkdownView`](widgets::MarkdownView), a rendered markdown widget
//! - An interactive viewer loop driven by crossterm events

mod app;
pub mod event;
#[cfg(test)]
pub mod test_utils;
pub mod text;
pub mod theme;
pub mod widgets;

pub use app::{ViewerApp, ViewerMode};
pub use event::{key_to_action, mouse_to_action, Action};
pub use safemark_engine;

use crossterm::{
    cursor::Show as ShowCursor,
    event::{self as term_event, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io::{self, stdout};
use std::time::Duration;

/// RAII guard for terminal state restoration.
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen, ShowCursor);
    }
}

/// Run the viewer in the real terminal.
///
/// Sets up raw mode and the alternate screen, runs the event loop, and
/// restores the terminal on exit (including on error).
pub fn run_tui(mut app: ViewerApp) -> Result<(), Box<dyn std::error::Error>> {
    enable_raw_mode()?;
    let _guard = TerminalGuard;

    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    tracing::debug!(title = %app.title, "viewer started");
    run_viewer(&mut terminal, &mut app)?;

    terminal.show_cursor()?;
    Ok(())
}

/// Run the viewer main loop on any backend.
pub fn run_viewer<B: Backend>(terminal: &mut Terminal<B>, app: &mut ViewerApp) -> io::Result<()> {
    loop {
        terminal.draw(|frame| {
            let area = frame.area();
            app.render(area, frame.buffer_mut());
        })?;

        // 16ms poll = ~60fps
        if term_event::poll(Duration::from_millis(16))? {
            let action = match term_event::read()? {
                Event::Key(key) => key_to_action(key),
                Event::Mouse(mouse) => mouse_to_action(mouse),
                _ => Action::None,
            };
            app.handle_action(action);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
