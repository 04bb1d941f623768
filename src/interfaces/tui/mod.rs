//! Terminal User Interface (TUI) module
//!
//! Interactive editor for the options of one build directory

use std::io::{self, Stderr};

use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    crossterm::{
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    },
};
use tracing::debug;

mod app;
mod constants;
mod event_handler;
mod ui;

use app::App;
use ui::ui;

use crate::meson::MesonRunner;
use crate::runtime::{ExitAction, Session};

type Tui = Terminal<CrosstermBackend<Stderr>>;

/// Run the TUI until the user picks an exit action.
///
/// The terminal is restored before returning, so Meson output printed by
/// the caller lands on the normal screen.
pub fn run_tui<R: MesonRunner>(session: &mut Session<R>, confirm_discard: bool) -> io::Result<ExitAction> {
    enable_raw_mode()?;
    let mut stderr = io::stderr();
    execute!(stderr, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stderr);
    let mut terminal = Terminal::new(backend)?;

    let header = session.header();
    let mut app = App::new(
        &mut session.store,
        &session.build_dir,
        header,
        confirm_discard,
    );
    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

/// Main application loop
fn run_app(terminal: &mut Tui, app: &mut App) -> io::Result<ExitAction> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && event_handler::handle_key_event(app, key)
        {
            let action = app.exit_action.unwrap_or(ExitAction::Discard);
            debug!("Leaving TUI: {:?}", action);
            return Ok(action);
        }
    }
}
