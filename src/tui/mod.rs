//! Terminal UI: setup, teardown, and the synchronous event loop.
//!
//! Every state transition happens inside a gesture handler; nothing here
//! blocks on anything but the next terminal event.

mod app;
mod input;
mod layout;
mod ui;

use crate::cli::Cli;
use crate::view;
use anyhow::Result;
use app::App;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use layout::ScreenLayout;
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io;
use tracing::{error, info};

/// Run the game in the hosting terminal.
pub fn run(cli: &Cli) -> Result<()> {
    // Log to a file so tracing output cannot corrupt the alternate screen.
    let log_file = std::fs::File::create(&cli.log_file)?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!("Starting Tic-Tac-Toe Rewind");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_loop(&mut terminal, App::new(cli.descending));

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

fn run_loop<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    while !app.should_quit() {
        let vm = view::project(app.state());
        terminal.draw(|frame| ui::draw(frame, &vm, app.cursor()))?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key.code),
            Event::Mouse(mouse) => {
                // Hit-test against the same layout the frame was drawn with.
                let size = terminal.size()?;
                if size.width < layout::MIN_WIDTH || size.height < layout::MIN_HEIGHT {
                    continue;
                }
                let screen = ScreenLayout::compute(Rect::new(0, 0, size.width, size.height));
                if let Some(action) = input::mouse_action(&screen, &vm, mouse) {
                    app.apply(action);
                }
            }
            _ => {}
        }
    }

    info!("Shutting down");
    Ok(())
}
