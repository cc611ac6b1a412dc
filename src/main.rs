mod audio;
mod data;
mod phase;
mod state;
mod surprise;
mod theme;
mod ui;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{
    io,
    time::{Duration, Instant},
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    init_logging();

    let config = state::Config::from_env();
    let mut app = state::App::new(config);

    let mut terminal = setup_terminal()?;
    let result = run_app(&mut terminal, &mut app);
    restore_terminal(&mut terminal)?;

    // Dropping the app tears down the overlay, which releases the audio.
    drop(app);

    if let Err(err) = result {
        eprintln!("ward-console: {err}");
    }

    Ok(())
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let stderr_enabled = matches!(
        std::env::var("WARD_LOG_STDERR").ok().as_deref(),
        Some("1") | Some("true") | Some("yes")
    );
    if stderr_enabled {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .try_init();
    } else {
        // Log lines on the alternate screen would shred the UI.
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::sink)
            .try_init();
    }
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut state::App,
) -> Result<()> {
    let input_poll = Duration::from_millis(50);

    loop {
        app.on_tick(Instant::now());
        terminal.draw(|f| ui::render(f, app))?;

        if event::poll(input_poll)? {
            match event::read()? {
                Event::Key(key) => {
                    if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) {
                        app.handle_key(key, Instant::now());
                    }
                }
                _ => {}
            }
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
