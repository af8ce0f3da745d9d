use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use draw_poker::config::GameConfig;
use draw_poker::tui::{app::AppState, controller};
use ratatui::prelude::*;
use std::io::{self, IsTerminal, Stdout};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "DRAW_POKER_LOG";

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    // A second init (e.g. under a test harness) is harmless.
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).try_init();
}

/// Optional first argument: path to a JSON table config.
fn load_config() -> io::Result<GameConfig> {
    let Some(path) = std::env::args().nth(1) else {
        return Ok(GameConfig::default());
    };
    let text = std::fs::read_to_string(&path)?;
    GameConfig::from_json(&text)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, format!("{path}: {e}")))
}

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    crossterm::execute!(stdout, crossterm::terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

fn restore_terminal(mut terminal: Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    crossterm::execute!(terminal.backend_mut(), crossterm::terminal::LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn main() -> io::Result<()> {
    init_logging();
    let config = load_config()?;
    if !io::stdout().is_terminal() {
        println!(
            "draw-poker TUI requires a real terminal (TTY).\nRun in a terminal and press q to quit. Version: {}",
            draw_poker::VERSION
        );
        return Ok(());
    }
    let mut terminal = setup_terminal()?;
    let tick_rate = Duration::from_millis(400);
    let mut app = AppState::with_config(config);
    tracing::info!(?config, "starting tui");

    let res = controller::run(&mut terminal, &mut app, tick_rate);

    // Always attempt to restore terminal
    restore_terminal(terminal)?;
    res
}
