//! amlab-tui binary: terminal setup, logging and the event loop.

use std::io::{self, stdout};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use amlab_core::LabConfig;
use amlab_core::logging::{self, LogConfig, LogLevel};
use amlab_tui::{input, persistence, ui, AppState};

#[derive(Parser)]
#[command(name = "amlab-tui", about = "Interactive amplitude modulation simulator", version)]
struct Args {
    /// Path to a TOML config file (default: the user config directory).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log at debug level.
    #[arg(long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // The terminal belongs to the UI, so logs go to a file.
    let log_path = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("amlab")
        .join("amlab-tui.log");
    let level = if args.verbose { LogLevel::Debug } else { LogLevel::Info };
    logging::init_logging(&LogConfig::to_file(level, log_path))?;

    let config = LabConfig::load(args.config.as_deref()).context("loading configuration")?;

    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);
        default_hook(info);
    }));

    let state_path = dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("amlab")
        .join("state.json");
    let export_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    let persisted = persistence::load(&state_path);
    let mut app = AppState::new(config, export_dir);
    persistence::apply(&mut app, persisted);
    tracing::info!(params = ?app.sim.params, "starting simulator");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &mut app);

    // Save state before exit
    if let Err(e) = persistence::save(&state_path, &persistence::extract(&app)) {
        tracing::warn!(error = %e, "failed to save state");
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        // 50ms timeout for ~20 FPS tick
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                input::handle_key(app, key);
            }
        }

        if !app.running {
            break;
        }
    }
    Ok(())
}
