// netfolio - Terminal portfolio with an animated network background
// Particles drift across the screen, nodes pulse, and signals travel
// between nodes behind the portfolio sections.

mod app;
mod portfolio;
mod sim;
mod theme;
mod ui;

use anyhow::{Context, Result};
use app::config::{DEFAULT_FRAME_MS, MAX_FRAME_MS, MIN_FRAME_MS};
use app::{event::handle_key_event, AppOptions, AppState};
use clap::Parser;
use crossterm::{
    event::{self, DisableFocusChange, EnableFocusChange, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use portfolio::Portfolio;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Instant;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "netfolio", version, about = "Terminal portfolio with an animated network background")]
struct Cli {
    /// Portfolio document (JSON)
    #[arg(long, default_value = "data.json")]
    data: PathBuf,

    /// Background frame interval in milliseconds
    #[arg(
        long,
        default_value_t = DEFAULT_FRAME_MS,
        value_parser = clap::value_parser!(u64).range(MIN_FRAME_MS..=MAX_FRAME_MS)
    )]
    frame_ms: u64,

    /// Seed the background for a reproducible animation
    #[arg(long)]
    seed: Option<u64>,

    /// Run without the animated background
    #[arg(long)]
    no_background: bool,

    /// Write logs to this file (the terminal is used by the UI)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_file.as_ref())?;

    let loaded = Portfolio::load(&cli.data);
    if let Ok(portfolio) = &loaded {
        tracing::info!(
            path = %cli.data.display(),
            projects = portfolio.projects.len(),
            "Portfolio loaded"
        );
    }

    let (columns, rows) = crossterm::terminal::size()?;
    let options = AppOptions {
        frame_ms: cli.frame_ms,
        seed: cli.seed,
        background: !cli.no_background,
        terminal_size: (columns, rows),
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableFocusChange)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, AppState::new(loaded, options));

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableFocusChange,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = ?err, "Exited with error");
        println!("Error: {:?}", err);
    }
    Ok(())
}

/// Install a file logger when requested; without one logging stays off so
/// nothing is written over the UI
fn init_tracing(log_file: Option<&PathBuf>) -> Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("cannot create log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .try_init()
        .context("cannot install the log subscriber")?;
    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: AppState,
) -> Result<()> {
    loop {
        app.on_frame(Instant::now());
        terminal.draw(|f| ui::draw(f, &mut app))?;

        if !app.running {
            return Ok(());
        }

        // Wake up for the next background frame or the UI poll, whichever is first
        if event::poll(app.next_wakeup(Instant::now()))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    handle_key_event(&mut app, key.code);
                }
                Event::Resize(columns, rows) => app.on_resize(columns, rows),
                Event::FocusLost => app.on_focus_change(false),
                Event::FocusGained => app.on_focus_change(true),
                _ => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["netfolio"]).unwrap();
        assert_eq!(cli.data, PathBuf::from("data.json"));
        assert_eq!(cli.frame_ms, DEFAULT_FRAME_MS);
        assert!(cli.seed.is_none());
        assert!(!cli.no_background);
        assert!(cli.log_file.is_none());
    }

    #[test]
    fn test_cli_flags() {
        let cli = Cli::try_parse_from([
            "netfolio",
            "--data",
            "me.json",
            "--frame-ms",
            "50",
            "--seed",
            "42",
            "--no-background",
        ])
        .unwrap();
        assert_eq!(cli.data, PathBuf::from("me.json"));
        assert_eq!(cli.frame_ms, 50);
        assert_eq!(cli.seed, Some(42));
        assert!(cli.no_background);
    }

    #[test]
    fn test_cli_rejects_out_of_range_frame_ms() {
        assert!(Cli::try_parse_from(["netfolio", "--frame-ms", "5"]).is_err());
        assert!(Cli::try_parse_from(["netfolio", "--frame-ms", "500"]).is_err());
    }
}
