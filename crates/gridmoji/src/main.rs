//! Gridmoji - emoji tic-tac-toe for the terminal.

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use gridmoji::cli::{Cli, Command};
use gridmoji::tui::App;
use gridmoji::Storage;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => run_tui(&cli.data_dir).await,
        Command::Stats => run_stats(&cli.data_dir),
        Command::ResetScores => run_reset_scores(&cli.data_dir),
    }
}

/// Run the terminal UI.
///
/// Logs go to a file in the data directory so tracing output never
/// fights the alternate screen.
async fn run_tui(data_dir: &Path) -> Result<()> {
    std::fs::create_dir_all(data_dir)
        .with_context(|| format!("creating data directory {}", data_dir.display()))?;

    let log_path = data_dir.join("gridmoji.log");
    let log_file = std::fs::File::create(&log_path)
        .with_context(|| format!("creating log file {}", log_path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Mutex::new(log_file))
        .with_ansi(false)
        .init();

    info!("Starting gridmoji");

    let storage = Storage::new(data_dir);
    let mut app = App::new(storage);

    enable_raw_mode().context("enabling raw mode")?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen).context("entering alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = app.run(&mut terminal).await;

    disable_raw_mode().context("disabling raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("leaving alternate screen")?;

    result
}

/// Print the persisted scoreboard.
fn run_stats(data_dir: &Path) -> Result<()> {
    init_stdout_tracing();

    let storage = Storage::new(data_dir);
    let scores = storage.load_scores();

    println!("Gridmoji scoreboard ({})", data_dir.display());
    println!("  Player 1 wins: {}", scores.player_one_wins);
    println!("  Player 2 wins: {}", scores.player_two_wins);
    println!("  Computer wins: {}", scores.ai_wins);
    println!("  Draws:         {}", scores.draws);

    Ok(())
}

/// Reset the persisted scoreboard.
fn run_reset_scores(data_dir: &Path) -> Result<()> {
    init_stdout_tracing();

    let storage = Storage::new(data_dir);
    storage.reset_scores().context("resetting scores")?;
    println!("Scoreboard reset.");

    Ok(())
}

fn init_stdout_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();
}
