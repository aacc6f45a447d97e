//! Hexfront - Entry Point
//!
//! Runs a game session from the terminal, either interactively or by
//! replaying a command script.

use clap::Parser;
use hexfront::core::config::GameConfig;
use hexfront::core::error::Result;
use hexfront::session::{CommandOutcome, GameSession, HELP};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Hexfront - hex territory battles for two players at one terminal
#[derive(Parser, Debug)]
#[command(name = "hexfront")]
#[command(about = "Play or replay a two-player hex territory game")]
struct Args {
    /// Game configuration file (TOML); defaults are used when omitted
    #[arg(long)]
    config: Option<PathBuf>,

    /// Replay commands from a file instead of reading stdin
    #[arg(long)]
    script: Option<PathBuf>,

    /// Print the final game state as JSON on exit
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    // Logs go to stderr so --json output stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("hexfront=info")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    let mut session = GameSession::from_config(config)?;
    tracing::info!("Hexfront starting...");

    match &args.script {
        Some(path) => {
            let script = std::fs::read_to_string(path)?;
            run_script(&mut session, &script);
        }
        None => run_interactive(&mut session)?,
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(session.state())?);
    }
    Ok(())
}

/// Replay a script; blank lines and `#` comments are skipped
fn run_script(session: &mut GameSession, script: &str) {
    for (number, line) in script.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        println!("> {}", line);
        if !handle_line(session, line) {
            tracing::info!("Script stopped at line {}", number + 1);
            break;
        }
    }
}

fn run_interactive(session: &mut GameSession) -> Result<()> {
    println!("\n=== HEXFRONT ===");
    println!("{}", HELP);
    println!();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        let state = session.state();
        print!(
            "[turn {} | {} | {}] > ",
            state.turn, state.current_player, state.phase
        );
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if !handle_line(session, line) {
            break;
        }
    }

    println!("\nGoodbye! Game ended on turn {}.", session.state().turn);
    Ok(())
}

/// Run one line and print the outcome; returns false on quit
fn handle_line(session: &mut GameSession, line: &str) -> bool {
    match session.execute(line) {
        Ok(CommandOutcome::Applied(events)) => {
            for event in events {
                println!("  {}", event.description);
            }
            true
        }
        Ok(CommandOutcome::Info(text)) => {
            println!("{}", text);
            true
        }
        Ok(CommandOutcome::Quit) => false,
        Err(e) => {
            println!("Rejected: {}", e);
            true
        }
    }
}
