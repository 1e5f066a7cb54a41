use clap::{Parser, Subcommand};
use lanista_cli::commands;
use lanista_cli::readline;
use lanista_cli::CliContext;
use std::io::Write;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), String> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut ctx = CliContext::new();

    loop {
        let line = readline()?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match respond(line, &mut ctx) {
            Ok(quit) => {
                if quit {
                    break;
                }
            }
            Err(err) => {
                write!(std::io::stdout(), "{err}").map_err(|e| e.to_string())?;
                std::io::stdout().flush().map_err(|e| e.to_string())?;
            }
        }
    }

    Ok(())
}

#[derive(Parser)]
#[command(version, about = "colosseum wave tracker cli")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Predict the spawn table for a wave
    Predict {
        #[arg(short, long)]
        wave: u8,
        /// Comma-separated modifiers, e.g. quartet,bees:2
        #[arg(short, long)]
        modifiers: Option<String>,
    },
    /// Replay an event script through the tracker
    Replay {
        #[arg(short, long)]
        path: String,
    },
    /// Show the current run state and waves panel
    State,
    /// Show active modifiers from the scripted view
    Modifiers,
    /// Print a link for the live layout
    Link,
    /// Show per-wave splits
    Splits,
    /// Drop all session state
    Reset,
    Exit,
}

fn respond(line: &str, ctx: &mut CliContext) -> Result<bool, String> {
    let mut args = shlex::split(line).ok_or("error: Invalid quoting\n")?;
    args.insert(0, "lanista".to_string());
    let cli = Cli::try_parse_from(args).map_err(|e| e.to_string())?;

    match &cli.command {
        Some(Commands::Predict { wave, modifiers }) => {
            commands::predict(*wave, modifiers.as_deref(), ctx)?;
        }
        Some(Commands::Replay { path }) => commands::replay_file(path, ctx)?,
        Some(Commands::State) => commands::show_state(ctx),
        Some(Commands::Modifiers) => commands::show_modifiers(ctx),
        Some(Commands::Link) => commands::show_link(ctx),
        Some(Commands::Splits) => commands::show_splits(ctx),
        Some(Commands::Reset) => commands::reset(ctx),
        Some(Commands::Exit) => {
            commands::exit();
            return Ok(true);
        }
        None => {}
    }
    Ok(false)
}
