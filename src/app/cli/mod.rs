//! CLI Adapter.

mod check;
mod sync;
mod verify;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::app::configuration::ConfigOverrides;
use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "pubsync")]
#[command(version)]
#[command(
    about = "Build the front-end project and sync its output into public/",
    long_about = None
)]
struct Cli {
    /// Repository root (defaults to the nearest directory containing pubsync.toml)
    #[arg(long, global = true)]
    root: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the source project and replace public/ with its output (default)
    #[clap(visible_alias = "s")]
    Sync(CommandArgs),
    /// Validate paths and show what a sync would do, without building
    #[clap(visible_alias = "c")]
    Check(CommandArgs),
    /// Compare the current build output with public/ without rebuilding
    #[clap(visible_alias = "v")]
    Verify(CommandArgs),
}

#[derive(Args, Default)]
struct CommandArgs {
    /// Source project directory (overrides PUBSYNC_SOURCE_DIR and pubsync.toml)
    #[arg(short, long)]
    source: Option<PathBuf>,
    /// Emit a JSON report on stdout
    #[arg(long)]
    json: bool,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_else(|| Commands::Sync(CommandArgs::default()));

    let result: Result<i32, AppError> = match command {
        Commands::Sync(args) => sync::run_sync(overrides(&cli.root, &args), args.json).map(|_| 0),
        Commands::Check(args) => {
            check::run_check(overrides(&cli.root, &args), args.json).map(|_| 0)
        }
        Commands::Verify(args) => verify::run_verify(overrides(&cli.root, &args), args.json),
    };

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(e.exit_code());
        }
    }
}

fn overrides(root: &Option<PathBuf>, args: &CommandArgs) -> ConfigOverrides {
    ConfigOverrides { root: root.clone(), source_dir: args.source.clone() }
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), AppError> {
    let rendered = serde_json::to_string_pretty(value)
        .map_err(|e| AppError::Render { what: "JSON report".into(), details: e.to_string() })?;
    println!("{}", rendered);
    Ok(())
}
