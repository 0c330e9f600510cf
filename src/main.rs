//! Legacy Suite - headless enhancement engine for the Legacy browser game.
//!
//! Main entry point for the lesuite CLI.

mod engine;
mod register;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use lesuite_config::{Config, ConfigLoader};
use lesuite_core::FileCacheStore;
use lesuite_protocols::CacheStore;

use crate::engine::Engine;

/// Legacy Suite CLI.
#[derive(Parser)]
#[command(name = "lesuite")]
#[command(about = "Headless enhancement engine for the Legacy browser game")]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config/default.toml", global = true)]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch a live page and print its enhancement plan
    Run {
        /// Game page path, e.g. /profile.php
        path: String,
    },

    /// Build a plan for page markup saved on disk
    Plan {
        /// Game page path the markup was served from
        path: String,

        /// HTML file to read
        file: PathBuf,
    },

    /// Heal to full health via the hospital
    Heal,

    /// Cache maintenance commands
    Cache {
        #[command(subcommand)]
        action: CacheAction,
    },
}

#[derive(Subcommand)]
enum CacheAction {
    /// Drop expired entries
    Sweep,

    /// Drop everything, expired or not
    Clear,
}

/// Get the .lesuite directory path.
fn lesuite_dir() -> PathBuf {
    dirs::home_dir()
        .map(|h| h.join(".lesuite"))
        .unwrap_or_else(|| PathBuf::from(".lesuite"))
}

/// Initialize tracing with console and file output.
///
/// Log files are written to ~/.lesuite/debug/ with daily rotation.
fn init_tracing() -> Result<(), Box<dyn std::error::Error>> {
    let log_dir = lesuite_dir().join("debug");
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("lesuite")
        .filename_suffix("log")
        .max_log_files(30)
        .build(&log_dir)?;

    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    // Keep the guard alive for the program duration.
    static GUARD: std::sync::OnceLock<tracing_appender::non_blocking::WorkerGuard> =
        std::sync::OnceLock::new();
    let _ = GUARD.set(_guard);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true).with_ansi(true))
        .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
        .init();

    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing()?;

    let cli = Cli::parse();
    let config = ConfigLoader::load(&cli.config)?;

    match cli.command {
        Commands::Run { path } => {
            let engine = Engine::from_config(&config)?;
            let plan = engine.run(&path).await?;
            println!("{}", serde_json::to_string_pretty(&plan)?);
        }
        Commands::Plan { path, file } => {
            let engine = Engine::from_config(&config)?;
            let plan = engine.plan_from_file(&path, &file).await?;
            println!("{}", serde_json::to_string_pretty(&plan)?);
        }
        Commands::Heal => {
            let engine = Engine::from_config(&config)?;
            engine.heal().await?;
        }
        Commands::Cache { action } => {
            handle_cache_command(action, &config)?;
        }
    }

    Ok(())
}

/// Handle cache subcommands. These work on the raw snapshot and need no
/// session cookie.
fn handle_cache_command(
    action: CacheAction,
    config: &Config,
) -> Result<(), Box<dyn std::error::Error>> {
    let path = ConfigLoader::expand_path(&config.cache.path);
    let store = FileCacheStore::open(path)?;

    match action {
        CacheAction::Sweep => {
            let dropped = store.sweep();
            store.persist()?;
            println!("Dropped {} expired entries", dropped);
        }
        CacheAction::Clear => {
            store.clear();
            store.persist()?;
            println!("Cache cleared");
        }
    }
    Ok(())
}
