//! shoplist library root.
//! Exposes the CLI parser, the high-level run() function, and the modules
//! behind the web server.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod models;
pub mod ui;
pub mod utils;
pub mod web;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use tracing_subscriber::EnvFilter;

/// Default log filter when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "shoplist=info,tower_http=info";

/// Install the global tracing subscriber. Safe to call more than once.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// Central command dispatcher
pub async fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Serve { .. } => cli::commands::serve::handle(&cli.command, cfg).await,
        Commands::Init => cli::commands::init::handle(cli, cfg).await,
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub async fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // file + environment
    let mut cfg = Config::load()?;

    // --db beats everything else
    if let Some(custom_db) = &cli.db {
        cfg.database = utils::path::database_path_from_url(custom_db)
            .to_string_lossy()
            .to_string();
    }

    if matches!(cli.command, Commands::Serve { .. }) {
        init_tracing();
    }

    dispatch(&cli, &cfg).await
}
