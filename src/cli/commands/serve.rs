use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::web;

/// Handle the `serve` subcommand
pub async fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let mut cfg = cfg.clone();
    if let Commands::Serve { bind: Some(bind) } = cmd {
        cfg.bind = bind.clone();
    }
    web::serve(&cfg).await
}
