use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::info;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config { print_config } = cmd {
        if *print_config {
            print!("{}", serde_yaml::to_string(&cfg.redacted())?);
        } else {
            info(format!("Config file: {}", Config::config_file().display()));
            info("Use --print to show the effective configuration.");
        }
    }
    Ok(())
}
