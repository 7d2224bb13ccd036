use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::Store;
use crate::db::initialize::is_initialized;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{field, info, success, warning};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the SQLite database file and its `items` table
pub async fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    info("Initializing shoplist…");

    if !cli.test {
        let path = cfg.save()?;
        field("Config", path.display());
    }

    let store = Store::open(&cfg.database)?;
    field("Database", store.path().display());

    let ready = store.call(|pool| is_initialized(&pool.conn)).await?;
    if !ready {
        return Err(AppError::Other("items table missing after initialization".into()));
    }
    success(format!("Database initialized at {}", store.path().display()));

    if cfg.uses_default_secret() {
        warning("secret_key is still the default; edit the config file or set SECRET_KEY.");
    }
    Ok(())
}
