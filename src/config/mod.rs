use crate::errors::AppResult;
use crate::utils::path::database_path_from_url;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Secret used when nothing else is configured. Fine for a laptop, not for
/// anything reachable from the internet.
pub const DEFAULT_SECRET_KEY: &str = "dev-change-me";
pub const DEFAULT_BIND: &str = "0.0.0.0:5000";

pub const ENV_DATABASE_URL: &str = "DATABASE_URL";
pub const ENV_SECRET_KEY: &str = "SECRET_KEY";
pub const ENV_BIND: &str = "SHOPLIST_BIND";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_secret_key")]
    pub secret_key: String,
    #[serde(default = "default_bind")]
    pub bind: String,
}

fn default_secret_key() -> String {
    DEFAULT_SECRET_KEY.to_string()
}
fn default_bind() -> String {
    DEFAULT_BIND.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            secret_key: default_secret_key(),
            bind: default_bind(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("shoplist")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".shoplist")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("shoplist.conf")
    }

    /// Return the default path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("shoplist.sqlite")
    }

    /// Load the config file (defaults if absent), then apply environment
    /// overrides.
    pub fn load() -> AppResult<Self> {
        let mut cfg = Self::load_file(&Self::config_file())?;
        cfg.apply_env(|key| env::var(key).ok());
        Ok(cfg)
    }

    /// Read a YAML config file, or return defaults if it does not exist.
    pub fn load_file(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&content)?)
    }

    /// Override fields from the environment. `lookup` is `env::var` in
    /// production; tests pass a map.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_DATABASE_URL).filter(|v| !v.trim().is_empty()) {
            self.database = database_path_from_url(url.trim())
                .to_string_lossy()
                .to_string();
        }
        if let Some(secret) = lookup(ENV_SECRET_KEY).filter(|v| !v.is_empty()) {
            self.secret_key = secret;
        }
        if let Some(bind) = lookup(ENV_BIND).filter(|v| !v.trim().is_empty()) {
            self.bind = bind.trim().to_string();
        }
    }

    pub fn uses_default_secret(&self) -> bool {
        self.secret_key == DEFAULT_SECRET_KEY
    }

    /// Copy safe to print: the secret is masked.
    pub fn redacted(&self) -> Self {
        Self {
            secret_key: "********".to_string(),
            ..self.clone()
        }
    }

    /// Write the config file (creating its directory) and return its path.
    pub fn save(&self) -> AppResult<PathBuf> {
        fs::create_dir_all(Self::config_dir())?;
        let path = Self::config_file();
        let yaml = serde_yaml::to_string(self)?;
        let mut file = fs::File::create(&path)?;
        file.write_all(yaml.as_bytes())?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn env_overrides_database_and_secret() {
        let mut cfg = Config::default();
        cfg.apply_env(lookup_from(&[
            (ENV_DATABASE_URL, "sqlite:////data/app.db"),
            (ENV_SECRET_KEY, "s3cret"),
        ]));

        assert_eq!(cfg.database, "/data/app.db");
        assert_eq!(cfg.secret_key, "s3cret");
        assert_eq!(cfg.bind, DEFAULT_BIND);
        assert!(!cfg.uses_default_secret());
    }

    #[test]
    fn blank_env_values_are_ignored() {
        let mut cfg = Config::default();
        let before = cfg.clone();
        cfg.apply_env(lookup_from(&[(ENV_DATABASE_URL, "  "), (ENV_SECRET_KEY, "")]));
        assert_eq!(cfg, before);
        assert!(cfg.uses_default_secret());
    }

    #[test]
    fn missing_fields_in_file_fall_back_to_defaults() {
        let cfg: Config = serde_yaml::from_str("database: /tmp/x.sqlite\n").unwrap();
        assert_eq!(cfg.database, "/tmp/x.sqlite");
        assert_eq!(cfg.secret_key, DEFAULT_SECRET_KEY);
        assert_eq!(cfg.bind, DEFAULT_BIND);
    }

    #[test]
    fn redacted_hides_secret() {
        let cfg = Config {
            secret_key: "hunter2".into(),
            ..Config::default()
        };
        let yaml = serde_yaml::to_string(&cfg.redacted()).unwrap();
        assert!(!yaml.contains("hunter2"));
    }
}
