//! Path utilities: expand ~, turn a `DATABASE_URL` into a file path.

use std::path::PathBuf;

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// Accept either a bare path or an SQLAlchemy-style SQLite URL.
///
/// `sqlite:////data/app.db` is the absolute path `/data/app.db`,
/// `sqlite:///app.db` is the relative path `app.db`.
pub fn database_path_from_url(url: &str) -> PathBuf {
    match url.strip_prefix("sqlite:///") {
        Some(rest) => expand_tilde(rest),
        None => expand_tilde(url),
    }
}
