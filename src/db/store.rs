//! Async-facing handle to the SQLite database.
//!
//! The connection sits behind `Arc<Mutex<_>>` and every call runs on the
//! Tokio blocking pool, so request handlers never block the reactor and each
//! closure sees the database exclusively.

use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct Store {
    pool: Arc<Mutex<DbPool>>,
    path: PathBuf,
}

impl Store {
    /// Open (or create) the database file at `path`, creating the parent
    /// directory and the schema when missing.
    pub fn open(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let pool = DbPool::new(&path.to_string_lossy())?;
        init_db(&pool.conn)?;

        Ok(Self {
            pool: Arc::new(Mutex::new(pool)),
            path,
        })
    }

    /// In-memory database, handy for tests.
    pub fn open_in_memory() -> AppResult<Self> {
        let pool = DbPool::open_in_memory()?;
        init_db(&pool.conn)?;

        Ok(Self {
            pool: Arc::new(Mutex::new(pool)),
            path: PathBuf::from(":memory:"),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Run a blocking closure against the connection on the blocking pool.
    pub async fn call<F, T>(&self, func: F) -> AppResult<T>
    where
        F: FnOnce(&mut DbPool) -> AppResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = Arc::clone(&self.pool);
        tokio::task::spawn_blocking(move || {
            let mut guard = pool
                .lock()
                .map_err(|e| AppError::Other(format!("failed to acquire database lock: {e}")))?;
            func(&mut guard)
        })
        .await
        .map_err(|e| AppError::Other(format!("database task failed: {e}")))?
    }
}
