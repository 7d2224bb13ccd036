use crate::db::pool::DbPool;
use crate::db::queries::delete_done_items;
use crate::errors::AppResult;

pub struct ClearLogic;

impl ClearLogic {
    /// Remove every completed item. No confirmation, no undo.
    pub fn apply(pool: &mut DbPool) -> AppResult<usize> {
        let removed = delete_done_items(&pool.conn)?;
        tracing::info!(removed, "cleared completed items");
        Ok(removed)
    }
}
