use crate::db::pool::DbPool;
use crate::db::queries::{find_item, update_done_state};
use crate::errors::{AppError, AppResult};
use crate::models::item::{Item, timestamp_now};

pub struct ToggleLogic;

impl ToggleLogic {
    /// Flip the done state of item `id` on behalf of `username`.
    /// Lookup and update share one transaction.
    pub fn apply(pool: &mut DbPool, id: i64, username: &str) -> AppResult<Item> {
        let item = pool.with_transaction(|tx| {
            let mut item = find_item(tx, id)?.ok_or(AppError::ItemNotFound(id))?;
            item.toggle(username, timestamp_now());
            update_done_state(tx, &item)?;
            Ok::<_, AppError>(item)
        })?;

        tracing::info!(item_id = id, user = %username, done = item.done, "item toggled");
        Ok(item)
    }
}
