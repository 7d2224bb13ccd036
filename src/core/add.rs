use crate::db::pool::DbPool;
use crate::db::queries::insert_item;
use crate::errors::{AppError, AppResult};
use crate::models::item::{Item, MAX_TEXT_LEN, timestamp_now};

/// High-level business logic for adding an item to the list.
pub struct AddLogic;

impl AddLogic {
    pub fn apply(pool: &mut DbPool, raw_text: &str, username: &str) -> AppResult<Item> {
        let text = raw_text.trim();

        if text.is_empty() {
            return Err(AppError::EmptyItemText);
        }
        if text.chars().count() > MAX_TEXT_LEN {
            return Err(AppError::ItemTextTooLong(MAX_TEXT_LEN));
        }

        let mut item = Item::new(text, username, timestamp_now());
        item.id = insert_item(&pool.conn, &item)?;

        tracing::info!(item_id = item.id, user = %username, "item added");
        Ok(item)
    }
}
