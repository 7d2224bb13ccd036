use crate::errors::{AppError, AppResult};

/// "Login" is just picking a display name: any non-blank string will do.
pub struct LoginLogic;

impl LoginLogic {
    pub fn apply(raw_name: &str) -> AppResult<String> {
        let name = raw_name.trim();
        if name.is_empty() {
            return Err(AppError::EmptyName);
        }
        Ok(name.to_string())
    }
}
