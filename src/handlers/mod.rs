pub mod admin;
pub mod chat;
pub mod health;
pub mod insights;
pub mod moods;
pub mod resources;

use crate::error::{AppError, AppResult};

const MAX_USER_ID_LEN: usize = 64;

/// User ids come straight from the path; keep them short and URL-safe.
pub(crate) fn validate_user_id(user_id: &str) -> AppResult<()> {
    let valid = !user_id.is_empty()
        && user_id.len() <= MAX_USER_ID_LEN
        && user_id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

    if valid {
        Ok(())
    } else {
        Err(AppError::Validation("Invalid user id".into()))
    }
}
