//! User database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the users table
///
/// `tag` and `email` both carry unique constraints (`users_tag_key`,
/// `users_email_key`); repository code relies on the constraint names to
/// classify insert failures.
#[derive(Debug, Clone, FromRow)]
pub struct UserModel {
    pub id: i64,
    pub tag: String,
    pub email: String,
    pub username: String,
    pub password_hash: String,
    pub avatar: Option<String>,
    pub about_me: String,
    pub created_at: DateTime<Utc>,
}
