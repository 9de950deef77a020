//! User entity - represents a registered account

use chrono::{DateTime, Utc};

use crate::value_objects::{Snowflake, UserTag};

/// Default avatar shown until the user picks one
pub const DEFAULT_AVATAR: &str = "👤";

/// User entity
///
/// `id` and `tag` are immutable once created; `username`, `avatar`, and
/// `about_me` change through profile updates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Snowflake,
    pub tag: UserTag,
    pub email: String,
    pub username: String,
    pub avatar: Option<String>,
    pub about_me: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new User with required fields
    pub fn new(id: Snowflake, tag: UserTag, email: String, username: String) -> Self {
        Self {
            id,
            tag,
            email,
            username,
            avatar: None,
            about_me: String::new(),
            created_at: Utc::now(),
        }
    }

    /// Avatar to display, falling back to the default
    pub fn avatar_or_default(&self) -> &str {
        self.avatar.as_deref().unwrap_or(DEFAULT_AVATAR)
    }

    /// Apply a partial profile update; `None` fields keep their current value
    pub fn apply_profile_update(
        &mut self,
        username: Option<String>,
        about_me: Option<String>,
        avatar: Option<String>,
    ) {
        if let Some(username) = username {
            self.username = username;
        }
        if let Some(about_me) = about_me {
            self.about_me = about_me;
        }
        if let Some(avatar) = avatar {
            self.avatar = Some(avatar);
        }
    }
}
