//! User entity <-> model mapper

use tagchat_core::{DomainError, Snowflake, User, UserTag};

use crate::models::UserModel;

/// Convert UserModel to User entity
///
/// Fallible because the stored tag string is re-validated on the way out; a
/// row that fails this surfaces corrupt data rather than a caller bug.
impl TryFrom<UserModel> for User {
    type Error = DomainError;

    fn try_from(model: UserModel) -> Result<Self, Self::Error> {
        Ok(User {
            id: Snowflake::new(model.id),
            tag: UserTag::parse(&model.tag)?,
            email: model.email,
            username: model.username,
            avatar: model.avatar,
            about_me: model.about_me,
            created_at: model.created_at,
        })
    }
}

/// Borrowed values for inserting a user row
pub struct UserInsert<'a> {
    pub id: i64,
    pub tag: &'a str,
    pub email: &'a str,
    pub username: &'a str,
    pub password_hash: &'a str,
    pub avatar: Option<&'a str>,
    pub about_me: &'a str,
}

impl<'a> UserInsert<'a> {
    pub fn new(user: &'a User, password_hash: &'a str) -> Self {
        Self {
            id: user.id.into_inner(),
            tag: user.tag.as_str(),
            email: &user.email,
            username: &user.username,
            password_hash,
            avatar: user.avatar.as_deref(),
            about_me: &user.about_me,
        }
    }
}
