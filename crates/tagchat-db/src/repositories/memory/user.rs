//! In-memory implementation of UserRepository

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;

use tagchat_core::{DomainError, RepoResult, Snowflake, User, UserRepository, UserTag};

struct StoredUser {
    user: User,
    password_hash: String,
}

/// In-memory implementation of UserRepository
#[derive(Clone, Default)]
pub struct MemoryUserRepository {
    inner: Arc<RwLock<Vec<StoredUser>>>,
}

impl MemoryUserRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>> {
        let users = self.inner.read();
        Ok(users.iter().find(|s| s.user.id == id).map(|s| s.user.clone()))
    }

    async fn find_by_tag(&self, tag: &UserTag) -> RepoResult<Option<User>> {
        let users = self.inner.read();
        Ok(users
            .iter()
            .find(|s| s.user.tag == *tag)
            .map(|s| s.user.clone()))
    }

    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        let users = self.inner.read();
        Ok(users
            .iter()
            .find(|s| s.user.email == email)
            .map(|s| s.user.clone()))
    }

    async fn email_exists(&self, email: &str) -> RepoResult<bool> {
        let users = self.inner.read();
        Ok(users.iter().any(|s| s.user.email == email))
    }

    async fn tag_exists(&self, tag: &UserTag) -> RepoResult<bool> {
        let users = self.inner.read();
        Ok(users.iter().any(|s| s.user.tag == *tag))
    }

    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()> {
        let mut users = self.inner.write();
        // Same uniqueness rules the Postgres constraints enforce
        if users.iter().any(|s| s.user.tag == user.tag) {
            return Err(DomainError::DuplicateTag);
        }
        if users.iter().any(|s| s.user.email == user.email) {
            return Err(DomainError::EmailAlreadyExists);
        }
        users.push(StoredUser {
            user: user.clone(),
            password_hash: password_hash.to_string(),
        });
        Ok(())
    }

    async fn update_profile(&self, user: &User) -> RepoResult<()> {
        let mut users = self.inner.write();
        match users.iter_mut().find(|s| s.user.id == user.id) {
            Some(stored) => {
                stored.user = user.clone();
                Ok(())
            }
            None => Err(DomainError::UserNotFound),
        }
    }

    async fn get_password_hash(&self, id: Snowflake) -> RepoResult<Option<String>> {
        let users = self.inner.read();
        Ok(users
            .iter()
            .find(|s| s.user.id == id)
            .map(|s| s.password_hash.clone()))
    }
}
