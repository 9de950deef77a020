//! PostgreSQL implementation of UserRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use tagchat_core::{RepoResult, Snowflake, User, UserRepository, UserTag};

use crate::mappers::UserInsert;
use crate::models::UserModel;

use super::error::{map_db_error, map_user_unique_violation};

const USER_COLUMNS: &str = "id, tag, email, username, password_hash, avatar, about_me, created_at";

/// PostgreSQL implementation of UserRepository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new PgUserRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn find_one(&self, where_clause: &str, bind: &str) -> RepoResult<Option<User>> {
        let query = format!("SELECT {USER_COLUMNS} FROM users WHERE {where_clause}");
        let result = sqlx::query_as::<_, UserModel>(&query)
            .bind(bind)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        result.map(User::try_from).transpose()
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(
            r"
            SELECT id, tag, email, username, password_hash, avatar, about_me, created_at
            FROM users
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(User::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_by_tag(&self, tag: &UserTag) -> RepoResult<Option<User>> {
        self.find_one("tag = $1", tag.as_str()).await
    }

    #[instrument(skip(self))]
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        self.find_one("email = $1", email).await
    }

    #[instrument(skip(self))]
    async fn email_exists(&self, email: &str) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)
            ",
        )
        .bind(email)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self))]
    async fn tag_exists(&self, tag: &UserTag) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(SELECT 1 FROM users WHERE tag = $1)
            ",
        )
        .bind(tag.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self, password_hash))]
    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()> {
        let insert = UserInsert::new(user, password_hash);

        sqlx::query(
            r"
            INSERT INTO users (id, tag, email, username, password_hash, avatar, about_me, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ",
        )
        .bind(insert.id)
        .bind(insert.tag)
        .bind(insert.email)
        .bind(insert.username)
        .bind(insert.password_hash)
        .bind(insert.avatar)
        .bind(insert.about_me)
        .bind(user.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_user_unique_violation)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update_profile(&self, user: &User) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE users
            SET username = $2, avatar = $3, about_me = $4
            WHERE id = $1
            ",
        )
        .bind(user.id.into_inner())
        .bind(&user.username)
        .bind(&user.avatar)
        .bind(&user.about_me)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(tagchat_core::DomainError::UserNotFound);
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn get_password_hash(&self, id: Snowflake) -> RepoResult<Option<String>> {
        let result = sqlx::query_scalar::<_, String>(
            r"
            SELECT password_hash FROM users WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }
}
