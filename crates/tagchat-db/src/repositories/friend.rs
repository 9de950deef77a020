//! PostgreSQL implementation of FriendRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use tagchat_core::{
    DomainError, FriendRepository, FriendRequest, Friendship, RepoResult, RequestStatus, Snowflake,
};

use crate::models::{FriendRequestModel, FriendshipModel};

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of FriendRepository
#[derive(Clone)]
pub struct PgFriendRepository {
    pool: PgPool,
}

impl PgFriendRepository {
    /// Create a new PgFriendRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FriendRepository for PgFriendRepository {
    #[instrument(skip(self))]
    async fn find_request(&self, id: Snowflake) -> RepoResult<Option<FriendRequest>> {
        let result = sqlx::query_as::<_, FriendRequestModel>(
            r"
            SELECT id, sender_id, receiver_id, status, created_at
            FROM friend_requests
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(FriendRequest::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_request_between(
        &self,
        a: Snowflake,
        b: Snowflake,
    ) -> RepoResult<Option<FriendRequest>> {
        // Any direction, any status: rejected requests still block the pair
        let result = sqlx::query_as::<_, FriendRequestModel>(
            r"
            SELECT id, sender_id, receiver_id, status, created_at
            FROM friend_requests
            WHERE (sender_id = $1 AND receiver_id = $2)
               OR (sender_id = $2 AND receiver_id = $1)
            LIMIT 1
            ",
        )
        .bind(a.into_inner())
        .bind(b.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(FriendRequest::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn create_request(&self, request: &FriendRequest) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO friend_requests (id, sender_id, receiver_id, status, created_at)
            VALUES ($1, $2, $3, $4, $5)
            ",
        )
        .bind(request.id.into_inner())
        .bind(request.sender_id.into_inner())
        .bind(request.receiver_id.into_inner())
        .bind(request.status.as_str())
        .bind(request.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::DuplicateRequest))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn set_request_status(&self, id: Snowflake, status: RequestStatus) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE friend_requests
            SET status = $2
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .bind(status.as_str())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::RequestNotFound(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn pending_incoming(&self, user_id: Snowflake) -> RepoResult<Vec<FriendRequest>> {
        let results = sqlx::query_as::<_, FriendRequestModel>(
            r"
            SELECT id, sender_id, receiver_id, status, created_at
            FROM friend_requests
            WHERE receiver_id = $1 AND status = 'pending'
            ORDER BY id DESC
            ",
        )
        .bind(user_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        results.into_iter().map(FriendRequest::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn pending_outgoing(&self, user_id: Snowflake) -> RepoResult<Vec<FriendRequest>> {
        let results = sqlx::query_as::<_, FriendRequestModel>(
            r"
            SELECT id, sender_id, receiver_id, status, created_at
            FROM friend_requests
            WHERE sender_id = $1 AND status = 'pending'
            ORDER BY id DESC
            ",
        )
        .bind(user_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        results.into_iter().map(FriendRequest::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn create_friendship(&self, friendship: &Friendship) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO friendships (id, user_a, user_b, added_at)
            VALUES ($1, $2, $3, $4)
            ",
        )
        .bind(friendship.id.into_inner())
        .bind(friendship.user_a.into_inner())
        .bind(friendship.user_b.into_inner())
        .bind(friendship.added_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::AlreadyFriends))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn are_friends(&self, a: Snowflake, b: Snowflake) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(
                SELECT 1 FROM friendships
                WHERE (user_a = $1 AND user_b = $2)
                   OR (user_a = $2 AND user_b = $1)
            )
            ",
        )
        .bind(a.into_inner())
        .bind(b.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self))]
    async fn friendships_of(&self, user_id: Snowflake) -> RepoResult<Vec<Friendship>> {
        let results = sqlx::query_as::<_, FriendshipModel>(
            r"
            SELECT id, user_a, user_b, added_at
            FROM friendships
            WHERE user_a = $1 OR user_b = $1
            ORDER BY id DESC
            ",
        )
        .bind(user_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Friendship::from).collect())
    }
}
