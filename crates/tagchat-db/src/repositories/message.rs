//! PostgreSQL implementation of MessageRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use tagchat_core::{ChannelMessage, MessageRepository, PrivateMessage, RepoResult, Snowflake};

use crate::models::{ChannelMessageModel, PrivateMessageModel};

use super::error::map_db_error;

/// PostgreSQL implementation of MessageRepository
#[derive(Clone)]
pub struct PgMessageRepository {
    pool: PgPool,
}

impl PgMessageRepository {
    /// Create a new PgMessageRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MessageRepository for PgMessageRepository {
    #[instrument(skip(self, message))]
    async fn create_private(&self, message: &PrivateMessage) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO private_messages (id, sender_id, receiver_id, text, sent_at)
            VALUES ($1, $2, $3, $4, $5)
            ",
        )
        .bind(message.id.into_inner())
        .bind(message.sender_id.into_inner())
        .bind(message.receiver_id.into_inner())
        .bind(&message.text)
        .bind(message.sent_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn conversation(
        &self,
        a: Snowflake,
        b: Snowflake,
        limit: i64,
    ) -> RepoResult<Vec<PrivateMessage>> {
        // Grab the newest `limit` rows, then flip to chronological order
        let results = sqlx::query_as::<_, PrivateMessageModel>(
            r"
            SELECT id, sender_id, receiver_id, text, sent_at
            FROM (
                SELECT id, sender_id, receiver_id, text, sent_at
                FROM private_messages
                WHERE (sender_id = $1 AND receiver_id = $2)
                   OR (sender_id = $2 AND receiver_id = $1)
                ORDER BY id DESC
                LIMIT $3
            ) AS latest
            ORDER BY id ASC
            ",
        )
        .bind(a.into_inner())
        .bind(b.into_inner())
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(PrivateMessage::from).collect())
    }

    #[instrument(skip(self))]
    async fn latest_per_counterpart(&self, user_id: Snowflake) -> RepoResult<Vec<PrivateMessage>> {
        // One row per counterpart: the newest message of each conversation,
        // ordered by recency across conversations
        let results = sqlx::query_as::<_, PrivateMessageModel>(
            r"
            SELECT DISTINCT ON (counterpart) id, sender_id, receiver_id, text, sent_at
            FROM (
                SELECT id, sender_id, receiver_id, text, sent_at,
                       CASE WHEN sender_id = $1 THEN receiver_id ELSE sender_id END AS counterpart
                FROM private_messages
                WHERE sender_id = $1 OR receiver_id = $1
            ) AS touching
            ORDER BY counterpart, id DESC
            ",
        )
        .bind(user_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        let mut messages: Vec<PrivateMessage> =
            results.into_iter().map(PrivateMessage::from).collect();
        messages.sort_by(|x, y| y.id.cmp(&x.id));
        Ok(messages)
    }

    #[instrument(skip(self, message))]
    async fn create_channel(&self, message: &ChannelMessage) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO channel_messages (id, sender_id, channel, text, sent_at)
            VALUES ($1, $2, $3, $4, $5)
            ",
        )
        .bind(message.id.into_inner())
        .bind(message.sender_id.into_inner())
        .bind(&message.channel)
        .bind(&message.text)
        .bind(message.sent_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn channel_messages(&self, channel: &str, limit: i64) -> RepoResult<Vec<ChannelMessage>> {
        let results = sqlx::query_as::<_, ChannelMessageModel>(
            r"
            SELECT id, sender_id, channel, text, sent_at
            FROM (
                SELECT id, sender_id, channel, text, sent_at
                FROM channel_messages
                WHERE channel = $1
                ORDER BY id DESC
                LIMIT $2
            ) AS latest
            ORDER BY id ASC
            ",
        )
        .bind(channel)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(ChannelMessage::from).collect())
    }
}
