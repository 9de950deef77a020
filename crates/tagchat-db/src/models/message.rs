//! Message database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the private_messages table
#[derive(Debug, Clone, FromRow)]
pub struct PrivateMessageModel {
    pub id: i64,
    pub sender_id: i64,
    pub receiver_id: i64,
    pub text: String,
    pub sent_at: DateTime<Utc>,
}

/// Database model for the channel_messages table
#[derive(Debug, Clone, FromRow)]
pub struct ChannelMessageModel {
    pub id: i64,
    pub sender_id: i64,
    pub channel: String,
    pub text: String,
    pub sent_at: DateTime<Utc>,
}
