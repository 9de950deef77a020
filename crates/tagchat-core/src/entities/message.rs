//! Message entities - private and channel messages

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Maximum message length after trimming, in characters
pub const MAX_MESSAGE_CHARS: usize = 1000;

/// Private message between two friends
///
/// Immutable once created; never edited or deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrivateMessage {
    pub id: Snowflake,
    pub sender_id: Snowflake,
    pub receiver_id: Snowflake,
    pub text: String,
    pub sent_at: DateTime<Utc>,
}

impl PrivateMessage {
    /// Create a new private message with a server-assigned timestamp
    pub fn new(id: Snowflake, sender_id: Snowflake, receiver_id: Snowflake, text: String) -> Self {
        Self {
            id,
            sender_id,
            receiver_id,
            text,
            sent_at: Utc::now(),
        }
    }

    /// Check whether this message belongs to the conversation between the pair
    pub fn between(&self, a: Snowflake, b: Snowflake) -> bool {
        (self.sender_id == a && self.receiver_id == b)
            || (self.sender_id == b && self.receiver_id == a)
    }

    /// Given one participant, return the other
    pub fn counterpart_of(&self, user_id: Snowflake) -> Option<Snowflake> {
        if self.sender_id == user_id {
            Some(self.receiver_id)
        } else if self.receiver_id == user_id {
            Some(self.sender_id)
        } else {
            None
        }
    }
}

/// Message posted to a named channel
///
/// Channels are unscoped: any authenticated user may post to or read any
/// channel name. Membership is not modeled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelMessage {
    pub id: Snowflake,
    pub sender_id: Snowflake,
    pub channel: String,
    pub text: String,
    pub sent_at: DateTime<Utc>,
}

impl ChannelMessage {
    /// Create a new channel message with a server-assigned timestamp
    pub fn new(id: Snowflake, sender_id: Snowflake, channel: String, text: String) -> Self {
        Self {
            id,
            sender_id,
            channel,
            text,
            sent_at: Utc::now(),
        }
    }
}

/// Validate and normalize message text: trim, reject empty, cap length
///
/// Returns the trimmed text on success.
pub fn normalize_text(text: &str) -> Result<&str, crate::error::DomainError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(crate::error::DomainError::EmptyMessage);
    }
    if trimmed.chars().count() > MAX_MESSAGE_CHARS {
        return Err(crate::error::DomainError::MessageTooLong {
            max: MAX_MESSAGE_CHARS,
        });
    }
    Ok(trimmed)
}
