//! Message service
//!
//! Private messaging between friends and open channel messaging, with a
//! per-sender sliding-window rate limit on private sends.

use std::collections::HashMap;
use std::time::Duration;

use tracing::{info, instrument};

use tagchat_core::{
    normalize_text, ChannelMessage, DomainError, PrivateMessage, Snowflake, User, UserTag,
};

use crate::dto::mappers::{ChannelMessageWithSender, ConversationEntry, MessageWithSender};
use crate::dto::{
    ChannelMessageResponse, ConversationEntryResponse, PrivateMessageResponse,
    SendChannelMessageRequest, SendMessageResponse, SendPrivateMessageRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// How many messages a conversation page returns
pub const CONVERSATION_LIMIT: i64 = 50;

/// How many messages a channel history page returns
pub const CHANNEL_HISTORY_LIMIT: i64 = 50;

const MINUTE: Duration = Duration::from_secs(60);

/// Message service
pub struct MessageService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MessageService<'a> {
    /// Create a new MessageService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Send a private message to the friend owning the given tag
    ///
    /// Content is validated first, then the receiver is resolved and the
    /// friendship gate applied, and only then is the rate-limit budget
    /// consumed.
    #[instrument(skip(self, request), fields(tag = %request.receiver_tag))]
    pub async fn send_private(
        &self,
        sender_id: Snowflake,
        request: SendPrivateMessageRequest,
    ) -> ServiceResult<SendMessageResponse> {
        let text = normalize_text(&request.message)?;

        let tag = UserTag::parse(&request.receiver_tag)?;
        let receiver = self
            .ctx
            .user_repo()
            .find_by_tag(&tag)
            .await?
            .ok_or(DomainError::UserNotFound)?;

        if receiver.id == sender_id {
            return Err(DomainError::SelfMessage.into());
        }

        if !self
            .ctx
            .friend_repo()
            .are_friends(sender_id, receiver.id)
            .await?
        {
            return Err(DomainError::NotFriends.into());
        }

        self.consume_send_budget(sender_id).await?;

        let message = PrivateMessage::new(
            self.ctx.generate_id(),
            sender_id,
            receiver.id,
            text.to_string(),
        );
        self.ctx.message_repo().create_private(&message).await?;

        info!(
            message_id = %message.id,
            sender_id = %sender_id,
            receiver_id = %receiver.id,
            "Private message sent"
        );

        Ok(SendMessageResponse {
            id: message.id.to_string(),
            sent_at: message.sent_at,
        })
    }

    /// The last page of the conversation with the friend owning the given
    /// tag, oldest first
    #[instrument(skip(self))]
    pub async fn conversation(
        &self,
        user_id: Snowflake,
        counterpart_tag: &str,
    ) -> ServiceResult<Vec<PrivateMessageResponse>> {
        let tag = UserTag::parse(counterpart_tag)?;
        let counterpart = self
            .ctx
            .user_repo()
            .find_by_tag(&tag)
            .await?
            .ok_or(DomainError::UserNotFound)?;

        // Reading a conversation is gated the same way as writing to it
        if !self
            .ctx
            .friend_repo()
            .are_friends(user_id, counterpart.id)
            .await?
        {
            return Err(DomainError::NotFriends.into());
        }

        let user = self.load_user(user_id).await?;
        let messages = self
            .ctx
            .message_repo()
            .conversation(user_id, counterpart.id, CONVERSATION_LIMIT)
            .await?;

        Ok(messages
            .iter()
            .map(|message| {
                let sender = if message.sender_id == user_id {
                    &user
                } else {
                    &counterpart
                };
                PrivateMessageResponse::from(MessageWithSender { message, sender })
            })
            .collect())
    }

    /// The user's conversations, newest activity first
    #[instrument(skip(self))]
    pub async fn conversations(
        &self,
        user_id: Snowflake,
    ) -> ServiceResult<Vec<ConversationEntryResponse>> {
        let latest = self.ctx.message_repo().latest_per_counterpart(user_id).await?;

        let mut entries = Vec::with_capacity(latest.len());
        for message in &latest {
            let Some(counterpart_id) = message.counterpart_of(user_id) else {
                continue;
            };
            let counterpart = self.load_user(counterpart_id).await?;
            entries.push(ConversationEntryResponse::from(ConversationEntry {
                last_message: message,
                counterpart: &counterpart,
            }));
        }
        Ok(entries)
    }

    /// Post a message to a channel
    ///
    /// Channels are open: no membership exists, any authenticated user may
    /// post to and read any channel name.
    #[instrument(skip(self, request), fields(channel = %request.channel))]
    pub async fn send_channel(
        &self,
        sender_id: Snowflake,
        request: SendChannelMessageRequest,
    ) -> ServiceResult<SendMessageResponse> {
        let text = normalize_text(&request.message)?;
        let channel = request.channel.trim();
        if channel.is_empty() {
            return Err(ServiceError::validation("Channel name cannot be empty"));
        }

        let message = ChannelMessage::new(
            self.ctx.generate_id(),
            sender_id,
            channel.to_string(),
            text.to_string(),
        );
        self.ctx.message_repo().create_channel(&message).await?;

        info!(
            message_id = %message.id,
            sender_id = %sender_id,
            channel = %message.channel,
            "Channel message sent"
        );

        Ok(SendMessageResponse {
            id: message.id.to_string(),
            sent_at: message.sent_at,
        })
    }

    /// The last page of a channel's history, oldest first
    #[instrument(skip(self))]
    pub async fn channel_messages(
        &self,
        channel: &str,
    ) -> ServiceResult<Vec<ChannelMessageResponse>> {
        let messages = self
            .ctx
            .message_repo()
            .channel_messages(channel.trim(), CHANNEL_HISTORY_LIMIT)
            .await?;

        // Resolve each distinct sender once
        let mut senders: HashMap<Snowflake, User> = HashMap::new();
        for message in &messages {
            if !senders.contains_key(&message.sender_id) {
                let sender = self.load_user(message.sender_id).await?;
                senders.insert(message.sender_id, sender);
            }
        }

        Ok(messages
            .iter()
            .filter_map(|message| {
                senders.get(&message.sender_id).map(|sender| {
                    ChannelMessageResponse::from(ChannelMessageWithSender { message, sender })
                })
            })
            .collect())
    }

    /// Consume one unit of the sender's per-minute private-send budget
    ///
    /// Channel sends are not budgeted.
    async fn consume_send_budget(&self, sender_id: Snowflake) -> ServiceResult<()> {
        let key = format!("pm:{sender_id}");
        let allowed = self
            .ctx
            .rate_limiter()
            .consume(&key, MINUTE, self.ctx.rate_limits().messages_per_minute)
            .await?;
        if allowed {
            Ok(())
        } else {
            Err(DomainError::RateLimited.into())
        }
    }

    async fn load_user(&self, id: Snowflake) -> ServiceResult<User> {
        self.ctx
            .user_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::internal(format!("dangling user reference: {id}")))
    }
}
