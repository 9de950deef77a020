//! Mappers for converting domain entities to response DTOs

use tagchat_core::{ChannelMessage, FriendRequest, Friendship, PrivateMessage, User};

use super::responses::{
    ChannelMessageResponse, ConversationEntryResponse, FriendRequestResponse, FriendResponse,
    PrivateMessageResponse, ProfileResponse, PublicUserResponse,
};

impl From<&User> for ProfileResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            tag: user.tag.to_string(),
            email: user.email.clone(),
            username: user.username.clone(),
            avatar: user.avatar_or_default().to_string(),
            about_me: user.about_me.clone(),
            created_at: user.created_at,
        }
    }
}

impl From<&User> for PublicUserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            tag: user.tag.to_string(),
            username: user.username.clone(),
            avatar: user.avatar_or_default().to_string(),
        }
    }
}

/// A friend request paired with the counterpart's profile
pub struct RequestWithUser<'a> {
    pub request: &'a FriendRequest,
    pub user: &'a User,
}

impl From<RequestWithUser<'_>> for FriendRequestResponse {
    fn from(value: RequestWithUser<'_>) -> Self {
        Self {
            id: value.request.id.to_string(),
            user: PublicUserResponse::from(value.user),
            status: value.request.status.as_str().to_string(),
            sent_at: value.request.created_at,
        }
    }
}

/// A friendship paired with the counterpart's profile
pub struct FriendshipWithUser<'a> {
    pub friendship: &'a Friendship,
    pub user: &'a User,
}

impl From<FriendshipWithUser<'_>> for FriendResponse {
    fn from(value: FriendshipWithUser<'_>) -> Self {
        Self {
            user: PublicUserResponse::from(value.user),
            since: value.friendship.added_at,
        }
    }
}

/// A private message paired with its sender's profile
pub struct MessageWithSender<'a> {
    pub message: &'a PrivateMessage,
    pub sender: &'a User,
}

impl From<MessageWithSender<'_>> for PrivateMessageResponse {
    fn from(value: MessageWithSender<'_>) -> Self {
        Self {
            id: value.message.id.to_string(),
            sender: PublicUserResponse::from(value.sender),
            text: value.message.text.clone(),
            sent_at: value.message.sent_at,
        }
    }
}

/// A conversation's newest message paired with the counterpart's profile
pub struct ConversationEntry<'a> {
    pub last_message: &'a PrivateMessage,
    pub counterpart: &'a User,
}

impl From<ConversationEntry<'_>> for ConversationEntryResponse {
    fn from(value: ConversationEntry<'_>) -> Self {
        Self {
            user: PublicUserResponse::from(value.counterpart),
            last_message: value.last_message.text.clone(),
            last_message_at: value.last_message.sent_at,
        }
    }
}

/// A channel message paired with its sender's profile
pub struct ChannelMessageWithSender<'a> {
    pub message: &'a ChannelMessage,
    pub sender: &'a User,
}

impl From<ChannelMessageWithSender<'_>> for ChannelMessageResponse {
    fn from(value: ChannelMessageWithSender<'_>) -> Self {
        Self {
            id: value.message.id.to_string(),
            channel: value.message.channel.clone(),
            sender: PublicUserResponse::from(value.sender),
            text: value.message.text.clone(),
            sent_at: value.message.sent_at,
        }
    }
}
