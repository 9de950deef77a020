//! Test fixtures and data generators
//!
//! Request builders and response shapes used by the API tests.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Registration request
#[derive(Debug, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
}

impl RegisterRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            email: format!("test{suffix}@example.com"),
            password: "TestPass123!".to_string(),
        }
    }
}

/// Login request
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn from_register(reg: &RegisterRequest) -> Self {
        Self {
            email: reg.email.clone(),
            password: reg.password.clone(),
        }
    }
}

/// Friend request body
#[derive(Debug, Serialize)]
pub struct SendFriendRequest {
    pub user_tag: String,
}

/// Private message body
#[derive(Debug, Serialize)]
pub struct SendPrivateMessage {
    pub receiver_tag: String,
    pub message: String,
}

/// Channel message body
#[derive(Debug, Serialize)]
pub struct SendChannelMessage {
    pub channel: String,
    pub message: String,
}

/// Profile update body
#[derive(Debug, Serialize, Default)]
pub struct UpdateProfile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub about_me: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// Auth response
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: Profile,
}

/// Full profile (owner view)
#[derive(Debug, Deserialize)]
pub struct Profile {
    pub id: String,
    pub tag: String,
    pub email: String,
    pub username: String,
    pub avatar: String,
    pub about_me: String,
    pub created_at: String,
}

/// Public profile (what other users see)
#[derive(Debug, Deserialize)]
pub struct PublicUser {
    pub id: String,
    pub tag: String,
    pub username: String,
    pub avatar: String,
}

/// Friend request response
#[derive(Debug, Deserialize)]
pub struct FriendRequestEntry {
    pub id: String,
    pub user: PublicUser,
    pub status: String,
    pub sent_at: String,
}

/// Friend list entry
#[derive(Debug, Deserialize)]
pub struct FriendEntry {
    pub user: PublicUser,
    pub since: String,
}

/// Send-message acknowledgement
#[derive(Debug, Deserialize)]
pub struct SentMessage {
    pub id: String,
    pub sent_at: String,
}

/// Private message in a conversation
#[derive(Debug, Deserialize)]
pub struct PrivateMessage {
    pub id: String,
    pub sender: PublicUser,
    pub text: String,
    pub sent_at: String,
}

/// Conversation list entry
#[derive(Debug, Deserialize)]
pub struct Conversation {
    pub user: PublicUser,
    pub last_message: String,
    pub last_message_at: String,
}

/// Channel message
#[derive(Debug, Deserialize)]
pub struct ChannelMessage {
    pub id: String,
    pub channel: String,
    pub sender: PublicUser,
    pub text: String,
    pub sent_at: String,
}
