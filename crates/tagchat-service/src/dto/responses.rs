//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.
//! Snowflake IDs are serialized as strings for JavaScript compatibility.

use chrono::{DateTime, Utc};
use serde::Serialize;

// ============================================================================
// Common Response Types
// ============================================================================

/// Generic API response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self { status: "ok" }
    }
}

// ============================================================================
// Auth Responses
// ============================================================================

/// Authentication response with an access token
///
/// Returned by both registration and login.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: ProfileResponse,
}

impl AuthResponse {
    pub fn new(access_token: String, expires_in: i64, user: ProfileResponse) -> Self {
        Self {
            access_token,
            token_type: "Bearer".to_string(),
            expires_in,
            user,
        }
    }
}

// ============================================================================
// User Responses
// ============================================================================

/// Current authenticated user response (includes email)
#[derive(Debug, Clone, Serialize)]
pub struct ProfileResponse {
    pub id: String,
    pub tag: String,
    pub email: String,
    pub username: String,
    pub avatar: String,
    pub about_me: String,
    pub created_at: DateTime<Utc>,
}

/// Public user response (for viewing other users)
///
/// Deliberately omits the email; the tag is the only public handle.
#[derive(Debug, Clone, Serialize)]
pub struct PublicUserResponse {
    pub id: String,
    pub tag: String,
    pub username: String,
    pub avatar: String,
}

// ============================================================================
// Friend Responses
// ============================================================================

/// A confirmed friend with the counterpart's public profile
#[derive(Debug, Serialize)]
pub struct FriendResponse {
    pub user: PublicUserResponse,
    pub since: DateTime<Utc>,
}

/// A pending friend request joined with the counterpart's public profile
///
/// For incoming requests `user` is the sender; for outgoing, the receiver.
#[derive(Debug, Serialize)]
pub struct FriendRequestResponse {
    pub id: String,
    pub user: PublicUserResponse,
    pub status: String,
    pub sent_at: DateTime<Utc>,
}

// ============================================================================
// Message Responses
// ============================================================================

/// Acknowledgement for a sent message
#[derive(Debug, Serialize)]
pub struct SendMessageResponse {
    pub id: String,
    pub sent_at: DateTime<Utc>,
}

/// A private message within a conversation
#[derive(Debug, Serialize)]
pub struct PrivateMessageResponse {
    pub id: String,
    pub sender: PublicUserResponse,
    pub text: String,
    pub sent_at: DateTime<Utc>,
}

/// A conversation summary: the counterpart and the newest message
#[derive(Debug, Serialize)]
pub struct ConversationEntryResponse {
    pub user: PublicUserResponse,
    pub last_message: String,
    pub last_message_at: DateTime<Utc>,
}

/// A message within a named channel
#[derive(Debug, Serialize)]
pub struct ChannelMessageResponse {
    pub id: String,
    pub channel: String,
    pub sender: PublicUserResponse,
    pub text: String,
    pub sent_at: DateTime<Utc>,
}
