//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Auth Requests
// ============================================================================

/// User registration request
///
/// Username and tag are server-assigned, so only credentials are accepted.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 6, max = 72, message = "Password must be 6-72 characters"))]
    pub password: String,
}

/// User login request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    pub password: String,
}

// ============================================================================
// User Requests
// ============================================================================

/// Update current user profile request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 2, max = 32, message = "Username must be 2-32 characters"))]
    pub username: Option<String>,

    #[validate(length(max = 1000, message = "About me must be at most 1000 characters"))]
    pub about_me: Option<String>,

    /// Avatar emoji or short identifier
    #[validate(length(max = 64, message = "Avatar must be at most 64 characters"))]
    pub avatar: Option<String>,
}

// ============================================================================
// Friend Requests
// ============================================================================

/// Send a friend request to the user owning the given tag
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SendFriendRequestRequest {
    #[validate(length(equal = 6, message = "Tag must be exactly 6 digits"))]
    pub user_tag: String,
}

// ============================================================================
// Message Requests
// ============================================================================

/// Send a private message to a friend, addressed by tag
///
/// Trimming and the character cap are enforced by the service so the same
/// rules apply no matter which surface the message enters through.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SendPrivateMessageRequest {
    #[validate(length(equal = 6, message = "Tag must be exactly 6 digits"))]
    pub receiver_tag: String,

    pub message: String,
}

/// Post a message to a named channel
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SendChannelMessageRequest {
    #[validate(length(min = 1, max = 100, message = "Channel name must be 1-100 characters"))]
    pub channel: String,

    pub message: String,
}
