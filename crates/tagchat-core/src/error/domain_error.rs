//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::Snowflake;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found")]
    UserNotFound,

    #[error("Friend request not found: {0}")]
    RequestNotFound(Snowflake),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Invalid user tag: {0:?} (expected a 6-digit number)")]
    InvalidTag(String),

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Password too weak: {0}")]
    WeakPassword(String),

    #[error("Message cannot be empty")]
    EmptyMessage,

    #[error("Message too long: max {max} characters")]
    MessageTooLong { max: usize },

    #[error("Validation error: {0}")]
    ValidationError(String),

    // =========================================================================
    // Business Rule Violations
    // =========================================================================
    #[error("Cannot send a friend request to yourself")]
    SelfRequest,

    #[error("Cannot send a message to yourself")]
    SelfMessage,

    #[error("Users are not friends")]
    NotFriends,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("A friend request already exists between these users")]
    DuplicateRequest,

    #[error("Users are already friends")]
    AlreadyFriends,

    #[error("Email already in use")]
    EmailAlreadyExists,

    #[error("User tag already in use")]
    DuplicateTag,

    // =========================================================================
    // Rate Limiting
    // =========================================================================
    #[error("Rate limit exceeded")]
    RateLimited,

    // =========================================================================
    // Allocation Errors
    // =========================================================================
    #[error("Could not allocate a unique tag after {attempts} attempts")]
    TagSpaceExhausted { attempts: u32 },

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound => "UNKNOWN_USER",
            Self::RequestNotFound(_) => "UNKNOWN_REQUEST",

            // Validation
            Self::InvalidTag(_) => "INVALID_TAG",
            Self::InvalidEmail => "INVALID_EMAIL",
            Self::WeakPassword(_) => "WEAK_PASSWORD",
            Self::EmptyMessage => "EMPTY_MESSAGE",
            Self::MessageTooLong { .. } => "MESSAGE_TOO_LONG",
            Self::ValidationError(_) => "VALIDATION_ERROR",

            // Business Rules
            Self::SelfRequest => "SELF_REQUEST",
            Self::SelfMessage => "SELF_MESSAGE",
            Self::NotFriends => "NOT_FRIENDS",

            // Conflict
            Self::DuplicateRequest => "DUPLICATE_REQUEST",
            Self::AlreadyFriends => "ALREADY_FRIENDS",
            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",
            Self::DuplicateTag => "DUPLICATE_TAG",

            // Rate limiting
            Self::RateLimited => "RATE_LIMITED",

            // Allocation
            Self::TagSpaceExhausted { .. } => "TAG_SPACE_EXHAUSTED",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::UserNotFound | Self::RequestNotFound(_))
    }

    /// Check if this is a validation or business-rule error (HTTP 400 class)
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidTag(_)
                | Self::InvalidEmail
                | Self::WeakPassword(_)
                | Self::EmptyMessage
                | Self::MessageTooLong { .. }
                | Self::ValidationError(_)
                | Self::SelfRequest
                | Self::SelfMessage
                | Self::NotFriends
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::DuplicateRequest
                | Self::AlreadyFriends
                | Self::EmailAlreadyExists
                | Self::DuplicateTag
        )
    }

    /// Check if this is a rate-limit error
    ///
    /// Kept distinct from validation so clients can back off instead of
    /// correcting input.
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Self::RateLimited)
    }
}
