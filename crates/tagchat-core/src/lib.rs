//! # tagchat-core
//!
//! Domain layer containing entities, value objects, repository traits, and the
//! rate-limit capability. This crate has zero dependencies on infrastructure
//! (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    normalize_text, ChannelMessage, FriendRequest, Friendship, PrivateMessage, RequestStatus,
    User, MAX_MESSAGE_CHARS,
};
pub use error::DomainError;
pub use traits::{
    FriendRepository, MessageRepository, RateLimiter, RepoResult, UserRepository,
};
pub use value_objects::{Snowflake, SnowflakeGenerator, SnowflakeParseError, UserTag};
