//! Domain entities - core business objects

mod friend;
mod message;
mod user;

pub use friend::{FriendRequest, Friendship, RequestStatus};
pub use message::{normalize_text, ChannelMessage, PrivateMessage, MAX_MESSAGE_CHARS};
pub use user::{User, DEFAULT_AVATAR};
