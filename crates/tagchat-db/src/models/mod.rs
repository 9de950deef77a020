//! Database models - SQLx-compatible structs for PostgreSQL tables

mod friend;
mod message;
mod user;

pub use friend::{FriendRequestModel, FriendshipModel};
pub use message::{ChannelMessageModel, PrivateMessageModel};
pub use user::UserModel;
