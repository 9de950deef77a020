//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in
//! tagchat-core, plus an in-memory backing used for local runs and tests.

mod error;
mod friend;
pub mod memory;
mod message;
mod user;

pub use friend::PgFriendRepository;
pub use memory::{MemoryFriendRepository, MemoryMessageRepository, MemoryUserRepository};
pub use message::PgMessageRepository;
pub use user::PgUserRepository;
