//! In-memory repository implementations
//!
//! Same contract as the PostgreSQL backing, including unique-constraint
//! behavior on user tags and emails. Used for local development runs
//! (`STORAGE_BACKING=memory`) and hermetic tests.

mod friend;
mod message;
mod user;

pub use friend::MemoryFriendRepository;
pub use message::MemoryMessageRepository;
pub use user::MemoryUserRepository;
