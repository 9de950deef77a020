//! Domain traits (ports) implemented by the infrastructure layer

mod rate_limit;
mod repositories;

pub use rate_limit::RateLimiter;
pub use repositories::{
    FriendRepository, MessageRepository, RepoResult, UserRepository,
};
