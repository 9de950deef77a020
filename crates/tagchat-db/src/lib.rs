//! # tagchat-db
//!
//! Storage layer implementing the repository traits from `tagchat-core`.
//!
//! ## Overview
//!
//! Two interchangeable backings are provided:
//!
//! - PostgreSQL via SQLx (`Pg*Repository`), the production backing
//! - In-memory (`Memory*Repository`), for local runs and hermetic tests
//!
//! The crate also handles connection pool management, database models with
//! SQLx `FromRow` derives, and entity ↔ model mappers.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use tagchat_db::pool::{create_pool, DatabaseConfig};
//! use tagchat_db::repositories::PgUserRepository;
//! use tagchat_core::UserRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::from_env();
//!     let pool = create_pool(&config).await?;
//!     let user_repo = PgUserRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, create_pool_from_env, DatabaseConfig, PgPool};
pub use repositories::{
    MemoryFriendRepository, MemoryMessageRepository, MemoryUserRepository, PgFriendRepository,
    PgMessageRepository, PgUserRepository,
};
