//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod auth;
pub mod friends;
pub mod health;
pub mod messages;
pub mod users;
