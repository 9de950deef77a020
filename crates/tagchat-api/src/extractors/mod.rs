//! Axum extractors for request handling
//!
//! Custom extractors for authentication and body validation.

mod auth;
mod validated;

pub use auth::AuthUser;
pub use validated::ValidatedJson;
