//! Error handling utilities for repositories

use sqlx::Error as SqlxError;
use tagchat_core::DomainError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Check for unique violation and return appropriate error or fallback
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique();
        }
    }
    DomainError::DatabaseError(e.to_string())
}

/// Classify a unique violation on the users table by constraint name
///
/// The allocator pre-checks tags, so `users_tag_key` firing means two
/// registrations raced; surfacing `DuplicateTag` lets the allocator retry.
pub fn map_user_unique_violation(e: SqlxError) -> DomainError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return match db_err.constraint() {
                Some("users_tag_key") => DomainError::DuplicateTag,
                _ => DomainError::EmailAlreadyExists,
            };
        }
    }
    DomainError::DatabaseError(e.to_string())
}
