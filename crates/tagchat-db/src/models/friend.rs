//! Friend request and friendship database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the friend_requests table
///
/// `status` holds the string form of `RequestStatus` ("pending", "accepted",
/// "rejected").
#[derive(Debug, Clone, FromRow)]
pub struct FriendRequestModel {
    pub id: i64,
    pub sender_id: i64,
    pub receiver_id: i64,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Database model for the friendships table
///
/// Rows are stored in one direction only; queries match both orderings.
#[derive(Debug, Clone, FromRow)]
pub struct FriendshipModel {
    pub id: i64,
    pub user_a: i64,
    pub user_b: i64,
    pub added_at: DateTime<Utc>,
}
