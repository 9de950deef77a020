//! Friend request and friendship entities

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::Snowflake;

/// Lifecycle of a friend request
///
/// `Pending` transitions once, to either `Accepted` or `Rejected`; both are
/// terminal. There is no path back to `Pending` and no re-request between a
/// pair once a request exists in any state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    Pending,
    Accepted,
    Rejected,
}

impl RequestStatus {
    /// Database/string representation
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
        }
    }

    /// Parse from the database representation
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(Self::Pending),
            "accepted" => Some(Self::Accepted),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }

    #[inline]
    pub fn is_pending(self) -> bool {
        matches!(self, Self::Pending)
    }
}

/// Directional proposal to form a friendship
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FriendRequest {
    pub id: Snowflake,
    pub sender_id: Snowflake,
    pub receiver_id: Snowflake,
    pub status: RequestStatus,
    pub created_at: DateTime<Utc>,
}

impl FriendRequest {
    /// Create a new pending request
    pub fn new(id: Snowflake, sender_id: Snowflake, receiver_id: Snowflake) -> Self {
        Self {
            id,
            sender_id,
            receiver_id,
            status: RequestStatus::Pending,
            created_at: Utc::now(),
        }
    }

    /// Check whether this request relates the given unordered pair
    pub fn relates(&self, a: Snowflake, b: Snowflake) -> bool {
        (self.sender_id == a && self.receiver_id == b)
            || (self.sender_id == b && self.receiver_id == a)
    }
}

/// Confirmed, symmetric relation between two users
///
/// The relation is undirected: `(user_a, user_b)` and `(user_b, user_a)` name
/// the same friendship, and lookups must check both orderings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Friendship {
    pub id: Snowflake,
    pub user_a: Snowflake,
    pub user_b: Snowflake,
    pub added_at: DateTime<Utc>,
}

impl Friendship {
    /// Create a new friendship record
    pub fn new(id: Snowflake, user_a: Snowflake, user_b: Snowflake) -> Self {
        Self {
            id,
            user_a,
            user_b,
            added_at: Utc::now(),
        }
    }

    /// Check whether this friendship relates the given unordered pair
    pub fn relates(&self, a: Snowflake, b: Snowflake) -> bool {
        (self.user_a == a && self.user_b == b) || (self.user_a == b && self.user_b == a)
    }

    /// Given one participant, return the other
    ///
    /// Returns `None` if `user_id` is not part of this friendship.
    pub fn counterpart_of(&self, user_id: Snowflake) -> Option<Snowflake> {
        if self.user_a == user_id {
            Some(self.user_b)
        } else if self.user_b == user_id {
            Some(self.user_a)
        } else {
            None
        }
    }
}
