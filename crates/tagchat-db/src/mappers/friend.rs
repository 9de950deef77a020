//! Friend request and friendship entity <-> model mappers

use tagchat_core::{DomainError, FriendRequest, Friendship, RequestStatus, Snowflake};

use crate::models::{FriendRequestModel, FriendshipModel};

impl TryFrom<FriendRequestModel> for FriendRequest {
    type Error = DomainError;

    fn try_from(model: FriendRequestModel) -> Result<Self, Self::Error> {
        let status = RequestStatus::parse(&model.status).ok_or_else(|| {
            DomainError::DatabaseError(format!("unknown request status: {}", model.status))
        })?;

        Ok(FriendRequest {
            id: Snowflake::new(model.id),
            sender_id: Snowflake::new(model.sender_id),
            receiver_id: Snowflake::new(model.receiver_id),
            status,
            created_at: model.created_at,
        })
    }
}

impl From<FriendshipModel> for Friendship {
    fn from(model: FriendshipModel) -> Self {
        Friendship {
            id: Snowflake::new(model.id),
            user_a: Snowflake::new(model.user_a),
            user_b: Snowflake::new(model.user_b),
            added_at: model.added_at,
        }
    }
}
