//! Message entity <-> model mappers

use tagchat_core::{ChannelMessage, PrivateMessage, Snowflake};

use crate::models::{ChannelMessageModel, PrivateMessageModel};

impl From<PrivateMessageModel> for PrivateMessage {
    fn from(model: PrivateMessageModel) -> Self {
        PrivateMessage {
            id: Snowflake::new(model.id),
            sender_id: Snowflake::new(model.sender_id),
            receiver_id: Snowflake::new(model.receiver_id),
            text: model.text,
            sent_at: model.sent_at,
        }
    }
}

impl From<ChannelMessageModel> for ChannelMessage {
    fn from(model: ChannelMessageModel) -> Self {
        ChannelMessage {
            id: Snowflake::new(model.id),
            sender_id: Snowflake::new(model.sender_id),
            channel: model.channel,
            text: model.text,
            sent_at: model.sent_at,
        }
    }
}
