//! In-memory implementation of MessageRepository

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;

use tagchat_core::{ChannelMessage, MessageRepository, PrivateMessage, RepoResult, Snowflake};

#[derive(Default)]
struct Store {
    private: Vec<PrivateMessage>,
    channel: Vec<ChannelMessage>,
}

/// In-memory implementation of MessageRepository
#[derive(Clone, Default)]
pub struct MemoryMessageRepository {
    inner: Arc<RwLock<Store>>,
}

impl MemoryMessageRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MessageRepository for MemoryMessageRepository {
    async fn create_private(&self, message: &PrivateMessage) -> RepoResult<()> {
        self.inner.write().private.push(message.clone());
        Ok(())
    }

    async fn conversation(
        &self,
        a: Snowflake,
        b: Snowflake,
        limit: i64,
    ) -> RepoResult<Vec<PrivateMessage>> {
        let store = self.inner.read();
        let mut messages: Vec<PrivateMessage> = store
            .private
            .iter()
            .filter(|m| m.between(a, b))
            .cloned()
            .collect();
        messages.sort_by_key(|m| m.id);

        // Keep only the newest `limit`, preserving chronological order
        let len = messages.len();
        let keep = usize::try_from(limit).unwrap_or(0).min(len);
        Ok(messages.split_off(len - keep))
    }

    async fn latest_per_counterpart(&self, user_id: Snowflake) -> RepoResult<Vec<PrivateMessage>> {
        let store = self.inner.read();
        let mut latest: HashMap<Snowflake, PrivateMessage> = HashMap::new();
        for message in &store.private {
            if let Some(counterpart) = message.counterpart_of(user_id) {
                let entry = latest.entry(counterpart).or_insert_with(|| message.clone());
                if message.id > entry.id {
                    *entry = message.clone();
                }
            }
        }

        let mut messages: Vec<PrivateMessage> = latest.into_values().collect();
        messages.sort_by(|x, y| y.id.cmp(&x.id));
        Ok(messages)
    }

    async fn create_channel(&self, message: &ChannelMessage) -> RepoResult<()> {
        self.inner.write().channel.push(message.clone());
        Ok(())
    }

    async fn channel_messages(&self, channel: &str, limit: i64) -> RepoResult<Vec<ChannelMessage>> {
        let store = self.inner.read();
        let mut messages: Vec<ChannelMessage> = store
            .channel
            .iter()
            .filter(|m| m.channel == channel)
            .cloned()
            .collect();
        messages.sort_by_key(|m| m.id);

        let len = messages.len();
        let keep = usize::try_from(limit).unwrap_or(0).min(len);
        Ok(messages.split_off(len - keep))
    }
}
