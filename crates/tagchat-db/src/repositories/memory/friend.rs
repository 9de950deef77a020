//! In-memory implementation of FriendRepository

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;

use tagchat_core::{
    DomainError, FriendRepository, FriendRequest, Friendship, RepoResult, RequestStatus, Snowflake,
};

#[derive(Default)]
struct Store {
    requests: Vec<FriendRequest>,
    friendships: Vec<Friendship>,
}

/// In-memory implementation of FriendRepository
#[derive(Clone, Default)]
pub struct MemoryFriendRepository {
    inner: Arc<RwLock<Store>>,
}

impl MemoryFriendRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FriendRepository for MemoryFriendRepository {
    async fn find_request(&self, id: Snowflake) -> RepoResult<Option<FriendRequest>> {
        let store = self.inner.read();
        Ok(store.requests.iter().find(|r| r.id == id).cloned())
    }

    async fn find_request_between(
        &self,
        a: Snowflake,
        b: Snowflake,
    ) -> RepoResult<Option<FriendRequest>> {
        let store = self.inner.read();
        Ok(store.requests.iter().find(|r| r.relates(a, b)).cloned())
    }

    async fn create_request(&self, request: &FriendRequest) -> RepoResult<()> {
        let mut store = self.inner.write();
        if store
            .requests
            .iter()
            .any(|r| r.relates(request.sender_id, request.receiver_id))
        {
            return Err(DomainError::DuplicateRequest);
        }
        store.requests.push(request.clone());
        Ok(())
    }

    async fn set_request_status(&self, id: Snowflake, status: RequestStatus) -> RepoResult<()> {
        let mut store = self.inner.write();
        match store.requests.iter_mut().find(|r| r.id == id) {
            Some(request) => {
                request.status = status;
                Ok(())
            }
            None => Err(DomainError::RequestNotFound(id)),
        }
    }

    async fn pending_incoming(&self, user_id: Snowflake) -> RepoResult<Vec<FriendRequest>> {
        let store = self.inner.read();
        let mut requests: Vec<FriendRequest> = store
            .requests
            .iter()
            .filter(|r| r.receiver_id == user_id && r.status.is_pending())
            .cloned()
            .collect();
        requests.sort_by(|x, y| y.id.cmp(&x.id));
        Ok(requests)
    }

    async fn pending_outgoing(&self, user_id: Snowflake) -> RepoResult<Vec<FriendRequest>> {
        let store = self.inner.read();
        let mut requests: Vec<FriendRequest> = store
            .requests
            .iter()
            .filter(|r| r.sender_id == user_id && r.status.is_pending())
            .cloned()
            .collect();
        requests.sort_by(|x, y| y.id.cmp(&x.id));
        Ok(requests)
    }

    async fn create_friendship(&self, friendship: &Friendship) -> RepoResult<()> {
        let mut store = self.inner.write();
        if store
            .friendships
            .iter()
            .any(|f| f.relates(friendship.user_a, friendship.user_b))
        {
            return Err(DomainError::AlreadyFriends);
        }
        store.friendships.push(friendship.clone());
        Ok(())
    }

    async fn are_friends(&self, a: Snowflake, b: Snowflake) -> RepoResult<bool> {
        let store = self.inner.read();
        Ok(store.friendships.iter().any(|f| f.relates(a, b)))
    }

    async fn friendships_of(&self, user_id: Snowflake) -> RepoResult<Vec<Friendship>> {
        let store = self.inner.read();
        let mut friendships: Vec<Friendship> = store
            .friendships
            .iter()
            .filter(|f| f.counterpart_of(user_id).is_some())
            .cloned()
            .collect();
        friendships.sort_by(|x, y| y.id.cmp(&x.id));
        Ok(friendships)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(a: i64, b: i64) -> (Snowflake, Snowflake) {
        (Snowflake::new(a), Snowflake::new(b))
    }

    #[tokio::test]
    async fn test_request_blocks_reverse_direction() {
        let repo = MemoryFriendRepository::new();
        let (alice, bob) = ids(10, 20);
        repo.create_request(&FriendRequest::new(Snowflake::new(1), alice, bob))
            .await
            .unwrap();

        // Bob sending back to Alice hits the same pair
        let result = repo
            .create_request(&FriendRequest::new(Snowflake::new(2), bob, alice))
            .await;
        assert!(matches!(result, Err(DomainError::DuplicateRequest)));
    }

    #[tokio::test]
    async fn test_rejected_request_still_found_between() {
        let repo = MemoryFriendRepository::new();
        let (alice, bob) = ids(10, 20);
        let request = FriendRequest::new(Snowflake::new(1), alice, bob);
        repo.create_request(&request).await.unwrap();
        repo.set_request_status(request.id, RequestStatus::Rejected)
            .await
            .unwrap();

        let found = repo.find_request_between(bob, alice).await.unwrap().unwrap();
        assert_eq!(found.status, RequestStatus::Rejected);
    }

    #[tokio::test]
    async fn test_pending_lists_filter_by_status() {
        let repo = MemoryFriendRepository::new();
        let (alice, bob) = ids(10, 20);
        let carol = Snowflake::new(30);

        let accepted = FriendRequest::new(Snowflake::new(1), alice, bob);
        repo.create_request(&accepted).await.unwrap();
        repo.set_request_status(accepted.id, RequestStatus::Accepted)
            .await
            .unwrap();
        repo.create_request(&FriendRequest::new(Snowflake::new(2), carol, bob))
            .await
            .unwrap();

        let incoming = repo.pending_incoming(bob).await.unwrap();
        assert_eq!(incoming.len(), 1);
        assert_eq!(incoming[0].sender_id, carol);

        assert!(repo.pending_outgoing(alice).await.unwrap().is_empty());
        assert_eq!(repo.pending_outgoing(carol).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_friendship_is_symmetric() {
        let repo = MemoryFriendRepository::new();
        let (alice, bob) = ids(10, 20);
        repo.create_friendship(&Friendship::new(Snowflake::new(1), alice, bob))
            .await
            .unwrap();

        assert!(repo.are_friends(alice, bob).await.unwrap());
        assert!(repo.are_friends(bob, alice).await.unwrap());
        assert!(!repo.are_friends(alice, Snowflake::new(30)).await.unwrap());

        // Inserting the reversed pair is the same friendship
        let result = repo
            .create_friendship(&Friendship::new(Snowflake::new(2), bob, alice))
            .await;
        assert!(matches!(result, Err(DomainError::AlreadyFriends)));
    }

    #[tokio::test]
    async fn test_set_status_missing_request() {
        let repo = MemoryFriendRepository::new();
        let result = repo
            .set_request_status(Snowflake::new(99), RequestStatus::Accepted)
            .await;
        assert!(matches!(result, Err(DomainError::RequestNotFound(_))));
    }
}
