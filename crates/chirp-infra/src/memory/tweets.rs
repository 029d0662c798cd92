use async_trait::async_trait;

use chirp_core::domain::Tweet;
use chirp_core::error::RepoError;
use chirp_core::ports::{BaseRepository, OwnedMutation, TweetRepository};
use chirp_core::{ContentId, IdentityRef};

use super::Table;

/// In-memory tweet store.
pub struct InMemoryTweetRepository {
    table: Table<Tweet>,
}

impl InMemoryTweetRepository {
    pub fn new() -> Self {
        Self {
            table: Table::new(),
        }
    }

    /// Number of stored tweets.
    pub async fn len(&self) -> usize {
        self.table.len().await
    }
}

impl Default for InMemoryTweetRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<Tweet, ContentId> for InMemoryTweetRepository {
    async fn find_by_id(&self, id: ContentId) -> Result<Option<Tweet>, RepoError> {
        Ok(self.table.get(id).await)
    }

    async fn insert(&self, tweet: Tweet) -> Result<Tweet, RepoError> {
        self.table.insert(tweet).await
    }
}

#[async_trait]
impl TweetRepository for InMemoryTweetRepository {
    async fn find_by_owner(&self, owner: IdentityRef) -> Result<Vec<Tweet>, RepoError> {
        Ok(self.table.select(|t| t.owner == owner).await)
    }

    async fn update_content(
        &self,
        id: ContentId,
        actor: IdentityRef,
        content: String,
    ) -> Result<OwnedMutation<Tweet>, RepoError> {
        Ok(self
            .table
            .mutate_owned(id, actor, |tweet| tweet.content = content)
            .await)
    }

    async fn delete_owned(
        &self,
        id: ContentId,
        actor: IdentityRef,
    ) -> Result<OwnedMutation<()>, RepoError> {
        Ok(self.table.remove_owned(id, actor).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chirp_core::domain::NewTweet;

    #[tokio::test]
    async fn test_guarded_update() {
        let repo = InMemoryTweetRepository::new();
        let owner = IdentityRef::generate();
        let intruder = IdentityRef::generate();
        let tweet = repo
            .insert(Tweet::new(owner, NewTweet::new("hello").unwrap()))
            .await
            .unwrap();

        let rejected = repo
            .update_content(tweet.id, intruder, "edited".into())
            .await
            .unwrap();
        assert!(matches!(rejected, OwnedMutation::Forbidden));
        assert_eq!(
            repo.find_by_id(tweet.id).await.unwrap().unwrap().content,
            "hello"
        );

        let applied = repo
            .update_content(tweet.id, owner, "edited".into())
            .await
            .unwrap();
        match applied {
            OwnedMutation::Applied(updated) => {
                assert_eq!(updated.content, "edited");
                assert_eq!(updated.owner, owner);
                assert!(updated.updated_at >= tweet.updated_at);
            }
            other => panic!("expected update to apply, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_delete_missing() {
        let repo = InMemoryTweetRepository::new();
        let outcome = repo
            .delete_owned(ContentId::generate(), IdentityRef::generate())
            .await
            .unwrap();
        assert!(matches!(outcome, OwnedMutation::NotFound));
    }

    #[tokio::test]
    async fn test_duplicate_id_rejected() {
        let repo = InMemoryTweetRepository::new();
        let tweet = Tweet::new(IdentityRef::generate(), NewTweet::new("once").unwrap());
        repo.insert(tweet.clone()).await.unwrap();

        assert!(matches!(
            repo.insert(tweet).await,
            Err(RepoError::Constraint(_))
        ));
        assert_eq!(repo.len().await, 1);
    }
}
