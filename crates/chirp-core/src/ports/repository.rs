use async_trait::async_trait;

use crate::domain::{ContentRef, Like, OwnerDetails, Tweet, User, Video, VideoPatch};
use crate::error::RepoError;
use crate::identity::{ContentId, IdentityRef};

/// Outcome of a mutation guarded by existence and ownership.
///
/// Stores evaluate the guard and apply the change in one step, so nothing can
/// slip in between the check and the write.
#[derive(Debug, Clone, PartialEq)]
pub enum OwnedMutation<T> {
    /// The item existed, the actor owned it, and the change was applied.
    Applied(T),
    /// No item with that id.
    NotFound,
    /// The item exists but belongs to someone else. Nothing was changed.
    Forbidden,
}

/// Generic repository trait defining the operations every store shares.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Insert a new entity. Fails on an id collision.
    async fn insert(&self, entity: T) -> Result<T, RepoError>;
}

/// User repository - read side of the identity provider.
#[async_trait]
pub trait UserRepository: BaseRepository<User, IdentityRef> {
    /// Public profile of a user, or `None` if the account is gone.
    async fn find_profile(&self, id: IdentityRef) -> Result<Option<OwnerDetails>, RepoError>;
}

/// Tweet repository.
#[async_trait]
pub trait TweetRepository: BaseRepository<Tweet, ContentId> {
    async fn find_by_owner(&self, owner: IdentityRef) -> Result<Vec<Tweet>, RepoError>;

    /// Replace the text of a tweet owned by `actor`.
    async fn update_content(
        &self,
        id: ContentId,
        actor: IdentityRef,
        content: String,
    ) -> Result<OwnedMutation<Tweet>, RepoError>;

    /// Remove a tweet owned by `actor`.
    async fn delete_owned(
        &self,
        id: ContentId,
        actor: IdentityRef,
    ) -> Result<OwnedMutation<()>, RepoError>;
}

/// Video repository.
#[async_trait]
pub trait VideoRepository: BaseRepository<Video, ContentId> {
    async fn find_by_owner(&self, owner: IdentityRef) -> Result<Vec<Video>, RepoError>;

    /// Videos whose title or description contains `keyword`, ignoring case.
    /// An empty keyword matches every video.
    async fn search(&self, keyword: &str) -> Result<Vec<Video>, RepoError>;

    /// Apply a description/thumbnail patch to a video owned by `actor`.
    async fn update_details(
        &self,
        id: ContentId,
        actor: IdentityRef,
        patch: VideoPatch,
    ) -> Result<OwnedMutation<Video>, RepoError>;

    /// Flip the publication flag of a video owned by `actor`.
    async fn toggle_published(
        &self,
        id: ContentId,
        actor: IdentityRef,
    ) -> Result<OwnedMutation<Video>, RepoError>;

    /// Remove a video owned by `actor`.
    async fn delete_owned(
        &self,
        id: ContentId,
        actor: IdentityRef,
    ) -> Result<OwnedMutation<()>, RepoError>;
}

/// Like repository. Rows are counted raw; uniqueness is the caller's business.
#[async_trait]
pub trait LikeRepository: Send + Sync {
    async fn insert(&self, like: Like) -> Result<Like, RepoError>;

    /// The like `liked_by` left on `target`, if any.
    async fn find(
        &self,
        liked_by: IdentityRef,
        target: ContentRef,
    ) -> Result<Option<Like>, RepoError>;

    /// Every like targeting any of `targets`.
    async fn find_by_targets(&self, targets: &[ContentRef]) -> Result<Vec<Like>, RepoError>;
}
