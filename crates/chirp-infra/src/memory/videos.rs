use async_trait::async_trait;

use chirp_core::domain::{Video, VideoPatch};
use chirp_core::error::RepoError;
use chirp_core::ports::{BaseRepository, OwnedMutation, VideoRepository};
use chirp_core::{ContentId, IdentityRef};

use super::Table;

/// In-memory video store.
pub struct InMemoryVideoRepository {
    table: Table<Video>,
}

impl InMemoryVideoRepository {
    pub fn new() -> Self {
        Self {
            table: Table::new(),
        }
    }

    /// Number of stored videos.
    pub async fn len(&self) -> usize {
        self.table.len().await
    }
}

impl Default for InMemoryVideoRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<Video, ContentId> for InMemoryVideoRepository {
    async fn find_by_id(&self, id: ContentId) -> Result<Option<Video>, RepoError> {
        Ok(self.table.get(id).await)
    }

    async fn insert(&self, video: Video) -> Result<Video, RepoError> {
        self.table.insert(video).await
    }
}

#[async_trait]
impl VideoRepository for InMemoryVideoRepository {
    async fn find_by_owner(&self, owner: IdentityRef) -> Result<Vec<Video>, RepoError> {
        Ok(self.table.select(|v| v.owner == owner).await)
    }

    async fn search(&self, keyword: &str) -> Result<Vec<Video>, RepoError> {
        let needle = keyword.to_lowercase();
        Ok(self
            .table
            .select(|v| {
                v.title.to_lowercase().contains(&needle)
                    || v.description.to_lowercase().contains(&needle)
            })
            .await)
    }

    async fn update_details(
        &self,
        id: ContentId,
        actor: IdentityRef,
        patch: VideoPatch,
    ) -> Result<OwnedMutation<Video>, RepoError> {
        Ok(self
            .table
            .mutate_owned(id, actor, |video| {
                if let Some(description) = patch.description {
                    video.description = description;
                }
                if let Some(thumbnail) = patch.thumbnail {
                    video.thumbnail = thumbnail;
                }
            })
            .await)
    }

    async fn toggle_published(
        &self,
        id: ContentId,
        actor: IdentityRef,
    ) -> Result<OwnedMutation<Video>, RepoError> {
        Ok(self
            .table
            .mutate_owned(id, actor, |video| video.is_published = !video.is_published)
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
