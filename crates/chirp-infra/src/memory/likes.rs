use async_trait::async_trait;
use tokio::sync::RwLock;

use chirp_core::IdentityRef;
use chirp_core::domain::{ContentRef, Like};
use chirp_core::error::RepoError;
use chirp_core::ports::LikeRepository;

/// In-memory like store. Keeps every row it is given, duplicates included.
pub struct InMemoryLikeRepository {
    rows: RwLock<Vec<Like>>,
}

impl InMemoryLikeRepository {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(Vec::new()),
        }
    }
}

impl Default for InMemoryLikeRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LikeRepository for InMemoryLikeRepository {
    async fn insert(&self, like: Like) -> Result<Like, RepoError> {
        let mut rows = self.rows.write().await;
        rows.push(like.clone());
        Ok(like)
    }

    async fn find(
        &self,
        liked_by: IdentityRef,
        target: ContentRef,
    ) -> Result<Option<Like>, RepoError> {
        let rows = self.rows.read().await;
        Ok(rows
            .iter()
            .find(|l| l.liked_by == liked_by && l.target == target)
            .cloned())
    }

    async fn find_by_targets(&self, targets: &[ContentRef]) -> Result<Vec<Like>, RepoError> {
        let rows = self.rows.read().await;
        Ok(rows
            .iter()
            .filter(|l| targets.contains(&l.target))
            .cloned()
            .collect())
    }
}
