//! Feed aggregator - the read side.

use std::sync::Arc;

use crate::domain::{
    ContentItem, ContentKind, ContentRef, FeedScope, FeedView, Video, VideoSummary,
};
use crate::error::DomainError;
use crate::identity::{ContentId, IdentityRef};
use crate::ports::{LikeRepository, TweetRepository, UserRepository, VideoRepository};

use super::pipeline;

/// Joins owned content with owner profiles and like statistics.
///
/// Read-only: the aggregator never writes to any store, and nothing it
/// computes is cached.
#[derive(Clone)]
pub struct FeedAggregator {
    tweets: Arc<dyn TweetRepository>,
    videos: Arc<dyn VideoRepository>,
    likes: Arc<dyn LikeRepository>,
    users: Arc<dyn UserRepository>,
}

impl FeedAggregator {
    pub fn new(
        tweets: Arc<dyn TweetRepository>,
        videos: Arc<dyn VideoRepository>,
        likes: Arc<dyn LikeRepository>,
        users: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            tweets,
            videos,
            likes,
            users,
        }
    }

    /// Build the enriched feed of everything `owner` posted, newest first.
    ///
    /// `owner` is the raw reference from the caller and is validated here.
    /// An owner without content gets an empty feed.
    pub async fn build_feed(
        &self,
        owner: &str,
        requester: Option<IdentityRef>,
        scope: FeedScope,
    ) -> Result<Vec<FeedView>, DomainError> {
        let owner = IdentityRef::parse(owner)?;

        let items = self.owned_items(owner, scope).await?;
        if items.is_empty() {
            tracing::debug!(%owner, ?scope, "Owner has no content");
            return Ok(Vec::new());
        }

        let targets: Vec<ContentRef> = items.iter().map(ContentItem::content_ref).collect();
        let (owner_details, likes) = futures::try_join!(
            self.users.find_profile(owner),
            self.likes.find_by_targets(&targets),
        )?;

        tracing::debug!(
            %owner,
            items = items.len(),
            likes = likes.len(),
            "Assembling feed"
        );

        Ok(pipeline::assemble(
            items,
            owner_details,
            likes,
            requester.as_ref(),
        ))
    }

    /// Keyword search over video titles and descriptions, newest first.
    pub async fn search(&self, keyword: &str) -> Result<Vec<VideoSummary>, DomainError> {
        let found = self.videos.search(keyword).await?;
        tracing::debug!(keyword, hits = found.len(), "Video search");

        Ok(pipeline::newest_first(
            found.into_iter().map(VideoSummary::from).collect(),
        ))
    }

    /// Fetch a single video by id.
    pub async fn find_video(&self, video_id: &str) -> Result<Video, DomainError> {
        let id = ContentId::parse(video_id)?;
        self.videos
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(ContentKind::Video.label(), id))
    }

    async fn owned_items(
        &self,
        owner: IdentityRef,
        scope: FeedScope,
    ) -> Result<Vec<ContentItem>, DomainError> {
        let tweets = async {
            if scope.includes(ContentKind::Tweet) {
                self.tweets.find_by_owner(owner).await
            } else {
                Ok(Vec::new())
            }
        };
        let videos = async {
            if scope.includes(ContentKind::Video) {
                self.videos.find_by_owner(owner).await
            } else {
                Ok(Vec::new())
            }
        };
        let (tweets, videos) = futures::try_join!(tweets, videos)?;

        Ok(tweets
            .into_iter()
            .map(ContentItem::from)
            .chain(videos.into_iter().map(ContentItem::from))
            .collect())
    }
}
