//! Content lifecycle controller - the write side.
//!
//! Every mutation of an existing item is an owner-guarded store call
//! ([`OwnedMutation`]); the controller only translates its outcome.

use std::sync::Arc;

use crate::domain::{
    ContentKind, ContentRef, Like, NewTweet, NewVideo, Tweet, TweetChanges, Video,
    VideoChanges, VideoPatch, is_owner,
};
use crate::error::DomainError;
use crate::identity::{ContentId, IdentityRef};
use crate::ports::{
    LikeRepository, MediaStore, MediaUpload, OwnedMutation, StoredMedia, TweetRepository,
    VideoRepository,
};

/// Creates, updates, deletes and publishes content on behalf of an actor.
#[derive(Clone)]
pub struct ContentLifecycle {
    tweets: Arc<dyn TweetRepository>,
    videos: Arc<dyn VideoRepository>,
    likes: Arc<dyn LikeRepository>,
    media: Arc<dyn MediaStore>,
}

fn settle<T>(
    outcome: OwnedMutation<T>,
    kind: ContentKind,
    id: ContentId,
    actor: IdentityRef,
) -> Result<T, DomainError> {
    match outcome {
        OwnedMutation::Applied(value) => Ok(value),
        OwnedMutation::NotFound => Err(DomainError::not_found(kind.label(), id)),
        OwnedMutation::Forbidden => {
            tracing::warn!(%actor, %id, kind = kind.as_str(), "Rejected mutation by non-owner");
            Err(DomainError::Forbidden(format!(
                "Only the owner can modify this {}",
                kind.as_str()
            )))
        }
    }
}

impl ContentLifecycle {
    pub fn new(
        tweets: Arc<dyn TweetRepository>,
        videos: Arc<dyn VideoRepository>,
        likes: Arc<dyn LikeRepository>,
        media: Arc<dyn MediaStore>,
    ) -> Self {
        Self {
            tweets,
            videos,
            likes,
            media,
        }
    }

    // ── Tweets ──

    pub async fn create_tweet(
        &self,
        owner: IdentityRef,
        input: NewTweet,
    ) -> Result<Tweet, DomainError> {
        let tweet = self.tweets.insert(Tweet::new(owner, input)).await?;
        tracing::info!(tweet_id = %tweet.id, %owner, "Tweet created");
        Ok(tweet)
    }

    pub async fn update_tweet(
        &self,
        actor: IdentityRef,
        tweet_id: &str,
        changes: TweetChanges,
    ) -> Result<Tweet, DomainError> {
        let id = ContentId::parse(tweet_id)?;
        let outcome = self
            .tweets
            .update_content(id, actor, changes.content)
            .await?;
        let tweet = settle(outcome, ContentKind::Tweet, id, actor)?;
        tracing::info!(tweet_id = %id, "Tweet updated");
        Ok(tweet)
    }

    pub async fn delete_tweet(&self, actor: IdentityRef, tweet_id: &str) -> Result<(), DomainError> {
        let id = ContentId::parse(tweet_id)?;
        let outcome = self.tweets.delete_owned(id, actor).await?;
        settle(outcome, ContentKind::Tweet, id, actor)?;
        tracing::info!(tweet_id = %id, "Tweet deleted");
        Ok(())
    }

    // ── Videos ──

    /// Upload the media, then persist the video.
    ///
    /// Nothing is written unless every supplied file produced a usable URL.
    pub async fn create_video(
        &self,
        owner: IdentityRef,
        input: NewVideo,
    ) -> Result<Video, DomainError> {
        let thumbnail = self.upload(&input.thumbnail);
        let body = async {
            match &input.video_file {
                Some(file) => self.upload(file).await.map(Some),
                None => Ok(None),
            }
        };
        let (thumbnail, body) = match futures::join!(thumbnail, body) {
            (Ok(thumbnail), Ok(body)) => (thumbnail, body),
            (Ok(stored), Err(e)) | (Err(e), Ok(Some(stored))) => {
                self.discard(&stored.url).await;
                return Err(e);
            }
            (Err(e), _) => return Err(e),
        };

        let duration = body.as_ref().and_then(StoredMedia::whole_seconds);
        let video = Video::new(
            owner,
            input.title,
            input.description,
            thumbnail.url,
            body.map(|b| b.url),
            duration,
        );

        let video = match self.videos.insert(video.clone()).await {
            Ok(video) => video,
            Err(e) => {
                self.discard_media_of(&video).await;
                return Err(e.into());
            }
        };
        tracing::info!(
            video_id = %video.id,
            %owner,
            published = video.is_published,
            "Video created"
        );
        Ok(video)
    }

    pub async fn update_video(
        &self,
        actor: IdentityRef,
        video_id: &str,
        changes: VideoChanges,
    ) -> Result<Video, DomainError> {
        let id = ContentId::parse(video_id)?;

        // Previous thumbnail URL and its uploaded replacement.
        let replaced = match &changes.thumbnail {
            Some(file) => {
                // Avoid uploading for a request that cannot succeed. The guarded
                // update below remains the authoritative check.
                let current = self.videos.find_by_id(id).await?;
                match current {
                    None => return settle(OwnedMutation::NotFound, ContentKind::Video, id, actor),
                    Some(video) if !is_owner(&actor, &video) => {
                        return settle(OwnedMutation::Forbidden, ContentKind::Video, id, actor);
                    }
                    Some(video) => Some((video.thumbnail, self.upload(file).await?.url)),
                }
            }
            None => None,
        };

        let patch = VideoPatch {
            description: changes.description,
            thumbnail: replaced.as_ref().map(|(_, new)| new.clone()),
        };
        let result = self
            .videos
            .update_details(id, actor, patch)
            .await
            .map_err(DomainError::from)
            .and_then(|outcome| settle(outcome, ContentKind::Video, id, actor));

        match (result, replaced) {
            (Ok(video), replaced) => {
                if let Some((previous, _)) = replaced {
                    self.discard(&previous).await;
                }
                tracing::info!(video_id = %id, "Video updated");
                Ok(video)
            }
            (Err(e), Some((_, uploaded))) => {
                self.discard(&uploaded).await;
                Err(e)
            }
            (Err(e), None) => Err(e),
        }
    }

    pub async fn delete_video(&self, actor: IdentityRef, video_id: &str) -> Result<(), DomainError> {
        let id = ContentId::parse(video_id)?;
        let outcome = self.videos.delete_owned(id, actor).await?;
        settle(outcome, ContentKind::Video, id, actor)?;
        tracing::info!(video_id = %id, "Video deleted");
        Ok(())
    }

    /// Flip between draft and published. Owner only.
    pub async fn toggle_publish(
        &self,
        actor: IdentityRef,
        video_id: &str,
    ) -> Result<Video, DomainError> {
        let id = ContentId::parse(video_id)?;
        let outcome = self.videos.toggle_published(id, actor).await?;
        let video = settle(outcome, ContentKind::Video, id, actor)?;
        tracing::info!(video_id = %id, published = video.is_published, "Publish status toggled");
        Ok(video)
    }

    // ── Likes ──

    /// Record that `actor` likes the target. Liking twice returns the first like.
    pub async fn like(
        &self,
        actor: IdentityRef,
        kind: ContentKind,
        target_id: &str,
    ) -> Result<Like, DomainError> {
        let id = ContentId::parse(target_id)?;
        let exists = match kind {
            ContentKind::Tweet => self.tweets.find_by_id(id).await?.is_some(),
            ContentKind::Video => self.videos.find_by_id(id).await?.is_some(),
        };
        if !exists {
            return Err(DomainError::not_found(kind.label(), id));
        }

        let target = ContentRef { kind, id };
        if let Some(existing) = self.likes.find(actor, target).await? {
            tracing::debug!(%actor, %id, "Already liked");
            return Ok(existing);
        }

        let like = self.likes.insert(Like::new(actor, target)).await?;
        tracing::info!(%actor, target_id = %id, kind = kind.as_str(), "Content liked");
        Ok(like)
    }

    async fn upload(&self, upload: &MediaUpload) -> Result<StoredMedia, DomainError> {
        let stored = self.media.store(upload).await.map_err(|e| {
            tracing::error!(file = %upload.file_name, error = %e, "Media upload failed");
            DomainError::from(e)
        })?;
        if stored.url.trim().is_empty() {
            return Err(DomainError::MediaUpload(format!(
                "media store returned no URL for {}",
                upload.file_name
            )));
        }
        Ok(stored)
    }

    async fn discard_media_of(&self, video: &Video) {
        self.discard(&video.thumbnail).await;
        if let Some(url) = &video.video_file {
            self.discard(url).await;
        }
    }

    /// Best effort: a leftover file is not worth failing the request over.
    async fn discard(&self, url: &str) {
        if let Err(e) = self.media.discard(url).await {
            tracing::warn!(%url, error = %e, "Failed to discard media");
        }
    }
}
