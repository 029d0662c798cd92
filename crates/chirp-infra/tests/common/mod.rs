#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use chirp_core::domain::{NewTweet, NewVideo, Tweet, User, Video};
use chirp_core::error::RepoError;
use chirp_core::ports::{
    BaseRepository, MediaError, MediaStore, MediaUpload, OwnedMutation, StoredMedia,
    TweetRepository,
};
use chirp_core::{ContentId, ContentLifecycle, FeedAggregator, IdentityRef};
use chirp_infra::{
    InMemoryLikeRepository, InMemoryMediaStore, InMemoryTweetRepository, InMemoryUserRepository,
    InMemoryVideoRepository,
};

/// In-memory wiring of both services over shared stores.
pub struct Harness {
    pub tweets: Arc<InMemoryTweetRepository>,
    pub videos: Arc<InMemoryVideoRepository>,
    pub likes: Arc<InMemoryLikeRepository>,
    pub users: Arc<InMemoryUserRepository>,
    pub lifecycle: ContentLifecycle,
    pub feed: FeedAggregator,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_media(Arc::new(InMemoryMediaStore::default()))
    }

    pub fn with_media(media: Arc<dyn MediaStore>) -> Self {
        let tweets = Arc::new(InMemoryTweetRepository::new());
        let videos = Arc::new(InMemoryVideoRepository::new());
        let likes = Arc::new(InMemoryLikeRepository::new());
        let users = Arc::new(InMemoryUserRepository::new());

        let lifecycle = ContentLifecycle::new(
            tweets.clone(),
            videos.clone(),
            likes.clone(),
            media,
        );
        let feed = FeedAggregator::new(
            tweets.clone(),
            videos.clone(),
            likes.clone(),
            users.clone(),
        );

        Self {
            tweets,
            videos,
            likes,
            users,
            lifecycle,
            feed,
        }
    }

    pub async fn user(&self, username: &str) -> IdentityRef {
        let user = User::new(
            username.to_string(),
            format!("{username}@example.com"),
            Some(format!("https://cdn.example.com/{username}.png")),
        );
        self.users.insert(user).await.unwrap().id
    }

    pub async fn tweet(&self, owner: IdentityRef, content: &str) -> Tweet {
        let tweet = self
            .lifecycle
            .create_tweet(owner, NewTweet::new(content).unwrap())
            .await
            .unwrap();
        tick().await;
        tweet
    }

    pub async fn video(&self, owner: IdentityRef, title: &str, with_body: bool) -> Video {
        let input = NewVideo::new(
            Some(title.to_string()),
            None,
            Some(thumbnail()),
            with_body.then(clip),
        )
        .unwrap();
        let video = self.lifecycle.create_video(owner, input).await.unwrap();
        tick().await;
        video
    }
}

/// Keep creation timestamps strictly increasing.
pub async fn tick() {
    tokio::time::sleep(Duration::from_millis(2)).await;
}

pub fn thumbnail() -> MediaUpload {
    MediaUpload::new("thumb.png", "image/png", vec![137, 80, 78, 71])
}

pub fn clip() -> MediaUpload {
    MediaUpload::new("clip.mp4", "video/mp4", vec![0, 0, 0, 24]).with_duration(12.4)
}

/// A media store that always fails.
pub struct BrokenMediaStore;

#[async_trait]
impl MediaStore for BrokenMediaStore {
    async fn store(&self, _upload: &MediaUpload) -> Result<StoredMedia, MediaError> {
        Err(MediaError::Backend("storage offline".to_string()))
    }

    async fn discard(&self, _url: &str) -> Result<(), MediaError> {
        Err(MediaError::Backend("storage offline".to_string()))
    }
}

/// A media store that accepts uploads but hands back no URL.
pub struct UrlLessMediaStore;

#[async_trait]
impl MediaStore for UrlLessMediaStore {
    async fn store(&self, _upload: &MediaUpload) -> Result<StoredMedia, MediaError> {
        Ok(StoredMedia {
            url: String::new(),
            duration_seconds: None,
        })
    }

    async fn discard(&self, _url: &str) -> Result<(), MediaError> {
        Ok(())
    }
}

/// Stores images in memory but rejects every timed upload.
pub struct ImagesOnlyMediaStore(pub Arc<InMemoryMediaStore>);

#[async_trait]
impl MediaStore for ImagesOnlyMediaStore {
    async fn store(&self, upload: &MediaUpload) -> Result<StoredMedia, MediaError> {
        if upload.content_type.starts_with("image/") {
            self.0.store(upload).await
        } else {
            Err(MediaError::Rejected(format!("{} is not an image", upload.file_name)))
        }
    }

    async fn discard(&self, url: &str) -> Result<(), MediaError> {
        self.0.discard(url).await
    }
}

/// A tweet store whose reads work but whose writes always fail.
pub struct ReadOnlyTweetRepository(pub Arc<InMemoryTweetRepository>);

fn connection_lost() -> RepoError {
    RepoError::Connection("down".to_string())
}

#[async_trait]
impl BaseRepository<Tweet, ContentId> for ReadOnlyTweetRepository {
    async fn find_by_id(&self, id: ContentId) -> Result<Option<Tweet>, RepoError> {
        self.0.find_by_id(id).await
    }

    async fn insert(&self, _tweet: Tweet) -> Result<Tweet, RepoError> {
        Err(connection_lost())
    }
}

#[async_trait]
impl TweetRepository for ReadOnlyTweetRepository {
    async fn find_by_owner(&self, owner: IdentityRef) -> Result<Vec<Tweet>, RepoError> {
        self.0.find_by_owner(owner).await
    }

    async fn update_content(
        &self,
        _id: ContentId,
        _actor: IdentityRef,
        _content: String,
    ) -> Result<OwnedMutation<Tweet>, RepoError> {
        Err(connection_lost())
    }

    async fn delete_owned(
        &self,
        _id: ContentId,
        _actor: IdentityRef,
    ) -> Result<OwnedMutation<()>, RepoError> {
        Err(connection_lost())
    }
}
