//! Application state - shared across all handlers.

use std::sync::Arc;

use chirp_core::ports::{
    LikeRepository, MediaStore, TweetRepository, UserRepository, VideoRepository,
};
use chirp_core::{ContentLifecycle, FeedAggregator};
use chirp_infra::{
    InMemoryLikeRepository, InMemoryMediaStore, InMemoryTweetRepository, InMemoryUserRepository,
    InMemoryVideoRepository,
};

#[cfg(feature = "postgres")]
use chirp_infra::{
    DatabaseConnections, PostgresLikeRepository, PostgresTweetRepository, PostgresUserRepository,
    PostgresVideoRepository,
};

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub feed: Arc<FeedAggregator>,
    pub lifecycle: Arc<ContentLifecycle>,
    /// Which store backs the content: `postgres` or `memory`.
    pub storage: &'static str,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(config: &AppConfig) -> Self {
        let media: Arc<dyn MediaStore> = Arc::new(InMemoryMediaStore::new(config.media.clone()));

        #[cfg(feature = "postgres")]
        {
            if let Some(db_config) = &config.database {
                match DatabaseConnections::init(db_config).await {
                    Ok(connections) => {
                        let db = connections.main;
                        tracing::info!("Application state initialized (postgres)");
                        return Self::assemble(
                            Arc::new(PostgresTweetRepository::new(db.clone())),
                            Arc::new(PostgresVideoRepository::new(db.clone())),
                            Arc::new(PostgresLikeRepository::new(db.clone())),
                            Arc::new(PostgresUserRepository::new(db)),
                            media,
                            "postgres",
                        );
                    }
                    Err(e) => {
                        tracing::error!(
                            "Failed to connect to database: {}. Using in-memory fallback.",
                            e
                        );
                    }
                }
            } else {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
            }
        }

        tracing::info!("Application state initialized (memory)");
        Self::in_memory(media)
    }

    /// State over fresh in-memory stores.
    pub fn in_memory(media: Arc<dyn MediaStore>) -> Self {
        Self::assemble(
            Arc::new(InMemoryTweetRepository::new()),
            Arc::new(InMemoryVideoRepository::new()),
            Arc::new(InMemoryLikeRepository::new()),
            Arc::new(InMemoryUserRepository::new()),
            media,
            "memory",
        )
    }

    pub(crate) fn assemble(
        tweets: Arc<dyn TweetRepository>,
        videos: Arc<dyn VideoRepository>,
        likes: Arc<dyn LikeRepository>,
        users: Arc<dyn UserRepository>,
        media: Arc<dyn MediaStore>,
        storage: &'static str,
    ) -> Self {
        let feed = FeedAggregator::new(tweets.clone(), videos.clone(), likes.clone(), users);
        let lifecycle = ContentLifecycle::new(tweets, videos, likes, media);

        Self {
            feed: Arc::new(feed),
            lifecycle: Arc::new(lifecycle),
            storage,
        }
    }
}
