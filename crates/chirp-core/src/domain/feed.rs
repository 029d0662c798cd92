//! Read models produced by the feed aggregator. Never persisted.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ContentKind, User, Video};
use crate::error::DomainError;
use crate::identity::{ContentId, IdentityRef};

/// The public slice of an owner's profile embedded in every feed view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerDetails {
    pub username: String,
    pub avatar: Option<String>,
}

impl From<User> for OwnerDetails {
    fn from(user: User) -> Self {
        Self {
            username: user.username,
            avatar: user.avatar,
        }
    }
}

/// Variant-specific projected fields of a feed view.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum FeedBody {
    Tweet {
        content: String,
    },
    Video {
        title: String,
        description: String,
    },
}

/// One denormalized entry of an owner's feed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedView {
    pub id: ContentId,
    #[serde(flatten)]
    pub body: FeedBody,
    pub owner_details: Option<OwnerDetails>,
    pub likes_count: u64,
    pub is_liked: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Result row of a keyword search. No likes, no owner profile.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoSummary {
    pub id: ContentId,
    pub owner: IdentityRef,
    pub title: String,
    pub description: String,
    pub video_file: Option<String>,
    pub thumbnail: String,
    pub duration: Option<u32>,
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Video> for VideoSummary {
    fn from(video: Video) -> Self {
        Self {
            id: video.id,
            owner: video.owner,
            title: video.title,
            description: video.description,
            video_file: video.video_file,
            thumbnail: video.thumbnail,
            duration: video.duration,
            is_published: video.is_published,
            created_at: video.created_at,
        }
    }
}

/// Which content variants an owner feed reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedScope {
    #[default]
    All,
    Tweets,
    Videos,
}

impl FeedScope {
    pub fn includes(&self, kind: ContentKind) -> bool {
        match self {
            FeedScope::All => true,
            FeedScope::Tweets => kind == ContentKind::Tweet,
            FeedScope::Videos => kind == ContentKind::Video,
        }
    }
}

impl FromStr for FeedScope {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | "all" => Ok(FeedScope::All),
            "tweets" => Ok(FeedScope::Tweets),
            "videos" => Ok(FeedScope::Videos),
            other => Err(DomainError::Validation(format!(
                "scope must be all, tweets or videos, got {other:?}"
            ))),
        }
    }
}

/// Anything ordered by its creation time.
pub trait Chronological {
    fn created_at(&self) -> DateTime<Utc>;
}

impl Chronological for FeedView {
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Chronological for VideoSummary {
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
