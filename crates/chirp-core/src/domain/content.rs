//! The abstract content item and the ownership rule shared by every mutation.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Tweet, Video};
use crate::error::DomainError;
use crate::identity::{ContentId, IdentityRef};

/// Anything that has exactly one owner for its whole lifetime.
pub trait Owned {
    fn owner(&self) -> &IdentityRef;
}

/// The single authorization rule: only the owner may mutate an item.
pub fn is_owner(actor: &IdentityRef, item: &impl Owned) -> bool {
    item.owner() == actor
}

/// Which variant of content an item is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Tweet,
    Video,
}

impl ContentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::Tweet => "tweet",
            ContentKind::Video => "video",
        }
    }

    /// Entity name used in error messages.
    pub fn label(&self) -> &'static str {
        match self {
            ContentKind::Tweet => "Tweet",
            ContentKind::Video => "Video",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tweet" | "tweets" => Ok(ContentKind::Tweet),
            "video" | "videos" => Ok(ContentKind::Video),
            other => Err(DomainError::Validation(format!(
                "unknown content kind {other:?}"
            ))),
        }
    }
}

/// A typed pointer to one content item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentRef {
    pub kind: ContentKind,
    pub id: ContentId,
}

impl ContentRef {
    pub fn tweet(id: ContentId) -> Self {
        Self {
            kind: ContentKind::Tweet,
            id,
        }
    }

    pub fn video(id: ContentId) -> Self {
        Self {
            kind: ContentKind::Video,
            id,
        }
    }
}

/// A tweet or a video, read back from the content store.
#[derive(Debug, Clone)]
pub enum ContentItem {
    Tweet(Tweet),
    Video(Video),
}

impl ContentItem {
    pub fn content_ref(&self) -> ContentRef {
        match self {
            ContentItem::Tweet(t) => ContentRef::tweet(t.id),
            ContentItem::Video(v) => ContentRef::video(v.id),
        }
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        match self {
            ContentItem::Tweet(t) => t.created_at,
            ContentItem::Video(v) => v.created_at,
        }
    }
}

impl Owned for ContentItem {
    fn owner(&self) -> &IdentityRef {
        match self {
            ContentItem::Tweet(t) => &t.owner,
            ContentItem::Video(v) => &v.owner,
        }
    }
}

impl From<Tweet> for ContentItem {
    fn from(tweet: Tweet) -> Self {
        ContentItem::Tweet(tweet)
    }
}

impl From<Video> for ContentItem {
    fn from(video: Video) -> Self {
        ContentItem::Video(video)
    }
}
