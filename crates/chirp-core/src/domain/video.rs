use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::content::Owned;
use crate::identity::{ContentId, IdentityRef};

/// Video entity - a media post with its thumbnail.
///
/// `video_file` and `duration` are fixed at creation; only the description,
/// the thumbnail and the publication flag change afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub id: ContentId,
    pub owner: IdentityRef,
    pub title: String,
    pub description: String,
    pub video_file: Option<String>,
    pub thumbnail: String,
    /// Whole seconds, rounded up. `None` when no body media was uploaded.
    pub duration: Option<u32>,
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Video {
    /// Build a video from already-materialized media URLs.
    ///
    /// A video starts published only when both the body media and the
    /// thumbnail are present.
    pub fn new(
        owner: IdentityRef,
        title: String,
        description: String,
        thumbnail: String,
        video_file: Option<String>,
        duration: Option<u32>,
    ) -> Self {
        let now = Utc::now();
        let is_published = video_file.is_some() && !thumbnail.is_empty();
        Self {
            id: ContentId::generate(),
            owner,
            title,
            description,
            video_file,
            thumbnail,
            duration,
            is_published,
            created_at: now,
            updated_at: now,
        }
    }
}

impl Owned for Video {
    fn owner(&self) -> &IdentityRef {
        &self.owner
    }
}
