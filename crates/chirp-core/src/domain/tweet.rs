use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::commands::NewTweet;
use super::content::Owned;
use crate::identity::{ContentId, IdentityRef};

/// Tweet entity - a short text post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tweet {
    pub id: ContentId,
    pub owner: IdentityRef,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Tweet {
    /// Create a new tweet owned by `owner`.
    pub fn new(owner: IdentityRef, input: NewTweet) -> Self {
        let now = Utc::now();
        Self {
            id: ContentId::generate(),
            owner,
            content: input.content,
            created_at: now,
            updated_at: now,
        }
    }
}

impl Owned for Tweet {
    fn owner(&self) -> &IdentityRef {
        &self.owner
    }
}
