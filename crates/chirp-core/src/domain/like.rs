use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::content::ContentRef;
use crate::identity::{ContentId, IdentityRef};

/// Like association - links a liking identity to one content item.
///
/// The store does not enforce one like per `(liked_by, target)` pair; the
/// lifecycle service checks before inserting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Like {
    pub id: ContentId,
    pub liked_by: IdentityRef,
    pub target: ContentRef,
    pub created_at: DateTime<Utc>,
}

impl Like {
    pub fn new(liked_by: IdentityRef, target: ContentRef) -> Self {
        Self {
            id: ContentId::generate(),
            liked_by,
            target,
            created_at: Utc::now(),
        }
    }
}
