use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::identity::IdentityRef;

/// User entity - the owner of content and the author of likes.
///
/// Accounts are provisioned elsewhere; Chirp only reads them to denormalize
/// the public profile into feed views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: IdentityRef,
    pub username: String,
    pub email: String,
    pub avatar: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with generated ID and timestamps.
    pub fn new(username: String, email: String, avatar: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            id: IdentityRef::generate(),
            username,
            email,
            avatar,
            created_at: now,
            updated_at: now,
        }
    }
}
