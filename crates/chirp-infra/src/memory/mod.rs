//! In-memory stores - used when no database is configured, and in tests.
//!
//! Each table is a `Vec` behind an async `RwLock`, so rows come back in
//! insertion order. Guarded mutations run entirely under the write lock.
//! Note: Data is lost on process restart.

mod likes;
mod tweets;
mod users;
mod videos;

use chrono::Utc;
use tokio::sync::RwLock;

use chirp_core::domain::{Owned, Tweet, User, Video, is_owner};
use chirp_core::error::RepoError;
use chirp_core::ports::OwnedMutation;
use chirp_core::{ContentId, IdentityRef};

pub use likes::InMemoryLikeRepository;
pub use tweets::InMemoryTweetRepository;
pub use users::InMemoryUserRepository;
pub use videos::InMemoryVideoRepository;

/// A stored record with a primary key.
pub(crate) trait Row: Clone + Send + Sync {
    type Id: Copy + PartialEq + std::fmt::Display + Send + Sync;

    fn id(&self) -> Self::Id;

    /// Bump the modification timestamp.
    fn touch(&mut self);
}

impl Row for Tweet {
    type Id = ContentId;

    fn id(&self) -> ContentId {
        self.id
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl Row for Video {
    type Id = ContentId;

    fn id(&self) -> ContentId {
        self.id
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl Row for User {
    type Id = IdentityRef;

    fn id(&self) -> IdentityRef {
        self.id
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// Ordered table shared by the in-memory repositories.
pub(crate) struct Table<T> {
    rows: RwLock<Vec<T>>,
}

impl<T: Row> Table<T> {
    pub(crate) fn new() -> Self {
        Self {
            rows: RwLock::new(Vec::new()),
        }
    }

    pub(crate) async fn get(&self, id: T::Id) -> Option<T> {
        let rows = self.rows.read().await;
        rows.iter().find(|r| r.id() == id).cloned()
    }

    pub(crate) async fn insert(&self, row: T) -> Result<T, RepoError> {
        let mut rows = self.rows.write().await;
        if rows.iter().any(|r| r.id() == row.id()) {
            return Err(RepoError::Constraint(format!(
                "row {} already exists",
                row.id()
            )));
        }
        rows.push(row.clone());
        Ok(row)
    }

    pub(crate) async fn select(&self, predicate: impl Fn(&T) -> bool) -> Vec<T> {
        let rows = self.rows.read().await;
        rows.iter().filter(|r| predicate(r)).cloned().collect()
    }

    pub(crate) async fn len(&self) -> usize {
        self.rows.read().await.len()
    }
}

impl<T: Row + Owned> Table<T> {
    /// Apply `change` to the row if it exists and `actor` owns it.
    pub(crate) async fn mutate_owned(
        &self,
        id: T::Id,
        actor: IdentityRef,
        change: impl FnOnce(&mut T),
    ) -> OwnedMutation<T> {
        let mut rows = self.rows.write().await;
        let Some(row) = rows.iter_mut().find(|r| r.id() == id) else {
            return OwnedMutation::NotFound;
        };
        if !is_owner(&actor, &*row) {
            return OwnedMutation::Forbidden;
        }
        change(&mut *row);
        row.touch();
        OwnedMutation::Applied(row.clone())
    }

    /// Remove the row if it exists and `actor` owns it.
    pub(crate) async fn remove_owned(&self, id: T::Id, actor: IdentityRef) -> OwnedMutation<()> {
        let mut rows = self.rows.write().await;
        let Some(pos) = rows.iter().position(|r| r.id() == id) else {
            return OwnedMutation::NotFound;
        };
        if !is_owner(&actor, &rows[pos]) {
            return OwnedMutation::Forbidden;
        }
        rows.remove(pos);
        OwnedMutation::Applied(())
    }
}
