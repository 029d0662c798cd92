use async_trait::async_trait;

use chirp_core::IdentityRef;
use chirp_core::domain::{OwnerDetails, User};
use chirp_core::error::RepoError;
use chirp_core::ports::{BaseRepository, UserRepository};

use super::Table;

/// In-memory user directory.
pub struct InMemoryUserRepository {
    table: Table<User>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            table: Table::new(),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<User, IdentityRef> for InMemoryUserRepository {
    async fn find_by_id(&self, id: IdentityRef) -> Result<Option<User>, RepoError> {
        Ok(self.table.get(id).await)
    }

    async fn insert(&self, user: User) -> Result<User, RepoError> {
        self.table.insert(user).await
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_profile(&self, id: IdentityRef) -> Result<Option<OwnerDetails>, RepoError> {
        Ok(self.table.get(id).await.map(OwnerDetails::from))
    }
}
