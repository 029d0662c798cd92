//! # Chirp Infrastructure
//!
//! Concrete implementations of the ports defined in `chirp-core`.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external dependencies, in-memory only
//! - `postgres` - PostgreSQL content, like and user stores via SeaORM
//! - `auth` - JWT bearer token validation

pub mod media;
pub mod memory;

#[cfg(feature = "postgres")]
pub mod database;

#[cfg(feature = "auth")]
pub mod auth;

// Re-exports - In-Memory
pub use media::{InMemoryMediaStore, MediaConfig};
pub use memory::{
    InMemoryLikeRepository, InMemoryTweetRepository, InMemoryUserRepository,
    InMemoryVideoRepository,
};

#[cfg(feature = "postgres")]
pub use database::{
    DatabaseConfig, DatabaseConnections, PostgresLikeRepository, PostgresTweetRepository,
    PostgresUserRepository, PostgresVideoRepository,
};

#[cfg(feature = "auth")]
pub use auth::{JwtConfig, JwtTokenService};
