//! PostgreSQL persistence via SeaORM.

mod connections;
pub mod entity;
mod postgres_base;
pub mod postgres_repo;

pub use connections::{DatabaseConfig, DatabaseConnections};
pub use postgres_base::PostgresBaseRepository;
pub use postgres_repo::{
    PostgresLikeRepository, PostgresTweetRepository, PostgresUserRepository,
    PostgresVideoRepository,
};

#[cfg(test)]
mod tests;
