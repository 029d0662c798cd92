//! # Chirp Core
//!
//! The domain layer of Chirp: tweets, videos, likes and the feed built from them.
//! This crate contains business logic only; storage, media and authentication
//! are reached through the traits in [`ports`].

pub mod domain;
pub mod error;
pub mod identity;
pub mod ports;
pub mod service;

pub use error::{DomainError, RepoError};
pub use identity::{ContentId, IdentityRef};
pub use service::{ContentLifecycle, FeedAggregator};
