//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod auth;
mod media;
mod repository;

pub use auth::{AuthError, TokenClaims, TokenService};
pub use media::{MediaError, MediaStore, MediaUpload, StoredMedia};
pub use repository::{
    BaseRepository, LikeRepository, OwnedMutation, TweetRepository, UserRepository,
    VideoRepository,
};
