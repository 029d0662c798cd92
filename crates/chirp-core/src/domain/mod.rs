//! Domain entities - the core business objects.

mod commands;
mod content;
mod feed;
mod like;
mod tweet;
mod user;
mod video;

pub use commands::{NewTweet, NewVideo, TweetChanges, VideoChanges, VideoPatch};
pub use content::{ContentItem, ContentKind, ContentRef, Owned, is_owner};
pub use feed::{Chronological, FeedBody, FeedScope, FeedView, OwnerDetails, VideoSummary};
pub use like::Like;
pub use tweet::Tweet;
pub use user::User;
pub use video::Video;
