//! Services - the feed aggregator and the content lifecycle controller.
//!
//! Both hold their collaborators as trait objects and are cheap to share
//! behind an `Arc`.

mod feed;
mod lifecycle;
pub mod pipeline;

pub use feed::FeedAggregator;
pub use lifecycle::ContentLifecycle;
