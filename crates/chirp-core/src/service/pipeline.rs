//! Named steps of the feed pipeline.
//!
//! Each step is a pure function over data already read from the stores, so
//! the fixed composition in [`assemble`] can be tested without any storage.

use std::collections::HashMap;

use crate::domain::{
    Chronological, ContentItem, ContentRef, FeedBody, FeedView, Like, OwnerDetails,
};
use crate::identity::IdentityRef;

/// Group like rows by the item they target, keeping every row.
pub fn index_likers(likes: Vec<Like>) -> HashMap<ContentRef, Vec<IdentityRef>> {
    let mut index: HashMap<ContentRef, Vec<IdentityRef>> = HashMap::new();
    for like in likes {
        index.entry(like.target).or_default().push(like.liked_by);
    }
    index
}

/// Cardinality of the liker set as stored.
pub fn like_count(likers: &[IdentityRef]) -> u64 {
    likers.len() as u64
}

/// Whether `requester` is among `likers`. An anonymous requester never is.
pub fn is_liked_by(likers: &[IdentityRef], requester: Option<&IdentityRef>) -> bool {
    requester.is_some_and(|r| likers.contains(r))
}

/// Project a content item onto exactly the feed view fields.
pub fn project(
    item: ContentItem,
    owner_details: Option<OwnerDetails>,
    likes_count: u64,
    is_liked: bool,
) -> FeedView {
    match item {
        ContentItem::Tweet(tweet) => FeedView {
            id: tweet.id,
            body: FeedBody::Tweet {
                content: tweet.content,
            },
            owner_details,
            likes_count,
            is_liked,
            created_at: tweet.created_at,
            updated_at: tweet.updated_at,
        },
        ContentItem::Video(video) => FeedView {
            id: video.id,
            body: FeedBody::Video {
                title: video.title,
                description: video.description,
            },
            owner_details,
            likes_count,
            is_liked,
            created_at: video.created_at,
            updated_at: video.updated_at,
        },
    }
}

/// Order by creation time, most recent first.
///
/// The sort is stable, so equal timestamps keep the order the store returned.
pub fn newest_first<T: Chronological>(mut items: Vec<T>) -> Vec<T> {
    items.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
    items
}

/// The fixed feed pipeline: join owner, derive count, derive membership,
/// project, sort.
pub fn assemble(
    items: Vec<ContentItem>,
    owner_details: Option<OwnerDetails>,
    likes: Vec<Like>,
    requester: Option<&IdentityRef>,
) -> Vec<FeedView> {
    let likers = index_likers(likes);
    let views = items
        .into_iter()
        .map(|item| {
            let liked_by = likers
                .get(&item.content_ref())
                .map(Vec::as_slice)
                .unwrap_or_default();
            let count = like_count(liked_by);
            let liked = is_liked_by(liked_by, requester);
            project(item, owner_details.clone(), count, liked)
        })
        .collect();
    newest_first(views)
}
