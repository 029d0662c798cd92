mod common;

use std::sync::Arc;

use chirp_core::domain::{ContentKind, NewTweet, NewVideo, TweetChanges, VideoChanges};
use chirp_core::ports::BaseRepository;
use chirp_core::{ContentId, ContentLifecycle, DomainError, IdentityRef};
use chirp_infra::InMemoryMediaStore;

use common::{
    BrokenMediaStore, Harness, ImagesOnlyMediaStore, ReadOnlyTweetRepository, UrlLessMediaStore,
    clip, thumbnail,
};

#[tokio::test]
async fn test_owner_edits_own_tweet() {
    let h = Harness::new();
    let alice = h.user("alice").await;

    let tweet = h.tweet(alice, "hello").await;
    let updated = h
        .lifecycle
        .update_tweet(
            alice,
            &tweet.id.to_string(),
            TweetChanges::new(Some("edited".into())).unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(updated.content, "edited");
    assert!(updated.updated_at >= tweet.updated_at);

    let feed = h
        .feed
        .build_feed(&alice.to_string(), None, Default::default())
        .await
        .unwrap();
    let json = serde_json::to_value(&feed[0]).unwrap();
    assert_eq!(json["content"], "edited");
}

#[tokio::test]
async fn test_non_owner_cannot_touch_tweet() {
    let h = Harness::new();
    let alice = h.user("alice").await;
    let bob = h.user("bob").await;
    let tweet = h.tweet(alice, "hello").await;
    let id = tweet.id.to_string();

    let err = h
        .lifecycle
        .update_tweet(bob, &id, TweetChanges::new(Some("pwned".into())).unwrap())
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Forbidden(_)));

    let err = h.lifecycle.delete_tweet(bob, &id).await.unwrap_err();
    assert!(matches!(err, DomainError::Forbidden(_)));

    let stored = h.tweets.find_by_id(tweet.id).await.unwrap().unwrap();
    assert_eq!(stored, tweet);
}

#[tokio::test]
async fn test_delete_then_delete_again() {
    let h = Harness::new();
    let alice = h.user("alice").await;
    let tweet = h.tweet(alice, "short-lived").await;
    let id = tweet.id.to_string();

    h.lifecycle.delete_tweet(alice, &id).await.unwrap();
    assert_eq!(h.tweets.len().await, 0);

    let err = h.lifecycle.delete_tweet(alice, &id).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound { .. }));
}

#[tokio::test]
async fn test_blank_tweet_is_rejected_before_any_write() {
    let h = Harness::new();

    let err = NewTweet::new("   ").unwrap_err();
    assert!(matches!(err, DomainError::Validation(_)));
    assert!(TweetChanges::new(None).is_err());

    assert_eq!(h.tweets.len().await, 0);
}

#[tokio::test]
async fn test_malformed_ids_are_invalid_references() {
    let h = Harness::new();
    let alice = h.user("alice").await;

    let err = h.lifecycle.delete_tweet(alice, "42").await.unwrap_err();
    assert!(matches!(err, DomainError::InvalidReference(_)));

    let err = h.lifecycle.toggle_publish(alice, "not-a-video").await.unwrap_err();
    assert!(matches!(err, DomainError::InvalidReference(_)));
}

#[tokio::test]
async fn test_video_without_body_starts_as_draft() {
    let h = Harness::new();
    let alice = h.user("alice").await;

    let video = h.video(alice, "Trailer", false).await;

    assert!(!video.is_published);
    assert_eq!(video.video_file, None);
    assert_eq!(video.duration, None);
    assert!(!video.thumbnail.is_empty());
}

#[tokio::test]
async fn test_video_with_body_is_published_with_rounded_duration() {
    let h = Harness::new();
    let alice = h.user("alice").await;

    let video = h.video(alice, "Cat compilation", true).await;

    assert!(video.is_published);
    assert!(video.video_file.is_some());
    assert_eq!(video.duration, Some(13));
}

#[tokio::test]
async fn test_toggle_publish_flips_and_is_owner_only() {
    let h = Harness::new();
    let alice = h.user("alice").await;
    let bob = h.user("bob").await;
    let video = h.video(alice, "Trailer", false).await;
    let id = video.id.to_string();

    let toggled = h.lifecycle.toggle_publish(alice, &id).await.unwrap();
    assert!(toggled.is_published);

    let err = h.lifecycle.toggle_publish(bob, &id).await.unwrap_err();
    assert!(matches!(err, DomainError::Forbidden(_)));

    let toggled = h.lifecycle.toggle_publish(alice, &id).await.unwrap();
    assert!(!toggled.is_published);
}

#[tokio::test]
async fn test_video_needs_title_or_description_and_thumbnail() {
    let err = NewVideo::new(None, Some(" ".into()), Some(thumbnail()), None).unwrap_err();
    assert!(matches!(err, DomainError::Validation(_)));

    let err = NewVideo::new(Some("Title".into()), None, None, Some(clip())).unwrap_err();
    assert!(matches!(err, DomainError::Validation(_)));

    assert!(NewVideo::new(None, Some("only a description".into()), Some(thumbnail()), None).is_ok());
}

#[tokio::test]
async fn test_failed_upload_creates_nothing() {
    let h = Harness::with_media(Arc::new(BrokenMediaStore));
    let alice = IdentityRef::generate();

    let input = NewVideo::new(Some("Doomed".into()), None, Some(thumbnail()), Some(clip())).unwrap();
    let err = h.lifecycle.create_video(alice, input).await.unwrap_err();

    assert!(matches!(err, DomainError::MediaUpload(_)));
    assert_eq!(h.videos.len().await, 0);
}

#[tokio::test]
async fn test_upload_without_url_creates_nothing() {
    let h = Harness::with_media(Arc::new(UrlLessMediaStore));
    let alice = IdentityRef::generate();

    let input = NewVideo::new(Some("Doomed".into()), None, Some(thumbnail()), None).unwrap();
    let err = h.lifecycle.create_video(alice, input).await.unwrap_err();

    assert!(matches!(err, DomainError::MediaUpload(_)));
    assert_eq!(h.videos.len().await, 0);
}

#[tokio::test]
async fn test_update_video_description_and_thumbnail() {
    let h = Harness::new();
    let alice = h.user("alice").await;
    let video = h.video(alice, "Trailer", false).await;
    let id = video.id.to_string();

    let changes = VideoChanges::new(Some("Now with sound".into()), Some(thumbnail())).unwrap();
    let updated = h.lifecycle.update_video(alice, &id, changes).await.unwrap();

    assert_eq!(updated.description, "Now with sound");
    assert_ne!(updated.thumbnail, video.thumbnail);
    assert_eq!(updated.title, "Trailer");
}

#[tokio::test]
async fn test_non_owner_thumbnail_update_is_forbidden_and_uploads_nothing() {
    let h = Harness::with_media(Arc::new(BrokenMediaStore));
    let alice = IdentityRef::generate();
    let bob = IdentityRef::generate();

    // Seed directly: the broken store cannot create videos.
    let video = chirp_core::domain::Video::new(
        alice,
        "Trailer".into(),
        String::new(),
        "memory://media/t.png".into(),
        None,
        None,
    );
    let video = h.videos.insert(video).await.unwrap();

    let changes = VideoChanges::new(None, Some(thumbnail())).unwrap();
    let err = h
        .lifecycle
        .update_video(bob, &video.id.to_string(), changes)
        .await
        .unwrap_err();

    // Forbidden, not MediaUpload: the upload was never attempted.
    assert!(matches!(err, DomainError::Forbidden(_)));
}

#[tokio::test]
async fn test_like_is_idempotent_and_needs_a_target() {
    let h = Harness::new();
    let alice = h.user("alice").await;
    let bob = h.user("bob").await;
    let tweet = h.tweet(alice, "like me").await;
    let id = tweet.id.to_string();

    let first = h.lifecycle.like(bob, ContentKind::Tweet, &id).await.unwrap();
    let second = h.lifecycle.like(bob, ContentKind::Tweet, &id).await.unwrap();
    assert_eq!(first.id, second.id);

    // Same id, wrong kind.
    let err = h.lifecycle.like(bob, ContentKind::Video, &id).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound { .. }));
}

#[tokio::test]
async fn test_mutations_of_missing_items_are_not_found() {
    let h = Harness::new();
    let alice = h.user("alice").await;
    let missing = ContentId::generate().to_string();

    let err = h
        .lifecycle
        .update_tweet(alice, &missing, TweetChanges::new(Some("edited".into())).unwrap())
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound { entity_type: "Tweet", .. }));

    let changes = VideoChanges::new(Some("new words".into()), None).unwrap();
    let err = h.lifecycle.update_video(alice, &missing, changes).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound { entity_type: "Video", .. }));

    let err = h.lifecycle.toggle_publish(alice, &missing).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound { entity_type: "Video", .. }));

    let err = h.lifecycle.delete_video(alice, &missing).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound { entity_type: "Video", .. }));
}

#[tokio::test]
async fn test_thumbnail_update_of_missing_video_uploads_nothing() {
    let media = Arc::new(InMemoryMediaStore::default());
    let h = Harness::with_media(media.clone());
    let alice = IdentityRef::generate();

    let changes = VideoChanges::new(None, Some(thumbnail())).unwrap();
    let err = h
        .lifecycle
        .update_video(alice, &ContentId::generate().to_string(), changes)
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::NotFound { entity_type: "Video", .. }));
    assert!(media.is_empty().await);
}

#[tokio::test]
async fn test_store_failure_is_a_persistence_error_and_changes_nothing() {
    let h = Harness::new();
    let alice = h.user("alice").await;
    let tweet = h.tweet(alice, "hello").await;
    let id = tweet.id.to_string();

    let lifecycle = ContentLifecycle::new(
        Arc::new(ReadOnlyTweetRepository(h.tweets.clone())),
        h.videos.clone(),
        h.likes.clone(),
        Arc::new(InMemoryMediaStore::default()),
    );

    let err = lifecycle
        .update_tweet(alice, &id, TweetChanges::new(Some("edited".into())).unwrap())
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Persistence(_)));
    assert_eq!(err.code(), "PERSISTENCE_ERROR");

    let err = lifecycle.delete_tweet(alice, &id).await.unwrap_err();
    assert!(matches!(err, DomainError::Persistence(_)));

    let err = lifecycle
        .create_tweet(alice, NewTweet::new("another").unwrap())
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Persistence(_)));

    assert_eq!(h.tweets.len().await, 1);
    let stored = h.tweets.find_by_id(tweet.id).await.unwrap().unwrap();
    assert_eq!(stored, tweet);
}

#[tokio::test]
async fn test_failed_body_upload_discards_the_thumbnail() {
    let media = Arc::new(InMemoryMediaStore::default());
    let h = Harness::with_media(Arc::new(ImagesOnlyMediaStore(media.clone())));
    let alice = IdentityRef::generate();

    let input = NewVideo::new(Some("Doomed".into()), None, Some(thumbnail()), Some(clip())).unwrap();
    let err = h.lifecycle.create_video(alice, input).await.unwrap_err();

    assert!(matches!(err, DomainError::MediaUpload(_)));
    assert_eq!(h.videos.len().await, 0);
    assert!(media.is_empty().await);
}

#[tokio::test]
async fn test_replaced_thumbnail_is_discarded() {
    let media = Arc::new(InMemoryMediaStore::default());
    let h = Harness::with_media(media.clone());
    let alice = h.user("alice").await;
    let video = h.video(alice, "Trailer", false).await;
    assert!(media.get(&video.thumbnail).await.is_some());

    let changes = VideoChanges::new(None, Some(thumbnail())).unwrap();
    let updated = h
        .lifecycle
        .update_video(alice, &video.id.to_string(), changes)
        .await
        .unwrap();

    assert_eq!(media.get(&video.thumbnail).await, None);
    assert!(media.get(&updated.thumbnail).await.is_some());
    assert_eq!(media.len().await, 1);
}
