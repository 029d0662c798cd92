use chrono::Utc;
use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};
use uuid::Uuid;

use chirp_core::domain::{ContentKind, ContentRef, Like, Tweet, Video, VideoPatch};
use chirp_core::error::RepoError;
use chirp_core::ports::{
    BaseRepository, LikeRepository, OwnedMutation, TweetRepository, UserRepository,
    VideoRepository,
};
use chirp_core::{ContentId, IdentityRef};

use super::entity::{like, tweet, user, video};
use super::postgres_repo::{
    PostgresLikeRepository, PostgresTweetRepository, PostgresUserRepository,
    PostgresVideoRepository,
};

fn tweet_model(id: Uuid, owner_id: Uuid, content: &str) -> tweet::Model {
    let now = Utc::now();
    tweet::Model {
        id,
        owner_id,
        content: content.to_owned(),
        created_at: now.into(),
        updated_at: now.into(),
    }
}

fn video_model(id: Uuid, owner_id: Uuid, is_published: bool) -> video::Model {
    let now = Utc::now();
    video::Model {
        id,
        owner_id,
        title: "Cat compilation".to_owned(),
        description: String::new(),
        video_file: Some("memory://media/body.mp4".to_owned()),
        thumbnail: "memory://media/thumb.png".to_owned(),
        duration: Some(13),
        is_published,
        created_at: now.into(),
        updated_at: now.into(),
    }
}

#[tokio::test]
async fn test_find_tweet_by_id() {
    let tweet_id = Uuid::new_v4();
    let owner_id = Uuid::new_v4();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![tweet_model(tweet_id, owner_id, "hello")]])
        .into_connection();

    let repo = PostgresTweetRepository::new(db);

    let result: Option<Tweet> = repo.find_by_id(ContentId::from(tweet_id)).await.unwrap();

    let tweet = result.unwrap();
    assert_eq!(tweet.content, "hello");
    assert_eq!(Uuid::from(tweet.owner), owner_id);
}

#[tokio::test]
async fn test_update_by_owner_returns_updated_row() {
    let tweet_id = Uuid::new_v4();
    let owner_id = Uuid::new_v4();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![tweet_model(tweet_id, owner_id, "edited")]])
        .into_connection();
    let repo = PostgresTweetRepository::new(db);

    let outcome = repo
        .update_content(tweet_id.into(), owner_id.into(), "edited".into())
        .await
        .unwrap();

    match outcome {
        OwnedMutation::Applied(tweet) => assert_eq!(tweet.content, "edited"),
        other => panic!("expected Applied, got {other:?}"),
    }
}

#[tokio::test]
async fn test_update_by_non_owner_is_forbidden() {
    let tweet_id = Uuid::new_v4();
    let owner_id = Uuid::new_v4();

    // The guarded UPDATE returns no row; the follow-up lookup finds it.
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<tweet::Model>::new()])
        .append_query_results([vec![tweet_model(tweet_id, owner_id, "hello")]])
        .into_connection();
    let repo = PostgresTweetRepository::new(db);

    let outcome = repo
        .update_content(tweet_id.into(), IdentityRef::generate(), "hijack".into())
        .await
        .unwrap();

    assert_eq!(outcome, OwnedMutation::Forbidden);
}

#[tokio::test]
async fn test_delete_missing_tweet_is_not_found() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected: 0,
        }])
        .append_query_results([Vec::<tweet::Model>::new()])
        .into_connection();
    let repo = PostgresTweetRepository::new(db);

    let outcome = repo
        .delete_owned(ContentId::generate(), IdentityRef::generate())
        .await
        .unwrap();

    assert_eq!(outcome, OwnedMutation::NotFound);
}

#[tokio::test]
async fn test_delete_by_owner_is_applied() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected: 1,
        }])
        .into_connection();
    let repo = PostgresVideoRepository::new(db);

    let outcome = repo
        .delete_owned(ContentId::generate(), IdentityRef::generate())
        .await
        .unwrap();

    assert_eq!(outcome, OwnedMutation::Applied(()));
}

#[tokio::test]
async fn test_toggle_returns_flipped_video() {
    let video_id = Uuid::new_v4();
    let owner_id = Uuid::new_v4();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![video_model(video_id, owner_id, true)]])
        .into_connection();
    let repo = PostgresVideoRepository::new(db);

    let outcome = repo
        .toggle_published(video_id.into(), owner_id.into())
        .await
        .unwrap();

    match outcome {
        OwnedMutation::Applied(video) => {
            assert!(video.is_published);
            assert_eq!(video.duration, Some(13));
        }
        other => panic!("expected Applied, got {other:?}"),
    }
}

#[tokio::test]
async fn test_update_details_on_missing_video_is_not_found() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<video::Model>::new()])
        .append_query_results([Vec::<video::Model>::new()])
        .into_connection();
    let repo = PostgresVideoRepository::new(db);

    let patch = VideoPatch {
        description: Some("new".into()),
        thumbnail: None,
    };
    let outcome = repo
        .update_details(ContentId::generate(), IdentityRef::generate(), patch)
        .await
        .unwrap();

    assert_eq!(outcome, OwnedMutation::NotFound);
}

#[tokio::test]
async fn test_search_maps_rows() {
    let owner_id = Uuid::new_v4();
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![
            video_model(Uuid::new_v4(), owner_id, true),
            video_model(Uuid::new_v4(), owner_id, false),
        ]])
        .into_connection();
    let repo = PostgresVideoRepository::new(db);

    let found: Vec<Video> = repo.search("cat").await.unwrap();
    assert_eq!(found.len(), 2);
}

#[tokio::test]
async fn test_find_profile_reads_username_and_avatar() {
    let user_id = Uuid::new_v4();
    let now = Utc::now();
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![user::Model {
            id: user_id,
            username: "alice".to_owned(),
            email: "alice@example.com".to_owned(),
            avatar: Some("https://cdn.example.com/a.png".to_owned()),
            created_at: now.into(),
            updated_at: now.into(),
        }]])
        .into_connection();
    let repo = PostgresUserRepository::new(db);

    let profile = repo.find_profile(user_id.into()).await.unwrap().unwrap();
    assert_eq!(profile.username, "alice");
    assert_eq!(profile.avatar.as_deref(), Some("https://cdn.example.com/a.png"));
}

#[tokio::test]
async fn test_like_rows_map_to_targets() {
    let liker = Uuid::new_v4();
    let target = Uuid::new_v4();
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![like::Model {
            id: Uuid::new_v4(),
            liked_by: liker,
            target_kind: "video".to_owned(),
            target_id: target,
            created_at: Utc::now().into(),
        }]])
        .into_connection();
    let repo = PostgresLikeRepository::new(db);

    let likes: Vec<Like> = repo
        .find_by_targets(&[ContentRef::video(target.into())])
        .await
        .unwrap();

    assert_eq!(likes.len(), 1);
    assert_eq!(likes[0].target.kind, ContentKind::Video);
    assert_eq!(Uuid::from(likes[0].liked_by), liker);
}

#[tokio::test]
async fn test_unknown_target_kind_is_corrupt() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![like::Model {
            id: Uuid::new_v4(),
            liked_by: Uuid::new_v4(),
            target_kind: "comment".to_owned(),
            target_id: Uuid::new_v4(),
            created_at: Utc::now().into(),
        }]])
        .into_connection();
    let repo = PostgresLikeRepository::new(db);

    let err = repo
        .find(IdentityRef::generate(), ContentRef::tweet(ContentId::generate()))
        .await
        .unwrap_err();

    assert!(matches!(err, RepoError::Corrupt(_)));
}

#[tokio::test]
async fn test_no_targets_skips_the_query() {
    // No results are queued: any query would fail.
    let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
    let repo = PostgresLikeRepository::new(db);

    let likes = repo.find_by_targets(&[]).await.unwrap();
    assert!(likes.is_empty());
}
