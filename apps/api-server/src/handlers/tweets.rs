//! Tweet handlers.

use actix_web::{HttpResponse, web};

use chirp_core::domain::{FeedScope, NewTweet, TweetChanges};
use chirp_shared::ApiResponse;
use chirp_shared::dto::{CreateTweetRequest, UpdateTweetRequest};

use crate::middleware::auth::{Identity, OptionalIdentity};
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// POST /api/tweets
pub async fn create_tweet(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<CreateTweetRequest>,
) -> AppResult<HttpResponse> {
    let input = NewTweet::new(body.into_inner().content.unwrap_or_default())?;
    let tweet = state.lifecycle.create_tweet(identity.actor, input).await?;

    Ok(HttpResponse::Created().json(ApiResponse::created(tweet, "Tweet created successfully")))
}

/// GET /api/tweets/user/{user_id}
pub async fn get_user_tweets(
    state: web::Data<AppState>,
    path: web::Path<String>,
    viewer: OptionalIdentity,
) -> AppResult<HttpResponse> {
    let tweets = state
        .feed
        .build_feed(&path.into_inner(), viewer.actor(), FeedScope::Tweets)
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(tweets, "Tweets fetched successfully")))
}

/// PATCH /api/tweets/{tweet_id}
pub async fn update_tweet(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<String>,
    body: web::Json<UpdateTweetRequest>,
) -> AppResult<HttpResponse> {
    let changes = TweetChanges::new(body.into_inner().content)?;
    let tweet = state
        .lifecycle
        .update_tweet(identity.actor, &path.into_inner(), changes)
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(tweet, "Tweet updated successfully")))
}

/// DELETE /api/tweets/{tweet_id}
pub async fn delete_tweet(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let tweet_id = path.into_inner();
    state.lifecycle.delete_tweet(identity.actor, &tweet_id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(
        serde_json::json!({ "tweetId": tweet_id }),
        "Tweet deleted successfully",
    )))
}
