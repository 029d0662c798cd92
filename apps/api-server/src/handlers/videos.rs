//! Video handlers.

use actix_web::{HttpResponse, web};

use chirp_core::domain::{FeedScope, NewVideo, VideoChanges};
use chirp_shared::ApiResponse;
use chirp_shared::dto::{CreateVideoRequest, SearchQuery, UpdateVideoRequest};

use super::media;
use crate::middleware::auth::{Identity, OptionalIdentity};
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/videos?keyword=
pub async fn get_all_videos(
    state: web::Data<AppState>,
    query: web::Query<SearchQuery>,
) -> AppResult<HttpResponse> {
    let videos = state.feed.search(&query.keyword).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(videos, "Videos fetched successfully")))
}

/// POST /api/videos
pub async fn publish_video(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<CreateVideoRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let input = NewVideo::new(
        req.title,
        req.description,
        media::decode_opt("thumbnail", req.thumbnail)?,
        media::decode_opt("videoFile", req.video_file)?,
    )?;

    let video = state.lifecycle.create_video(identity.actor, input).await?;

    Ok(HttpResponse::Created().json(ApiResponse::created(video, "Video published successfully")))
}

/// GET /api/videos/user/{user_id}
pub async fn get_user_videos(
    state: web::Data<AppState>,
    path: web::Path<String>,
    viewer: OptionalIdentity,
) -> AppResult<HttpResponse> {
    let videos = state
        .feed
        .build_feed(&path.into_inner(), viewer.actor(), FeedScope::Videos)
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(videos, "Videos fetched successfully")))
}

/// GET /api/videos/{video_id}
pub async fn get_video_by_id(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let video = state.feed.find_video(&path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(video, "Video fetched successfully")))
}

/// PATCH /api/videos/{video_id}
pub async fn update_video(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<String>,
    body: web::Json<UpdateVideoRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let changes = VideoChanges::new(
        req.description,
        media::decode_opt("thumbnail", req.thumbnail)?,
    )?;

    let video = state
        .lifecycle
        .update_video(identity.actor, &path.into_inner(), changes)
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(video, "Video updated successfully")))
}

/// DELETE /api/videos/{video_id}
pub async fn delete_video(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let video_id = path.into_inner();
    state.lifecycle.delete_video(identity.actor, &video_id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(
        serde_json::json!({ "videoId": video_id }),
        "Video deleted successfully",
    )))
}

/// PATCH /api/videos/toggle/publish/{video_id}
pub async fn toggle_publish_status(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let video = state
        .lifecycle
        .toggle_publish(identity.actor, &path.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(
        video,
        "Video publish status toggled successfully",
    )))
}
