//! Combined owner feed.

use actix_web::{HttpResponse, web};

use chirp_core::domain::FeedScope;
use chirp_shared::ApiResponse;
use chirp_shared::dto::FeedQuery;

use crate::middleware::auth::OptionalIdentity;
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/feed/{user_id}?scope=all|tweets|videos
pub async fn get_feed(
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<FeedQuery>,
    viewer: OptionalIdentity,
) -> AppResult<HttpResponse> {
    let scope: FeedScope = query.scope.as_deref().unwrap_or_default().parse()?;

    let feed = state
        .feed
        .build_feed(&path.into_inner(), viewer.actor(), scope)
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(feed, "Feed fetched successfully")))
}
