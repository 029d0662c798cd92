//! Like handlers.

use actix_web::{HttpResponse, web};

use chirp_core::domain::ContentKind;
use chirp_shared::ApiResponse;

use crate::middleware::auth::Identity;
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// POST /api/likes/{kind}/{target_id}
pub async fn like_content(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<(String, String)>,
) -> AppResult<HttpResponse> {
    let (kind, target_id) = path.into_inner();
    let kind: ContentKind = kind.parse()?;

    let like = state.lifecycle.like(identity.actor, kind, &target_id).await?;

    Ok(HttpResponse::Created().json(ApiResponse::created(like, "Content liked successfully")))
}
