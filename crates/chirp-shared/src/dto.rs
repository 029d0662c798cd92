//! Data Transfer Objects - request types for the API.
//!
//! Required fields are `Option` on purpose: a missing field must surface as a
//! validation error from the domain, not as a body parse failure.

use serde::{Deserialize, Serialize};

/// Body for `POST /api/tweets`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateTweetRequest {
    pub content: Option<String>,
}

/// Body for `PATCH /api/tweets/{tweetId}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTweetRequest {
    pub content: Option<String>,
}

/// An inline file. `data` is standard base64.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaPayload {
    pub file_name: String,
    pub content_type: String,
    pub data: String,
    /// Playback length reported by the client, for video and audio files.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<f64>,
}

/// Body for `POST /api/videos`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateVideoRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub thumbnail: Option<MediaPayload>,
    pub video_file: Option<MediaPayload>,
}

/// Body for `PATCH /api/videos/{videoId}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateVideoRequest {
    pub description: Option<String>,
    pub thumbnail: Option<MediaPayload>,
}

/// Query string of `GET /api/videos`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub keyword: String,
}

/// Query string of `GET /api/feed/{userId}`: `all`, `tweets` or `videos`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeedQuery {
    pub scope: Option<String>,
}
