//! Inline media payloads.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use chirp_core::ports::MediaUpload;
use chirp_shared::dto::MediaPayload;

use crate::middleware::error::AppError;

/// Decode a base64 payload into an upload for the media store.
pub fn decode(field: &str, payload: MediaPayload) -> Result<MediaUpload, AppError> {
    let data = STANDARD
        .decode(payload.data.as_bytes())
        .map_err(|e| AppError::validation(format!("{field} is not valid base64: {e}")))?;

    let upload = MediaUpload::new(payload.file_name, payload.content_type, data);
    Ok(match payload.duration_seconds {
        Some(seconds) => upload.with_duration(seconds),
        None => upload,
    })
}

/// Decode an optional payload.
pub fn decode_opt(
    field: &str,
    payload: Option<MediaPayload>,
) -> Result<Option<MediaUpload>, AppError> {
    payload.map(|p| decode(field, p)).transpose()
}
