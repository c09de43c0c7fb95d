//! Media upload endpoint.
//!
//! Takes the raw body with its Content-Type and hands it to the media
//! store; the caller gets back an opaque URL to put in receipt_url or
//! video_url.

use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, StatusCode},
    Json,
};
use serde_json::{json, Value};

use crate::app::AppState;
use crate::error::ApiError;

const MAX_UPLOAD_BYTES: usize = 25 * 1024 * 1024;

/// POST /api/v1/uploads (admin)
pub async fn upload_media(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    if body.is_empty() {
        return Err(ApiError::Validation("Empty upload body".to_string()));
    }
    if body.len() > MAX_UPLOAD_BYTES {
        return Err(ApiError::Validation(
            "Upload exceeds the 25 MB limit".to_string(),
        ));
    }

    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("application/octet-stream");

    let url = state.media.upload(&body, content_type).await?;

    Ok((StatusCode::CREATED, Json(json!({ "url": url }))))
}
