//! Admin authentication middleware.
//!
//! Admin routes are protected by a shared secret in the `X-Admin-Key`
//! header. Session handling is out of scope for this backend; the key is
//! configured per deployment.

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::app::AppState;
use crate::error::ApiError;

/// Header carrying the admin shared secret.
pub const ADMIN_KEY_HEADER: &str = "X-Admin-Key";

/// Middleware that requires a valid admin key.
pub async fn require_admin(
    State(state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Response {
    let provided = req
        .headers()
        .get(ADMIN_KEY_HEADER)
        .and_then(|v| v.to_str().ok());

    match provided {
        Some(key) if !state.config.security.admin_api_key.is_empty()
            && key == state.config.security.admin_api_key =>
        {
            next.run(req).await
        }
        _ => ApiError::Unauthorized("Invalid or missing admin key".to_string()).into_response(),
    }
}
