//! Handler for the link shortening endpoint.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a shortened URL for a long URL.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/some/long/path" }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "long_url": "https://example.com/some/long/path",
///   "code": "abc123XYZ",
///   "short_url": "http://localhost:3000/abc123XYZ"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the body is not a syntactically valid URL,
/// 500 Internal Server Error if generation or the write fails.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    payload.validate()?;

    let link = state.link_service.shorten(payload.url).await?;
    let short_url = state.link_service.short_url(&state.base_url, &link.code);

    Ok(Json(ShortenResponse {
        long_url: link.target,
        code: link.code,
        short_url,
    }))
}
