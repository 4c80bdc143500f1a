//! DTOs for the shorten endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The long URL to shorten.
    #[validate(url(message = "must be a valid absolute URL"))]
    pub url: String,
}

#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub long_url: String,
    pub code: String,
    pub short_url: String,
}
