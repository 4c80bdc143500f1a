//! Link creation and resolution service.

use std::sync::Arc;

use crate::domain::entities::{NewLink, ShortLink};
use crate::domain::repositories::{LinkRepository, StoreError};
use crate::error::AppError;
use crate::utils::code_generator::CodeGenerator;
use serde_json::json;

/// Maximum insert attempts before giving up on finding a free code.
const MAX_ATTEMPTS: usize = 5;

/// Service for creating and resolving shortened links.
///
/// Both collaborators are injected, so tests can substitute a mock
/// repository and a deterministic generator.
pub struct LinkService<R: LinkRepository, G: CodeGenerator> {
    repository: Arc<R>,
    generator: Arc<G>,
}

impl<R: LinkRepository, G: CodeGenerator> LinkService<R, G> {
    /// Creates a new link service.
    pub fn new(repository: Arc<R>, generator: Arc<G>) -> Self {
        Self {
            repository,
            generator,
        }
    }

    /// Creates a short link for the given target URL.
    ///
    /// There is no existence check before the insert: the generated code is
    /// assumed free and the unique constraint catches the (very rare)
    /// collision, in which case a fresh code is generated and the insert
    /// retried up to [`MAX_ATTEMPTS`] times. The target is stored verbatim;
    /// shortening the same URL twice produces two independent codes.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if code generation fails, the write
    /// fails, or every attempt collided.
    pub async fn shorten(&self, target: String) -> Result<ShortLink, AppError> {
        for attempt in 0..MAX_ATTEMPTS {
            let code = self.generator.generate()?;

            let new_link = NewLink {
                code,
                target: target.clone(),
            };

            match self.repository.insert(new_link).await {
                Ok(link) => return Ok(link),
                Err(StoreError::DuplicateCode) => {
                    tracing::warn!(attempt, "short code collision, regenerating");
                    continue;
                }
                Err(e) => return Err(e.into()),
            }
        }

        Err(AppError::internal(
            "Failed to generate a unique short code",
            json!({ "attempts": MAX_ATTEMPTS }),
        ))
    }

    /// Resolves a short code to its stored link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches the code,
    /// [`AppError::Internal`] on database errors.
    pub async fn resolve(&self, code: &str) -> Result<ShortLink, AppError> {
        self.repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("Short link not found", json!({ "code": code })))
    }

    /// Constructs the full short URL from the public base URL and a code.
    pub fn short_url(&self, base_url: &str, code: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), code)
    }
}
