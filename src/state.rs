use sqlx::SqlitePool;
use std::sync::Arc;

use crate::application::services::LinkService;
use crate::infrastructure::persistence::SqliteLinkRepository;
use crate::utils::code_generator::HashCodeGenerator;

/// The concrete link service wiring used by the running application.
pub type AppLinkService = LinkService<SqliteLinkRepository, HashCodeGenerator>;

/// Shared application state injected into all handlers.
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    /// Public base URL prepended to codes in shorten responses.
    pub base_url: String,
    pub link_service: Arc<AppLinkService>,
}
