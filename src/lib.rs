//! # tinylink
//!
//! A small URL shortening service built with Axum and SQLite.
//!
//! ## Architecture
//!
//! The crate follows a layered layout with clear seams:
//!
//! - **Domain Layer** ([`domain`]) - The `ShortLink` entity and the
//!   `LinkRepository` trait
//! - **Application Layer** ([`application`]) - The link service orchestrating
//!   code generation and persistence
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite-backed repository
//! - **API Layer** ([`api`]) - Axum handlers and DTOs
//!
//! ## Quick Start
//!
//! ```bash
//! # Optional, defaults shown
//! export DATABASE_URL="sqlite://data/links.db"
//! export LISTEN="0.0.0.0:3000"
//! export BASE_URL="http://localhost:3000"
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See the [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::LinkService;
    pub use crate::domain::entities::{NewLink, ShortLink};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
