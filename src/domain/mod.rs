//! Core domain types: entities and repository traits.

pub mod entities;
pub mod repositories;
