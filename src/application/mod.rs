//! Application layer: business logic services.

pub mod services;
