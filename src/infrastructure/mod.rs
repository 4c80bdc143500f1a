//! Infrastructure layer: database-backed implementations of domain traits.

pub mod persistence;
