//! Modules layer - Infrastructure components for external integrations
//!
//! Contains the persistence adapter backing the trivia features.

pub mod store;
