//! Core use-case services.
//!
//! # Responsibility
//! - Compose the record store with a renderer for user-interaction flows.
//! - Keep hosts decoupled from store internals.

pub mod list_service;
