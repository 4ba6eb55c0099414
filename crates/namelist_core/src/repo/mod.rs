//! Record storage contracts and the in-memory implementation.
//!
//! # Responsibility
//! - Define the CRUD contract over the ordered record collection.
//! - Allocate record identities.
//!
//! # Invariants
//! - Stores never hold a reference to a renderer; re-rendering is the
//!   caller's job (see `service::list_service`).
//! - Lookup misses on update/delete are silent, never errors.

pub mod id_alloc;
pub mod record_store;
