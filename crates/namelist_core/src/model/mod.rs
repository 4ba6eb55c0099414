//! Record domain model.
//!
//! # Responsibility
//! - Define the record shape shared by the store, renderers and hosts.
//!
//! # Invariants
//! - Every record is identified by a `RecordId` that never changes.
//! - Record names are free-form and never validated.

pub mod record;
