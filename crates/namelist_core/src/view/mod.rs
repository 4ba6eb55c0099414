//! Renderer boundary and list row implementations.
//!
//! # Responsibility
//! - Define the `ListRenderer` contract hosts implement to display records.
//! - Provide clear-and-rebuild and keyed row lists that hosts and tests can
//!   inspect.
//!
//! # Invariants
//! - After `render(records)`, displayed rows match `records` one-to-one and
//!   in the same order.
//! - Each row carries a delete action bound to its record id.

pub mod keyed;
pub mod renderer;
