//! Record list use-case controller.
//!
//! # Responsibility
//! - Serve the user-interaction entry points (form submit, row delete,
//!   rename) by mutating the store and then re-rendering.
//! - Act as the only place where store and renderer meet.
//!
//! # Invariants
//! - After `submit_form`, `delete` and `trigger` the renderer has been
//!   handed the store's current `read()` result.
//! - `rename` re-renders only when a record was actually renamed.

use crate::model::record::{Record, RecordId};
use crate::repo::record_store::RecordStore;
use crate::view::renderer::{ListRenderer, RowAction};
use log::info;

/// Owns a store and a renderer and keeps them in step.
pub struct RecordListController<S: RecordStore, R: ListRenderer> {
    store: S,
    renderer: R,
}

impl<S: RecordStore, R: ListRenderer> RecordListController<S, R> {
    /// Creates a controller. Nothing is rendered until the first operation
    /// or an explicit `refresh`.
    pub fn new(store: S, renderer: R) -> Self {
        Self { store, renderer }
    }

    /// Handles a submitted form: creates a record then repaints.
    ///
    /// # Contract
    /// - `name` is stored verbatim; empty input creates an empty-named record.
    /// - Returns the created record.
    pub fn submit_form(&mut self, name: impl Into<String>) -> Record {
        let record = self.store.create(name.into());
        info!(
            "event=form_submit module=list status=ok id={} count={}",
            record.id,
            self.store.len()
        );
        self.refresh();
        record
    }

    /// Deletes by id then repaints, hit or miss.
    ///
    /// Returns the number of removed records (0 when `id` is unknown).
    pub fn delete(&mut self, id: RecordId) -> usize {
        let removed = self.store.delete(id);
        info!("event=record_remove module=list status=ok id={id} removed={removed}");
        self.refresh();
        removed
    }

    /// Dispatches an action previously attached to a displayed row.
    pub fn trigger(&mut self, action: RowAction) -> usize {
        match action {
            RowAction::Delete(id) => self.delete(id),
        }
    }

    /// Renames by id; repaints only on a hit.
    pub fn rename(&mut self, id: RecordId, name: impl Into<String>) -> bool {
        let renamed = self.store.update(id, name.into());
        if renamed {
            info!("event=record_rename module=list status=ok id={id}");
            self.refresh();
        } else {
            info!("event=record_rename module=list status=miss id={id}");
        }
        renamed
    }

    /// Repaints the current collection.
    pub fn refresh(&mut self) {
        self.renderer.render(self.store.read());
    }

    /// Current collection in display order.
    pub fn records(&self) -> &[Record] {
        self.store.read()
    }

    /// Renderer handle, for hosts that map displayed rows back to actions.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Consumes the controller, returning the store and renderer.
    pub fn into_parts(self) -> (S, R) {
        (self.store, self.renderer)
    }
}
