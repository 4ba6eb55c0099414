//! Keyed row reconciliation.
//!
//! # Responsibility
//! - Update displayed rows by record id instead of rebuilding them.
//!
//! # Invariants
//! - Resulting rows equal what `RowBuffer` would show for the same input.
//! - Rows whose id and label are unchanged are reused, not recreated.

use crate::model::record::{Record, RecordId};
use crate::view::renderer::{ListRenderer, RenderedRow, RowAction};
use log::trace;
use std::collections::HashMap;

/// Counters from the most recent reconcile pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReconcileStats {
    /// Rows reused untouched.
    pub kept: usize,
    /// Rows reused with a new label.
    pub relabeled: usize,
    /// Rows created for new ids.
    pub inserted: usize,
    /// Rows dropped because their id disappeared.
    pub removed: usize,
}

/// Renderer that reconciles rows by record id.
#[derive(Debug, Clone, Default)]
pub struct KeyedRowList {
    rows: Vec<RenderedRow>,
    last_stats: ReconcileStats,
}

impl KeyedRowList {
    /// Creates an empty row list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Displayed rows in order.
    pub fn rows(&self) -> &[RenderedRow] {
        &self.rows
    }

    /// Action of the row at `index` (0-based), if displayed.
    pub fn action_at(&self, index: usize) -> Option<RowAction> {
        self.rows.get(index).map(|row| row.action)
    }

    /// Counters of the latest `reconcile`; all zero before the first one.
    pub fn last_stats(&self) -> ReconcileStats {
        self.last_stats
    }

    /// Reconciles displayed rows against `records` and returns the counters.
    pub fn reconcile(&mut self, records: &[Record]) -> ReconcileStats {
        let mut previous: HashMap<RecordId, RenderedRow> = self
            .rows
            .drain(..)
            .map(|row| (row.record_id(), row))
            .collect();
        let mut stats = ReconcileStats::default();

        for record in records {
            match previous.remove(&record.id) {
                Some(mut row) => {
                    if row.label == record.name {
                        stats.kept += 1;
                    } else {
                        row.label.clone_from(&record.name);
                        stats.relabeled += 1;
                    }
                    self.rows.push(row);
                }
                None => {
                    self.rows.push(RenderedRow::for_record(record));
                    stats.inserted += 1;
                }
            }
        }
        stats.removed = previous.len();

        trace!(
            "event=rows_reconcile module=view status=ok kept={} relabeled={} inserted={} removed={}",
            stats.kept,
            stats.relabeled,
            stats.inserted,
            stats.removed
        );
        self.last_stats = stats;
        stats
    }
}

impl ListRenderer for KeyedRowList {
    fn render(&mut self, records: &[Record]) {
        self.reconcile(records);
    }
}
