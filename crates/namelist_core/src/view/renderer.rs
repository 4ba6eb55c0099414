//! Renderer contract and the clear-and-rebuild row buffer.

use crate::model::record::{Record, RecordId};

/// Action attached to a displayed row.
///
/// Rows hold plain values instead of callbacks into the store; the host
/// hands a triggered action back to `RecordListController::trigger`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    /// Remove the record with this id.
    Delete(RecordId),
}

/// One displayed row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedRow {
    /// Record name as displayed.
    pub label: String,
    /// Delete action bound to the record id.
    pub action: RowAction,
}

impl RenderedRow {
    /// Builds the row displaying `record`.
    pub fn for_record(record: &Record) -> Self {
        Self {
            label: record.name.clone(),
            action: RowAction::Delete(record.id),
        }
    }

    /// Id of the record this row displays.
    pub fn record_id(&self) -> RecordId {
        match self.action {
            RowAction::Delete(id) => id,
        }
    }
}

/// Boundary implemented by anything that displays the record list.
///
/// # Contract
/// - Previously displayed rows are discarded or reconciled away.
/// - One row per record, in slice order, showing the record name with a
///   delete action bound to the record id.
pub trait ListRenderer {
    /// Replaces the displayed rows with one row per record.
    fn render(&mut self, records: &[Record]);
}

impl<R: ListRenderer + ?Sized> ListRenderer for &mut R {
    fn render(&mut self, records: &[Record]) {
        (**self).render(records);
    }
}

impl<R: ListRenderer + ?Sized> ListRenderer for Box<R> {
    fn render(&mut self, records: &[Record]) {
        (**self).render(records);
    }
}

/// Clear-and-rebuild renderer that keeps rows in memory.
#[derive(Debug, Clone, Default)]
pub struct RowBuffer {
    rows: Vec<RenderedRow>,
    render_count: usize,
}

impl RowBuffer {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Displayed rows in order.
    pub fn rows(&self) -> &[RenderedRow] {
        &self.rows
    }

    /// Row labels in display order.
    pub fn labels(&self) -> Vec<&str> {
        self.rows.iter().map(|row| row.label.as_str()).collect()
    }

    /// Action of the row at `index` (0-based), if displayed.
    pub fn action_at(&self, index: usize) -> Option<RowAction> {
        self.rows.get(index).map(|row| row.action)
    }

    /// Number of `render` calls received so far.
    pub fn render_count(&self) -> usize {
        self.render_count
    }
}

impl ListRenderer for RowBuffer {
    fn render(&mut self, records: &[Record]) {
        self.rows.clear();
        self.rows.extend(records.iter().map(RenderedRow::for_record));
        self.render_count += 1;
    }
}
