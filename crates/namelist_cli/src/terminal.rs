//! Terminal list renderer.
//!
//! # Responsibility
//! - Paint the record list as numbered rows on a writer (stdout in `main`).
//! - Remember the displayed row actions so `press <row>` can trigger them.

use log::warn;
use namelist_core::{ListRenderer, Record, RowAction, RowBuffer};
use std::io::Write;

/// Renderer painting rows on `out`.
pub struct TerminalRenderer<W: Write> {
    out: W,
    rows: RowBuffer,
}

impl<W: Write> TerminalRenderer<W> {
    /// Creates a renderer writing to `out`.
    pub fn new(out: W) -> Self {
        Self {
            out,
            rows: RowBuffer::new(),
        }
    }

    /// Delete action of displayed row `row` (1-based).
    pub fn action_for_row(&self, row: usize) -> Option<RowAction> {
        row.checked_sub(1).and_then(|index| self.rows.action_at(index))
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn paint(&mut self) -> std::io::Result<()> {
        writeln!(self.out, "-- records ({}) --", self.rows.rows().len())?;
        if self.rows.rows().is_empty() {
            writeln!(self.out, "   (empty)")?;
        }
        for (index, row) in self.rows.rows().iter().enumerate() {
            writeln!(
                self.out,
                "{:>3}. {}  [delete id={}]",
                index + 1,
                row.label,
                row.record_id()
            )?;
        }
        self.out.flush()
    }
}

impl<W: Write> ListRenderer for TerminalRenderer<W> {
    fn render(&mut self, records: &[Record]) {
        self.rows.render(records);
        if let Err(err) = self.paint() {
            warn!("event=list_paint module=cli status=error error={err}");
        }
    }
}
