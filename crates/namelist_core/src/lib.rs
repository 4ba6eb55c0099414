//! Core logic for namelist, an in-memory record list.
//! The store owns the records; hosts display them through `ListRenderer`.

pub mod command;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod view;

pub use command::{parse_command, Command, CommandParseError, HELP_TEXT};
pub use logging::{default_log_level, init_logging, init_with_settings, logging_status, LogSettings};
pub use model::record::{Record, RecordId};
pub use repo::id_alloc::{Clock, FixedClock, RecordIdAllocator, SystemClock};
pub use repo::record_store::{InMemoryRecordStore, RecordStore};
pub use service::list_service::RecordListController;
pub use view::keyed::{KeyedRowList, ReconcileStats};
pub use view::renderer::{ListRenderer, RenderedRow, RowAction, RowBuffer};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
