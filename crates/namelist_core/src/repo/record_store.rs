//! Record store contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide CRUD over an ordered collection of `Record`s.
//! - Keep the collection private so every mutation goes through the store.
//!
//! # Invariants
//! - `read()` returns records in insertion order.
//! - `create` appends; `delete` preserves the order of survivors.
//! - `update`/`delete` misses leave the collection untouched and raise no
//!   error.
//! - Ids are unique within the collection. They increase with creation
//!   order until the allocator is exhausted at `i64::MAX`; after that the
//!   lowest unused id is reused.

use crate::model::record::{Record, RecordId};
use crate::repo::id_alloc::{Clock, RecordIdAllocator, SystemClock};
use log::{debug, warn};
use std::collections::HashSet;

/// CRUD contract over the record collection.
pub trait RecordStore {
    /// Appends a new record with a fresh id and returns a copy of it.
    fn create(&mut self, name: String) -> Record;
    /// Current collection in insertion order.
    fn read(&self) -> &[Record];
    /// Renames the first record matching `id`. Returns `false` on a miss.
    fn update(&mut self, id: RecordId, new_name: String) -> bool;
    /// Removes every record matching `id`. Returns the removed count.
    fn delete(&mut self, id: RecordId) -> usize;

    /// First record matching `id`, if any.
    fn get(&self, id: RecordId) -> Option<&Record> {
        self.read().iter().find(|record| record.id == id)
    }

    /// Number of stored records.
    fn len(&self) -> usize {
        self.read().len()
    }

    /// Whether the store holds no records.
    fn is_empty(&self) -> bool {
        self.read().is_empty()
    }
}

/// Memory-only record store. Nothing outlives the process.
#[derive(Debug, Clone)]
pub struct InMemoryRecordStore<C: Clock = SystemClock> {
    records: Vec<Record>,
    ids: RecordIdAllocator<C>,
}

impl InMemoryRecordStore<SystemClock> {
    /// Creates an empty store allocating ids from the wall clock.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for InMemoryRecordStore<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> InMemoryRecordStore<C> {
    /// Creates an empty store allocating ids from `clock`.
    pub fn with_clock(clock: C) -> Self {
        Self {
            records: Vec::new(),
            ids: RecordIdAllocator::with_clock(clock),
        }
    }

    fn allocate_id(&mut self) -> RecordId {
        if let Some(id) = self.ids.next_id() {
            return id;
        }
        let taken: HashSet<RecordId> = self.records.iter().map(|record| record.id).collect();
        // At most `len` candidates are taken, so the scan ends within
        // `len + 1` steps.
        let id = (i64::MIN..=i64::MAX)
            .map(RecordId::from_raw)
            .find(|candidate| !taken.contains(candidate))
            .unwrap_or(RecordId::from_raw(i64::MIN));
        warn!("event=record_id_exhausted module=store status=fallback id={id}");
        id
    }
}

impl<C: Clock> RecordStore for InMemoryRecordStore<C> {
    fn create(&mut self, name: String) -> Record {
        let record = Record::with_id(self.allocate_id(), name);
        self.records.push(record.clone());
        debug!(
            "event=record_create module=store status=ok id={} count={}",
            record.id,
            self.records.len()
        );
        record
    }

    fn read(&self) -> &[Record] {
        &self.records
    }

    fn update(&mut self, id: RecordId, new_name: String) -> bool {
        match self.records.iter_mut().find(|record| record.id == id) {
            Some(record) => {
                record.rename(new_name);
                debug!("event=record_update module=store status=ok id={id}");
                true
            }
            None => {
                debug!("event=record_update module=store status=miss id={id}");
                false
            }
        }
    }

    fn delete(&mut self, id: RecordId) -> usize {
        let before = self.records.len();
        self.records.retain(|record| record.id != id);
        let removed = before - self.records.len();
        debug!(
            "event=record_delete module=store status={} id={id} removed={removed}",
            if removed == 0 { "miss" } else { "ok" }
        );
        removed
    }
}
