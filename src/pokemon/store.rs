//! In-memory store for locally created pokemon.
//!
//! The map and the next-ID counter sit behind a single mutex so that
//! "read counter, assign ID, write record, increment counter" is one step.
//! The guard is never held across an `.await`.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::pokemon::model::Pokemon;

/// First ID handed out to a local record. Everything below belongs upstream.
pub const FIRST_LOCAL_ID: i64 = 10_001;

#[derive(Debug)]
struct StoreInner {
    records: HashMap<i64, Pokemon>,
    next_id: i64,
}

/// Process-lifetime store of local records.
#[derive(Debug)]
pub struct LocalStore {
    inner: Mutex<StoreInner>,
}

impl LocalStore {
    /// Create an empty store whose first record gets [`FIRST_LOCAL_ID`].
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(StoreInner {
                records: HashMap::new(),
                next_id: FIRST_LOCAL_ID,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, StoreInner> {
        // Every critical section leaves the map and counter consistent, so a
        // panic elsewhere does not invalidate the data.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Allocate the next ID, build the record with it and store it.
    pub fn insert_with<F>(&self, build: F) -> Pokemon
    where
        F: FnOnce(i64) -> Pokemon,
    {
        let mut inner = self.lock();
        let id = inner.next_id;
        let record = build(id);
        inner.records.insert(id, record.clone());
        inner.next_id += 1;
        record
    }

    /// Look up a local record.
    pub fn get(&self, id: i64) -> Option<Pokemon> {
        self.lock().records.get(&id).cloned()
    }

    /// ID the next insert will receive.
    pub fn next_id(&self) -> i64 {
        self.lock().next_id
    }

    pub fn len(&self) -> usize {
        self.lock().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for LocalStore {
    fn default() -> Self {
        Self::new()
    }
}
