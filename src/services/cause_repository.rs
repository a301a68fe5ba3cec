use std::sync::atomic::{AtomicU64, Ordering};
use dashmap::DashMap;
use crate::structs::cause::Cause;

/// Concurrent in-memory store of causes keyed by id.
pub struct CauseRepository {
    causes: DashMap<u64, Cause>,
    sequence: AtomicU64,
}

impl CauseRepository {
    pub fn new() -> Self {
        Self {
            causes: DashMap::new(),
            sequence: AtomicU64::new(0),
        }
    }

    /// Stores every cause in order; ids are assigned as for `insert`.
    pub fn with_seed(seed: Vec<Cause>) -> Self {
        let repository = Self::new();
        for cause in seed {
            repository.insert(cause);
        }
        repository
    }

    pub fn find_all(&self) -> Vec<Cause> {
        let mut causes: Vec<Cause> = self.causes.iter().map(|entry| entry.value().clone()).collect();
        causes.sort_by_key(|cause| cause.id);
        causes
    }

    pub fn find_one(&self, id: u64) -> Option<Cause> {
        self.causes.get(&id).map(|entry| entry.clone())
    }

    /// Assigns the next id, ignoring any id already on `cause`.
    pub fn insert(&self, mut cause: Cause) -> Cause {
        let id = self.sequence.fetch_add(1, Ordering::SeqCst) + 1;
        cause.id = Some(id);
        self.causes.insert(id, cause.clone());
        cause
    }

    /// Replaces the stored cause; `None` when `id` is unknown.
    pub fn save(&self, id: u64, mut cause: Cause) -> Option<Cause> {
        let mut entry = self.causes.get_mut(&id)?;
        cause.id = Some(id);
        *entry = cause.clone();
        Some(cause)
    }

    pub fn delete(&self, id: u64) -> Option<Cause> {
        self.causes.remove(&id).map(|(_, cause)| cause)
    }

    pub fn count(&self) -> usize {
        self.causes.len()
    }
}

impl Default for CauseRepository {
    fn default() -> Self {
        Self::new()
    }
}
