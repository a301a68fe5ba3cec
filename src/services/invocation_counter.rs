use std::collections::BTreeMap;
use dashmap::DashMap;

/// Named monotonically increasing counters, e.g. `method.invoked.CauseService.find_all`.
#[derive(Default)]
pub struct InvocationCounter {
    counters: DashMap<String, u64>,
}

impl InvocationCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&self, name: &str) {
        *self.counters.entry(name.to_string()).or_insert(0) += 1;
    }

    pub fn get(&self, name: &str) -> u64 {
        self.counters.get(name).map(|entry| *entry).unwrap_or(0)
    }

    pub fn snapshot(&self) -> BTreeMap<String, u64> {
        self.counters
            .iter()
            .map(|entry| (entry.key().clone(), *entry.value()))
            .collect()
    }
}
