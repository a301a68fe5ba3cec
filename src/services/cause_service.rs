use std::collections::BTreeMap;
use crate::config::constants::CAUSE_ENTITY;
use crate::errors::{ArcaError, ArcaResult};
use crate::services::cause_repository::CauseRepository;
use crate::services::invocation_counter::InvocationCounter;
use crate::structs::cause::Cause;

const COUNTER_PREFIX: &str = "method.invoked.CauseService";

/// Business operations on causes. Every call is counted under
/// `method.invoked.CauseService.<operation>`.
pub struct CauseService {
    repository: CauseRepository,
    counter: InvocationCounter,
}

impl CauseService {
    pub fn new(repository: CauseRepository) -> Self {
        Self {
            repository,
            counter: InvocationCounter::new(),
        }
    }

    fn count_call(&self, operation: &str) {
        self.counter.increment(&format!("{}.{}", COUNTER_PREFIX, operation));
    }

    pub fn find_all(&self) -> Vec<Cause> {
        log::debug!("> find_all");
        self.count_call("find_all");

        let causes = self.repository.find_all();

        log::debug!("< find_all ({} causes)", causes.len());
        causes
    }

    pub fn find_one(&self, id: u64) -> Option<Cause> {
        log::debug!("> find_one id:{}", id);
        self.count_call("find_one");

        let cause = self.repository.find_one(id);

        log::debug!("< find_one id:{}", id);
        cause
    }

    pub fn create(&self, cause: Cause) -> ArcaResult<Cause> {
        self.count_call("create");

        if let Some(id) = cause.id {
            log::error!("❌ Attempted to create a cause, but the id attribute was set ({})", id);
            return Err(ArcaError::entity_exists(CAUSE_ENTITY, id));
        }

        let saved = self.repository.insert(cause);
        log::info!("✅ Created cause {:?} '{}'", saved.id, saved.name);
        Ok(saved)
    }

    /// Replaces name, frequency, total and description of cause `id`.
    pub fn update(&self, id: u64, cause: Cause) -> ArcaResult<Cause> {
        self.count_call("update");

        let updated = self.repository.save(id, cause).ok_or_else(|| {
            log::error!("❌ Attempted to update cause {}, but it does not exist", id);
            ArcaError::not_found(CAUSE_ENTITY, id)
        })?;

        log::info!("✏️ Updated cause {}", id);
        Ok(updated)
    }

    pub fn delete(&self, id: u64) -> ArcaResult<()> {
        self.count_call("delete");

        match self.repository.delete(id) {
            Some(_) => {
                log::info!("🗑️ Deleted cause {}", id);
                Ok(())
            }
            None => Err(ArcaError::not_found(CAUSE_ENTITY, id)),
        }
    }

    pub fn count(&self) -> usize {
        self.repository.count()
    }

    pub fn invocations(&self) -> BTreeMap<String, u64> {
        self.counter.snapshot()
    }

    pub fn invocation_count(&self, operation: &str) -> u64 {
        self.counter.get(&format!("{}.{}", COUNTER_PREFIX, operation))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> CauseService {
        CauseService::new(CauseRepository::with_seed(vec![
            Cause::new("Missing parts", 42),
            Cause::new("Operator error", 31),
        ]))
    }

    #[test]
    fn find_all_returns_causes_in_id_order() {
        let service = service();
        let names: Vec<String> = service.find_all().into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Missing parts", "Operator error"]);
        assert_eq!(service.invocation_count("find_all"), 1);
    }

    #[test]
    fn create_assigns_an_id_and_rejects_preset_ids() {
        let service = service();

        let created = service.create(Cause::new("Power cut", 2).with_description("grid")).unwrap();
        assert_eq!(created.id, Some(3));
        assert_eq!(service.find_one(3), Some(created));

        let mut preset = Cause::new("Preset", 1);
        preset.id = Some(10);
        assert!(matches!(service.create(preset), Err(ArcaError::EntityExists { id: 10, .. })));
        assert_eq!(service.count(), 3);
        assert_eq!(service.invocation_count("create"), 2);
    }

    #[test]
    fn update_keeps_the_path_id() {
        let service = service();
        let mut replacement = Cause::new("Missing parts (supplier)", 50).with_total(120);
        replacement.id = Some(77);

        let updated = service.update(1, replacement).unwrap();

        assert_eq!(updated.id, Some(1));
        assert_eq!(updated.total, Some(120));
        assert!(matches!(service.update(9, Cause::new("x", 0)), Err(ArcaError::NotFound { id: 9, .. })));
    }

    #[test]
    fn delete_removes_and_reports_missing() {
        let service = service();
        service.delete(1).unwrap();
        assert!(service.find_one(1).is_none());
        assert!(matches!(service.delete(1), Err(ArcaError::NotFound { .. })));
        assert_eq!(service.invocations()["method.invoked.CauseService.delete"], 2);
    }
}
