use crate::error::{DeskError, Result};

use super::engine::Engine;
use super::job::Job;

/// Insertion-ordered collection of engines.
///
/// Engine ids are not required to be unique: every lookup resolves to the
/// *first* engine with a matching id in insertion order. This is documented,
/// load-bearing behavior, not a defect.
///
/// Every engine-targeting operation shares the same precondition structure:
/// an empty registry fails with `EmptyRegistry` before any scan, and a full
/// scan with no match fails with `EngineNotFound`.
#[derive(Debug, Default)]
pub struct EngineRegistry {
    engines: Vec<Engine>,
}

impl EngineRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new engine with an empty job queue. Duplicate ids are
    /// permitted; this operation cannot fail.
    pub fn add(&mut self, engine_id: u32, operating_hours: u32) {
        self.engines.push(Engine::new(engine_id, operating_hours));
    }

    /// Removes the first engine matching `engine_id` and returns the id.
    pub fn remove(&mut self, engine_id: u32) -> Result<u32> {
        let index = self.position(engine_id)?;
        self.engines.remove(index);
        Ok(engine_id)
    }

    /// Overwrites the operating hours on the first matching engine and
    /// returns the new value.
    pub fn update_hours(&mut self, engine_id: u32, hours: u32) -> Result<u32> {
        let index = self.position(engine_id)?;
        self.engines[index].operating_hours = hours;
        Ok(hours)
    }

    /// First engine matching `engine_id`, in insertion order.
    pub fn find(&self, engine_id: u32) -> Result<&Engine> {
        let index = self.position(engine_id)?;
        Ok(&self.engines[index])
    }

    /// Appends `job` to the matching engine's queue.
    pub fn enqueue_job(&mut self, engine_id: u32, job: Job) -> Result<()> {
        let index = self.position(engine_id)?;
        self.engines[index].enqueue_job(job);
        Ok(())
    }

    /// Removes and returns the oldest pending job on the matching engine.
    ///
    /// Callers acknowledge completion only; no job detail is used after
    /// dequeue and the returned record is dropped.
    pub fn dequeue_job(&mut self, engine_id: u32) -> Result<Job> {
        let index = self.position(engine_id)?;
        self.engines[index]
            .dequeue_job()
            .ok_or(DeskError::EmptyJobQueue(engine_id))
    }

    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.engines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.engines.is_empty()
    }

    // Shared precondition scan: empty registry is checked before the search
    // so the two failure kinds stay distinct.
    fn position(&self, engine_id: u32) -> Result<usize> {
        if self.engines.is_empty() {
            return Err(DeskError::EmptyRegistry);
        }
        self.engines
            .iter()
            .position(|e| e.engine_id == engine_id)
            .ok_or(DeskError::EngineNotFound(engine_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_grows_registry_even_with_duplicate_ids() {
        let mut registry = EngineRegistry::new();
        registry.add(100, 50);
        registry.add(100, 75);
        registry.add(200, 10);
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn remove_on_empty_registry_is_empty_registry_error() {
        let mut registry = EngineRegistry::new();
        assert!(matches!(registry.remove(1), Err(DeskError::EmptyRegistry)));
        assert!(matches!(
            registry.remove(9999),
            Err(DeskError::EmptyRegistry)
        ));
    }

    #[test]
    fn remove_without_match_is_not_found_and_leaves_registry_intact() {
        let mut registry = EngineRegistry::new();
        registry.add(100, 50);
        registry.add(200, 75);

        assert!(matches!(
            registry.remove(300),
            Err(DeskError::EngineNotFound(300))
        ));
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.find(100).unwrap().operating_hours, 50);
        assert_eq!(registry.find(200).unwrap().operating_hours, 75);
    }

    #[test]
    fn remove_deletes_only_first_match_in_insertion_order() {
        let mut registry = EngineRegistry::new();
        registry.add(100, 10);
        registry.add(100, 20);

        assert_eq!(registry.remove(100).unwrap(), 100);
        assert_eq!(registry.len(), 1);
        // The second duplicate survives.
        assert_eq!(registry.find(100).unwrap().operating_hours, 20);
    }

    #[test]
    fn update_hours_overwrites_first_match() {
        let mut registry = EngineRegistry::new();
        registry.add(100, 10);
        registry.add(100, 20);

        assert_eq!(registry.update_hours(100, 99).unwrap(), 99);
        assert_eq!(registry.find(100).unwrap().operating_hours, 99);

        registry.remove(100).unwrap();
        assert_eq!(registry.find(100).unwrap().operating_hours, 20);
    }

    #[test]
    fn update_hours_precondition_errors() {
        let mut registry = EngineRegistry::new();
        assert!(matches!(
            registry.update_hours(1, 5),
            Err(DeskError::EmptyRegistry)
        ));

        registry.add(2, 0);
        assert!(matches!(
            registry.update_hours(1, 5),
            Err(DeskError::EngineNotFound(1))
        ));
    }

    #[test]
    fn enqueue_then_dequeue_leaves_queue_empty() {
        let mut registry = EngineRegistry::new();
        registry.add(100, 50);

        registry.enqueue_job(100, Job::new(1, "oil change")).unwrap();
        assert_eq!(registry.find(100).unwrap().pending_jobs(), 1);

        let done = registry.dequeue_job(100).unwrap();
        assert_eq!(done.job_id, 1);
        assert_eq!(registry.find(100).unwrap().pending_jobs(), 0);

        assert!(matches!(
            registry.dequeue_job(100),
            Err(DeskError::EmptyJobQueue(100))
        ));
    }

    #[test]
    fn jobs_complete_in_strict_fifo_order() {
        let mut registry = EngineRegistry::new();
        registry.add(7, 0);
        for (id, desc) in [(1, "J1"), (2, "J2"), (3, "J3")] {
            registry.enqueue_job(7, Job::new(id, desc)).unwrap();
        }

        assert_eq!(registry.dequeue_job(7).unwrap().description, "J1");
        assert_eq!(registry.dequeue_job(7).unwrap().description, "J2");
        assert_eq!(registry.dequeue_job(7).unwrap().description, "J3");
    }

    #[test]
    fn job_operations_share_precondition_structure() {
        let mut registry = EngineRegistry::new();
        assert!(matches!(
            registry.enqueue_job(1, Job::new(1, "x")),
            Err(DeskError::EmptyRegistry)
        ));
        assert!(matches!(
            registry.dequeue_job(1),
            Err(DeskError::EmptyRegistry)
        ));

        registry.add(2, 0);
        assert!(matches!(
            registry.enqueue_job(1, Job::new(1, "x")),
            Err(DeskError::EngineNotFound(1))
        ));
        assert!(matches!(
            registry.dequeue_job(1),
            Err(DeskError::EngineNotFound(1))
        ));
    }

    #[test]
    fn find_resolves_first_match() {
        let mut registry = EngineRegistry::new();
        registry.add(5, 111);
        registry.add(5, 222);
        assert_eq!(registry.find(5).unwrap().operating_hours, 111);
    }
}
