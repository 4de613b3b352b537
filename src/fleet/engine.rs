use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::job::Job;

/// A tracked piece of equipment: an identifier, cumulative operating hours,
/// and a FIFO queue of pending maintenance jobs.
///
/// Jobs must be completed in the order they were added; the queue is never
/// reordered and carries no priorities.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Engine {
    pub engine_id: u32,
    pub operating_hours: u32,
    jobs: VecDeque<Job>,
}

impl Engine {
    pub fn new(engine_id: u32, operating_hours: u32) -> Self {
        Self {
            engine_id,
            operating_hours,
            jobs: VecDeque::new(),
        }
    }

    /// Appends a job to the back of the queue.
    pub fn enqueue_job(&mut self, job: Job) {
        self.jobs.push_back(job);
    }

    /// Removes and returns the oldest pending job, or `None` when the queue
    /// is empty. The registry layer maps `None` to `EmptyJobQueue`.
    pub fn dequeue_job(&mut self) -> Option<Job> {
        self.jobs.pop_front()
    }

    #[allow(dead_code)]
    pub fn pending_jobs(&self) -> usize {
        self.jobs.len()
    }
}
