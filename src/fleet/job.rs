use serde::{Deserialize, Serialize};

/// A unit of maintenance work attached to exactly one engine.
///
/// Jobs are created when scheduled, immutable thereafter, and destroyed when
/// completed. No history is retained after dequeue. Job ids are not required
/// to be unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub job_id: u32,
    pub description: String,
}

impl Job {
    pub fn new(job_id: u32, description: impl Into<String>) -> Self {
        Self {
            job_id,
            description: description.into(),
        }
    }
}
