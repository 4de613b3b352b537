mod engine;
mod job;
mod registry;

pub use engine::Engine;
pub use job::Job;
pub use registry::EngineRegistry;
