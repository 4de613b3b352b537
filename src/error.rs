use thiserror::Error;

/// Error taxonomy for enginedesk.
///
/// The three domain kinds (`EmptyRegistry`, `EngineNotFound`, `EmptyJobQueue`)
/// are raised inside registry operations, propagate unmodified, and are
/// rendered exactly once at the menu boundary. `EmptyRegistry` and
/// `EngineNotFound` stay distinct even though both mean "nothing to operate
/// on"; menu messages rely on the distinction.
#[derive(Debug, Error)]
pub enum DeskError {
    #[error("There are no engines registered!")]
    EmptyRegistry,

    #[error("Engine id {0} does not exist!")]
    EngineNotFound(u32),

    #[error("Engine id {0} already contains no jobs!")]
    EmptyJobQueue(u32),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DeskError>;
