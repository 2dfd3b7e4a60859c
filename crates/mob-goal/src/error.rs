use thiserror::Error;

/// Failure reported by a goal's `start`, `stop`, or `tick`.
///
/// The selector never retries or swallows these; it wraps them with the
/// offending entry and returns them from `GoalSelector::tick`.
#[derive(Debug, Error)]
pub enum GoalError {
    #[error("goal failed: {0}")]
    Failed(String),

    #[error("goal state is inconsistent: {0}")]
    InvalidState(String),

    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error + Send + Sync + 'static>),
}

pub type GoalResult<T> = Result<T, GoalError>;
