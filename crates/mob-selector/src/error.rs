use mob_core::EntryId;
use mob_goal::GoalError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SelectorError {
    /// A goal action failed mid-tick.  The selector is poisoned afterwards.
    #[error("goal `{goal}` ({entry}) failed: {source}")]
    Goal {
        entry:  EntryId,
        goal:   String,
        source: GoalError,
    },

    #[error("selector was poisoned by a failure in {entry}; reset it before ticking again")]
    Poisoned { entry: EntryId },

    #[error("no goal registered as {0}")]
    UnknownEntry(EntryId),

    #[error("too many goals: the limit is {max}")]
    TooManyGoals { max: usize },

    /// Every `EntryId` has been handed out.  Ids of removed goals are not
    /// reused, so this can happen with few live goals.
    #[error("entry ids exhausted; build a new selector")]
    IdsExhausted,

    #[error("selector configuration error: {0}")]
    Config(String),

    #[error("selector invariant violated: {0}")]
    InvariantViolation(String),
}

pub type SelectorResult<T> = Result<T, SelectorError>;
