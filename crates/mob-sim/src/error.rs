use mob_core::EntityId;
use mob_selector::SelectorError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("world configuration error: {0}")]
    Config(String),

    #[error("entity tag `{0}` is already in use")]
    DuplicateTag(String),

    #[error("too many entities")]
    TooManyEntities,

    #[error("entity {entity} (`{tag}`): {source}")]
    Entity {
        entity: EntityId,
        tag:    String,
        source: SelectorError,
    },

    #[cfg(feature = "parallel")]
    #[error("failed to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

pub type SimResult<T> = Result<T, SimError>;
