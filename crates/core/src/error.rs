use triage_types::TypesError;
use triage_uuid::UuidError;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("conversation not found: {0}")]
    ConversationNotFound(u64),
    #[error("conversation store is unavailable")]
    StoreUnavailable,

    #[error(transparent)]
    Types(#[from] TypesError),
    #[error(transparent)]
    Uuid(#[from] UuidError),
}

pub type CoreResult<T> = std::result::Result<T, CoreError>;
