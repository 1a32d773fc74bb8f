use thiserror::Error;

use beseda_shared::error::{UnknownProfileField, UnknownSettingFlag};
use beseda_store::StoreError;

/// Errors returned by command handlers.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Lock poisoned: {0}")]
    LockPoisoned(String),

    /// The store refused the intent; nothing changed.
    #[error("Rejected: {0}")]
    Rejected(#[from] StoreError),

    #[error(transparent)]
    UnknownSetting(#[from] UnknownSettingFlag),

    #[error(transparent)]
    UnknownProfileField(#[from] UnknownProfileField),

    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ClientError>;
