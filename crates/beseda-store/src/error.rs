use thiserror::Error;

use beseda_shared::ChatId;

/// Rejected intents.
///
/// Every variant is a validation no-op: when an intent returns one of these,
/// the store is exactly as it was before the call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The message body was empty or whitespace-only.
    #[error("Message body is empty")]
    EmptyBody,

    /// A message was sent while no chat is selected.
    #[error("No chat is selected")]
    NoActiveChat,

    /// The referenced chat does not exist.
    #[error("Chat not found: {0}")]
    UnknownChat(ChatId),

    /// A draft operation was issued while the profile is not being edited.
    #[error("Profile is not being edited")]
    NotEditing,

    /// Seeding a chat without a display name.
    #[error("Chat display name is empty")]
    EmptyChatName,

    /// Seeding a chat whose id is already taken.
    #[error("Chat id already in use: {0}")]
    DuplicateChat(ChatId),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, StoreError>;
