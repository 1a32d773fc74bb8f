//! # beseda-store
//!
//! In-memory conversation state for the Beseda client.
//!
//! The crate exposes a synchronous [`ConversationStore`] that owns every
//! chat, message, the active selection, the user profile and the settings.
//! Callers read it through accessors or an owned [`StoreSnapshot`] and change
//! it only through its intents (`select_chat`, `send_message`, the profile
//! edit operations and `toggle_setting`).

pub mod chats;
pub mod messages;
pub mod models;
pub mod profile;
pub mod seed;
pub mod settings;
pub mod snapshot;
pub mod store;

mod error;

pub use error::{Result, StoreError};
pub use models::*;
pub use seed::SeedBuilder;
pub use snapshot::StoreSnapshot;
pub use store::ConversationStore;
