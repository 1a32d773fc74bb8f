//! Application state shared across all command handlers.
//!
//! The [`AppState`] struct is wrapped in `Arc<Mutex<>>` so that handlers
//! running on any thread see one consistent store.  Each handler takes the
//! lock once and runs its whole intent inside it, so a reader can never see
//! a message appended without its chat preview updated.

use std::sync::{Arc, Mutex};

use beseda_store::ConversationStore;

/// Shared handle to the application state.
pub type SharedState = Arc<Mutex<AppState>>;

/// Central application state.
pub struct AppState {
    /// Owner of every chat, message, profile and setting.
    pub store: ConversationStore,
}

impl AppState {
    pub fn new(store: ConversationStore) -> Self {
        Self { store }
    }

    pub fn into_shared(self) -> SharedState {
        Arc::new(Mutex::new(self))
    }
}
