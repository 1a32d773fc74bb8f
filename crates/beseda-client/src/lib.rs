pub mod commands;
pub mod config;
pub mod error;
pub mod events;
pub mod state;

use std::sync::MutexGuard;

use tokio::sync::broadcast;
use tracing_subscriber::{fmt, EnvFilter};

use beseda_shared::{Clock, SystemClock};
use beseda_store::ConversationStore;

use crate::config::ClientConfig;
use crate::error::{ClientError, Result};
use crate::events::{ClientEvent, EventBus};
use crate::state::{AppState, SharedState};

/// Install the global `tracing` subscriber.
///
/// Respects `RUST_LOG`.  Safe to call more than once; later calls are
/// ignored.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("beseda_client_lib=debug,beseda_store=info,warn"));

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .try_init();
}

/// Handle the presentation layer holds on to.  Cheap to clone.
#[derive(Clone)]
pub struct Client {
    state: SharedState,
    events: EventBus,
}

impl Client {
    /// Start a client that stamps messages with the local wall clock.
    pub fn launch(config: ClientConfig) -> Result<Self> {
        Self::launch_with_clock(config, SystemClock)
    }

    pub fn launch_with_clock(config: ClientConfig, clock: impl Clock + 'static) -> Result<Self> {
        tracing::info!(?config, "Starting {} client", beseda_shared::constants::APP_NAME);

        let mut store = if config.demo_data {
            ConversationStore::with_demo_data(clock)?
        } else {
            ConversationStore::new(clock)
        };

        if config.initial_chat.is_some() {
            store.select_chat(config.initial_chat);
        }

        let events = EventBus::new(config.event_capacity);
        let state = AppState::new(store).into_shared();

        Ok(Self { state, events })
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ClientEvent> {
        self.events.subscribe()
    }

    pub(crate) fn lock(&self) -> Result<MutexGuard<'_, AppState>> {
        self.state
            .lock()
            .map_err(|e| ClientError::LockPoisoned(e.to_string()))
    }

    pub(crate) fn emit(&self, event: ClientEvent) {
        self.events.emit(event);
    }
}
