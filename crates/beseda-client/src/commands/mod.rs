//! Command handlers invoked by the presentation layer.
//!
//! Each sub-module groups related commands by domain.  Every handler takes
//! the [`Client`](crate::Client) handle, runs its intent under one lock, and
//! emits its event before releasing it, so subscribers see events in the
//! order the intents were applied.

pub mod chats;
pub mod messaging;
pub mod profile;
pub mod settings;
pub mod snapshot;

#[cfg(test)]
pub(crate) fn test_client() -> (crate::Client, beseda_shared::FixedClock) {
    let clock = beseda_shared::FixedClock::at(9, 5).unwrap();
    let client =
        crate::Client::launch_with_clock(crate::config::ClientConfig::default(), clock.clone())
            .unwrap();
    (client, clock)
}
