//! Client configuration loaded from environment variables.
//!
//! All settings have defaults so the client starts with zero configuration.

use beseda_shared::ChatId;

/// Client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Fill the store with the mock chats and profile.
    /// Env: `BESEDA_DEMO_DATA` (true/1/yes/on or false/0/no/off)
    /// Default: `true`
    pub demo_data: bool,

    /// Chat opened at startup.
    /// Env: `BESEDA_INITIAL_CHAT` (chat id, or `none`)
    /// Default: `1`
    pub initial_chat: Option<ChatId>,

    /// Buffer size of the event broadcast channel.  Slow subscribers that
    /// fall further behind than this miss events.
    /// Env: `BESEDA_EVENT_CAPACITY`
    /// Default: `64`
    pub event_capacity: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            demo_data: true,
            initial_chat: Some(ChatId(1)),
            event_capacity: 64,
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(val) = lookup("BESEDA_DEMO_DATA") {
            match parse_bool(&val) {
                Some(enabled) => config.demo_data = enabled,
                None => {
                    tracing::warn!(value = %val, "Invalid BESEDA_DEMO_DATA, using default");
                }
            }
        }

        if let Some(val) = lookup("BESEDA_INITIAL_CHAT") {
            match parse_initial_chat(&val) {
                Ok(chat) => config.initial_chat = chat,
                Err(e) => {
                    tracing::warn!(value = %val, error = %e, "Invalid BESEDA_INITIAL_CHAT, using default");
                }
            }
        }

        if let Some(val) = lookup("BESEDA_EVENT_CAPACITY") {
            match val.parse::<usize>() {
                Ok(n) if n > 0 => config.event_capacity = n,
                _ => {
                    tracing::warn!(value = %val, "Invalid BESEDA_EVENT_CAPACITY, using default");
                }
            }
        }

        // RUST_LOG is handled directly by tracing-subscriber's EnvFilter.

        config
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn parse_initial_chat(value: &str) -> Result<Option<ChatId>, String> {
    let value = value.trim();
    if value.is_empty() || value.eq_ignore_ascii_case("none") {
        return Ok(None);
    }
    value
        .parse::<u64>()
        .map(|id| Some(ChatId(id)))
        .map_err(|e| format!("expected a chat id or \"none\": {e}"))
}
