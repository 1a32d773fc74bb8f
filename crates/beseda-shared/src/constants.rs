/// Application name
pub const APP_NAME: &str = "Beseda";

/// `chrono` format string for message time labels (24-hour, zero-padded)
pub const TIME_LABEL_FORMAT: &str = "%H:%M";

/// Status line shown under a peer's name in the thread header
pub const PEER_ONLINE_STATUS: &str = "В сети";
