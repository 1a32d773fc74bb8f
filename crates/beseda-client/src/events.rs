use serde::Serialize;
use tokio::sync::broadcast;

use beseda_store::{Settings, UserProfile};

pub const EVENT_MESSAGE_SENT: &str = "message-sent";
pub const EVENT_SELECTION_CHANGED: &str = "selection-changed";
pub const EVENT_PROFILE_UPDATED: &str = "profile-updated";
pub const EVENT_SETTING_CHANGED: &str = "setting-changed";

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MessageSentPayload {
    pub chat_id: u64,
    pub message_id: u64,
    pub time: String,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SelectionPayload {
    pub chat_id: Option<u64>,
    pub resolved: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SettingPayload {
    pub flag: String,
    pub enabled: bool,
    pub settings: Settings,
}

/// Notifications pushed to the presentation layer after a committed change.
///
/// Handlers emit while still holding the state lock, so every subscriber
/// receives events in commit order (`message-sent` ids are increasing).
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "event", content = "payload", rename_all = "kebab-case")]
pub enum ClientEvent {
    MessageSent(MessageSentPayload),
    SelectionChanged(SelectionPayload),
    ProfileUpdated(UserProfile),
    SettingChanged(SettingPayload),
}

impl ClientEvent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::MessageSent(_) => EVENT_MESSAGE_SENT,
            Self::SelectionChanged(_) => EVENT_SELECTION_CHANGED,
            Self::ProfileUpdated(_) => EVENT_PROFILE_UPDATED,
            Self::SettingChanged(_) => EVENT_SETTING_CHANGED,
        }
    }
}

/// Fan-out of [`ClientEvent`]s to any number of subscribers.
#[derive(Debug, Clone)]
pub struct EventBus {
    tx: broadcast::Sender<ClientEvent>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity.max(1));
        Self { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ClientEvent> {
        self.tx.subscribe()
    }

    /// Publish an event.  Never fails: with nobody listening the event is
    /// dropped.
    pub fn emit(&self, event: ClientEvent) {
        let name = event.name();
        match self.tx.send(event) {
            Ok(receivers) => tracing::trace!(event = name, receivers, "Event emitted"),
            Err(_) => tracing::trace!(event = name, "No event subscribers"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emit_without_subscribers() {
        let bus = EventBus::new(4);
        bus.emit(ClientEvent::SelectionChanged(SelectionPayload {
            chat_id: None,
            resolved: false,
        }));
    }

    #[test]
    fn test_event_json_shape() {
        let event = ClientEvent::MessageSent(MessageSentPayload {
            chat_id: 1,
            message_id: 7,
            time: "09:05".into(),
        });
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["event"], "message-sent");
        assert_eq!(json["payload"]["chatId"], 1);
        assert_eq!(json["payload"]["messageId"], 7);
        assert_eq!(event.name(), EVENT_MESSAGE_SENT);
    }

    #[tokio::test]
    async fn test_every_subscriber_receives() {
        let bus = EventBus::new(4);
        let mut a = bus.subscribe();
        let mut b = bus.subscribe();

        let event = ClientEvent::ProfileUpdated(UserProfile::default());
        bus.emit(event.clone());

        assert_eq!(a.recv().await.unwrap(), event);
        assert_eq!(b.recv().await.unwrap(), event);
    }
}
