//! Immutable view of the store handed to the presentation layer.

use serde::Serialize;

use beseda_shared::ChatId;

use crate::models::{Chat, Message, Settings, UserProfile};
use crate::store::ConversationStore;

/// Everything the UI needs to render one frame.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StoreSnapshot {
    pub chats: Vec<Chat>,
    pub active_chat_id: Option<ChatId>,
    /// Header data for the thread view; `None` renders the empty state.
    pub active_chat: Option<Chat>,
    pub current_chat_transcript: Vec<Message>,
    pub user_profile: UserProfile,
    pub edit_draft: UserProfile,
    pub is_editing: bool,
    pub settings: Settings,
}

impl ConversationStore {
    pub fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            chats: self.chats.clone(),
            active_chat_id: self.active_chat_id,
            active_chat: self.active_chat().cloned(),
            current_chat_transcript: self.current_transcript().cloned().collect(),
            user_profile: self.profile.clone(),
            edit_draft: self.draft.clone(),
            is_editing: self.is_editing(),
            settings: self.settings,
        }
    }
}

#[cfg(test)]
mod tests {
    use beseda_shared::{FixedClock, Sender};

    use super::*;
    use crate::seed::SeedBuilder;

    #[test]
    fn test_snapshot_follows_selection() {
        let mut store = SeedBuilder::new(FixedClock::at(9, 0).unwrap())
            .chat(1, "Анна Смирнова", None)
            .unwrap()
            .chat(2, "Дмитрий Петров", None)
            .unwrap()
            .message(1, Sender::Peer, "Привет!", "08:00")
            .unwrap()
            .message(2, Sender::Peer, "Отправил файлы", "08:30")
            .unwrap()
            .build();

        let empty = store.snapshot();
        assert!(empty.active_chat.is_none());
        assert!(empty.current_chat_transcript.is_empty());

        store.select_chat(Some(ChatId(2)));
        let snap = store.snapshot();
        assert_eq!(snap.active_chat.unwrap().display_name, "Дмитрий Петров");
        assert_eq!(snap.current_chat_transcript.len(), 1);
        assert_eq!(snap.current_chat_transcript[0].body, "Отправил файлы");
    }

    #[test]
    fn test_snapshot_json_shape() {
        let store = ConversationStore::new(FixedClock::at(9, 0).unwrap());
        let json = serde_json::to_value(store.snapshot()).unwrap();

        for key in [
            "chats",
            "activeChatId",
            "activeChat",
            "currentChatTranscript",
            "userProfile",
            "editDraft",
            "isEditing",
            "settings",
        ] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
        assert_eq!(json["activeChatId"], serde_json::Value::Null);
    }
}
