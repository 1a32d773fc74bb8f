//! Chat creation and the active-selection cursor.

use tracing::{debug, warn};

use beseda_shared::ChatId;

use crate::error::{Result, StoreError};
use crate::models::Chat;
use crate::store::ConversationStore;

impl ConversationStore {
    // ------------------------------------------------------------------
    // Create
    // ------------------------------------------------------------------

    /// Add a chat at the end of the list.  Only used while seeding.
    pub(crate) fn insert_chat(
        &mut self,
        id: ChatId,
        display_name: &str,
        avatar_ref: Option<&str>,
    ) -> Result<()> {
        let display_name = display_name.trim();
        if display_name.is_empty() {
            return Err(StoreError::EmptyChatName);
        }
        if self.chat(id).is_some() {
            return Err(StoreError::DuplicateChat(id));
        }

        self.chats.push(Chat::new(
            id,
            display_name.to_string(),
            avatar_ref.map(String::from),
        ));
        Ok(())
    }

    /// Set the unread badge of a seeded chat.
    pub(crate) fn set_unread(&mut self, id: ChatId, count: u32) -> Result<()> {
        let chat = self.chat_mut(id).ok_or(StoreError::UnknownChat(id))?;
        chat.unread_count = count;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Selection
    // ------------------------------------------------------------------

    /// Open a chat in the thread view, or close it with `None`.
    ///
    /// The id is stored as given.  Returns `true` when the new selection
    /// resolves to an existing chat; a dangling id leaves the thread view
    /// empty and makes [`send_message`](Self::send_message) a no-op.
    /// Unread badges are not touched.
    pub fn select_chat(&mut self, id: Option<ChatId>) -> bool {
        self.active_chat_id = id;

        match id {
            Some(id) if self.chat(id).is_none() => {
                warn!(chat = %id, "Selected chat does not exist");
                false
            }
            Some(id) => {
                debug!(chat = %id, "Chat selected");
                true
            }
            None => {
                debug!("Chat deselected");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use beseda_shared::{FixedClock, Sender};

    use super::*;
    use crate::seed::SeedBuilder;

    fn two_chats() -> ConversationStore {
        SeedBuilder::new(FixedClock::at(10, 0).unwrap())
            .chat(1, "Анна Смирнова", None)
            .unwrap()
            .chat(2, "Дмитрий Петров", Some("avatars/dmitry.png"))
            .unwrap()
            .message(1, Sender::Peer, "Привет!", "09:00")
            .unwrap()
            .unread(1, 3)
            .unwrap()
            .build()
    }

    #[test]
    fn test_select_existing_chat() {
        let mut store = two_chats();
        assert!(store.select_chat(Some(ChatId(2))));
        assert_eq!(store.active_chat_id(), Some(ChatId(2)));
        assert_eq!(store.active_chat().unwrap().display_name, "Дмитрий Петров");
    }

    #[test]
    fn test_select_does_not_clear_unread() {
        let mut store = two_chats();
        store.select_chat(Some(ChatId(1)));
        assert_eq!(store.chat(ChatId(1)).unwrap().unread_count, 3);
    }

    #[test]
    fn test_select_is_idempotent() {
        let mut once = two_chats();
        once.select_chat(Some(ChatId(1)));

        let mut twice = two_chats();
        twice.select_chat(Some(ChatId(1)));
        twice.select_chat(Some(ChatId(1)));

        assert_eq!(once.snapshot(), twice.snapshot());
    }

    #[test]
    fn test_select_dangling_id() {
        let mut store = two_chats();
        assert!(!store.select_chat(Some(ChatId(99))));
        assert_eq!(store.active_chat_id(), Some(ChatId(99)));
        assert!(store.active_chat().is_none());
        assert_eq!(store.current_transcript().count(), 0);
    }

    #[test]
    fn test_deselect() {
        let mut store = two_chats();
        store.select_chat(Some(ChatId(1)));
        assert!(!store.select_chat(None));
        assert_eq!(store.active_chat_id(), None);
        assert_eq!(store.current_transcript().count(), 0);
    }

    #[test]
    fn test_insert_chat_validation() {
        let mut store = two_chats();
        assert_eq!(
            store.insert_chat(ChatId(3), "   ", None),
            Err(StoreError::EmptyChatName)
        );
        assert_eq!(
            store.insert_chat(ChatId(1), "Другая Анна", None),
            Err(StoreError::DuplicateChat(ChatId(1)))
        );
        assert_eq!(store.chats().len(), 2);
    }
}
