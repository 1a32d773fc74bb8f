//! The [`ConversationStore`] aggregate.
//!
//! The store is the single owner of chats, messages, the active selection,
//! the user profile (with its edit draft) and the settings.  Its fields are
//! private: the intents implemented in the sibling modules (`chats`,
//! `messages`, `profile`, `settings`) are the only way to change them, and
//! each one leaves the derived chat-list fields consistent before returning.

use std::fmt;

use beseda_shared::{ChatId, Clock, MessageId};

use crate::models::{Chat, EditMode, Message, Settings, UserProfile};

/// In-memory state of the messaging client.
pub struct ConversationStore {
    pub(crate) chats: Vec<Chat>,
    /// Every message of every chat, in insertion order.
    pub(crate) messages: Vec<Message>,
    /// Last id handed out; `MessageId(0)` means none yet.
    pub(crate) last_message_id: MessageId,
    pub(crate) active_chat_id: Option<ChatId>,
    pub(crate) profile: UserProfile,
    pub(crate) draft: UserProfile,
    pub(crate) edit_mode: EditMode,
    pub(crate) settings: Settings,
    pub(crate) clock: Box<dyn Clock>,
}

impl ConversationStore {
    /// Create an empty store: no chats, no selection, default profile and
    /// settings.
    pub fn new(clock: impl Clock + 'static) -> Self {
        Self {
            chats: Vec::new(),
            messages: Vec::new(),
            last_message_id: MessageId(0),
            active_chat_id: None,
            profile: UserProfile::default(),
            draft: UserProfile::default(),
            edit_mode: EditMode::Viewing,
            settings: Settings::default(),
            clock: Box::new(clock),
        }
    }

    /// All chats in list order.
    pub fn chats(&self) -> &[Chat] {
        &self.chats
    }

    pub fn chat(&self, id: ChatId) -> Option<&Chat> {
        self.chats.iter().find(|c| c.id == id)
    }

    pub fn active_chat_id(&self) -> Option<ChatId> {
        self.active_chat_id
    }

    /// The selected chat, if the selection points at one that exists.
    pub fn active_chat(&self) -> Option<&Chat> {
        self.active_chat_id.and_then(|id| self.chat(id))
    }

    /// Total number of messages across all chats.
    pub fn message_count(&self) -> usize {
        self.messages.len()
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    /// The staged profile.  Equal to [`profile`](Self::profile) whenever the
    /// store is not in editing mode.
    pub fn draft(&self) -> &UserProfile {
        &self.draft
    }

    pub fn is_editing(&self) -> bool {
        self.edit_mode == EditMode::Editing
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub(crate) fn chat_mut(&mut self, id: ChatId) -> Option<&mut Chat> {
        self.chats.iter_mut().find(|c| c.id == id)
    }
}

impl fmt::Debug for ConversationStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConversationStore")
            .field("chats", &self.chats.len())
            .field("messages", &self.messages.len())
            .field("active_chat_id", &self.active_chat_id)
            .field("edit_mode", &self.edit_mode)
            .finish_non_exhaustive()
    }
}
