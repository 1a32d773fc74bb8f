//! Initial data for the store.
//!
//! Seed messages go through the same append path as sent messages, so the
//! chat list previews are derived from the transcripts rather than written
//! by hand.  Unread badges are the one field seeded directly.

use beseda_shared::{ChatId, Clock, Sender};

use crate::error::Result;
use crate::models::UserProfile;
use crate::store::ConversationStore;

/// Assembles a [`ConversationStore`] from chats, messages and badges.
pub struct SeedBuilder {
    store: ConversationStore,
}

impl SeedBuilder {
    pub fn new(clock: impl Clock + 'static) -> Self {
        Self {
            store: ConversationStore::new(clock),
        }
    }

    pub fn chat(
        mut self,
        id: u64,
        display_name: &str,
        avatar_ref: Option<&str>,
    ) -> Result<Self> {
        self.store.insert_chat(ChatId(id), display_name, avatar_ref)?;
        Ok(self)
    }

    /// Append a historical message with an explicit time label.
    pub fn message(
        mut self,
        chat: u64,
        sender: Sender,
        body: &str,
        time_label: &str,
    ) -> Result<Self> {
        self.store
            .append_message(ChatId(chat), sender, body, time_label.to_string())?;
        Ok(self)
    }

    pub fn unread(mut self, chat: u64, count: u32) -> Result<Self> {
        self.store.set_unread(ChatId(chat), count)?;
        Ok(self)
    }

    pub fn profile(mut self, profile: UserProfile) -> Self {
        self.store.draft = profile.clone();
        self.store.profile = profile;
        self
    }

    pub fn build(self) -> ConversationStore {
        self.store
    }
}

/// The demo profile shown in the profile panel.
pub fn demo_profile() -> UserProfile {
    UserProfile {
        display_name: "Вы".into(),
        status: "В сети".into(),
        email: "user@example.com".into(),
        ..UserProfile::default()
    }
}

impl ConversationStore {
    /// A store filled with the mock chats the client starts with.
    pub fn with_demo_data(clock: impl Clock + 'static) -> Result<Self> {
        let store = SeedBuilder::new(clock)
            .chat(1, "Анна Смирнова", None)?
            .chat(2, "Дмитрий Петров", None)?
            .chat(3, "Команда проекта", None)?
            .chat(4, "Елена Кузнецова", None)?
            .message(1, Sender::Peer, "Привет! Как дела?", "14:30")?
            .message(1, Sender::SelfUser, "Отлично! А у тебя?", "14:31")?
            .message(1, Sender::Peer, "Тоже хорошо, работаю над новым проектом", "14:32")?
            .message(2, Sender::Peer, "Отправил файлы", "13:45")?
            .message(3, Sender::Peer, "Встреча в 15:00", "12:20")?
            .message(4, Sender::Peer, "Спасибо за помощь!", "Вчера")?
            .unread(1, 2)?
            .unread(3, 5)?
            .profile(demo_profile())
            .build();

        Ok(store)
    }
}
