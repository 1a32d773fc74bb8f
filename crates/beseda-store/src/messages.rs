//! Message append path and transcript queries.
//!
//! [`ConversationStore::append_message`] is the only place that pushes onto
//! the message log, and it updates the owning chat's preview and activity
//! label in the same step.  Seeding and [`send_message`] both go through it.
//!
//! [`send_message`]: ConversationStore::send_message

use tracing::info;

use beseda_shared::{ChatId, Sender};

use crate::error::{Result, StoreError};
use crate::models::Message;
use crate::store::ConversationStore;

impl ConversationStore {
    /// Send `body` as the local user into the active chat.
    ///
    /// The body is trimmed and stamped with the clock's current label.  On
    /// success the chat's preview and activity label mirror the new message
    /// and its unread badge is cleared; a copy of the stored message is
    /// returned.  On error nothing changes.
    pub fn send_message(&mut self, body: &str) -> Result<Message> {
        let body = body.trim();
        if body.is_empty() {
            return Err(StoreError::EmptyBody);
        }

        let chat_id = self.active_chat_id.ok_or(StoreError::NoActiveChat)?;
        if self.chat(chat_id).is_none() {
            return Err(StoreError::UnknownChat(chat_id));
        }

        let time_label = self.clock.now_label();
        let message = self.append_message(chat_id, Sender::SelfUser, body, time_label)?;

        if let Some(chat) = self.chat_mut(chat_id) {
            chat.unread_count = 0;
        }

        info!(msg_id = %message.id, chat = %chat_id, "Message sent");
        Ok(message)
    }

    /// Append a message and refresh the chat's derived fields.
    pub(crate) fn append_message(
        &mut self,
        chat_id: ChatId,
        sender: Sender,
        body: &str,
        time_label: String,
    ) -> Result<Message> {
        let body = body.trim();
        if body.is_empty() {
            return Err(StoreError::EmptyBody);
        }

        let chat = self
            .chats
            .iter_mut()
            .find(|c| c.id == chat_id)
            .ok_or(StoreError::UnknownChat(chat_id))?;

        let id = self.last_message_id.next();
        chat.last_message_preview = body.to_string();
        chat.last_activity_label = time_label.clone();

        let message = Message {
            id,
            chat_id,
            body: body.to_string(),
            sender,
            time_label,
        };
        self.messages.push(message.clone());
        self.last_message_id = id;

        Ok(message)
    }

    // ------------------------------------------------------------------
    // Read
    // ------------------------------------------------------------------

    /// Messages of one chat in insertion order.
    pub fn transcript(&self, chat_id: ChatId) -> impl Iterator<Item = &Message> + '_ {
        self.messages.iter().filter(move |m| m.chat_id == chat_id)
    }

    /// Transcript of the active chat; empty when nothing (or a missing chat)
    /// is selected.
    pub fn current_transcript(&self) -> impl Iterator<Item = &Message> + '_ {
        let active = self.active_chat_id;
        self.messages
            .iter()
            .filter(move |m| Some(m.chat_id) == active)
    }

    pub fn last_message(&self, chat_id: ChatId) -> Option<&Message> {
        self.messages.iter().rev().find(|m| m.chat_id == chat_id)
    }

    /// Chats whose preview or activity label disagree with their transcript.
    ///
    /// Chats without any message are skipped.  Always empty for a store that
    /// was only changed through its intents.
    pub fn inconsistent_chats(&self) -> Vec<ChatId> {
        self.chats
            .iter()
            .filter(|chat| match self.last_message(chat.id) {
                Some(last) => {
                    last.body != chat.last_message_preview
                        || last.time_label != chat.last_activity_label
                }
                None => false,
            })
            .map(|chat| chat.id)
            .collect()
    }
}
