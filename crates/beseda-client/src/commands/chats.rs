use serde::Serialize;
use tracing::debug;

use beseda_shared::constants::PEER_ONLINE_STATUS;
use beseda_shared::ChatId;
use beseda_store::Chat;

use crate::error::Result;
use crate::events::{ClientEvent, SelectionPayload};
use crate::Client;

/// One row of the chat list.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChatDto {
    pub id: u64,
    pub name: String,
    pub last_message: String,
    pub time: String,
    pub avatar: Option<String>,
    pub avatar_fallback: String,
    /// `None` when there is nothing unread, so the badge is hidden.
    pub unread: Option<u32>,
}

impl From<&Chat> for ChatDto {
    fn from(c: &Chat) -> Self {
        Self {
            id: c.id.0,
            name: c.display_name.clone(),
            last_message: c.last_message_preview.clone(),
            time: c.last_activity_label.clone(),
            avatar: c.avatar_ref.clone(),
            avatar_fallback: c.avatar_fallback(),
            unread: c.has_unread().then_some(c.unread_count),
        }
    }
}

/// Thread view header for the open chat.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChatHeaderDto {
    pub chat: ChatDto,
    pub status: String,
}

pub fn list_chats(client: &Client) -> Result<Vec<ChatDto>> {
    let guard = client.lock()?;
    Ok(guard.store.chats().iter().map(ChatDto::from).collect())
}

/// Open a chat (or close the thread with `None`).  Returns whether the
/// selection points at an existing chat.
pub fn select_chat(client: &Client, chat_id: Option<u64>) -> Result<bool> {
    let mut guard = client.lock()?;
    let resolved = guard.store.select_chat(chat_id.map(ChatId));

    client.emit(ClientEvent::SelectionChanged(SelectionPayload { chat_id, resolved }));
    Ok(resolved)
}

/// Header of the open chat; `None` means the thread shows its empty state.
pub fn get_active_chat(client: &Client) -> Result<Option<ChatHeaderDto>> {
    let guard = client.lock()?;
    let header = guard.store.active_chat().map(|chat| ChatHeaderDto {
        chat: ChatDto::from(chat),
        status: PEER_ONLINE_STATUS.to_string(),
    });
    if header.is_none() {
        debug!("No active chat");
    }
    Ok(header)
}
