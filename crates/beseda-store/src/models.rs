//! Domain model structs owned by the [`ConversationStore`].
//!
//! Every struct derives `Serialize` so it can be handed directly to the UI
//! layer as part of a snapshot.
//!
//! [`ConversationStore`]: crate::ConversationStore

use serde::{Deserialize, Serialize};

use beseda_shared::types::avatar_initial;
use beseda_shared::{ChatId, MessageId, ProfileField, Sender, SettingFlag};

// ---------------------------------------------------------------------------
// Chat
// ---------------------------------------------------------------------------

/// A conversation with one counterpart, plus a rolling summary of its latest
/// message for the chat list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Chat {
    pub id: ChatId,
    /// Never empty.
    pub display_name: String,
    /// Body of the most recently appended message.
    pub last_message_preview: String,
    /// Time label of the most recently appended message.
    pub last_activity_label: String,
    /// Opaque image reference; `None` means "render the fallback initial".
    pub avatar_ref: Option<String>,
    pub unread_count: u32,
}

impl Chat {
    pub(crate) fn new(id: ChatId, display_name: String, avatar_ref: Option<String>) -> Self {
        Self {
            id,
            display_name,
            last_message_preview: String::new(),
            last_activity_label: String::new(),
            avatar_ref,
            unread_count: 0,
        }
    }

    /// Text rendered in place of a missing avatar image.
    pub fn avatar_fallback(&self) -> String {
        avatar_initial(&self.display_name)
    }

    pub fn has_unread(&self) -> bool {
        self.unread_count > 0
    }
}

// ---------------------------------------------------------------------------
// Message
// ---------------------------------------------------------------------------

/// One transcript entry.  Immutable once appended.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: MessageId,
    pub chat_id: ChatId,
    /// Trimmed, never empty.
    pub body: String,
    pub sender: Sender,
    pub time_label: String,
}

// ---------------------------------------------------------------------------
// User profile
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub display_name: String,
    pub status: String,
    pub avatar_ref: String,
    pub email: String,
    pub phone: String,
    pub bio: String,
}

impl UserProfile {
    pub fn field(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::DisplayName => &self.display_name,
            ProfileField::Status => &self.status,
            ProfileField::AvatarRef => &self.avatar_ref,
            ProfileField::Email => &self.email,
            ProfileField::Phone => &self.phone,
            ProfileField::Bio => &self.bio,
        }
    }

    pub(crate) fn set_field(&mut self, field: ProfileField, value: String) {
        let slot = match field {
            ProfileField::DisplayName => &mut self.display_name,
            ProfileField::Status => &mut self.status,
            ProfileField::AvatarRef => &mut self.avatar_ref,
            ProfileField::Email => &mut self.email,
            ProfileField::Phone => &mut self.phone,
            ProfileField::Bio => &mut self.bio,
        };
        *slot = value;
    }

    pub fn avatar_fallback(&self) -> String {
        avatar_initial(&self.display_name)
    }
}

/// Whether the profile panel is showing the committed profile or a draft.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum EditMode {
    #[default]
    Viewing,
    Editing,
}

// ---------------------------------------------------------------------------
// Settings
// ---------------------------------------------------------------------------

/// The seven independent boolean settings.  No flag depends on another.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub notifications: bool,
    pub sound_enabled: bool,
    pub message_preview: bool,
    pub online_status: bool,
    pub read_receipts: bool,
    pub dark_mode: bool,
    pub auto_download: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            notifications: true,
            sound_enabled: true,
            message_preview: true,
            online_status: true,
            read_receipts: true,
            dark_mode: false,
            auto_download: false,
        }
    }
}

impl Settings {
    pub fn get(&self, flag: SettingFlag) -> bool {
        match flag {
            SettingFlag::Notifications => self.notifications,
            SettingFlag::SoundEnabled => self.sound_enabled,
            SettingFlag::MessagePreview => self.message_preview,
            SettingFlag::OnlineStatus => self.online_status,
            SettingFlag::ReadReceipts => self.read_receipts,
            SettingFlag::DarkMode => self.dark_mode,
            SettingFlag::AutoDownload => self.auto_download,
        }
    }

    pub(crate) fn slot_mut(&mut self, flag: SettingFlag) -> &mut bool {
        match flag {
            SettingFlag::Notifications => &mut self.notifications,
            SettingFlag::SoundEnabled => &mut self.sound_enabled,
            SettingFlag::MessagePreview => &mut self.message_preview,
            SettingFlag::OnlineStatus => &mut self.online_status,
            SettingFlag::ReadReceipts => &mut self.read_receipts,
            SettingFlag::DarkMode => &mut self.dark_mode,
            SettingFlag::AutoDownload => &mut self.auto_download,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_avatar_fallback() {
        let chat = Chat::new(ChatId(1), "дмитрий Петров".into(), None);
        assert_eq!(chat.avatar_fallback(), "д");
        assert!(!chat.has_unread());
    }

    #[test]
    fn test_profile_set_field_touches_one_field() {
        let mut profile = UserProfile::default();
        profile.set_field(ProfileField::Phone, "+7 900 000-00-00".into());
        assert_eq!(profile.field(ProfileField::Phone), "+7 900 000-00-00");
        for field in ProfileField::ALL {
            if field != ProfileField::Phone {
                assert_eq!(profile.field(field), "");
            }
        }
    }

    #[test]
    fn test_settings_slot_matches_get() {
        let mut settings = Settings::default();
        for flag in SettingFlag::ALL {
            let before = settings.get(flag);
            *settings.slot_mut(flag) = !before;
            assert_eq!(settings.get(flag), !before);
        }
    }

    #[test]
    fn test_settings_serialize_camel_case() {
        let json = serde_json::to_value(Settings::default()).unwrap();
        assert_eq!(json["soundEnabled"], true);
        assert_eq!(json["darkMode"], false);
    }
}
