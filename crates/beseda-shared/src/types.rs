use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{UnknownProfileField, UnknownSettingFlag};

// Chat identity = small integer assigned at seed time, never reused
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct ChatId(pub u64);

impl fmt::Display for ChatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Store-wide message identifier. Allocated from a single counter, so ids
/// increase across all chats, not per chat.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct MessageId(pub u64);

impl MessageId {
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Who wrote a message.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum Sender {
    /// The local user.
    #[serde(rename = "self")]
    SelfUser,
    /// The counterpart of the chat.
    Peer,
}

/// The closed set of boolean settings shown in the settings panel.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum SettingFlag {
    Notifications,
    SoundEnabled,
    MessagePreview,
    OnlineStatus,
    ReadReceipts,
    DarkMode,
    AutoDownload,
}

impl SettingFlag {
    pub const ALL: [SettingFlag; 7] = [
        Self::Notifications,
        Self::SoundEnabled,
        Self::MessagePreview,
        Self::OnlineStatus,
        Self::ReadReceipts,
        Self::DarkMode,
        Self::AutoDownload,
    ];

    /// Name used by the UI layer (`camelCase`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Notifications => "notifications",
            Self::SoundEnabled => "soundEnabled",
            Self::MessagePreview => "messagePreview",
            Self::OnlineStatus => "onlineStatus",
            Self::ReadReceipts => "readReceipts",
            Self::DarkMode => "darkMode",
            Self::AutoDownload => "autoDownload",
        }
    }
}

impl fmt::Display for SettingFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SettingFlag {
    type Err = UnknownSettingFlag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|flag| flag.as_str() == s)
            .ok_or_else(|| UnknownSettingFlag(s.to_string()))
    }
}

/// Editable fields of the user profile.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum ProfileField {
    DisplayName,
    Status,
    AvatarRef,
    Email,
    Phone,
    Bio,
}

impl ProfileField {
    pub const ALL: [ProfileField; 6] = [
        Self::DisplayName,
        Self::Status,
        Self::AvatarRef,
        Self::Email,
        Self::Phone,
        Self::Bio,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::DisplayName => "displayName",
            Self::Status => "status",
            Self::AvatarRef => "avatarRef",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Bio => "bio",
        }
    }
}

impl FromStr for ProfileField {
    type Err = UnknownProfileField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| UnknownProfileField(s.to_string()))
    }
}

/// Fallback avatar text: the first character of a display name, as written.
pub fn avatar_initial(name: &str) -> String {
    name.chars().next().map(String::from).unwrap_or_default()
}
