use serde::Serialize;

use beseda_shared::ProfileField;
use beseda_store::{ConversationStore, UserProfile};

use crate::error::Result;
use crate::events::ClientEvent;
use crate::Client;

/// Profile panel contents.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProfileView {
    pub profile: UserProfile,
    pub draft: UserProfile,
    pub is_editing: bool,
    pub avatar_fallback: String,
}

impl From<&ConversationStore> for ProfileView {
    fn from(store: &ConversationStore) -> Self {
        Self {
            profile: store.profile().clone(),
            draft: store.draft().clone(),
            is_editing: store.is_editing(),
            avatar_fallback: store.profile().avatar_fallback(),
        }
    }
}

pub fn get_profile(client: &Client) -> Result<ProfileView> {
    let guard = client.lock()?;
    Ok(ProfileView::from(&guard.store))
}

/// Open the profile editor with a fresh draft.
pub fn begin_profile_edit(client: &Client) -> Result<ProfileView> {
    let mut guard = client.lock()?;
    guard.store.begin_profile_edit();
    Ok(ProfileView::from(&guard.store))
}

/// Change one draft field.  `field` is the camelCase field name used by the
/// UI (`displayName`, `status`, `avatarRef`, `email`, `phone`, `bio`).
pub fn update_profile_draft(client: &Client, field: &str, value: String) -> Result<UserProfile> {
    let field: ProfileField = field.parse()?;
    let mut guard = client.lock()?;
    guard.store.update_draft_field(field, value)?;
    Ok(guard.store.draft().clone())
}

/// Save the draft as the new profile.
pub fn commit_profile_edit(client: &Client) -> Result<UserProfile> {
    let mut guard = client.lock()?;
    guard.store.commit_profile_edit()?;
    let profile = guard.store.profile().clone();

    client.emit(ClientEvent::ProfileUpdated(profile.clone()));
    Ok(profile)
}

/// Close the editor without saving.
pub fn cancel_profile_edit(client: &Client) -> Result<ProfileView> {
    let mut guard = client.lock()?;
    guard.store.cancel_profile_edit()?;
    Ok(ProfileView::from(&guard.store))
}
