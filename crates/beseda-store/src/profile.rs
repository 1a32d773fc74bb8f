//! Profile editing.
//!
//! Two states: viewing and editing.  `begin_profile_edit` is the only way
//! into editing; `commit_profile_edit` and `cancel_profile_edit` are the only
//! ways out.  Edits land in the draft and reach the committed profile all at
//! once on commit.

use tracing::{debug, info};

use beseda_shared::ProfileField;

use crate::error::{Result, StoreError};
use crate::models::EditMode;
use crate::store::ConversationStore;

impl ConversationStore {
    /// Enter editing mode with a fresh copy of the committed profile.
    ///
    /// Calling this while already editing throws away the unsaved draft.
    pub fn begin_profile_edit(&mut self) {
        self.draft = self.profile.clone();
        self.edit_mode = EditMode::Editing;
        debug!("Profile edit started");
    }

    /// Change one field of the draft.  Empty values are allowed.
    pub fn update_draft_field(
        &mut self,
        field: ProfileField,
        value: impl Into<String>,
    ) -> Result<()> {
        if !self.is_editing() {
            return Err(StoreError::NotEditing);
        }
        self.draft.set_field(field, value.into());
        Ok(())
    }

    /// Promote the draft to the committed profile and leave editing mode.
    pub fn commit_profile_edit(&mut self) -> Result<()> {
        if !self.is_editing() {
            return Err(StoreError::NotEditing);
        }
        self.profile = self.draft.clone();
        self.edit_mode = EditMode::Viewing;
        info!(display_name = %self.profile.display_name, "Profile updated");
        Ok(())
    }

    /// Drop the draft and leave editing mode; the profile is untouched.
    pub fn cancel_profile_edit(&mut self) -> Result<()> {
        if !self.is_editing() {
            return Err(StoreError::NotEditing);
        }
        self.draft = self.profile.clone();
        self.edit_mode = EditMode::Viewing;
        debug!("Profile edit cancelled");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use beseda_shared::FixedClock;

    use super::*;
    use crate::models::UserProfile;
    use crate::seed::SeedBuilder;

    fn store() -> ConversationStore {
        SeedBuilder::new(FixedClock::at(12, 0).unwrap())
            .profile(UserProfile {
                display_name: "Вы".into(),
                status: "В сети".into(),
                email: "user@example.com".into(),
                ..UserProfile::default()
            })
            .build()
    }

    #[test]
    fn test_cancel_leaves_profile_unchanged() {
        for field in ProfileField::ALL {
            let mut store = store();
            let before = store.profile().clone();

            store.begin_profile_edit();
            store.update_draft_field(field, "изменено").unwrap();
            assert_eq!(store.draft().field(field), "изменено");
            store.cancel_profile_edit().unwrap();

            assert_eq!(*store.profile(), before);
            assert_eq!(*store.draft(), before);
            assert!(!store.is_editing());
        }
    }

    #[test]
    fn test_commit_sets_only_edited_field() {
        for field in ProfileField::ALL {
            let mut store = store();
            let before = store.profile().clone();

            store.begin_profile_edit();
            store.update_draft_field(field, "изменено").unwrap();
            store.commit_profile_edit().unwrap();

            assert_eq!(store.profile().field(field), "изменено");
            for other in ProfileField::ALL.into_iter().filter(|f| *f != field) {
                assert_eq!(store.profile().field(other), before.field(other));
            }
            assert!(!store.is_editing());
        }
    }

    #[test]
    fn test_commit_accepts_empty_fields() {
        let mut store = store();
        store.begin_profile_edit();
        store.update_draft_field(ProfileField::DisplayName, "").unwrap();
        store.commit_profile_edit().unwrap();
        assert_eq!(store.profile().display_name, "");
    }

    #[test]
    fn test_begin_twice_resets_draft() {
        let mut store = store();
        store.begin_profile_edit();
        store.update_draft_field(ProfileField::Bio, "черновик").unwrap();
        store.begin_profile_edit();

        assert!(store.is_editing());
        assert_eq!(store.draft(), store.profile());
    }

    #[test]
    fn test_draft_ops_rejected_while_viewing() {
        let mut store = store();
        let before = store.snapshot();

        assert_eq!(
            store.update_draft_field(ProfileField::Email, "x@y.z"),
            Err(StoreError::NotEditing)
        );
        assert_eq!(store.commit_profile_edit(), Err(StoreError::NotEditing));
        assert_eq!(store.cancel_profile_edit(), Err(StoreError::NotEditing));
        assert_eq!(store.snapshot(), before);
    }

    #[test]
    fn test_draft_edits_are_invisible_until_commit() {
        let mut store = store();
        store.begin_profile_edit();
        store.update_draft_field(ProfileField::Status, "Не беспокоить").unwrap();
        store.update_draft_field(ProfileField::Phone, "+7 900 123-45-67").unwrap();

        assert_eq!(store.profile().status, "В сети");
        assert_eq!(store.profile().phone, "");

        store.commit_profile_edit().unwrap();
        assert_eq!(store.profile().status, "Не беспокоить");
        assert_eq!(store.profile().phone, "+7 900 123-45-67");
    }
}
