use tracing::info;

use beseda_shared::SettingFlag;

use crate::store::ConversationStore;

impl ConversationStore {
    /// Flip one setting and return its new value.
    pub fn toggle_setting(&mut self, flag: SettingFlag) -> bool {
        let slot = self.settings.slot_mut(flag);
        *slot = !*slot;
        let enabled = *slot;
        info!(flag = %flag, enabled, "Setting toggled");
        enabled
    }
}
