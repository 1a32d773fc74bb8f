use beseda_shared::SettingFlag;
use beseda_store::Settings;

use crate::error::Result;
use crate::events::{ClientEvent, SettingPayload};
use crate::Client;

pub fn get_settings(client: &Client) -> Result<Settings> {
    let guard = client.lock()?;
    Ok(*guard.store.settings())
}

/// Flip the setting named `flag` (camelCase, e.g. `darkMode`) and return
/// its new value.
pub fn toggle_setting(client: &Client, flag: &str) -> Result<bool> {
    let flag: SettingFlag = flag.parse()?;

    let mut guard = client.lock()?;
    let enabled = guard.store.toggle_setting(flag);
    let settings = *guard.store.settings();

    client.emit(ClientEvent::SettingChanged(SettingPayload {
        flag: flag.to_string(),
        enabled,
        settings,
    }));

    Ok(enabled)
}
