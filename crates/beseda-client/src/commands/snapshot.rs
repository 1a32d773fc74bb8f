use beseda_store::StoreSnapshot;

use crate::error::Result;
use crate::Client;

/// Everything needed to render the whole screen, taken under one lock.
pub fn get_snapshot(client: &Client) -> Result<StoreSnapshot> {
    let guard = client.lock()?;
    Ok(guard.store.snapshot())
}

/// [`get_snapshot`] serialized as JSON for a web view.
pub fn get_snapshot_json(client: &Client) -> Result<String> {
    let snapshot = get_snapshot(client)?;
    Ok(serde_json::to_string(&snapshot)?)
}
