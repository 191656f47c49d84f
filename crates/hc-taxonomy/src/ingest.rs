//! Hub inventory ingestion: raw device/room JSON into interpreter records.

use std::collections::HashSet;

use serde::Deserialize;

use hc_protocol::{DeviceRecord, RoomMap};

use crate::catalog::CategoryCatalog;
use crate::detect::detect_category;
use crate::error::{InventoryError, InventoryResult};

/// Device as returned by the hub's `/api/devices` endpoint (fields we use).
#[derive(Debug, Clone, Deserialize)]
pub struct HubDevice {
    pub id: u32,
    pub name: String,
    /// Vendor type string, e.g. "com.fibaro.multilevelSwitch".
    #[serde(rename = "type", default)]
    pub device_type: String,
    /// 0 when the device is not assigned to a room.
    #[serde(rename = "roomID", default)]
    pub room_id: u32,
    #[serde(default = "default_true")]
    pub enabled: bool,
}

/// Room as returned by the hub's `/api/rooms` endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct HubRoom {
    pub id: u32,
    pub name: String,
}

fn default_true() -> bool {
    true
}

/// Resolve category and capabilities for one hub device.
pub fn resolve_device(hub: &HubDevice, catalog: &dyn CategoryCatalog) -> DeviceRecord {
    let category = detect_category(&hub.device_type);
    let mut record = DeviceRecord::new(hub.id, hub.name.clone(), category)
        .with_capabilities(catalog.capabilities(category));
    if hub.room_id != 0 {
        record.room_id = Some(hub.room_id);
    }
    record
}

/// Parse a JSON array of hub devices into interpreter records.
pub fn parse_devices(json: &str, catalog: &dyn CategoryCatalog) -> InventoryResult<Vec<DeviceRecord>> {
    let raw: Vec<HubDevice> = serde_json::from_str(json)?;
    resolve_devices(&raw, catalog)
}

/// Resolve already-deserialized hub devices.
///
/// Disabled devices are dropped. Other hub fields such as `visible` are not
/// read, so hidden devices stay addressable by name.
pub fn resolve_devices(
    raw: &[HubDevice],
    catalog: &dyn CategoryCatalog,
) -> InventoryResult<Vec<DeviceRecord>> {
    let mut seen = HashSet::new();
    let mut records = Vec::with_capacity(raw.len());

    for hub in raw {
        if !seen.insert(hub.id) {
            return Err(InventoryError::DuplicateDevice { id: hub.id });
        }
        if !hub.enabled {
            tracing::debug!(device_id = hub.id, name = %hub.name, "skipping disabled device");
            continue;
        }
        records.push(resolve_device(hub, catalog));
    }

    tracing::debug!(
        total = raw.len(),
        kept = records.len(),
        "hub devices resolved"
    );
    Ok(records)
}

/// Parse a JSON array of hub rooms into a room map.
pub fn parse_rooms(json: &str) -> InventoryResult<RoomMap> {
    let raw: Vec<HubRoom> = serde_json::from_str(json)?;
    collect_rooms(raw)
}

/// Build a room map, rejecting repeated ids.
pub fn collect_rooms(raw: Vec<HubRoom>) -> InventoryResult<RoomMap> {
    let mut rooms = RoomMap::new();
    for room in raw {
        if rooms.insert(room.id, room.name).is_some() {
            return Err(InventoryError::DuplicateRoom { id: room.id });
        }
    }
    Ok(rooms)
}
