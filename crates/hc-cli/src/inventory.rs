//! Hub inventory file: `{ "devices": [...], "rooms": [...] }` as exported
//! from the hub's `/api/devices` and `/api/rooms` endpoints.

use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use hc_protocol::{DeviceRecord, RoomMap};
use hc_taxonomy::{CategoryCatalog, HubDevice, HubRoom, collect_rooms, resolve_devices};

#[derive(Debug, Default, Deserialize)]
struct InventoryFile {
    #[serde(default)]
    devices: Vec<HubDevice>,
    #[serde(default)]
    rooms: Vec<HubRoom>,
}

/// Resolved devices and rooms, ready for a `ContextProcessor`.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    pub devices: Vec<DeviceRecord>,
    pub rooms: RoomMap,
}

impl Inventory {
    pub fn from_json(json: &str, catalog: &dyn CategoryCatalog) -> anyhow::Result<Self> {
        let file: InventoryFile =
            serde_json::from_str(json).context("invalid inventory JSON")?;
        let devices = resolve_devices(&file.devices, catalog)?;
        let rooms = collect_rooms(file.rooms)?;
        Ok(Self { devices, rooms })
    }

    pub fn from_file(path: &Path, catalog: &dyn CategoryCatalog) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("reading inventory {}", path.display()))?;
        Self::from_json(&contents, catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hc_protocol::DeviceCategory;
    use hc_taxonomy::StaticCatalog;

    const HOME: &str = r#"{
        "devices": [
            {"id": 5, "name": "Living Room Light", "type": "com.fibaro.multilevelSwitch", "roomID": 1},
            {"id": 8, "name": "Front Door", "type": "com.fibaro.doorLock", "roomID": 0}
        ],
        "rooms": [{"id": 1, "name": "Living Room", "sectionID": 1}]
    }"#;

    #[test]
    fn parses_devices_and_rooms() {
        let inventory = Inventory::from_json(HOME, &StaticCatalog).unwrap();
        assert_eq!(inventory.devices.len(), 2);
        assert_eq!(inventory.devices[0].category, DeviceCategory::Dimmer);
        assert_eq!(inventory.devices[1].category, DeviceCategory::Lock);
        assert_eq!(inventory.rooms.get(&1).map(String::as_str), Some("Living Room"));
    }

    #[test]
    fn both_sections_optional() {
        let inventory = Inventory::from_json("{}", &StaticCatalog).unwrap();
        assert!(inventory.devices.is_empty());
        assert!(inventory.rooms.is_empty());
    }

    #[test]
    fn duplicate_ids_are_reported() {
        let json = r#"{"rooms": [{"id": 1, "name": "A"}, {"id": 1, "name": "B"}]}"#;
        let err = Inventory::from_json(json, &StaticCatalog).unwrap_err();
        assert!(err.to_string().contains("duplicate room id 1"), "{err}");
    }

    #[test]
    fn malformed_json() {
        let err = Inventory::from_json("[", &StaticCatalog).unwrap_err();
        assert!(err.to_string().contains("invalid inventory JSON"));
    }
}
