//! Immutable device/room inventory the interpreter reasons over.

use std::sync::Arc;

use hc_protocol::{DeviceId, DeviceRecord, RoomId, RoomMap};

/// A consistent view of devices and rooms.
///
/// Both halves sit behind `Arc`s so replacing one side reuses the other
/// without copying.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    devices: Arc<Vec<DeviceRecord>>,
    rooms: Arc<RoomMap>,
}

impl Snapshot {
    pub fn new(devices: Vec<DeviceRecord>, rooms: RoomMap) -> Self {
        Self {
            devices: Arc::new(devices),
            rooms: Arc::new(rooms),
        }
    }

    /// Same rooms, new device list.
    pub fn with_devices(&self, devices: Vec<DeviceRecord>) -> Self {
        Self {
            devices: Arc::new(devices),
            rooms: Arc::clone(&self.rooms),
        }
    }

    /// Same devices, new room map.
    pub fn with_rooms(&self, rooms: RoomMap) -> Self {
        Self {
            devices: Arc::clone(&self.devices),
            rooms: Arc::new(rooms),
        }
    }

    pub fn devices(&self) -> &[DeviceRecord] {
        &self.devices
    }

    pub fn rooms(&self) -> &RoomMap {
        &self.rooms
    }

    pub fn device(&self, id: DeviceId) -> Option<&DeviceRecord> {
        self.devices.iter().find(|d| d.id == id)
    }

    pub fn room_name(&self, id: RoomId) -> Option<&str> {
        self.rooms.get(&id).map(String::as_str)
    }
}
