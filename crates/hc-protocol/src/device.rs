use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Hub-assigned device identifier.
pub type DeviceId = u32;

/// Hub-assigned room identifier.
pub type RoomId = u32;

/// Room id → display name. Iterates in ascending id order.
pub type RoomMap = BTreeMap<RoomId, String>;

/// Closed set of device categories understood by the interpreter.
///
/// Vendor type strings are mapped onto these by the taxonomy crate, so nothing
/// downstream depends on hub-specific naming.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceCategory {
    // Lighting
    Light,
    Dimmer,
    RgbLight,
    LedStrip,
    // Switches and outlets
    WallPlug,
    RelaySwitch,
    BinarySwitch,
    // Sensors
    MotionSensor,
    DoorWindowSensor,
    TemperatureSensor,
    HumiditySensor,
    LightSensor,
    FloodSensor,
    SmokeSensor,
    CoSensor,
    // Climate
    Thermostat,
    Hvac,
    // Covers
    RollerShutter,
    VenetianBlind,
    GarageDoor,
    // Security
    Lock,
    Siren,
    #[default]
    Unknown,
}

impl DeviceCategory {
    /// Every category, in declaration order.
    pub const ALL: [DeviceCategory; 23] = [
        Self::Light,
        Self::Dimmer,
        Self::RgbLight,
        Self::LedStrip,
        Self::WallPlug,
        Self::RelaySwitch,
        Self::BinarySwitch,
        Self::MotionSensor,
        Self::DoorWindowSensor,
        Self::TemperatureSensor,
        Self::HumiditySensor,
        Self::LightSensor,
        Self::FloodSensor,
        Self::SmokeSensor,
        Self::CoSensor,
        Self::Thermostat,
        Self::Hvac,
        Self::RollerShutter,
        Self::VenetianBlind,
        Self::GarageDoor,
        Self::Lock,
        Self::Siren,
        Self::Unknown,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dimmer => "dimmer",
            Self::RgbLight => "rgb_light",
            Self::LedStrip => "led_strip",
            Self::WallPlug => "wall_plug",
            Self::RelaySwitch => "relay_switch",
            Self::BinarySwitch => "binary_switch",
            Self::MotionSensor => "motion_sensor",
            Self::DoorWindowSensor => "door_window_sensor",
            Self::TemperatureSensor => "temperature_sensor",
            Self::HumiditySensor => "humidity_sensor",
            Self::LightSensor => "light_sensor",
            Self::FloodSensor => "flood_sensor",
            Self::SmokeSensor => "smoke_sensor",
            Self::CoSensor => "co_sensor",
            Self::Thermostat => "thermostat",
            Self::Hvac => "hvac",
            Self::RollerShutter => "roller_shutter",
            Self::VenetianBlind => "venetian_blind",
            Self::GarageDoor => "garage_door",
            Self::Lock => "lock",
            Self::Siren => "siren",
            Self::Unknown => "unknown",
        }
    }

    /// Sensors only report values; they never take control commands.
    pub fn is_sensor(&self) -> bool {
        matches!(
            self,
            Self::MotionSensor
                | Self::DoorWindowSensor
                | Self::TemperatureSensor
                | Self::HumiditySensor
                | Self::LightSensor
                | Self::FloodSensor
                | Self::SmokeSensor
                | Self::CoSensor
        )
    }
}

impl std::fmt::Display for DeviceCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a device can do, as resolved from its category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capabilities {
    pub can_turn_on: bool,
    pub can_turn_off: bool,
    pub can_set_brightness: bool,
    pub can_set_color: bool,
    pub can_set_position: bool,
    pub can_set_temperature: bool,
    pub can_read_value: bool,
    /// Hub property names exposed by the device (e.g. "value", "battery").
    #[serde(default)]
    pub supported_properties: Vec<String>,
    /// Hub action names accepted by the device (e.g. "turnOn", "setValue").
    #[serde(default)]
    pub supported_actions: Vec<String>,
}

/// A device as seen by the interpreter.
///
/// Category and capabilities are resolved before the record reaches the core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceRecord {
    pub id: DeviceId,
    pub name: String,
    #[serde(default)]
    pub category: DeviceCategory,
    /// Room the device sits in, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_id: Option<RoomId>,
    /// Missing capability data means no suggested actions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capabilities: Option<Capabilities>,
}

impl DeviceRecord {
    pub fn new(id: DeviceId, name: impl Into<String>, category: DeviceCategory) -> Self {
        Self {
            id,
            name: name.into(),
            category,
            room_id: None,
            capabilities: None,
        }
    }

    pub fn in_room(mut self, room_id: RoomId) -> Self {
        self.room_id = Some(room_id);
        self
    }

    pub fn with_capabilities(mut self, capabilities: Capabilities) -> Self {
        self.capabilities = Some(capabilities);
        self
    }
}
