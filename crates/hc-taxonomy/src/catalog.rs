//! Category catalog: display names, keywords and capability profiles.
//!
//! The interpreter receives a `&dyn CategoryCatalog` instead of reading this
//! table directly, so a deployment can swap in its own naming or keywords.

use hc_protocol::{Capabilities, DeviceCategory};

/// Read-only lookup keyed by device category.
pub trait CategoryCatalog: Send + Sync {
    /// Human-readable name ("RGB Light", "Door/Window Sensor").
    fn display_name(&self, category: DeviceCategory) -> &str;

    /// Bilingual words that refer to devices of this category.
    fn keywords(&self, category: DeviceCategory) -> &[&str];

    /// Capability profile shared by every device of this category.
    fn capabilities(&self, category: DeviceCategory) -> Capabilities;

    /// Whether the category accepts the named hub action (e.g. "setValue").
    fn can_perform_action(&self, category: DeviceCategory, action: &str) -> bool {
        self.capabilities(category)
            .supported_actions
            .iter()
            .any(|a| a == action)
    }
}

/// Controllable features of a category. Every category can report a value.
#[derive(Debug, Clone, Copy, Default)]
struct Controls {
    on_off: bool,
    brightness: bool,
    color: bool,
    position: bool,
    temperature: bool,
}

const NONE: Controls = Controls {
    on_off: false,
    brightness: false,
    color: false,
    position: false,
    temperature: false,
};

const SWITCHABLE: Controls = Controls {
    on_off: true,
    ..NONE
};

const DIMMABLE: Controls = Controls {
    brightness: true,
    ..SWITCHABLE
};

const COLORED: Controls = Controls {
    color: true,
    ..DIMMABLE
};

const POSITIONED: Controls = Controls {
    position: true,
    ..SWITCHABLE
};

const CLIMATE: Controls = Controls {
    temperature: true,
    ..SWITCHABLE
};

/// One row of the static table.
#[derive(Debug, Clone, Copy)]
struct Entry {
    display_name: &'static str,
    keywords: &'static [&'static str],
    controls: Controls,
    properties: &'static [&'static str],
    actions: &'static [&'static str],
}

const ON_OFF: &[&str] = &["turnOn", "turnOff"];

fn entry(category: DeviceCategory) -> Entry {
    use DeviceCategory as C;
    match category {
        // ===== Lighting =====
        C::Light => Entry {
            display_name: "Light",
            keywords: &["light", "lamp", "bulb", "đèn"],
            controls: SWITCHABLE,
            properties: &["value", "state"],
            actions: ON_OFF,
        },
        C::Dimmer => Entry {
            display_name: "Dimmer",
            keywords: &["dimmer", "light", "đèn điều chỉnh"],
            controls: DIMMABLE,
            properties: &["value", "state", "brightness"],
            actions: &["turnOn", "turnOff", "setValue"],
        },
        C::RgbLight => Entry {
            display_name: "RGB Light",
            keywords: &["rgb", "color light", "đèn màu"],
            controls: COLORED,
            properties: &["value", "state", "brightness", "color"],
            actions: &["turnOn", "turnOff", "setValue", "setColor"],
        },
        C::LedStrip => Entry {
            display_name: "LED Strip",
            keywords: &["led strip", "led", "strip"],
            controls: COLORED,
            properties: &["value", "state", "brightness", "color"],
            actions: &["turnOn", "turnOff", "setValue", "setColor"],
        },

        // ===== Switches and outlets =====
        C::WallPlug => Entry {
            display_name: "Wall Plug",
            keywords: &["plug", "outlet", "socket", "ổ cắm"],
            controls: SWITCHABLE,
            properties: &["value", "state", "power"],
            actions: ON_OFF,
        },
        C::RelaySwitch => Entry {
            display_name: "Relay Switch",
            keywords: &["relay", "relay switch", "công tắc relay"],
            controls: SWITCHABLE,
            properties: &["value", "state"],
            actions: ON_OFF,
        },
        C::BinarySwitch => Entry {
            display_name: "Switch",
            keywords: &["binary switch", "switch", "công tắc"],
            controls: SWITCHABLE,
            properties: &["value", "state"],
            actions: ON_OFF,
        },

        // ===== Sensors =====
        C::MotionSensor => Entry {
            display_name: "Motion Sensor",
            keywords: &["motion", "chuyển động", "cảm biến chuyển động"],
            controls: NONE,
            properties: &["value", "motion", "battery"],
            actions: &[],
        },
        C::DoorWindowSensor => Entry {
            display_name: "Door/Window Sensor",
            keywords: &["door", "window", "cửa", "cửa sổ"],
            controls: NONE,
            properties: &["value", "state", "battery"],
            actions: &[],
        },
        C::TemperatureSensor => Entry {
            display_name: "Temperature Sensor",
            keywords: &["temperature", "nhiệt độ", "cảm biến nhiệt độ"],
            controls: NONE,
            properties: &["value", "temperature", "battery"],
            actions: &[],
        },
        C::HumiditySensor => Entry {
            display_name: "Humidity Sensor",
            keywords: &["humidity", "độ ẩm"],
            controls: NONE,
            properties: &["value", "humidity", "battery"],
            actions: &[],
        },
        C::LightSensor => Entry {
            display_name: "Light Sensor",
            keywords: &["light sensor", "lux", "brightness sensor"],
            controls: NONE,
            properties: &["value", "lux", "battery"],
            actions: &[],
        },
        C::FloodSensor => Entry {
            display_name: "Flood Sensor",
            keywords: &["flood", "water", "nước"],
            controls: NONE,
            properties: &["value", "flood", "battery"],
            actions: &[],
        },
        C::SmokeSensor => Entry {
            display_name: "Smoke Sensor",
            keywords: &["smoke", "khói"],
            controls: NONE,
            properties: &["value", "smoke", "battery"],
            actions: &[],
        },
        C::CoSensor => Entry {
            display_name: "CO Sensor",
            keywords: &["carbon monoxide", "co"],
            controls: NONE,
            properties: &["value", "co", "battery"],
            actions: &[],
        },

        // ===== Climate =====
        C::Thermostat => Entry {
            display_name: "Thermostat",
            keywords: &["thermostat", "nhiệt độ"],
            controls: CLIMATE,
            properties: &["value", "targetTemperature", "currentTemperature", "mode"],
            actions: &["turnOn", "turnOff", "setTargetTemperature", "setMode"],
        },
        C::Hvac => Entry {
            display_name: "HVAC",
            keywords: &["hvac", "air conditioning", "điều hòa"],
            controls: CLIMATE,
            properties: &["value", "targetTemperature", "currentTemperature", "mode"],
            actions: &["turnOn", "turnOff", "setTargetTemperature", "setMode"],
        },

        // ===== Covers =====
        C::RollerShutter => Entry {
            display_name: "Roller Shutter",
            keywords: &["roller", "shutter", "rèm cuốn"],
            controls: POSITIONED,
            properties: &["value", "position", "state"],
            actions: &["open", "close", "stop", "setValue"],
        },
        C::VenetianBlind => Entry {
            display_name: "Venetian Blind",
            keywords: &["blind", "venetian", "rèm"],
            controls: POSITIONED,
            properties: &["value", "position", "slat", "state"],
            actions: &["open", "close", "stop", "setValue", "setSlat"],
        },
        C::GarageDoor => Entry {
            display_name: "Garage Door",
            keywords: &["garage", "cửa garage"],
            controls: SWITCHABLE,
            properties: &["value", "state"],
            actions: &["open", "close", "stop"],
        },

        // ===== Security =====
        C::Lock => Entry {
            display_name: "Lock",
            keywords: &["lock", "khóa"],
            controls: SWITCHABLE,
            properties: &["value", "state", "battery"],
            actions: &["secure", "unsecure"],
        },
        C::Siren => Entry {
            display_name: "Siren",
            keywords: &["siren", "alarm", "còi báo"],
            controls: SWITCHABLE,
            properties: &["value", "state"],
            actions: ON_OFF,
        },

        C::Unknown => Entry {
            display_name: "Unknown Device",
            keywords: &[],
            controls: NONE,
            properties: &["value"],
            actions: &[],
        },
    }
}

/// Built-in catalog for the common Z-Wave hub categories.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticCatalog;

impl StaticCatalog {
    pub fn new() -> Self {
        Self
    }
}

impl CategoryCatalog for StaticCatalog {
    fn display_name(&self, category: DeviceCategory) -> &str {
        entry(category).display_name
    }

    fn keywords(&self, category: DeviceCategory) -> &[&str] {
        entry(category).keywords
    }

    fn capabilities(&self, category: DeviceCategory) -> Capabilities {
        let e = entry(category);
        Capabilities {
            can_turn_on: e.controls.on_off,
            can_turn_off: e.controls.on_off,
            can_set_brightness: e.controls.brightness,
            can_set_color: e.controls.color,
            can_set_position: e.controls.position,
            can_set_temperature: e.controls.temperature,
            can_read_value: true,
            supported_properties: e.properties.iter().map(|p| p.to_string()).collect(),
            supported_actions: e.actions.iter().map(|a| a.to_string()).collect(),
        }
    }
}
