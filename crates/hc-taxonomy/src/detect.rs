//! Category detection from a hub's raw device type string.
//!
//! Exact vendor type names are checked first, then substring heuristics in a
//! fixed order (lighting before switches before sensors, and so on).

use hc_protocol::DeviceCategory;

/// Vendor type strings reported by Fibaro-style hubs.
const VENDOR_TYPES: &[(&str, DeviceCategory)] = &[
    ("com.fibaro.light", DeviceCategory::Light),
    ("com.fibaro.multilevelswitch", DeviceCategory::Dimmer),
    ("com.fibaro.colorcontroller", DeviceCategory::RgbLight),
    ("com.fibaro.ledstrip", DeviceCategory::LedStrip),
    ("com.fibaro.wallplug", DeviceCategory::WallPlug),
    ("com.fibaro.relayswitch", DeviceCategory::RelaySwitch),
    ("com.fibaro.binaryswitch", DeviceCategory::BinarySwitch),
    ("com.fibaro.motionsensor", DeviceCategory::MotionSensor),
    ("com.fibaro.doorwindowsensor", DeviceCategory::DoorWindowSensor),
    ("com.fibaro.temperaturesensor", DeviceCategory::TemperatureSensor),
    ("com.fibaro.humiditysensor", DeviceCategory::HumiditySensor),
    ("com.fibaro.lightsensor", DeviceCategory::LightSensor),
    ("com.fibaro.floodsensor", DeviceCategory::FloodSensor),
    ("com.fibaro.smokesensor", DeviceCategory::SmokeSensor),
    ("com.fibaro.cosensor", DeviceCategory::CoSensor),
    ("com.fibaro.thermostat", DeviceCategory::Thermostat),
    ("com.fibaro.hvac", DeviceCategory::Hvac),
    ("com.fibaro.rollershutter", DeviceCategory::RollerShutter),
    ("com.fibaro.venetianblind", DeviceCategory::VenetianBlind),
    ("com.fibaro.garagedoor", DeviceCategory::GarageDoor),
    ("com.fibaro.doorlock", DeviceCategory::Lock),
    ("com.fibaro.siren", DeviceCategory::Siren),
];

/// Resolve a raw hub type (e.g. "com.fibaro.FGRGBW441M") to a category.
/// Case-insensitive. Unrecognised types map to `DeviceCategory::Unknown`.
pub fn detect_category(raw_type: &str) -> DeviceCategory {
    let t = raw_type.to_lowercase();

    if let Some((_, category)) = VENDOR_TYPES.iter().find(|(name, _)| *name == t) {
        return *category;
    }

    if has_any(&t, &["light", "bulb"]) {
        return if has_any(&t, &["color", "rgb"]) {
            DeviceCategory::RgbLight
        } else if has_any(&t, &["dimmer", "multilevel"]) {
            DeviceCategory::Dimmer
        } else {
            DeviceCategory::Light
        };
    }

    if t.contains("switch") {
        return if has_any(&t, &["dimmer", "multilevel"]) {
            DeviceCategory::Dimmer
        } else {
            DeviceCategory::BinarySwitch
        };
    }

    if t.contains("sensor") {
        let sensor = [
            (&["motion"][..], DeviceCategory::MotionSensor),
            (&["door", "window"][..], DeviceCategory::DoorWindowSensor),
            (&["temperature"][..], DeviceCategory::TemperatureSensor),
            (&["humidity"][..], DeviceCategory::HumiditySensor),
            (&["light", "lux"][..], DeviceCategory::LightSensor),
            (&["flood", "water"][..], DeviceCategory::FloodSensor),
            (&["smoke"][..], DeviceCategory::SmokeSensor),
            (&["co"][..], DeviceCategory::CoSensor),
        ]
        .into_iter()
        .find(|(needles, _)| has_any(&t, needles));
        if let Some((_, category)) = sensor {
            return category;
        }
    }

    let rest = [
        (&["thermostat"][..], DeviceCategory::Thermostat),
        (&["hvac"][..], DeviceCategory::Hvac),
        (&["roller", "shutter"][..], DeviceCategory::RollerShutter),
        (&["blind"][..], DeviceCategory::VenetianBlind),
        (&["garage"][..], DeviceCategory::GarageDoor),
        (&["lock"][..], DeviceCategory::Lock),
        (&["siren", "alarm"][..], DeviceCategory::Siren),
        (&["plug", "outlet"][..], DeviceCategory::WallPlug),
    ];
    rest.into_iter()
        .find(|(needles, _)| has_any(&t, needles))
        .map(|(_, category)| category)
        .unwrap_or(DeviceCategory::Unknown)
}

fn has_any(text: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| text.contains(n))
}
