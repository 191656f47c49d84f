//! Concrete device commands produced by dispatch planning.

use serde::{Deserialize, Serialize};

use crate::context::{ColorName, CoverAction, DeviceMatch};
use crate::device::DeviceId;
use crate::intent::Intent;

/// 8-bit RGB triple as accepted by color controllers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl From<ColorName> for Rgb {
    fn from(color: ColorName) -> Self {
        match color {
            ColorName::Red => Self::new(255, 0, 0),
            ColorName::Green => Self::new(0, 255, 0),
            ColorName::Blue => Self::new(0, 0, 255),
            ColorName::Yellow => Self::new(255, 255, 0),
            ColorName::Purple => Self::new(128, 0, 128),
            ColorName::Pink => Self::new(255, 192, 203),
            ColorName::Orange => Self::new(255, 165, 0),
            ColorName::White => Self::new(255, 255, 255),
            ColorName::Cyan => Self::new(0, 255, 255),
            ColorName::Magenta => Self::new(255, 0, 255),
        }
    }
}

/// One control operation for a single device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum DeviceCommand {
    TurnOn,
    TurnOff,
    SetBrightness { level: u8 },
    SetColor { color: ColorName, rgb: Rgb },
    Cover { action: CoverAction },
    SetPosition { position: u8 },
    SetTemperature { target: i64 },
    Lock,
    Unlock,
    ReadStatus,
    ReadSensor,
}

/// What a dispatcher should execute for an interpreted command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlPlan {
    pub device_id: DeviceId,
    pub device_name: String,
    pub intent: Intent,
    pub command: DeviceCommand,
    /// True when the target came from an explicit override, not ranking.
    #[serde(default)]
    pub forced: bool,
    /// Remaining candidates, for a caller that wants to offer alternatives.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub alternatives: Vec<DeviceMatch>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_names_map_to_rgb() {
        assert_eq!(Rgb::from(ColorName::Pink), Rgb::new(255, 192, 203));
        assert_eq!(Rgb::from(ColorName::Blue), Rgb::new(0, 0, 255));
        assert_eq!(Rgb::from(ColorName::Purple), Rgb::new(128, 0, 128));
    }

    #[test]
    fn device_command_is_tagged() {
        let json = serde_json::to_value(DeviceCommand::SetBrightness { level: 40 }).unwrap();
        assert_eq!(json["command"], "set_brightness");
        assert_eq!(json["level"], 40);

        let json = serde_json::to_value(DeviceCommand::Cover {
            action: CoverAction::Stop,
        })
        .unwrap();
        assert_eq!(json["command"], "cover");
        assert_eq!(json["action"], "stop");
    }

    #[test]
    fn control_plan_roundtrip() {
        let plan = ControlPlan {
            device_id: 9,
            device_name: "Bedroom Blind".into(),
            intent: Intent::ControlCover,
            command: DeviceCommand::SetPosition { position: 30 },
            forced: false,
            alternatives: vec![],
        };
        let json = serde_json::to_string(&plan).unwrap();
        assert!(!json.contains("alternatives"));
        let back: ControlPlan = serde_json::from_str(&json).unwrap();
        assert_eq!(back, plan);
    }
}
