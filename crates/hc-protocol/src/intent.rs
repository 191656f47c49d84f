use serde::{Deserialize, Serialize};

/// The action category a command resolves to.
///
/// `Unknown` is a regular outcome, never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    TurnOn,
    TurnOff,
    SetBrightness,
    SetColor,
    ControlCover,
    SetTemperature,
    Lock,
    Unlock,
    GetStatus,
    GetSensorData,
    /// Reserved for callers that fan one command out to many devices.
    BatchControl,
    #[default]
    Unknown,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TurnOn => "turn_on",
            Self::TurnOff => "turn_off",
            Self::SetBrightness => "set_brightness",
            Self::SetColor => "set_color",
            Self::ControlCover => "control_cover",
            Self::SetTemperature => "set_temperature",
            Self::Lock => "lock",
            Self::Unlock => "unlock",
            Self::GetStatus => "get_status",
            Self::GetSensorData => "get_sensor_data",
            Self::BatchControl => "batch_control",
            Self::Unknown => "unknown",
        }
    }

    pub fn is_known(&self) -> bool {
        *self != Self::Unknown
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intent_serialization() {
        assert_eq!(
            serde_json::to_string(&Intent::SetBrightness).unwrap(),
            r#""set_brightness""#
        );
        assert_eq!(
            serde_json::to_string(&Intent::GetSensorData).unwrap(),
            r#""get_sensor_data""#
        );
    }

    #[test]
    fn default_is_unknown() {
        assert_eq!(Intent::default(), Intent::Unknown);
        assert!(!Intent::default().is_known());
        assert!(Intent::Lock.is_known());
    }

    #[test]
    fn display_uses_wire_name() {
        assert_eq!(Intent::ControlCover.to_string(), "control_cover");
    }
}
