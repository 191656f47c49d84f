//! Interpretation results: device matches, extracted parameters and the
//! complete `ProcessedContext` returned for one command.

use serde::{Deserialize, Deserializer, Serialize};

use crate::device::DeviceRecord;
use crate::intent::Intent;

/// Why a device was considered a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchReason {
    ExactName,
    FuzzyName,
    Id,
    Type,
    Room,
}

/// Action a device's capabilities allow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestedAction {
    TurnOn,
    TurnOff,
    SetBrightness,
    SetColor,
    SetPosition,
    SetTemperature,
}

/// A scored hypothesis that `device` is the target of a command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceMatch {
    pub device: DeviceRecord,
    /// Sum of all matching signal weights. Not clamped; may exceed 1.0.
    pub confidence: f64,
    pub matched_by: Vec<MatchReason>,
    pub suggested_actions: Vec<SuggestedAction>,
}

/// Canonical color names the extractor can recognise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorName {
    Red,
    Green,
    Blue,
    Yellow,
    Purple,
    Pink,
    Orange,
    White,
    Cyan,
    Magenta,
}

impl ColorName {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Yellow => "yellow",
            Self::Purple => "purple",
            Self::Pink => "pink",
            Self::Orange => "orange",
            Self::White => "white",
            Self::Cyan => "cyan",
            Self::Magenta => "magenta",
        }
    }
}

impl std::fmt::Display for ColorName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Movement requested for a cover (blind, shutter, garage door).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoverAction {
    Open,
    Close,
    Stop,
}

impl CoverAction {
    /// Hub action name for this movement.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Close => "close",
            Self::Stop => "stop",
        }
    }
}

/// Control values pulled out of a command.
///
/// Every field is optional; serialized output only carries the fields that
/// were extracted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Parameters {
    /// Percentage, clamped to 0–100.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brightness: Option<u8>,
    /// Degrees as spoken. Passed through unclamped.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<i64>,
    /// Cover position percentage, clamped to 0–100.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<u8>,
    /// `Some(None)` means a color was asked for but not recognised; it is
    /// serialized as `"color": null` and still counts as an extracted field.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "present_or_null"
    )]
    pub color: Option<Option<ColorName>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<CoverAction>,
}

impl Parameters {
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of extracted fields.
    pub fn len(&self) -> usize {
        [
            self.brightness.is_some(),
            self.temperature.is_some(),
            self.position.is_some(),
            self.color.is_some(),
            self.room.is_some(),
            self.action.is_some(),
        ]
        .iter()
        .filter(|present| **present)
        .count()
    }

    /// The recognised color, if any.
    pub fn color(&self) -> Option<ColorName> {
        self.color.flatten()
    }
}

/// Keeps an explicit `null` distinct from an absent field.
fn present_or_null<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// The complete result of interpreting one command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessedContext {
    pub intent: Intent,
    /// At most five candidates, highest confidence first.
    pub device_matches: Vec<DeviceMatch>,
    pub parameters: Parameters,
    /// Overall confidence in [0, 1].
    pub confidence: f64,
    /// Hints for the user; present only when confidence is low.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<Vec<String>>,
}

impl ProcessedContext {
    /// Highest-ranked candidate, if any device matched.
    pub fn top_match(&self) -> Option<&DeviceMatch> {
        self.device_matches.first()
    }
}
