//! Configuration and dispatch planning error types.

use hc_protocol::{DeviceId, Intent};
use thiserror::Error;

/// Tuning values outside what the interpreter accepts.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("max_matches must be between 1 and 5, got {value}")]
    MaxMatches { value: usize },

    #[error("min_match_confidence must be at least 0.1, got {value}")]
    MinMatchConfidence { value: f64 },

    #[error("ambiguity_margin must not be negative, got {value}")]
    AmbiguityMargin { value: f64 },
}

/// Convenience alias for config validation results.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Reasons a processed command cannot become a control plan.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DispatchError {
    #[error("Command intent is unknown")]
    UnknownIntent,

    #[error("Device {id} not found")]
    DeviceNotFound { id: DeviceId },

    #[error("No device matched the command")]
    NoDeviceMatched,

    #[error("Ambiguous target: devices {candidates:?} matched equally well")]
    Ambiguous { candidates: Vec<DeviceId> },

    #[error("Intent {intent} requires a {parameter} value")]
    MissingParameter {
        intent: Intent,
        parameter: &'static str,
    },

    #[error("Device {device_id} does not support {intent}")]
    Unsupported { device_id: DeviceId, intent: Intent },
}

/// Convenience alias for dispatch results.
pub type DispatchResult<T> = Result<T, DispatchError>;
