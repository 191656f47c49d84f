//! Command interpretation for bilingual (English/Vietnamese) smart-home
//! commands.
//!
//! One pass per command, no I/O:
//! normalize → classify intent → match devices → extract parameters →
//! aggregate confidence → suggest (when confidence is low).
//!
//! `ContextProcessor` holds the current device/room snapshot and can turn a
//! result into a `ControlPlan` for a downstream dispatcher.

pub mod confidence;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod intent;
pub mod matcher;
pub mod normalize;
pub mod params;
pub mod processor;
pub mod snapshot;
pub mod suggestions;

// Re-export key types for convenience
pub use config::{DispatchConfig, ProcessorConfig};
pub use dispatch::{DispatchOptions, plan};
pub use error::{ConfigError, ConfigResult, DispatchError, DispatchResult};
pub use processor::{ContextProcessor, interpret};
pub use snapshot::Snapshot;
