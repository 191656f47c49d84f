//! Device taxonomy for the command interpreter.
//!
//! Maps the closed `DeviceCategory` set onto display names, bilingual
//! keyword lists and capability profiles (`CategoryCatalog`), detects a
//! category from a hub's raw type string, and turns raw hub device JSON
//! into `DeviceRecord`s ready for the interpreter.

pub mod catalog;
pub mod detect;
pub mod error;
pub mod ingest;

// Re-export key types for convenience
pub use catalog::{CategoryCatalog, StaticCatalog};
pub use detect::detect_category;
pub use error::{InventoryError, InventoryResult};
pub use ingest::{
    HubDevice, HubRoom, collect_rooms, parse_devices, parse_rooms, resolve_device, resolve_devices,
};
