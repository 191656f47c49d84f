pub mod commands;
pub mod context;
pub mod device;
pub mod intent;

pub use commands::*;
pub use context::*;
pub use device::*;
pub use intent::*;
