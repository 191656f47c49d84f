//! Inventory ingestion error types.

use thiserror::Error;

/// Errors raised while reading hub inventory data.
#[derive(Debug, Error)]
pub enum InventoryError {
    #[error("invalid inventory JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("duplicate device id {id}")]
    DuplicateDevice { id: u32 },

    #[error("duplicate room id {id}")]
    DuplicateRoom { id: u32 },
}

/// Convenience alias for inventory results.
pub type InventoryResult<T> = Result<T, InventoryError>;
