//! Error types for the packing core

use thiserror::Error;

/// Error produced by the packing core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PackError {
    /// No power-of-two canvas up to the size cap was judged feasible
    #[error("no atlas up to {limit}x{limit} can hold the sprites (margin {margin})")]
    AtlasLimitExceeded { limit: u32, margin: u32 },
    /// Shelf placement ran past the edge of the canvas
    #[error("sprite '{name}' needs {needed} pixels but the atlas is only {size}x{size}")]
    ShelfOverflow { name: String, needed: u32, size: u32 },
}
