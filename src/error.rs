//! Failure taxonomy for the simulation core
//!
//! Everything here is local and recoverable: the caller retries with valid
//! input. There is no I/O in the core, so no other failure class exists.

use thiserror::Error;

/// Errors surfaced by board construction and direct grid access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SimError {
    /// Requested dimensions cannot hold a bordered, playable board.
    #[error("invalid grid dimensions {columns}x{rows}")]
    InvalidDimensions { columns: u32, rows: u32 },

    /// A cell address outside the grid extent was used directly. Movement
    /// resolution bounds-checks before touching the grid, so this only
    /// reaches a caller that addressed cells itself.
    #[error("cell ({col}, {row}) outside grid extent {columns}x{rows}")]
    OutOfBounds {
        col: u32,
        row: u32,
        columns: u32,
        rows: u32,
    },
}
