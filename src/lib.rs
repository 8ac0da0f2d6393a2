//! Gridworm - a tile-grid worm arcade simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (grid, board generation, movement, session)
//! - `config`: Data-driven game tuning
//! - `error`: Failure taxonomy
//!
//! Rendering, sensor sampling, and UI wiring live in host applications. This
//! crate consumes directional axis values and two external cadences (an input
//! tick and a draw pass) and exposes grid snapshots, the worm position, the
//! score, and the playing flag.

pub mod config;
pub mod error;
pub mod sim;

pub use config::Config;
pub use error::SimError;
pub use sim::{Facing, GameEvent, GameSession, Grid, Phase, Position, Tile};

/// Game tuning constants (the defaults behind [`Config`])
pub mod consts {
    /// Ticks required per worm move at the start of a run; lower is faster.
    pub const START_TICK_THRESHOLD: u32 = 5;
    /// Score awarded per collected coin.
    pub const COIN_REWARD: u64 = 10;
    /// One hazard per this many cells.
    pub const HAZARD_DIVISOR: u32 = 20;
    /// One coin per this many cells.
    pub const COIN_DIVISOR: u32 = 50;
    /// Number of coin animation phases (cosmetic only).
    pub const COIN_PHASES: u8 = 5;
    /// Number of hazard sub-kinds (cosmetic only, all equally lethal).
    pub const HAZARD_KINDS: u8 = 4;
    /// Axis magnitude below which no directional intent registers.
    pub const AXIS_DEADZONE: f32 = 2.0;
    /// Rejected samples tolerated before board generation falls back to a
    /// deterministic sweep.
    pub const SCATTER_RETRY_CAP: u32 = 10_000;
}
