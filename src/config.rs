//! Data-driven game tuning
//!
//! A [`Config`] is supplied once at session construction. The defaults match
//! the constants in [`crate::consts`]; serde derives let a host load tuning
//! from JSON instead.

use serde::{Deserialize, Serialize};

use crate::consts;

/// Tunable gameplay parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Ticks required per worm move when a run starts. Decreases by one each
    /// time a board is fully cleared, down to a floor of 1.
    pub start_tick_threshold: u32,
    /// Score awarded per collected coin.
    pub coin_reward: u64,
    /// One hazard per this many cells.
    pub hazard_divisor: u32,
    /// One coin per this many cells.
    pub coin_divisor: u32,
    /// Axis magnitude below which no directional intent registers.
    pub axis_deadzone: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            start_tick_threshold: consts::START_TICK_THRESHOLD,
            coin_reward: consts::COIN_REWARD,
            hazard_divisor: consts::HAZARD_DIVISOR,
            coin_divisor: consts::COIN_DIVISOR,
            axis_deadzone: consts::AXIS_DEADZONE,
        }
    }
}

impl Config {
    /// Clamp degenerate values to workable minimums. A zero divisor or
    /// threshold would otherwise divide by zero or stall the tick cadence.
    pub fn sanitized(mut self) -> Self {
        self.start_tick_threshold = self.start_tick_threshold.max(1);
        self.hazard_divisor = self.hazard_divisor.max(1);
        self.coin_divisor = self.coin_divisor.max(1);
        self.axis_deadzone = self.axis_deadzone.abs();
        self
    }
}
