//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Discrete tile steps only
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod animate;
pub mod generate;
pub mod grid;
pub mod movement;
pub mod session;

pub use animate::advance_animation;
pub use generate::{generate, start_cell, validate_dimensions};
pub use grid::{Grid, Position, Tile};
pub use movement::{Facing, StepOutcome, resolve_step};
pub use session::{GameEvent, GameSession, Phase};
