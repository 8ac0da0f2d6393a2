//! One discrete movement step
//!
//! Axis values come straight from the host's sensor layer. Each axis is
//! thresholded independently against the deadzone, so a single step can be
//! diagonal; that matches the tilt feel the game shipped with and is
//! deliberate, including at wall corners.
//!
//! Bounds are checked in signed space before any tile access. The flat
//! buffer would otherwise accept a diagonal step off the edge as a wrapped
//! index one row over.

use serde::{Deserialize, Serialize};

use super::grid::{Grid, Position, Tile};

/// Sprite orientation, tracking the last horizontal intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Facing {
    #[default]
    Left,
    Right,
}

/// What resolving one step did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// No axis crossed the deadzone; nothing changed.
    Idle,
    /// Candidate cell was a wall or off-grid; the worm stays put and the
    /// grid is untouched.
    Blocked,
    /// Worm advanced onto an empty cell.
    Moved,
    /// Worm advanced onto a coin; that cell is now empty.
    CoinCollected,
    /// Worm advanced onto a hazard.
    HazardTouched,
}

#[inline]
fn axis_intent(axis: f32, deadzone: f32) -> i64 {
    if axis < -deadzone {
        -1
    } else if axis > deadzone {
        1
    } else {
        0
    }
}

/// Resolve one movement step against the grid.
///
/// Mutates `position` and `facing` on a committed move and removes the
/// destination tile on a coin pickup; every other outcome leaves both the
/// worm and the grid exactly as they were.
pub fn resolve_step(
    grid: &mut Grid,
    position: &mut Position,
    facing: &mut Facing,
    axis_x: f32,
    axis_y: f32,
    deadzone: f32,
) -> StepOutcome {
    let dx = axis_intent(axis_x, deadzone);
    let dy = axis_intent(axis_y, deadzone);
    if dx == 0 && dy == 0 {
        return StepOutcome::Idle;
    }
    if dx < 0 {
        *facing = Facing::Left;
    } else if dx > 0 {
        *facing = Facing::Right;
    }

    let (columns, rows) = grid.dimensions();
    let new_col = position.col as i64 + dx;
    let new_row = position.row as i64 + dy;
    if new_col < 0 || new_row < 0 || new_col >= columns as i64 || new_row >= rows as i64 {
        return StepOutcome::Blocked;
    }
    let (new_col, new_row) = (new_col as u32, new_row as u32);

    let Some(dest) = grid.cell(new_col, new_row) else {
        return StepOutcome::Blocked;
    };
    match dest {
        Tile::Wall => StepOutcome::Blocked,
        Tile::Empty => {
            *position = Position::new(new_col, new_row);
            StepOutcome::Moved
        }
        Tile::Coin { .. } => {
            *position = Position::new(new_col, new_row);
            if let Some(cell) = grid.cell_mut(new_col, new_row) {
                *cell = Tile::Empty;
            }
            StepOutcome::CoinCollected
        }
        Tile::Hazard { .. } => {
            *position = Position::new(new_col, new_row);
            StepOutcome::HazardTouched
        }
    }
}
