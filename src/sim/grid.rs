//! Tile buffer and addressing
//!
//! The board is a flat row-major `Vec<Tile>` plus its dimensions. This type
//! holds state only; generation, movement, and animation mutate it through
//! the accessors here. Direct access outside the extent is a signaled error,
//! never a silent clamp.

use serde::{Deserialize, Serialize};

use crate::error::SimError;

/// One cell's content. Purely a value; no tile owns other entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Tile {
    #[default]
    Empty,
    /// Border cell, never traversable.
    Wall,
    /// Lethal on contact. `kind` is in `0..HAZARD_KINDS` and only selects a
    /// sprite; every kind kills the same way.
    Hazard { kind: u8 },
    /// Collectible. `phase` is in `0..COIN_PHASES` and only selects a sprite;
    /// every phase is worth the same score.
    Coin { phase: u8 },
}

impl Tile {
    /// Whether this tile is a coin in any animation phase.
    #[inline]
    pub fn is_coin(self) -> bool {
        matches!(self, Tile::Coin { .. })
    }

    /// Whether this tile is a hazard of any kind.
    #[inline]
    pub fn is_hazard(self) -> bool {
        matches!(self, Tile::Hazard { .. })
    }
}

/// A settled cell address. Always within the grid extent once committed;
/// candidate moves are validated in signed space before becoming one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub col: u32,
    pub row: u32,
}

impl Position {
    pub fn new(col: u32, row: u32) -> Self {
        Self { col, row }
    }
}

/// Row-major tile buffer with its dimensions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    columns: u32,
    rows: u32,
    tiles: Vec<Tile>,
}

impl Grid {
    /// Build an all-[`Tile::Empty`] grid of the given extent. Refuses a zero
    /// dimension and any extent whose cell count overflows `u32`, so every
    /// constructed grid can multiply its dimensions freely.
    pub fn new(columns: u32, rows: u32) -> Result<Self, SimError> {
        if columns == 0 || rows == 0 {
            return Err(SimError::InvalidDimensions { columns, rows });
        }
        let size = columns
            .checked_mul(rows)
            .ok_or(SimError::InvalidDimensions { columns, rows })?;
        Ok(Self {
            columns,
            rows,
            tiles: vec![Tile::Empty; size as usize],
        })
    }

    /// Grid extent as `(columns, rows)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.columns, self.rows)
    }

    /// Total cell count.
    #[inline]
    pub fn size(&self) -> u32 {
        self.columns * self.rows
    }

    /// Read one cell.
    pub fn tile(&self, col: u32, row: u32) -> Result<Tile, SimError> {
        self.cell(col, row).ok_or(self.out_of_bounds(col, row))
    }

    /// Write one cell.
    pub fn set_tile(&mut self, col: u32, row: u32, tile: Tile) -> Result<(), SimError> {
        let err = self.out_of_bounds(col, row);
        match self.cell_mut(col, row) {
            Some(cell) => {
                *cell = tile;
                Ok(())
            }
            None => Err(err),
        }
    }

    /// Whether the cell lies on the outermost ring.
    pub fn is_border(&self, col: u32, row: u32) -> bool {
        col == 0 || row == 0 || col == self.columns - 1 || row == self.rows - 1
    }

    /// Number of coin tiles currently on the board.
    pub fn count_coins(&self) -> u32 {
        self.tiles.iter().filter(|t| t.is_coin()).count() as u32
    }

    /// Number of hazard tiles currently on the board.
    pub fn count_hazards(&self) -> u32 {
        self.tiles.iter().filter(|t| t.is_hazard()).count() as u32
    }

    /// Iterate every cell with its address, row by row. Rendering hosts walk
    /// this to blit the board.
    pub fn cells(&self) -> impl Iterator<Item = (Position, Tile)> + '_ {
        let columns = self.columns;
        self.tiles.iter().enumerate().map(move |(i, &tile)| {
            let i = i as u32;
            (Position::new(i % columns, i / columns), tile)
        })
    }

    /// Checked read without the error payload, for internal hot paths.
    #[inline]
    pub(crate) fn cell(&self, col: u32, row: u32) -> Option<Tile> {
        if col >= self.columns || row >= self.rows {
            return None;
        }
        Some(self.tiles[(row * self.columns + col) as usize])
    }

    /// Checked mutable access, for internal hot paths.
    #[inline]
    pub(crate) fn cell_mut(&mut self, col: u32, row: u32) -> Option<&mut Tile> {
        if col >= self.columns || row >= self.rows {
            return None;
        }
        Some(&mut self.tiles[(row * self.columns + col) as usize])
    }

    /// Mutable traversal of the raw buffer, for the animator.
    #[inline]
    pub(crate) fn tiles_mut(&mut self) -> impl Iterator<Item = &mut Tile> {
        self.tiles.iter_mut()
    }

    fn out_of_bounds(&self, col: u32, row: u32) -> SimError {
        SimError::OutOfBounds {
            col,
            row,
            columns: self.columns,
            rows: self.rows,
        }
    }
}
