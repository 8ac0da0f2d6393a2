//! Coin animation phase cycling
//!
//! Runs once per draw pass, independent of the movement tick cadence. The
//! phase only selects a sprite; every phase is equally collectible and no
//! cell depends on another, so traversal order does not matter.

use super::grid::{Grid, Tile};
use crate::consts::COIN_PHASES;

/// Advance every coin on the board to its next animation phase.
pub fn advance_animation(grid: &mut Grid) {
    for tile in grid.tiles_mut() {
        if let Tile::Coin { phase } = tile {
            *phase = (*phase + 1) % COIN_PHASES;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_wraps_after_last() {
        let mut grid = Grid::new(5, 5).unwrap();
        grid.set_tile(2, 2, Tile::Coin { phase: 4 }).unwrap();
        advance_animation(&mut grid);
        assert_eq!(grid.tile(2, 2).unwrap(), Tile::Coin { phase: 0 });
    }

    #[test]
    fn test_full_cycle_over_five_passes() {
        let mut grid = Grid::new(5, 5).unwrap();
        grid.set_tile(1, 3, Tile::Coin { phase: 0 }).unwrap();
        let mut seen = Vec::new();
        for _ in 0..5 {
            advance_animation(&mut grid);
            if let Tile::Coin { phase } = grid.tile(1, 3).unwrap() {
                seen.push(phase);
            }
        }
        assert_eq!(seen, vec![1, 2, 3, 4, 0]);
    }

    #[test]
    fn test_other_tiles_untouched() {
        let mut grid = Grid::new(5, 5).unwrap();
        grid.set_tile(0, 0, Tile::Wall).unwrap();
        grid.set_tile(2, 2, Tile::Hazard { kind: 1 }).unwrap();
        advance_animation(&mut grid);
        assert_eq!(grid.tile(0, 0).unwrap(), Tile::Wall);
        assert_eq!(grid.tile(2, 2).unwrap(), Tile::Hazard { kind: 1 });
        assert_eq!(grid.tile(3, 3).unwrap(), Tile::Empty);
    }
}
