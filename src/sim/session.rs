//! Session orchestration and tick cadence
//!
//! Owns the grid, the worm, score and difficulty, and the Idle/Playing/Lost
//! state machine. Raw input ticks arrive much faster than the worm should
//! move; only every `tick_threshold`-th tick resolves a step, and the
//! threshold drops by one (floor 1) each time a board is fully cleared, so
//! the game speeds up as the player progresses.
//!
//! The session is single-threaded and synchronous. `tick` and
//! `advance_animation` are meant to be driven by two different external
//! cadences, but the `&mut self` receivers force the host to serialize them.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::animate;
use super::generate::{generate, start_cell, validate_dimensions};
use super::grid::{Grid, Position, Tile};
use super::movement::{Facing, StepOutcome, resolve_step};
use crate::config::Config;
use crate::error::SimError;

/// Session lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Phase {
    /// No active board; waiting for dimensions and a new-game command.
    #[default]
    Idle,
    /// A run is in progress; ticks are processed.
    Playing,
    /// The worm touched a hazard. Terminal until the next new-game command.
    Lost,
}

/// Notifications produced inline by [`GameSession::tick`].
///
/// Order and payload are the contract; hosts forward these to whatever
/// listener mechanism they use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The score changed; carries the new cumulative score.
    ScoreUpdated(u64),
    /// The worm touched a hazard; the session is now [`Phase::Lost`].
    GameLost,
}

/// One playthrough owner: grid, worm, score, difficulty, cadence.
pub struct GameSession {
    config: Config,
    rng: Pcg32,
    columns: u32,
    rows: u32,
    grid: Option<Grid>,
    worm: Position,
    facing: Facing,
    phase: Phase,
    score: u64,
    coins_remaining: u32,
    tick_threshold: u32,
    tick_counter: u32,
}

impl GameSession {
    /// Create an idle session. Dimensions arrive later from the layout
    /// collaborator via [`resize`](Self::resize); the seed makes every board
    /// of the run reproducible.
    pub fn new(config: Config, seed: u64) -> Self {
        let config = config.sanitized();
        let tick_threshold = config.start_tick_threshold;
        Self {
            config,
            rng: Pcg32::seed_from_u64(seed),
            columns: 0,
            rows: 0,
            grid: None,
            worm: Position::new(0, 0),
            facing: Facing::Left,
            phase: Phase::Idle,
            score: 0,
            coins_remaining: 0,
            tick_threshold,
            tick_counter: 0,
        }
    }

    /// Start a session directly on a prepared board, worm included. Used by
    /// test harnesses and scripted scenarios; normal hosts go through
    /// [`resize`](Self::resize) and [`start_new_game`](Self::start_new_game).
    pub fn with_board(
        config: Config,
        seed: u64,
        grid: Grid,
        worm: Position,
    ) -> Result<Self, SimError> {
        let (columns, rows) = grid.dimensions();
        // Confirms the worm cell exists before we commit to the board.
        let _ = grid.tile(worm.col, worm.row)?;
        let mut session = Self::new(config, seed);
        session.columns = columns;
        session.rows = rows;
        session.coins_remaining = grid.count_coins();
        session.grid = Some(grid);
        session.worm = worm;
        session.phase = Phase::Playing;
        Ok(session)
    }

    /// Supply board dimensions from the layout collaborator.
    ///
    /// While not playing, this also rebuilds the bare bordered preview board.
    /// During a run the new extent is only recorded and takes effect on the
    /// next regeneration or new game, so a mid-run relayout never clobbers
    /// an active board. Invalid dimensions are refused and change nothing.
    pub fn resize(&mut self, columns: u32, rows: u32) -> Result<(), SimError> {
        validate_dimensions(columns, rows)?;
        if self.phase != Phase::Playing {
            let preview = generate(
                columns,
                rows,
                false,
                self.config.hazard_divisor,
                self.config.coin_divisor,
                &mut self.rng,
            )?;
            self.grid = Some(preview);
        }
        self.columns = columns;
        self.rows = rows;
        Ok(())
    }

    /// Start (or restart) a run: fresh populated board, worm at center,
    /// score zeroed, cadence back to the configured start threshold.
    ///
    /// Fails with [`SimError::InvalidDimensions`] until a valid extent has
    /// been supplied; the session then simply stays out of `Playing`.
    pub fn start_new_game(&mut self) -> Result<(), SimError> {
        let grid = generate(
            self.columns,
            self.rows,
            true,
            self.config.hazard_divisor,
            self.config.coin_divisor,
            &mut self.rng,
        )?;
        self.coins_remaining = grid.count_coins();
        self.grid = Some(grid);
        self.worm = start_cell(self.columns, self.rows);
        self.facing = Facing::Left;
        self.score = 0;
        self.tick_threshold = self.config.start_tick_threshold;
        self.tick_counter = 0;
        self.phase = Phase::Playing;
        log::info!(
            "new game: {}x{} board, {} coins, threshold {}",
            self.columns,
            self.rows,
            self.coins_remaining,
            self.tick_threshold
        );
        Ok(())
    }

    /// Process one input tick.
    ///
    /// Ignored unless playing. Every `tick_threshold`-th call resolves one
    /// movement step; the returned events describe what that step changed,
    /// in the order it changed things. An empty vec means nothing a host
    /// needs to announce happened.
    pub fn tick(&mut self, axis_x: f32, axis_y: f32) -> Vec<GameEvent> {
        let mut events = Vec::new();
        if self.phase != Phase::Playing {
            return events;
        }
        self.tick_counter += 1;
        if self.tick_counter < self.tick_threshold {
            return events;
        }
        self.tick_counter = 0;

        let Some(grid) = self.grid.as_mut() else {
            return events;
        };
        let outcome = resolve_step(
            grid,
            &mut self.worm,
            &mut self.facing,
            axis_x,
            axis_y,
            self.config.axis_deadzone,
        );
        match outcome {
            StepOutcome::CoinCollected => {
                self.score += self.config.coin_reward;
                self.coins_remaining = self.coins_remaining.saturating_sub(1);
                log::debug!(
                    "coin collected at ({}, {}), {} left",
                    self.worm.col,
                    self.worm.row,
                    self.coins_remaining
                );
                if self.coins_remaining == 0 {
                    self.tick_threshold = self.tick_threshold.saturating_sub(1).max(1);
                    self.regenerate();
                }
                events.push(GameEvent::ScoreUpdated(self.score));
            }
            StepOutcome::HazardTouched => {
                self.phase = Phase::Lost;
                log::info!(
                    "worm down at ({}, {}), final score {}",
                    self.worm.col,
                    self.worm.row,
                    self.score
                );
                events.push(GameEvent::GameLost);
            }
            StepOutcome::Idle | StepOutcome::Blocked | StepOutcome::Moved => {}
        }
        events
    }

    /// Advance coin animation one phase. Driven by the host's draw cadence;
    /// a no-op while there is no board.
    pub fn advance_animation(&mut self) {
        if let Some(grid) = self.grid.as_mut() {
            animate::advance_animation(grid);
        }
    }

    /// Board cleared: speed already adjusted, now rebuild and re-center.
    fn regenerate(&mut self) {
        match generate(
            self.columns,
            self.rows,
            true,
            self.config.hazard_divisor,
            self.config.coin_divisor,
            &mut self.rng,
        ) {
            Ok(grid) => {
                self.coins_remaining = grid.count_coins();
                self.grid = Some(grid);
                self.worm = start_cell(self.columns, self.rows);
                log::info!(
                    "board cleared: regenerated with {} coins, threshold {}",
                    self.coins_remaining,
                    self.tick_threshold
                );
            }
            Err(err) => {
                // Dimensions only change through resize, which validates, so
                // this should never trigger; fail back to Idle rather than
                // playing on without a board.
                log::error!("board regeneration failed: {err}");
                self.grid = None;
                self.phase = Phase::Idle;
            }
        }
    }

    /// Read one cell of the active board. With no board at all, every
    /// address is outside the (zero) extent.
    pub fn tile_at(&self, col: u32, row: u32) -> Result<Tile, SimError> {
        match &self.grid {
            Some(grid) => grid.tile(col, row),
            None => Err(SimError::OutOfBounds {
                col,
                row,
                columns: 0,
                rows: 0,
            }),
        }
    }

    /// The active board, if any. Rendering hosts iterate
    /// [`Grid::cells`](crate::Grid::cells) from here.
    pub fn grid(&self) -> Option<&Grid> {
        self.grid.as_ref()
    }

    /// Current extent as `(columns, rows)`; `(0, 0)` before the first resize.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.columns, self.rows)
    }

    pub fn worm_position(&self) -> Position {
        self.worm
    }

    /// Sprite orientation from the last horizontal intent.
    pub fn facing(&self) -> Facing {
        self.facing
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn is_playing(&self) -> bool {
        self.phase == Phase::Playing
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Coins still on the board; always equals the live `Coin` tile count.
    pub fn coins_remaining(&self) -> u32 {
        self.coins_remaining
    }

    /// Current ticks-per-move cadence.
    pub fn tick_threshold(&self) -> u32 {
        self.tick_threshold
    }
}
