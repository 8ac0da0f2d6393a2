//! Headless demo driver
//!
//! Runs a scripted session without any renderer: a fixed tilt pattern walks
//! the worm around the board while the animation cadence runs alongside.
//! Useful for eyeballing the simulation via `RUST_LOG=debug`.

use gridworm::{Config, GameEvent, GameSession};

/// Tilt script: hold each axis pair for a stretch of ticks, looping. The
/// values sit past the deadzone so every resolved step actually moves.
const SCRIPT: [(f32, f32); 8] = [
    (3.0, 0.0),
    (3.0, 3.0),
    (0.0, 3.0),
    (-3.0, 3.0),
    (-3.0, 0.0),
    (-3.0, -3.0),
    (0.0, -3.0),
    (3.0, -3.0),
];

const TICKS_PER_SCRIPT_STEP: usize = 12;
const MAX_TICKS: usize = 5_000;

fn main() {
    env_logger::init();

    let seed = 0xC0FFEE;
    let mut session = GameSession::new(Config::default(), seed);
    if let Err(err) = session.resize(20, 12) {
        eprintln!("layout failed: {err}");
        return;
    }
    if let Err(err) = session.start_new_game() {
        eprintln!("could not start: {err}");
        return;
    }

    for step in 0..MAX_TICKS {
        let (axis_x, axis_y) = SCRIPT[(step / TICKS_PER_SCRIPT_STEP) % SCRIPT.len()];
        for event in session.tick(axis_x, axis_y) {
            match event {
                GameEvent::ScoreUpdated(score) => log::info!("score {score}"),
                GameEvent::GameLost => log::info!("game over after {step} ticks"),
            }
        }
        // The render cadence would do this once per frame; here it just
        // keeps the coin phases churning.
        session.advance_animation();
        if !session.is_playing() {
            break;
        }
    }

    println!(
        "final score {} ({})",
        session.score(),
        if session.is_playing() {
            "still alive"
        } else {
            "lost"
        }
    );
    if let Some(grid) = session.grid() {
        match serde_json::to_string(grid) {
            Ok(json) => println!("{json}"),
            Err(err) => eprintln!("snapshot failed: {err}"),
        }
    }
}
