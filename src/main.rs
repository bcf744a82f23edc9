//! Dino Dash entry point
//!
//! Headless demo driver: runs the simulation at the fixed 16 ms cadence with
//! a tiny autopilot standing in for the player, then reports the run. All
//! rendering/input surfaces plug in the same way this loop does: deliver
//! input events, call `tick`, read a `Snapshot`.

use std::path::Path;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use dino_dash::consts::TICK_MS;
use dino_dash::sim::{self, GamePhase, GameState, InputEvent};
use dino_dash::{HighScoreFile, Tuning};

const TICK: Duration = Duration::from_millis(TICK_MS);
/// Stop the demo after this many ticks even if the autopilot is still alive
const MAX_DEMO_TICKS: u64 = 120 * 1000 / TICK_MS;

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or(0)
        });

    let tuning = Tuning::load(Path::new("tuning.json"));
    let scores = HighScoreFile::new("highscore.json");

    let mut state = GameState::with_tuning(seed, tuning);
    state.high_score = scores.load();
    sim::apply_input(&mut state, InputEvent::BeginOrJump);

    let mut last = Instant::now();
    let mut accumulator = Duration::ZERO;
    let mut last_phase = state.phase;

    while !state.quit_requested {
        let now = Instant::now();
        accumulator += now - last;
        last = now;

        while accumulator >= TICK {
            autopilot(&mut state);
            sim::tick(&mut state);
            accumulator -= TICK;
        }

        // Persist the high score exactly once, on the transition into GameOver
        if state.phase != last_phase {
            if state.phase == GamePhase::GameOver {
                scores.save(state.high_score);
                sim::apply_input(&mut state, InputEvent::Quit);
            }
            last_phase = state.phase;
        }

        if state.time_ticks >= MAX_DEMO_TICKS && state.phase == GamePhase::Playing {
            log::info!("Demo time limit reached");
            scores.save(state.high_score);
            sim::apply_input(&mut state, InputEvent::Quit);
        }

        std::thread::sleep(Duration::from_millis(1));
    }

    let snap = state.snapshot();
    println!(
        "seed {seed}: score {}, best {}{}",
        snap.score,
        snap.high_score,
        if snap.new_high_score { " (new record)" } else { "" },
    );
}

/// Demo autopilot: jump when the nearest oncoming obstacle closes within a
/// speed-scaled window
fn autopilot(state: &mut GameState) {
    if state.phase != GamePhase::Playing {
        return;
    }
    let player_front = state.player.pos.x + state.player.size.x;
    let window = state.speed * 14.0;
    let nearest = state
        .obstacles
        .iter()
        .filter(|o| o.pos.x + o.size.x > state.player.pos.x)
        .map(|o| o.pos.x)
        .fold(f32::INFINITY, f32::min);
    if nearest - player_front < window {
        sim::apply_input(state, InputEvent::BeginOrJump);
    }
}
