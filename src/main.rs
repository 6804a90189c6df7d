//! Headless demo entry point
//!
//! Runs the simulation without a renderer: a scripted pilot sweeps, works
//! the throttle and fires steadily. Progress goes to the log and the final
//! snapshot prints as JSON, which makes balance changes easy to eyeball:
//!
//! ```text
//! RUST_LOG=info cargo run -- 1979
//! ```

use astro_rocks::consts::SIM_DT;
use astro_rocks::sim::{Command, GameState, tick};

/// One minute of play at the fixed timestep
const DEMO_TICKS: u64 = 60 * 60;

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(1979);

    let mut state = GameState::new(seed);
    log::info!("demo pilot launching, seed {seed}");

    let mut commands = vec![Command::StartGame];
    for t in 0..DEMO_TICKS {
        tick(&mut state, &commands, SIM_DT);
        commands.clear();

        if state.game_over() {
            log::info!("pilot lost after {:.1}s", state.elapsed_secs);
            break;
        }

        // Scripted pilot: slow sweep, throttle bursts, constant fire.
        if t % 7 == 0 {
            commands.push(Command::RotateLeft);
        }
        match t % 90 {
            0 => commands.push(Command::Thrust(true)),
            45 => commands.push(Command::Thrust(false)),
            _ => {}
        }
        if t % 10 == 0 {
            commands.push(Command::Fire);
        }

        if t % 600 == 599 {
            log::info!(
                "t={:.0}s score={} rocks={} lives={}",
                state.elapsed_secs,
                state.score,
                state.rocks.len(),
                state.lives
            );
        }
    }

    match serde_json::to_string_pretty(&state.snapshot()) {
        Ok(json) => println!("{json}"),
        Err(err) => log::error!("snapshot serialization failed: {err}"),
    }
}
