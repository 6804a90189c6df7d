//! Astro Rocks - a classic rock-blasting arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, difficulty, game state)
//! - `tuning`: Data-driven game balance
//!
//! This crate is the gameplay core only. Windowing, input capture,
//! rendering and audio belong to the embedder: translate key events into
//! [`sim::Command`]s, advance with [`sim::tick`] at a fixed timestep, and
//! draw whatever [`sim::GameState::snapshot`] hands back.

pub mod sim;
pub mod tuning;

pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Field dimensions
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Ship defaults
    pub const SHIP_RADIUS: f32 = 15.0;
    /// Turn rate in radians/sec (~300 degrees/sec)
    pub const SHIP_TURN_RATE: f32 = 5.24;
    pub const SHIP_THRUST_ACCEL: f32 = 900.0;
    /// Linear speed bleed-off when the throttle is closed
    pub const SHIP_DRAG_DECEL: f32 = 900.0;
    pub const SHIP_MAX_SPEED: f32 = 600.0;
    pub const SHIP_START_LIVES: u8 = 3;
    /// Post-respawn grace period (2 seconds)
    pub const RESPAWN_INVULN_TICKS: u32 = 120;

    /// Missile defaults
    pub const MISSILE_RADIUS: f32 = 5.0;
    pub const MISSILE_SPEED: f32 = 450.0;
    pub const MISSILE_TTL_TICKS: u32 = 75;
    /// Minimum spacing between shots (0.15 seconds)
    pub const FIRE_COOLDOWN_TICKS: u32 = 9;

    /// Rock defaults
    pub const ROCK_SPEED: f32 = 120.0;
    pub const ROCK_RADIUS_BIG: f32 = 75.0;
    pub const ROCK_RADIUS_MEDIUM: f32 = 50.0;
    pub const ROCK_RADIUS_SMALL: f32 = 25.0;
    /// Split children diverge this far from the parent velocity
    pub const SPLIT_ANGLE: f32 = std::f32::consts::FRAC_PI_6;
    pub const SPLIT_SPEED_FACTOR: f32 = 1.15;
    /// Hard population cap, difficulty spawns stop here
    pub const MAX_ROCKS: usize = 15;

    /// Score per destroyed tier. Smaller rocks are harder to hit and pay more.
    pub const SCORE_BIG: u32 = 20;
    pub const SCORE_MEDIUM: u32 = 50;
    pub const SCORE_SMALL: u32 = 100;

    /// Difficulty cadence
    pub const BASE_BIG_ROCKS: u32 = 4;
    pub const TIER_SECONDS: f32 = 20.0;
    pub const SPAWN_CLEARANCE_START: f32 = 350.0;
    pub const SPAWN_CLEARANCE_STEP: f32 = 50.0;
    pub const SPAWN_CLEARANCE_MIN: f32 = 200.0;
    /// First spawn roll stays this far inside the field edges
    pub const SPAWN_MARGIN: f32 = 200.0;
}
