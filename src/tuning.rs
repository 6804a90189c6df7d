//! Data-driven game balance
//!
//! The constants the simulation treats as tunable rather than invariant.
//! `Default` mirrors [`crate::consts`]; embedders and tests override
//! individual fields to rebalance a session without recompiling.

use serde::{Deserialize, Serialize};

use crate::consts;

/// Gameplay balance knobs, owned by the game state for the session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tuning {
    // Ship handling
    pub ship_turn_rate: f32,
    pub ship_thrust_accel: f32,
    pub ship_drag_decel: f32,
    pub ship_max_speed: f32,
    pub start_lives: u8,
    pub respawn_invuln_ticks: u32,

    // Missiles
    pub missile_speed: f32,
    pub missile_ttl_ticks: u32,
    pub fire_cooldown_ticks: u32,

    // Rocks
    pub rock_speed: f32,
    pub split_speed_factor: f32,
    pub max_rocks: usize,

    // Difficulty cadence
    pub base_big_rocks: u32,
    pub tier_seconds: f32,
    pub spawn_clearance_start: f32,
    pub spawn_clearance_step: f32,
    pub spawn_clearance_min: f32,
    pub spawn_margin: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            ship_turn_rate: consts::SHIP_TURN_RATE,
            ship_thrust_accel: consts::SHIP_THRUST_ACCEL,
            ship_drag_decel: consts::SHIP_DRAG_DECEL,
            ship_max_speed: consts::SHIP_MAX_SPEED,
            start_lives: consts::SHIP_START_LIVES,
            respawn_invuln_ticks: consts::RESPAWN_INVULN_TICKS,

            missile_speed: consts::MISSILE_SPEED,
            missile_ttl_ticks: consts::MISSILE_TTL_TICKS,
            fire_cooldown_ticks: consts::FIRE_COOLDOWN_TICKS,

            rock_speed: consts::ROCK_SPEED,
            split_speed_factor: consts::SPLIT_SPEED_FACTOR,
            max_rocks: consts::MAX_ROCKS,

            base_big_rocks: consts::BASE_BIG_ROCKS,
            tier_seconds: consts::TIER_SECONDS,
            spawn_clearance_start: consts::SPAWN_CLEARANCE_START,
            spawn_clearance_step: consts::SPAWN_CLEARANCE_STEP,
            spawn_clearance_min: consts::SPAWN_CLEARANCE_MIN,
            spawn_margin: consts::SPAWN_MARGIN,
        }
    }
}

impl Tuning {
    /// Parse a balance override from JSON, e.g. a playtest profile.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
