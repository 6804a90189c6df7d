//! Time-based difficulty escalation and rock spawn placement
//!
//! Survival time divides into fixed tiers. Each tier raises the big-rock
//! target by one and pulls the spawn exclusion zone tighter around the
//! ship, down to a safety minimum so rocks never appear on top of it.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::entity::{Rock, RockSize};
use super::geometry::wrap_position;
use crate::tuning::Tuning;

/// Escalation state, advanced by the tick loop from the game clock.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DifficultyState {
    /// Completed escalation steps; tier N is active once elapsed >= N * tier_seconds
    pub tier: u32,
}

impl DifficultyState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tier the clock maps to.
    pub fn tier_for(elapsed_secs: f32, tuning: &Tuning) -> u32 {
        (elapsed_secs / tuning.tier_seconds) as u32
    }

    /// Catch up with the clock; returns how many tiers were crossed.
    pub fn update(&mut self, elapsed_secs: f32, tuning: &Tuning) -> u32 {
        let target = Self::tier_for(elapsed_secs, tuning);
        let crossed = target.saturating_sub(self.tier);
        self.tier = self.tier.max(target);
        crossed
    }

    /// Big rocks the field should hold at the current tier.
    pub fn big_rock_target(&self, tuning: &Tuning) -> u32 {
        tuning.base_big_rocks + self.tier
    }

    /// Radius around the ship no rock may spawn inside. Shrinks per tier,
    /// never below the safety minimum.
    pub fn spawn_clearance(&self, tuning: &Tuning) -> f32 {
        (tuning.spawn_clearance_start - self.tier as f32 * tuning.spawn_clearance_step)
            .max(tuning.spawn_clearance_min)
    }
}

/// Pick a spawn position: uniform inside the field margins, rerolled over
/// the whole field while it lands inside the clearance circle.
pub fn spawn_position(
    rng: &mut Pcg32,
    ship_pos: Vec2,
    clearance: f32,
    bounds: Vec2,
    margin: f32,
) -> Vec2 {
    let mut pos = Vec2::new(
        rng.random_range(margin..bounds.x - margin),
        rng.random_range(margin..bounds.y - margin),
    );
    for _ in 0..64 {
        if pos.distance(ship_pos) >= clearance {
            return pos;
        }
        pos = Vec2::new(
            rng.random_range(0.0..bounds.x),
            rng.random_range(0.0..bounds.y),
        );
    }
    // the torus antipode of the ship can never sit inside the clearance zone
    wrap_position(ship_pos + bounds * 0.5, bounds)
}

/// Spawn a rock drifting in a random direction at the fixed rock speed.
pub fn spawn_rock(
    id: u32,
    rng: &mut Pcg32,
    ship_pos: Vec2,
    clearance: f32,
    size: RockSize,
    bounds: Vec2,
    tuning: &Tuning,
) -> Rock {
    let pos = spawn_position(rng, ship_pos, clearance, bounds, tuning.spawn_margin);
    let dir = Vec2::from_angle(rng.random_range(0.0..std::f32::consts::TAU));
    log::debug!("spawn {size:?} rock at ({:.0}, {:.0})", pos.x, pos.y);
    Rock {
        id,
        pos,
        vel: dir * tuning.rock_speed,
        size,
    }
}
