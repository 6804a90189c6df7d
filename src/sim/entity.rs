//! Game entities: the player ship, drifting rocks, and missiles
//!
//! Entities only know how to move themselves one tick; nothing in here
//! decides destruction. That call belongs to the collision engine and the
//! missile-expiry sweep in the tick loop, so each entity has exactly one
//! owner deciding its lifecycle.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::{heading_vec, wrap_angle, wrap_position};
use crate::consts;
use crate::tuning::Tuning;

/// Rock size tiers. Splits only ever step down a tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RockSize {
    Big,
    Medium,
    Small,
}

impl RockSize {
    pub fn radius(self) -> f32 {
        match self {
            RockSize::Big => consts::ROCK_RADIUS_BIG,
            RockSize::Medium => consts::ROCK_RADIUS_MEDIUM,
            RockSize::Small => consts::ROCK_RADIUS_SMALL,
        }
    }

    pub fn score(self) -> u32 {
        match self {
            RockSize::Big => consts::SCORE_BIG,
            RockSize::Medium => consts::SCORE_MEDIUM,
            RockSize::Small => consts::SCORE_SMALL,
        }
    }

    /// Tier the children of a split belong to, `None` for the smallest.
    pub fn split(self) -> Option<RockSize> {
        match self {
            RockSize::Big => Some(RockSize::Medium),
            RockSize::Medium => Some(RockSize::Small),
            RockSize::Small => None,
        }
    }
}

/// The player's ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ship {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Heading in radians; 0 points up, positive turns counter-clockwise
    pub heading: f32,
    /// Throttle flag, set and cleared by `Thrust` commands
    pub thrusting: bool,
    pub radius: f32,
    /// Ticks until the next shot is allowed
    pub fire_cooldown: u32,
    /// Remaining post-respawn grace ticks; rocks pass through while > 0
    pub invuln_ticks: u32,
}

impl Ship {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            heading: 0.0,
            thrusting: false,
            radius: consts::SHIP_RADIUS,
            fire_cooldown: 0,
            invuln_ticks: 0,
        }
    }

    /// Unit vector the nose points along.
    #[inline]
    pub fn facing(&self) -> Vec2 {
        heading_vec(self.heading)
    }

    /// Where missiles leave the ship: one radius ahead of the nose.
    pub fn muzzle(&self) -> Vec2 {
        self.pos + self.facing() * self.radius
    }

    pub fn can_fire(&self) -> bool {
        self.fire_cooldown == 0
    }

    /// One tick of ship motion: rotate, thrust or coast, move, wrap.
    ///
    /// `turn` is the net rotation input for this tick in [-1, 1]
    /// (positive = counter-clockwise).
    pub fn advance(&mut self, turn: f32, dt: f32, bounds: Vec2, tuning: &Tuning) {
        self.heading = wrap_angle(self.heading + turn * tuning.ship_turn_rate * dt);

        if self.thrusting {
            self.vel += self.facing() * tuning.ship_thrust_accel * dt;
            self.vel = self.vel.clamp_length_max(tuning.ship_max_speed);
        } else {
            // throttle closed: bleed speed off linearly until the ship rests
            let speed = self.vel.length();
            if speed > 0.0 {
                let slowed = (speed - tuning.ship_drag_decel * dt).max(0.0);
                self.vel = if slowed == 0.0 {
                    Vec2::ZERO
                } else {
                    self.vel * (slowed / speed)
                };
            }
        }

        self.pos = wrap_position(self.pos + self.vel * dt, bounds);
        self.fire_cooldown = self.fire_cooldown.saturating_sub(1);
        self.invuln_ticks = self.invuln_ticks.saturating_sub(1);
    }
}

/// A drifting rock
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rock {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: RockSize,
}

impl Rock {
    #[inline]
    pub fn radius(&self) -> f32 {
        self.size.radius()
    }

    pub fn advance(&mut self, dt: f32, bounds: Vec2) {
        self.pos = wrap_position(self.pos + self.vel * dt, bounds);
    }

    /// Child velocities for a split: the parent velocity fanned out by the
    /// divergence angle on both sides, slightly faster.
    pub fn split_velocities(&self, tuning: &Tuning) -> (Vec2, Vec2) {
        let faster = self.vel * tuning.split_speed_factor;
        (
            Vec2::from_angle(consts::SPLIT_ANGLE).rotate(faster),
            Vec2::from_angle(-consts::SPLIT_ANGLE).rotate(faster),
        )
    }
}

/// A missile in flight
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Missile {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    /// Remaining flight time in ticks
    pub ttl_ticks: u32,
}

impl Missile {
    pub fn advance(&mut self, dt: f32, bounds: Vec2) {
        self.pos = wrap_position(self.pos + self.vel * dt, bounds);
        self.ttl_ticks = self.ttl_ticks.saturating_sub(1);
    }

    pub fn expired(&self) -> bool {
        self.ttl_ticks == 0
    }
}
