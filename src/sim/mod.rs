//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod difficulty;
pub mod entity;
pub mod geometry;
pub mod state;
pub mod tick;

pub use collision::{CollisionOutcome, RockSpawn, resolve};
pub use difficulty::DifficultyState;
pub use entity::{Missile, Rock, RockSize, Ship};
pub use geometry::{circles_overlap, heading_vec, wrap_angle, wrap_position};
pub use state::{GamePhase, GameSnapshot, GameState, ShipPose, field_center};
pub use tick::{Command, tick};
