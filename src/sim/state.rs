//! Authoritative game state and the render-ready snapshot
//!
//! Everything a session owns lives in [`GameState`]: the ship singleton,
//! the rock and missile collections, score, lives, the survival clock and
//! the escalation state. Only the tick loop mutates it.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::difficulty::{self, DifficultyState};
use super::entity::{Missile, Rock, RockSize, Ship};
use crate::consts::{FIELD_HEIGHT, FIELD_WIDTH};
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Field laid out, waiting for StartGame
    Ready,
    /// Active gameplay
    Playing,
    /// Frozen mid-session
    Paused,
    /// Run ended; accepts Restart
    GameOver,
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Session seed; Restart rebuilds from it, so runs are reproducible
    pub seed: u64,
    /// Spawn placement RNG, advanced only by rock spawns
    pub rng: Pcg32,
    pub phase: GamePhase,
    pub ship: Ship,
    /// Authoritative rock collection; each rock lives here and only here
    pub rocks: Vec<Rock>,
    /// Authoritative missile collection
    pub missiles: Vec<Missile>,
    pub score: u32,
    pub lives: u8,
    /// Survival time in seconds; drives difficulty
    pub elapsed_secs: f32,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub difficulty: DifficultyState,
    pub tuning: Tuning,
    next_id: u32,
}

/// Center of the play field, the ship's home position.
pub fn field_center() -> Vec2 {
    Vec2::new(FIELD_WIDTH / 2.0, FIELD_HEIGHT / 2.0)
}

impl GameState {
    /// Create a new session with default balance.
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    /// Create a new session with custom balance.
    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Ready,
            ship: Ship::new(field_center()),
            rocks: Vec::new(),
            missiles: Vec::new(),
            score: 0,
            lives: tuning.start_lives,
            elapsed_secs: 0.0,
            time_ticks: 0,
            difficulty: DifficultyState::new(),
            tuning,
            next_id: 1,
        };

        for _ in 0..state.tuning.base_big_rocks {
            state.spawn_big_rock();
        }

        state
    }

    pub fn bounds(&self) -> Vec2 {
        Vec2::new(FIELD_WIDTH, FIELD_HEIGHT)
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Spawn one big rock outside the current clearance zone.
    pub fn spawn_big_rock(&mut self) {
        let clearance = self.difficulty.spawn_clearance(&self.tuning);
        let bounds = self.bounds();
        let ship_pos = self.ship.pos;
        let id = self.next_entity_id();
        let rock = difficulty::spawn_rock(
            id,
            &mut self.rng,
            ship_pos,
            clearance,
            RockSize::Big,
            bounds,
            &self.tuning,
        );
        self.rocks.push(rock);
    }

    /// Put the ship back at the field center with a grace window.
    pub fn respawn_ship(&mut self) {
        self.ship = Ship::new(field_center());
        self.ship.invuln_ticks = self.tuning.respawn_invuln_ticks;
    }

    /// Atomic reset: rebuild the whole session from the stored seed and
    /// tuning. All or nothing; there is no partial reset.
    pub fn reset(&mut self) {
        *self = Self::with_tuning(self.seed, self.tuning.clone());
    }

    pub fn game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Read-only view for the renderer.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            ship: ShipPose {
                pos: self.ship.pos,
                heading: self.ship.heading,
                thrusting: self.ship.thrusting,
                invulnerable: self.ship.invuln_ticks > 0,
            },
            lives: self.lives,
            score: self.score,
            rocks: self.rocks.clone(),
            missiles: self.missiles.clone(),
            game_over: self.game_over(),
            tier: self.difficulty.tier,
            elapsed_secs: self.elapsed_secs,
        }
    }
}

/// Ship fields a renderer needs to draw a frame
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ShipPose {
    pub pos: Vec2,
    pub heading: f32,
    pub thrusting: bool,
    pub invulnerable: bool,
}

/// Per-tick render handoff: plain data, no simulation internals
#[derive(Debug, Clone, Serialize)]
pub struct GameSnapshot {
    pub ship: ShipPose,
    pub lives: u8,
    pub score: u32,
    pub rocks: Vec<Rock>,
    pub missiles: Vec<Missile>,
    pub game_over: bool,
    pub tier: u32,
    pub elapsed_secs: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_layout() {
        let state = GameState::new(1234);
        assert_eq!(state.phase, GamePhase::Ready);
        assert_eq!(state.lives, 3);
        assert_eq!(state.score, 0);
        assert_eq!(state.difficulty.tier, 0);
        assert_eq!(state.rocks.len(), 4);
        assert!(state.missiles.is_empty());
        assert!(state.rocks.iter().all(|r| r.size == RockSize::Big));
        assert_eq!(state.ship.pos, field_center());
    }

    #[test]
    fn test_initial_rocks_clear_the_ship() {
        let state = GameState::new(99);
        let clearance = state.difficulty.spawn_clearance(&state.tuning);
        for rock in &state.rocks {
            assert!(rock.pos.distance(state.ship.pos) >= clearance);
        }
    }

    #[test]
    fn test_entity_ids_are_unique() {
        let mut state = GameState::new(5);
        let mut ids: Vec<u32> = state.rocks.iter().map(|r| r.id).collect();
        ids.push(state.next_entity_id());
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 5);
    }

    #[test]
    fn test_reset_is_reproducible() {
        let mut state = GameState::new(42);
        state.score = 500;
        state.lives = 1;
        state.elapsed_secs = 31.0;
        state.difficulty.tier = 1;

        state.reset();
        let first = serde_json::to_string(&state).unwrap();
        state.reset();
        let second = serde_json::to_string(&state).unwrap();
        assert_eq!(first, second);

        assert_eq!(state.lives, 3);
        assert_eq!(state.score, 0);
        assert_eq!(state.difficulty.tier, 0);
        assert_eq!(state.rocks.len(), 4);
        assert!(state.missiles.is_empty());
    }

    #[test]
    fn test_respawn_grants_grace() {
        let mut state = GameState::new(7);
        state.ship.pos = Vec2::new(10.0, 10.0);
        state.ship.vel = Vec2::new(100.0, 0.0);
        state.respawn_ship();
        assert_eq!(state.ship.pos, field_center());
        assert_eq!(state.ship.vel, Vec2::ZERO);
        assert!(state.ship.invuln_ticks > 0);
    }

    #[test]
    fn test_snapshot_mirrors_state() {
        let state = GameState::new(3);
        let snap = state.snapshot();
        assert_eq!(snap.lives, state.lives);
        assert_eq!(snap.score, state.score);
        assert_eq!(snap.rocks.len(), state.rocks.len());
        assert!(!snap.game_over);
        assert_eq!(snap.ship.pos, state.ship.pos);
    }
}
