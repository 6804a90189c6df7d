//! Fixed timestep simulation tick
//!
//! One call to [`tick`] advances the whole game by `dt`. The internal
//! order is fixed: commands, clock, entity motion, collision resolution,
//! difficulty escalation, missile expiry. Renderers snapshotting after a
//! tick therefore always see fully resolved state, never a frame where a
//! hit has landed but its consequences have not.

use super::collision::{self, CollisionOutcome};
use super::entity::{Missile, Rock};
use super::state::{GamePhase, GameState};

/// Discrete player commands, drained once per tick in arrival order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    RotateLeft,
    RotateRight,
    Thrust(bool),
    Fire,
    StartGame,
    Restart,
    Pause,
}

/// Advance the game state by one fixed timestep.
pub fn tick(state: &mut GameState, commands: &[Command], dt: f32) {
    let mut turn = 0.0f32;
    let mut fire = false;

    for &command in commands {
        match command {
            Command::RotateLeft => turn += 1.0,
            Command::RotateRight => turn -= 1.0,
            Command::Thrust(on) => state.ship.thrusting = on,
            Command::Fire => fire = true,
            Command::StartGame => {
                if state.phase == GamePhase::Ready {
                    state.phase = GamePhase::Playing;
                    log::info!("game started (seed {})", state.seed);
                }
            }
            Command::Restart => {
                state.reset();
                state.phase = GamePhase::Playing;
                log::info!("restart (seed {})", state.seed);
                return;
            }
            Command::Pause => match state.phase {
                GamePhase::Playing => state.phase = GamePhase::Paused,
                GamePhase::Paused => state.phase = GamePhase::Playing,
                _ => {}
            },
        }
    }

    // Ready, Paused and GameOver all hold still; only Playing simulates.
    if state.phase != GamePhase::Playing {
        return;
    }

    state.time_ticks += 1;
    state.elapsed_secs += dt;

    if fire && state.ship.can_fire() {
        fire_missile(state);
    }

    // Motion
    let bounds = state.bounds();
    let turn = turn.clamp(-1.0, 1.0);
    state.ship.advance(turn, dt, bounds, &state.tuning);
    for missile in &mut state.missiles {
        missile.advance(dt, bounds);
    }
    for rock in &mut state.rocks {
        rock.advance(dt, bounds);
    }

    // Collisions
    let outcome = collision::resolve(&state.ship, &state.rocks, &state.missiles, &state.tuning);
    apply_outcome(state, outcome);
    if state.game_over() {
        return;
    }

    // Difficulty escalation
    let crossed = state.difficulty.update(state.elapsed_secs, &state.tuning);
    if crossed > 0 {
        for _ in 0..crossed {
            if state.rocks.len() >= state.tuning.max_rocks {
                log::debug!("rock cap reached, skipping tier spawn");
                break;
            }
            state.spawn_big_rock();
        }
        log::info!(
            "difficulty tier {} ({} big rocks targeted)",
            state.difficulty.tier,
            state.difficulty.big_rock_target(&state.tuning)
        );
    }

    // Expired missiles vanish without scoring
    state.missiles.retain(|m| !m.expired());

    assert_invariants(state);
}

fn fire_missile(state: &mut GameState) {
    let id = state.next_entity_id();
    let pos = state.ship.muzzle();
    let vel = state.ship.facing() * state.tuning.missile_speed;
    state.missiles.push(Missile {
        id,
        pos,
        vel,
        ttl_ticks: state.tuning.missile_ttl_ticks,
    });
    state.ship.fire_cooldown = state.tuning.fire_cooldown_ticks;
}

/// Apply a resolution pass to the authoritative state: removals first,
/// then split children, then lives/phase.
fn apply_outcome(state: &mut GameState, outcome: CollisionOutcome) {
    state.score += outcome.score_delta;

    // Merge the ship's rock into the removal set before any index shifts.
    let mut destroyed = outcome.destroyed_rocks;
    if let Some(ri) = outcome.ship_struck_by {
        if let Err(insert_at) = destroyed.binary_search(&ri) {
            destroyed.insert(insert_at, ri);
        }
    }
    for &ri in destroyed.iter().rev() {
        state.rocks.remove(ri);
    }
    for &mi in outcome.spent_missiles.iter().rev() {
        state.missiles.remove(mi);
    }

    for spawn in outcome.spawned_rocks {
        let id = state.next_entity_id();
        state.rocks.push(Rock {
            id,
            pos: spawn.pos,
            vel: spawn.vel,
            size: spawn.size,
        });
    }

    if outcome.ship_struck_by.is_some() {
        state.lives = state.lives.saturating_sub(1);
        if state.lives == 0 {
            state.phase = GamePhase::GameOver;
            log::info!(
                "game over: score {}, survived {:.1}s",
                state.score,
                state.elapsed_secs
            );
        } else {
            state.respawn_ship();
            log::info!("ship destroyed, {} lives left", state.lives);
        }
    }
}

/// Invariant violations are programming defects, fatal in debug builds.
fn assert_invariants(state: &GameState) {
    let bounds = state.bounds();
    let in_field = |p: glam::Vec2| p.x >= 0.0 && p.x < bounds.x && p.y >= 0.0 && p.y < bounds.y;

    debug_assert!(state.ship.radius > 0.0);
    debug_assert!(in_field(state.ship.pos));
    debug_assert!(state.rocks.iter().all(|r| in_field(r.pos) && r.radius() > 0.0));
    debug_assert!(state.missiles.iter().all(|m| in_field(m.pos)));
    debug_assert!(state.lives > 0 || state.game_over());
}
