//! Collision resolution: missile-rock splitting and ship-rock hits
//!
//! One pass over the current entities produces a [`CollisionOutcome`]
//! describing every removal, replacement and score change. The pass is
//! pure; the tick loop owns applying it to the authoritative state.

use glam::Vec2;

use super::entity::{Missile, Rock, RockSize, Ship};
use super::geometry::circles_overlap;
use crate::consts;
use crate::tuning::Tuning;

/// A rock the outcome wants added; the state assigns its id on insert.
#[derive(Debug, Clone, Copy)]
pub struct RockSpawn {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: RockSize,
}

/// Everything one resolution pass decided.
#[derive(Debug, Default)]
pub struct CollisionOutcome {
    /// Indices into the rock list, ascending, destroyed by missiles
    pub destroyed_rocks: Vec<usize>,
    /// Split children to append after removals
    pub spawned_rocks: Vec<RockSpawn>,
    /// Indices into the missile list, ascending, spent on hits
    pub spent_missiles: Vec<usize>,
    pub score_delta: u32,
    /// Rock (by index) that struck the ship, if any survived the missile pass
    pub ship_struck_by: Option<usize>,
}

impl CollisionOutcome {
    pub fn is_empty(&self) -> bool {
        self.destroyed_rocks.is_empty()
            && self.spent_missiles.is_empty()
            && self.ship_struck_by.is_none()
    }
}

/// Resolve all overlaps for this tick.
///
/// Missile-rock pairs go first: a hit spends the missile, scores by the
/// rock's tier, and fans the rock into two children one tier down (the
/// smallest tier just vanishes). The ship pass runs afterwards over the
/// survivors, so a rock shot and touched in the same tick counts as shot,
/// never as ship damage.
pub fn resolve(
    ship: &Ship,
    rocks: &[Rock],
    missiles: &[Missile],
    tuning: &Tuning,
) -> CollisionOutcome {
    let mut out = CollisionOutcome::default();
    let mut rock_gone = vec![false; rocks.len()];

    for (mi, missile) in missiles.iter().enumerate() {
        for (ri, rock) in rocks.iter().enumerate() {
            if rock_gone[ri] {
                continue;
            }
            if !circles_overlap(missile.pos, consts::MISSILE_RADIUS, rock.pos, rock.radius()) {
                continue;
            }

            rock_gone[ri] = true;
            out.spent_missiles.push(mi);
            out.score_delta += rock.size.score();

            if let Some(child) = rock.size.split() {
                let (vel_a, vel_b) = rock.split_velocities(tuning);
                out.spawned_rocks.push(RockSpawn {
                    pos: rock.pos,
                    vel: vel_a,
                    size: child,
                });
                out.spawned_rocks.push(RockSpawn {
                    pos: rock.pos,
                    vel: vel_b,
                    size: child,
                });
            }

            // one hit per missile
            break;
        }
    }

    if ship.invuln_ticks == 0 {
        out.ship_struck_by = rocks
            .iter()
            .enumerate()
            .find(|(ri, rock)| {
                !rock_gone[*ri]
                    && circles_overlap(ship.pos, ship.radius, rock.pos, rock.radius())
            })
            .map(|(ri, _)| ri);
    }

    out.destroyed_rocks = rock_gone
        .iter()
        .enumerate()
        .filter_map(|(ri, &gone)| gone.then_some(ri))
        .collect();

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tuning() -> Tuning {
        Tuning::default()
    }

    fn rock(id: u32, pos: Vec2, size: RockSize) -> Rock {
        Rock {
            id,
            pos,
            vel: Vec2::new(120.0, 0.0),
            size,
        }
    }

    fn missile(id: u32, pos: Vec2) -> Missile {
        Missile {
            id,
            pos,
            vel: Vec2::new(450.0, 0.0),
            ttl_ticks: 75,
        }
    }

    fn far_ship() -> Ship {
        Ship::new(Vec2::new(700.0, 500.0))
    }

    #[test]
    fn test_miss_produces_empty_outcome() {
        let rocks = vec![rock(1, Vec2::new(100.0, 100.0), RockSize::Big)];
        let missiles = vec![missile(2, Vec2::new(600.0, 100.0))];
        let out = resolve(&far_ship(), &rocks, &missiles, &tuning());
        assert!(out.is_empty());
        assert_eq!(out.score_delta, 0);
        assert!(out.spawned_rocks.is_empty());
    }

    #[test]
    fn test_big_rock_splits_into_two_mediums() {
        let rocks = vec![rock(1, Vec2::new(100.0, 100.0), RockSize::Big)];
        let missiles = vec![missile(2, Vec2::new(100.0, 100.0))];
        let out = resolve(&far_ship(), &rocks, &missiles, &tuning());

        assert_eq!(out.destroyed_rocks, vec![0]);
        assert_eq!(out.spent_missiles, vec![0]);
        assert_eq!(out.score_delta, 20);
        assert_eq!(out.spawned_rocks.len(), 2);
        for spawn in &out.spawned_rocks {
            assert_eq!(spawn.size, RockSize::Medium);
            assert_eq!(spawn.pos, Vec2::new(100.0, 100.0));
        }
        assert!(out.spawned_rocks[0].vel != out.spawned_rocks[1].vel);
    }

    #[test]
    fn test_medium_and_small_scoring() {
        let rocks = vec![rock(1, Vec2::new(100.0, 100.0), RockSize::Medium)];
        let missiles = vec![missile(2, Vec2::new(100.0, 100.0))];
        let out = resolve(&far_ship(), &rocks, &missiles, &tuning());
        assert_eq!(out.score_delta, 50);
        assert_eq!(out.spawned_rocks.len(), 2);
        assert!(out.spawned_rocks.iter().all(|s| s.size == RockSize::Small));

        let rocks = vec![rock(1, Vec2::new(100.0, 100.0), RockSize::Small)];
        let out = resolve(&far_ship(), &rocks, &missiles, &tuning());
        assert_eq!(out.score_delta, 100);
        assert!(out.spawned_rocks.is_empty());
    }

    #[test]
    fn test_one_missile_spends_on_one_rock() {
        // two rocks both under the missile; only the first takes the hit
        let rocks = vec![
            rock(1, Vec2::new(100.0, 100.0), RockSize::Big),
            rock(2, Vec2::new(110.0, 100.0), RockSize::Big),
        ];
        let missiles = vec![missile(3, Vec2::new(105.0, 100.0))];
        let out = resolve(&far_ship(), &rocks, &missiles, &tuning());
        assert_eq!(out.destroyed_rocks.len(), 1);
        assert_eq!(out.score_delta, 20);
    }

    #[test]
    fn test_two_missiles_two_rocks() {
        let rocks = vec![
            rock(1, Vec2::new(100.0, 100.0), RockSize::Small),
            rock(2, Vec2::new(600.0, 100.0), RockSize::Small),
        ];
        let missiles = vec![
            missile(3, Vec2::new(100.0, 100.0)),
            missile(4, Vec2::new(600.0, 100.0)),
        ];
        let out = resolve(&far_ship(), &rocks, &missiles, &tuning());
        assert_eq!(out.destroyed_rocks, vec![0, 1]);
        assert_eq!(out.spent_missiles, vec![0, 1]);
        assert_eq!(out.score_delta, 200);
    }

    #[test]
    fn test_ship_overlap_reports_strike() {
        let ship = Ship::new(Vec2::new(100.0, 100.0));
        let rocks = vec![rock(1, Vec2::new(120.0, 100.0), RockSize::Small)];
        let out = resolve(&ship, &rocks, &[], &tuning());
        assert_eq!(out.ship_struck_by, Some(0));
    }

    #[test]
    fn test_missile_hit_shields_ship_same_tick() {
        // the rock overlaps both the ship and a missile; the missile wins
        let ship = Ship::new(Vec2::new(100.0, 100.0));
        let rocks = vec![rock(1, Vec2::new(120.0, 100.0), RockSize::Small)];
        let missiles = vec![missile(2, Vec2::new(120.0, 100.0))];
        let out = resolve(&ship, &rocks, &missiles, &tuning());
        assert_eq!(out.destroyed_rocks, vec![0]);
        assert_eq!(out.ship_struck_by, None);
        assert_eq!(out.score_delta, 100);
    }

    #[test]
    fn test_invulnerable_ship_ignores_rocks() {
        let mut ship = Ship::new(Vec2::new(100.0, 100.0));
        ship.invuln_ticks = 60;
        let rocks = vec![rock(1, Vec2::new(100.0, 100.0), RockSize::Big)];
        let out = resolve(&ship, &rocks, &[], &tuning());
        assert_eq!(out.ship_struck_by, None);
    }
}
