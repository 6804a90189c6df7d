//! Field geometry helpers
//!
//! The play field is a torus: anything crossing an edge reappears on the
//! opposite side. Everything here is a pure function on `glam::Vec2`.

use glam::Vec2;

/// Wrap a position onto the toroidal field.
///
/// Result components always land in `[0, width) x [0, height)`, so
/// entities can never leave visible space.
#[inline]
pub fn wrap_position(pos: Vec2, bounds: Vec2) -> Vec2 {
    let mut x = pos.x.rem_euclid(bounds.x);
    let mut y = pos.y.rem_euclid(bounds.y);
    // rem_euclid can round up to the modulus right at the boundary
    if x >= bounds.x {
        x = 0.0;
    }
    if y >= bounds.y {
        y = 0.0;
    }
    Vec2::new(x, y)
}

/// Circle overlap test: Euclidean distance no greater than the radius sum.
#[inline]
pub fn circles_overlap(pos_a: Vec2, radius_a: f32, pos_b: Vec2, radius_b: f32) -> bool {
    let reach = radius_a + radius_b;
    pos_a.distance_squared(pos_b) <= reach * reach
}

/// Unit facing vector for a heading angle.
///
/// Heading 0 points up; positive headings turn counter-clockwise on
/// screen (y grows downward).
#[inline]
pub fn heading_vec(heading: f32) -> Vec2 {
    Vec2::new(-heading.sin(), -heading.cos())
}

/// Normalize an angle to `[0, TAU)`.
#[inline]
pub fn wrap_angle(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(std::f32::consts::TAU);
    if wrapped >= std::f32::consts::TAU {
        0.0
    } else {
        wrapped
    }
}
