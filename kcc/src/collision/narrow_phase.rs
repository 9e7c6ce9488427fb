use nalgebra as na;
use rapier2d::parry::{
    query::{self, ShapeCastHit, ShapeCastOptions},
    shape as pshape,
};

use super::types::{CastHit, Iso, StaticShape, Vec2};

/// Cast a moving axis-aligned box against a single static shape and return the hit (if any).
///
/// - `box_iso`: the box's starting isometry in world space (no rotation).
/// - `cuboid`: the box shape being swept.
/// - `dir`: unit world-space cast direction.
/// - `max_distance`: how far along `dir` to sweep (meters).
/// - `shape`: the static shape to test against.
///
/// Sweeping a unit direction makes parry's time of impact the travelled distance.
pub fn cast_box_against_static(
    box_iso: Iso,
    cuboid: &pshape::Cuboid,
    dir: Vec2,
    max_distance: f32,
    shape: &StaticShape,
) -> Option<CastHit> {
    match *shape {
        StaticShape::Plane { normal, dist } => {
            // Plane equation in world space: normal ⋅ x = dist
            let unit_n = na::Unit::new_normalize(normal);
            let plane = pshape::HalfSpace::new(unit_n);
            let plane_iso = Iso::translation(normal.x * dist, normal.y * dist);
            cast_against(box_iso, cuboid, dir, max_distance, plane_iso, &plane)
        }
        StaticShape::Cuboid {
            half_extents,
            transform,
        } => {
            let other = pshape::Cuboid::new(half_extents);
            cast_against(box_iso, cuboid, dir, max_distance, transform.iso(), &other)
        }
        StaticShape::Ball { radius, transform } => {
            // Rotation is irrelevant for a ball.
            let ball = pshape::Ball::new(radius);
            let ball_iso = Iso::translation(transform.translation.x, transform.translation.y);
            cast_against(box_iso, cuboid, dir, max_distance, ball_iso, &ball)
        }
        StaticShape::Capsule {
            radius,
            half_height,
            transform,
        } => {
            let capsule = pshape::Capsule::new_y(half_height, radius);
            cast_against(box_iso, cuboid, dir, max_distance, transform.iso(), &capsule)
        }
    }
}

fn cast_against(
    box_iso: Iso,
    cuboid: &pshape::Cuboid,
    dir: Vec2,
    max_distance: f32,
    static_iso: Iso,
    static_shape: &dyn pshape::Shape,
) -> Option<CastHit> {
    let mut opts = ShapeCastOptions::with_max_time_of_impact(max_distance);
    opts.stop_at_penetration = true;

    match query::cast_shapes(
        &box_iso,
        &dir,
        cuboid as &dyn pshape::Shape,
        &static_iso,
        &Vec2::zeros(),
        static_shape,
        opts,
    ) {
        Ok(Some(hit)) => Some(to_cast_hit(&hit, dir, static_iso)),
        _ => None,
    }
}

fn to_cast_hit(hit: &ShapeCastHit, dir: Vec2, static_iso: Iso) -> CastHit {
    // `normal1` is on the moving box (box-local == world, the box never rotates) and points
    // toward the obstacle. The surface normal we want points back out of it.
    let mut normal = -hit.normal1.into_inner();
    if normal.dot(&dir) > 0.0 {
        normal = -normal;
    }
    let len_sq = normal.norm_squared();
    let normal = if len_sq > 1.0e-12 {
        normal / len_sq.sqrt()
    } else {
        -dir
    };

    CastHit {
        distance: hit.time_of_impact.max(0.0),
        normal,
        point: static_iso * hit.witness2,
    }
}
