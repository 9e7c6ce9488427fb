/*!
Collision root module.

This module re-exports submodules that implement the kinematic box mover
using parry2d (through rapier2d) for narrow-phase box casts and a BVH
broad phase over immutable static geometry. The code is split for clarity:

- types:        shared data types (Transform, StaticShape, BoxShape, CastHit, etc.)
- settings:     mover tolerances and defaults
- broad:        broad-phase helpers (swept AABBs, candidate queries)
- narrow_phase: thin wrappers over parry2d shape casts
- world:        the `CollisionWorld` query trait and the `StaticWorld` implementation
- kinematic:    `KinematicMover` and its two-pass sweep-and-slide
- ground:       ground and wall probes
*/

pub mod broad;
pub mod ground;
pub mod kinematic;
pub mod narrow_phase;
pub mod settings;
pub mod types;
pub mod world;

// Re-export commonly used types and functions.
pub use ground::slope_angle_deg;
pub use kinematic::{KinematicMover, MoverConfig};
pub use types::{BoxShape, CastHit, Iso, Point2, StaticCollider, StaticShape, Transform, Vec2};
pub use world::{CollisionWorld, StaticWorld};

/// Convenience: build a `StaticShape::Plane` through `point` with the given outward normal.
#[inline]
pub fn plane_through(point: Vec2, normal: Vec2) -> StaticShape {
    let len = normal.norm();
    let normal = if len > f32::EPSILON {
        normal / len
    } else {
        Vec2::new(0.0, 1.0)
    };
    StaticShape::Plane {
        normal,
        dist: normal.dot(&point),
    }
}

/// Convenience: build a `StaticShape::Cuboid` with given half extents and pose.
///
/// `rotation` is counter-clockwise in radians; a rotated cuboid is a slope.
#[inline]
pub fn cuboid_from_pose(half_extents: Vec2, translation: Vec2, rotation: f32) -> StaticShape {
    StaticShape::Cuboid {
        half_extents,
        transform: Transform::new(translation, rotation),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plane_through_normalizes() {
        let StaticShape::Plane { normal, dist } = plane_through(Vec2::new(0.0, 2.0), Vec2::new(0.0, 3.0))
        else {
            panic!("expected a plane");
        };
        assert_eq!(normal, Vec2::new(0.0, 1.0));
        assert_eq!(dist, 2.0);
    }
}
