/*!
Core collision types and math aliases shared by the collision submodules.

This module intentionally contains no algorithms. It defines the data types
exchanged between:
- broad (static world acceleration structure and candidate queries)
- narrow_phase (parry2d box casts against single statics)
- world (the queryable static collision layer)
- kinematic mover (sweep-and-slide, ground and wall probes)
*/

use nalgebra as na;
use serde::{Deserialize, Serialize};

use crate::layers::LayerMask;

/// Common math aliases for clarity and consistency.
pub type Vec2 = na::Vector2<f32>;
pub type Point2 = na::Point2<f32>;
pub type Iso = na::Isometry2<f32>;

/// A rigid 2D transform in world space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub translation: Vec2,
    /// Counter-clockwise rotation in radians.
    pub rotation: f32,
}

impl Transform {
    #[inline]
    pub fn new(translation: Vec2, rotation: f32) -> Self {
        Self {
            translation,
            rotation,
        }
    }

    #[inline]
    pub fn from_translation(translation: Vec2) -> Self {
        Self::new(translation, 0.0)
    }

    /// Convert to nalgebra `Isometry2` for use with parry2d queries.
    #[inline]
    pub fn iso(&self) -> Iso {
        Iso::new(self.translation, self.rotation)
    }
}

/// Static collision shapes supported by the world.
///
/// - Plane: infinite half-space, solid below the line `normal ⋅ x = dist`.
/// - Cuboid: oriented box (a rotated cuboid is how slopes are authored).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StaticShape {
    Plane {
        /// World-space unit normal, pointing out of the solid side.
        normal: Vec2,
        /// Plane offset along the normal, i.e. normal ⋅ x = dist.
        dist: f32,
    },
    Cuboid {
        half_extents: Vec2,
        transform: Transform,
    },
    Ball {
        radius: f32,
        /// Translation used; rotation ignored.
        transform: Transform,
    },
    Capsule {
        radius: f32,
        /// Half of the segment length along the local +Y axis.
        half_height: f32,
        transform: Transform,
    },
}

/// A static shape tagged with the collision layers it belongs to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StaticCollider {
    pub shape: StaticShape,
    pub layers: LayerMask,
}

impl StaticCollider {
    #[inline]
    pub fn new(shape: StaticShape, layers: LayerMask) -> Self {
        Self { shape, layers }
    }
}

/// Axis-aligned box of a kinematic body.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoxShape {
    pub half_extents: Vec2,
    /// Offset of the box center from the body position.
    pub offset: Vec2,
}

impl Default for BoxShape {
    fn default() -> Self {
        Self {
            half_extents: Vec2::new(0.5, 1.0),
            offset: Vec2::zeros(),
        }
    }
}

impl BoxShape {
    #[inline]
    pub fn new(half_extents: Vec2, offset: Vec2) -> Self {
        Self {
            half_extents,
            offset,
        }
    }

    /// Full width and height.
    #[inline]
    pub fn size(&self) -> Vec2 {
        self.half_extents * 2.0
    }

    /// Half-extents of the box shrunk by `skin_width` on every axis (size minus skin).
    #[inline]
    pub fn contact_half_extents(&self, skin_width: f32) -> Vec2 {
        self.half_extents.add_scalar(-0.5 * skin_width)
    }
}

/// A single hit returned by a box cast.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CastHit {
    /// Distance travelled along the cast direction before contact (meters).
    pub distance: f32,
    /// World-space unit normal of the hit surface, pointing out of the obstacle.
    pub normal: Vec2,
    /// World-space contact point on the obstacle.
    pub point: Point2,
}

/// Pick the nearest hit; on exact ties the first one wins.
pub fn closest_hit(hits: &[CastHit]) -> Option<CastHit> {
    let mut best: Option<CastHit> = None;
    for hit in hits {
        if best.map_or(true, |b| hit.distance < b.distance) {
            best = Some(*hit);
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit(distance: f32, nx: f32) -> CastHit {
        CastHit {
            distance,
            normal: Vec2::new(nx, 0.0),
            point: Point2::origin(),
        }
    }

    #[test]
    fn test_closest_hit_prefers_smallest_distance() {
        let hits = [hit(0.5, 1.0), hit(0.2, -1.0), hit(0.3, 1.0)];
        assert_eq!(closest_hit(&hits).map(|h| h.distance), Some(0.2));
        assert_eq!(closest_hit(&[]), None);
    }

    #[test]
    fn test_closest_hit_tie_keeps_first() {
        let hits = [hit(0.2, 1.0), hit(0.2, -1.0)];
        assert_eq!(closest_hit(&hits).map(|h| h.normal.x), Some(1.0));
    }

    #[test]
    fn test_contact_half_extents() {
        let shape = BoxShape::new(Vec2::new(0.5, 1.0), Vec2::zeros());
        let shrunk = shape.contact_half_extents(0.02);
        assert!((shrunk.x - 0.49).abs() < 1.0e-6);
        assert!((shrunk.y - 0.99).abs() < 1.0e-6);
    }

    #[test]
    fn test_transform_iso() {
        let t = Transform::new(Vec2::new(1.0, 2.0), std::f32::consts::FRAC_PI_2);
        let p = t.iso() * Point2::new(1.0, 0.0);
        assert!((p.x - 1.0).abs() < 1.0e-5);
        assert!((p.y - 3.0).abs() < 1.0e-5);
    }
}
