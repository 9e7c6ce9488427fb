use nalgebra as na;
use rapier2d::parry::{
    bounding_volume::Aabb,
    partitioning::{Bvh, BvhBuildStrategy},
    shape as pshape,
};

use super::types::{Iso, StaticCollider, StaticShape, Transform, Vec2};

/// Acceleration structure for broad-phase queries over immutable world statics.
///
/// Notes:
/// - Finite shapes (Cuboid, Ball, Capsule) are stored as world-space AABBs in a BVH.
///   Planes are handled separately because they are infinite.
/// - `non_plane_indices` maps each BVH leaf back to its index in the original `statics` slice.
/// - `plane_indices` stores indices of planes in the original `statics` slice.
pub struct WorldAccel {
    /// BVH over finite static shapes (AABBs).
    pub bvh: Bvh,
    /// Indices into the original `statics` slice for the AABBs above.
    pub non_plane_indices: Vec<usize>,
    /// Indices into the original `statics` slice for planes.
    pub plane_indices: Vec<usize>,
}

impl WorldAccel {
    /// Return true if this accelerator has no non-plane entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.non_plane_indices.is_empty()
    }

    /// Number of non-plane entries (AABBs) in this accelerator.
    #[inline]
    pub fn len(&self) -> usize {
        self.non_plane_indices.len()
    }
}

/// Build the broad-phase accelerator over immutable world statics.
///
/// - Finite shapes get a world-space AABB and are indexed.
/// - Planes are kept in `plane_indices` and tested on every query.
pub fn build_world_accel(statics: &[StaticCollider]) -> WorldAccel {
    let mut aabbs: Vec<Aabb> = Vec::new();
    let mut non_plane_indices: Vec<usize> = Vec::new();
    let mut plane_indices: Vec<usize> = Vec::new();

    for (i, s) in statics.iter().enumerate() {
        match static_aabb(&s.shape) {
            Some(aabb) => {
                aabbs.push(aabb);
                non_plane_indices.push(i);
            }
            None => plane_indices.push(i),
        }
    }

    WorldAccel {
        bvh: Bvh::from_leaves(BvhBuildStrategy::Binned, &aabbs),
        non_plane_indices,
        plane_indices,
    }
}

/// World-space AABB of a finite static shape, `None` for planes.
fn static_aabb(shape: &StaticShape) -> Option<Aabb> {
    match *shape {
        StaticShape::Plane { .. } => None,
        StaticShape::Cuboid {
            half_extents,
            transform,
        } => Some(pshape::Cuboid::new(half_extents).aabb(&transform.iso())),
        StaticShape::Ball { radius, transform } => {
            Some(pshape::Ball::new(radius).aabb(&translation_only(transform)))
        }
        StaticShape::Capsule {
            radius,
            half_height,
            transform,
        } => Some(pshape::Capsule::new_y(half_height, radius).aabb(&transform.iso())),
    }
}

fn translation_only(transform: Transform) -> Iso {
    Iso::translation(transform.translation.x, transform.translation.y)
}

/// Compute a swept AABB for an axis-aligned box moving from `center` to `center + motion`.
///
/// The resulting AABB is inflated by `margin` to conservatively include near misses.
pub fn swept_box_aabb(half_extents: Vec2, center: Vec2, motion: Vec2, margin: f32) -> Aabb {
    let end = center + motion;
    let mins = na::Point2::new(
        center.x.min(end.x) - half_extents.x,
        center.y.min(end.y) - half_extents.y,
    );
    let maxs = na::Point2::new(
        center.x.max(end.x) + half_extents.x,
        center.y.max(end.y) + half_extents.y,
    );
    aabb_inflate(&Aabb { mins, maxs }, margin)
}

/// Query candidate static indices whose AABB intersects `swept`.
///
/// Returns indices referencing the original `statics` slice (not the BVH leaves).
pub fn query_candidates(accel: &WorldAccel, swept: &Aabb) -> Vec<usize> {
    if accel.is_empty() {
        return Vec::new();
    }
    accel
        .bvh
        .intersect_aabb(swept)
        .map(|leaf_idx| accel.non_plane_indices[leaf_idx as usize])
        .collect()
}

/// Inflate an AABB by `margin` on all sides.
fn aabb_inflate(a: &Aabb, margin: f32) -> Aabb {
    if margin <= 0.0 {
        return *a;
    }
    let delta = Vec2::new(margin, margin);
    Aabb {
        mins: a.mins - delta,
        maxs: a.maxs + delta,
    }
}
