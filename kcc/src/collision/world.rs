//! Queryable static collision layer.

use rapier2d::parry::shape as pshape;

use super::{
    broad::{self, WorldAccel},
    narrow_phase,
    settings::BROAD_PHASE_MARGIN,
    types::{CastHit, Iso, StaticCollider, Vec2},
};
use crate::layers::LayerMask;

/// Box-cast query interface consumed by the kinematic mover.
///
/// Implementations push every surface the box would touch while travelling
/// `max_distance` along `direction`. Hits may be unsorted; the mover picks the closest.
pub trait CollisionWorld {
    fn cast_box(
        &self,
        center: Vec2,
        half_extents: Vec2,
        direction: Vec2,
        max_distance: f32,
        mask: LayerMask,
        hits: &mut Vec<CastHit>,
    );
}

/// Immutable static geometry with a BVH broad phase.
pub struct StaticWorld {
    statics: Vec<StaticCollider>,
    accel: WorldAccel,
}

impl StaticWorld {
    pub fn new(statics: Vec<StaticCollider>) -> Self {
        let accel = broad::build_world_accel(&statics);
        log::debug!(
            "built static world: {} finite shapes, {} planes",
            accel.len(),
            accel.plane_indices.len()
        );
        Self { statics, accel }
    }

    pub fn statics(&self) -> &[StaticCollider] {
        &self.statics
    }
}

impl CollisionWorld for StaticWorld {
    fn cast_box(
        &self,
        center: Vec2,
        half_extents: Vec2,
        direction: Vec2,
        max_distance: f32,
        mask: LayerMask,
        hits: &mut Vec<CastHit>,
    ) {
        if max_distance < 0.0 || mask.is_empty() {
            return;
        }

        let cuboid = pshape::Cuboid::new(half_extents);
        let box_iso = Iso::translation(center.x, center.y);
        let swept = broad::swept_box_aabb(
            half_extents,
            center,
            direction * max_distance,
            BROAD_PHASE_MARGIN,
        );

        let mut cast_one = |idx: usize| {
            let collider = &self.statics[idx];
            if !collider.layers.intersects(mask) {
                return;
            }
            if let Some(hit) = narrow_phase::cast_box_against_static(
                box_iso,
                &cuboid,
                direction,
                max_distance,
                &collider.shape,
            ) {
                log::trace!("box cast hit static {idx} at {:.4}", hit.distance);
                hits.push(hit);
            }
        };

        // Planes first (infinite; not in the BVH).
        for &idx in &self.accel.plane_indices {
            cast_one(idx);
        }

        for idx in broad::query_candidates(&self.accel, &swept) {
            cast_one(idx);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collision::types::{StaticShape, Transform};

    fn floor(layers: LayerMask) -> StaticCollider {
        StaticCollider::new(
            StaticShape::Cuboid {
                half_extents: Vec2::new(10.0, 0.5),
                transform: Transform::from_translation(Vec2::new(0.0, -0.5)),
            },
            layers,
        )
    }

    #[test]
    fn test_cast_collects_all_hits() {
        let world = StaticWorld::new(vec![
            floor(LayerMask::ALL),
            StaticCollider::new(
                StaticShape::Plane {
                    normal: Vec2::new(0.0, 1.0),
                    dist: -2.0,
                },
                LayerMask::ALL,
            ),
        ]);

        let mut hits = Vec::new();
        world.cast_box(
            Vec2::new(0.0, 1.0),
            Vec2::new(0.5, 0.5),
            Vec2::new(0.0, -1.0),
            10.0,
            LayerMask::ALL,
            &mut hits,
        );
        assert_eq!(hits.len(), 2);
        let nearest = crate::collision::types::closest_hit(&hits).expect("hit");
        assert!((nearest.distance - 0.5).abs() < 1.0e-4);
    }

    #[test]
    fn test_layer_mask_filters_hits() {
        let world = StaticWorld::new(vec![floor(LayerMask::from_bits(0b10))]);

        let mut hits = Vec::new();
        world.cast_box(
            Vec2::new(0.0, 1.0),
            Vec2::new(0.5, 0.5),
            Vec2::new(0.0, -1.0),
            10.0,
            LayerMask::from_bits(0b01),
            &mut hits,
        );
        assert!(hits.is_empty());

        world.cast_box(
            Vec2::new(0.0, 1.0),
            Vec2::new(0.5, 0.5),
            Vec2::new(0.0, -1.0),
            10.0,
            LayerMask::from_bits(0b11),
            &mut hits,
        );
        assert_eq!(hits.len(), 1);
    }
}
