use super::{
    kinematic::KinematicMover,
    settings::{GROUND_PROBE_SKINS, WALL_PROBE_SKINS, WALL_PROBE_TOLERANCE},
    types::{CastHit, Vec2},
    world::CollisionWorld,
};

/// Angle in degrees between `normal` and straight up.
#[inline]
pub fn slope_angle_deg(normal: Vec2) -> f32 {
    let len = normal.norm();
    if len <= f32::EPSILON {
        return 90.0;
    }
    (normal.y / len).clamp(-1.0, 1.0).acos().to_degrees()
}

impl KinematicMover {
    /// True if walkable ground lies within two skin widths below the body.
    ///
    /// Sweeps the contact shape straight down on every call; results are never reused.
    /// The nearest hit (walkable or not) becomes [`last_grounded_hit`](Self::last_grounded_hit).
    pub fn is_grounded<W: CollisionWorld + ?Sized>(&mut self, world: &W) -> bool {
        let distance = GROUND_PROBE_SKINS * self.skin_width();
        let origin = self.center();

        match self.find_closest_hit(world, origin, Vec2::new(0.0, -1.0), distance) {
            Some(hit) => {
                self.last_grounded_hit = Some(hit);
                self.is_walkable(hit.normal)
            }
            None => false,
        }
    }

    /// True if a surface with this normal counts as ground.
    #[inline]
    pub fn is_walkable(&self, normal: Vec2) -> bool {
        slope_angle_deg(normal) <= self.config().max_slope_angle_deg
    }

    /// Probe two skin widths sideways from the body for a wall.
    ///
    /// `direction` is the horizontal side to probe: positive for right, negative for left.
    pub fn wall_probe<W: CollisionWorld + ?Sized>(
        &mut self,
        world: &W,
        direction: f32,
    ) -> Option<CastHit> {
        let dir = Vec2::new(if direction < 0.0 { -1.0 } else { 1.0 }, 0.0);
        let distance = WALL_PROBE_SKINS * self.skin_width() + WALL_PROBE_TOLERANCE;
        let origin = self.center();
        self.find_closest_hit(world, origin, dir, distance)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::{
        collision::{
            StaticCollider, StaticWorld, cuboid_from_pose,
            kinematic::tests::{SKIN, floor, test_config, wall_left_face_at, y_above_floor},
        },
        layers::LayerMask,
        time::StepTime,
    };
    use proptest::prelude::*;

    /// Slope rising to the right by `degrees`, its top surface passing through (0, 0).
    pub(crate) fn slope(degrees: f32) -> StaticCollider {
        let theta = degrees.to_radians();
        let normal = Vec2::new(-theta.sin(), theta.cos());
        // Center half a thickness below the surface along its normal.
        let center = -normal * 0.5;
        StaticCollider::new(
            cuboid_from_pose(Vec2::new(20.0, 0.5), center, theta),
            LayerMask::ALL,
        )
    }

    /// Body position whose contact shape's lowest corner is `gap` above the slope.
    pub(crate) fn above_slope(degrees: f32, gap: f32) -> Vec2 {
        let theta = degrees.to_radians();
        let half = test_config().shape.contact_half_extents(SKIN);
        // Surface: y = x * tan(theta). The downhill-facing bottom-right corner touches first.
        let corner_x = half.x;
        Vec2::new(0.0, corner_x * theta.tan() + half.y + gap)
    }

    #[test]
    fn test_slope_angle() {
        assert!(slope_angle_deg(Vec2::new(0.0, 1.0)).abs() < 1.0e-4);
        assert!((slope_angle_deg(Vec2::new(1.0, 0.0)) - 90.0).abs() < 1.0e-4);
        let n = Vec2::new(-(30f32.to_radians().sin()), 30f32.to_radians().cos());
        assert!((slope_angle_deg(n) - 30.0).abs() < 1.0e-3);
        assert_eq!(slope_angle_deg(Vec2::zeros()), 90.0);
    }

    #[test]
    fn test_grounded_on_flat_floor() {
        let world = StaticWorld::new(vec![floor()]);
        let mut mover = KinematicMover::new(test_config(), Vec2::new(0.0, y_above_floor(SKIN))).unwrap();
        assert!(mover.last_grounded_hit().is_none());

        assert!(mover.is_grounded(&world));
        let hit = mover.last_grounded_hit().expect("cached hit");
        assert!((hit.normal - Vec2::new(0.0, 1.0)).norm() < 1.0e-4);
        assert!((hit.distance - SKIN).abs() < 1.0e-3);
    }

    #[test]
    fn test_not_grounded_in_air_keeps_stale_hit() {
        let world = StaticWorld::new(vec![floor()]);
        let mut mover = KinematicMover::new(test_config(), Vec2::new(0.0, y_above_floor(SKIN))).unwrap();
        assert!(mover.is_grounded(&world));
        let cached = mover.last_grounded_hit();

        mover.set_position(Vec2::new(0.0, 5.0));
        assert!(!mover.is_grounded(&world));
        assert_eq!(mover.last_grounded_hit(), cached);
    }

    #[test]
    fn test_grounded_is_idempotent() {
        let world = StaticWorld::new(vec![floor()]);
        let mut mover = KinematicMover::new(test_config(), Vec2::new(0.0, y_above_floor(SKIN))).unwrap();

        let first = mover.is_grounded(&world);
        let first_hit = mover.last_grounded_hit();
        let second = mover.is_grounded(&world);
        assert_eq!(first, second);
        assert_eq!(first_hit, mover.last_grounded_hit());
    }

    #[test]
    fn test_gentle_slope_is_ground() {
        let world = StaticWorld::new(vec![slope(30.0)]);
        let mut mover = KinematicMover::new(test_config(), above_slope(30.0, 0.5 * SKIN)).unwrap();

        assert!(mover.is_grounded(&world));
        let hit = mover.last_grounded_hit().expect("slope hit");
        assert!((slope_angle_deg(hit.normal) - 30.0).abs() < 0.5);
    }

    #[test]
    fn test_steep_slope_is_not_ground() {
        let world = StaticWorld::new(vec![slope(60.0)]);
        let mut mover = KinematicMover::new(test_config(), above_slope(60.0, 0.5 * SKIN)).unwrap();

        assert!(!mover.is_grounded(&world));
        let hit = mover.last_grounded_hit().expect("steep hit is still cached");
        assert!((slope_angle_deg(hit.normal) - 60.0).abs() < 0.5);
    }

    #[test]
    fn test_wall_probe_sees_adjacent_wall_only_on_that_side() {
        let world = StaticWorld::new(vec![wall_left_face_at(1.0)]);
        let half = test_config().shape.contact_half_extents(SKIN);
        // Contact shape sits exactly one skin width from the wall.
        let x = 1.0 - SKIN - half.x;
        let mut mover = KinematicMover::new(test_config(), Vec2::new(x, 5.0)).unwrap();

        let hit = mover.wall_probe(&world, 1.0).expect("wall to the right");
        assert!((hit.normal - Vec2::new(-1.0, 0.0)).norm() < 1.0e-4);
        assert!(mover.wall_probe(&world, -1.0).is_none());

        mover.set_position(Vec2::new(x - 0.1, 5.0));
        assert!(mover.wall_probe(&world, 1.0).is_none());
    }

    #[test]
    fn test_wall_probe_reaches_snap_band() {
        let world = StaticWorld::new(vec![wall_left_face_at(1.0)]);
        let half = test_config().shape.contact_half_extents(SKIN);
        // Between one and two skin widths away a blocked move snaps to zero on x,
        // so the body can rest here while pressing into the wall.
        let x = 1.0 - 1.9 * SKIN - half.x;
        let mut mover = KinematicMover::new(test_config(), Vec2::new(x, 5.0)).unwrap();

        assert_eq!(mover.move_by(&world, Vec2::new(0.05, 0.0), &StepTime::new(0.02)).x, 0.0);
        assert!(mover.wall_probe(&world, 1.0).is_some());

        mover.set_position(Vec2::new(x - SKIN, 5.0));
        assert!(mover.wall_probe(&world, 1.0).is_none());
    }

    proptest! {
        #[test]
        fn prop_grounded_query_is_idempotent(gap in 0.0f32..0.05, x in -10.0f32..10.0) {
            let world = StaticWorld::new(vec![floor()]);
            let mut mover = KinematicMover::new(test_config(), Vec2::new(x, y_above_floor(gap))).unwrap();

            let a = mover.is_grounded(&world);
            let hit_a = mover.last_grounded_hit();
            let b = mover.is_grounded(&world);
            prop_assert_eq!(a, b);
            prop_assert_eq!(hit_a, mover.last_grounded_hit());
        }
    }
}
