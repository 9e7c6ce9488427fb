use crate::{collision::Vec2, constants::MIN_GROUND_NORMAL_Y};

/// Where `value` sits between `a` and `b`, clamped to [0, 1]. Returns 0 when `a == b`.
#[inline]
pub fn inverse_lerp(a: f32, b: f32, value: f32) -> f32 {
    if a == b {
        0.0
    } else {
        ((value - a) / (b - a)).clamp(0.0, 1.0)
    }
}

/// Linear interpolation with `t` clamped to [0, 1].
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t.clamp(0.0, 1.0)
}

/// Move `current` toward `target` by at most `max_delta`.
///
/// A negative `max_delta` moves away from `target`. A NaN step moves nothing.
#[inline]
pub fn move_towards(current: f32, target: f32, max_delta: f32) -> f32 {
    if max_delta.is_nan() {
        return current;
    }
    let diff = target - current;
    if diff.abs() <= max_delta {
        target
    } else {
        current + diff.signum() * max_delta
    }
}

/// Launch speed that reaches `jump_height` under `gravity_y × gravity_scale`.
#[inline]
pub fn jump_velocity(jump_height: f32, gravity_scale: f32, gravity_y: f32) -> f32 {
    (2.0 * jump_height * gravity_scale * gravity_y).abs().sqrt()
}

/// Re-project a grounded velocity so it runs along the ground surface.
///
/// The component into the surface is removed, then the result is scaled to
/// `|velocity| / normal.y` so horizontal progress matches flat ground. `normal.y`
/// is floored at [`MIN_GROUND_NORMAL_Y`] to bound the rescale near vertical surfaces.
pub fn project_onto_ground(velocity: Vec2, normal: Vec2) -> Vec2 {
    let speed = velocity.norm();
    let tangent = velocity - normal * velocity.dot(&normal);
    let tangent_len = tangent.norm();
    if speed <= f32::EPSILON || tangent_len <= f32::EPSILON {
        return Vec2::zeros();
    }
    tangent / tangent_len * (speed / normal.y.max(MIN_GROUND_NORMAL_Y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inverse_lerp() {
        assert_eq!(inverse_lerp(0.0, 5.0, 2.5), 0.5);
        assert_eq!(inverse_lerp(0.0, 5.0, 7.0), 1.0);
        assert_eq!(inverse_lerp(0.0, 0.0, 3.0), 0.0);
    }

    #[test]
    fn test_lerp_clamps() {
        assert_eq!(lerp(-50.0, 50.0, 1.0), 50.0);
        assert_eq!(lerp(-50.0, 50.0, 0.5), 0.0);
        assert_eq!(lerp(-50.0, 50.0, -1.0), -50.0);
    }

    #[test]
    fn test_move_towards() {
        assert_eq!(move_towards(0.0, 5.0, 1.0), 1.0);
        assert_eq!(move_towards(4.5, 5.0, 1.0), 5.0);
        assert_eq!(move_towards(0.0, -5.0, 1.0), -1.0);
        assert_eq!(move_towards(2.0, 5.0, -1.0), 1.0);
        assert_eq!(move_towards(-2.0, -5.0, -0.5), -1.5);
        assert_eq!(move_towards(2.0, 5.0, f32::NAN), 2.0);
    }

    #[test]
    fn test_jump_velocity() {
        let v = jump_velocity(3.0, 1.0, -9.81);
        assert!((v - (2.0f32 * 3.0 * 9.81).sqrt()).abs() < 1.0e-5);
    }

    #[test]
    fn test_flat_ground_projection_keeps_velocity() {
        let v = project_onto_ground(Vec2::new(3.0, 0.0), Vec2::new(0.0, 1.0));
        assert!((v - Vec2::new(3.0, 0.0)).norm() < 1.0e-6);
        assert_eq!(project_onto_ground(Vec2::zeros(), Vec2::new(0.0, 1.0)), Vec2::zeros());
    }

    #[test]
    fn test_slope_projection_ratio() {
        let theta = 30f32.to_radians();
        let flat = project_onto_ground(Vec2::new(4.0, 0.0), Vec2::new(0.0, 1.0));
        let slope_normal = Vec2::new(theta.sin(), theta.cos());
        let sloped = project_onto_ground(Vec2::new(4.0, 0.0), slope_normal);

        // Speed grows by exactly 1 / cos(30°).
        let ratio = sloped.norm() / flat.norm();
        assert!((ratio - 1.0 / theta.cos()).abs() < 1.0e-5, "ratio {ratio}");
        // Horizontal progress is unchanged; the velocity follows the surface.
        assert!((sloped.x - 4.0).abs() < 1.0e-4);
        assert!(sloped.dot(&slope_normal).abs() < 1.0e-4);
    }

    #[test]
    fn test_near_vertical_rescale_is_bounded() {
        let n = Vec2::new(0.999, 0.0447);
        let v = project_onto_ground(Vec2::new(1.0, 0.0), n.normalize());
        assert!(v.norm() <= 1.0 / MIN_GROUND_NORMAL_Y + 1.0e-4);
    }
}
