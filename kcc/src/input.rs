//! Gameplay input snapshot.
//!
//! The platform input layer refreshes a [`GameplayInput`] once per frame. The movement
//! core only ever reads it through [`InputSource`] and never mutates it mid-step, so
//! edge detection (pressed this step) stays well defined.

use crate::collision::Vec2;

/// Polled gameplay actions.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GameplayInput {
    /// Movement axis, each component in [-1, 1].
    pub movement: Vec2,
    pub jump: bool,
    pub attack: bool,
    pub menu: bool,
    pub interact: bool,
}

impl GameplayInput {
    /// Horizontal axis clamped to [-1, 1]; NaN reads as no input.
    #[inline]
    pub fn axis_x(&self) -> f32 {
        if self.movement.x.is_nan() {
            0.0
        } else {
            self.movement.x.clamp(-1.0, 1.0)
        }
    }
}

/// Provider of the current input snapshot.
pub trait InputSource {
    fn gameplay(&self) -> GameplayInput;
}

impl InputSource for GameplayInput {
    #[inline]
    fn gameplay(&self) -> GameplayInput {
        *self
    }
}

impl<T: InputSource + ?Sized> InputSource for &T {
    #[inline]
    fn gameplay(&self) -> GameplayInput {
        (**self).gameplay()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_is_clamped() {
        let mut input = GameplayInput {
            movement: Vec2::new(3.0, 0.0),
            ..Default::default()
        };
        assert_eq!(input.axis_x(), 1.0);
        input.movement.x = -0.25;
        assert_eq!(input.axis_x(), -0.25);
        input.movement.x = f32::NAN;
        assert_eq!(input.axis_x(), 0.0);
    }

    #[test]
    fn test_snapshot_is_its_own_source() {
        let input = GameplayInput {
            jump: true,
            ..Default::default()
        };
        assert!(input.gameplay().jump);
        assert!((&input).gameplay().jump);
    }
}
