use serde::{Deserialize, Serialize};

use super::curve::AccelerationCurve;
use crate::{
    collision::Vec2,
    constants::{
        DEFAULT_AERIAL_DAMPENING, DEFAULT_FALL_MULTIPLIER, DEFAULT_GRAVITY_Y, DEFAULT_JUMP_HEIGHT,
        DEFAULT_LOW_JUMP_MULTIPLIER, DEFAULT_MAX_ACCELERATION, DEFAULT_MAX_SPEED,
        DEFAULT_WALL_JUMP_SPEED, DEFAULT_WALL_SLIDE_SPEED,
    },
    error::{ConfigError, finite, non_negative, unit_range},
    time::TimeDilation,
    utils::jump_velocity,
};

/// Movement tunables of a [`MovementController`](super::MovementController).
///
/// Values are meters, seconds and m/s. Validated once when the controller is built
/// or the config is replaced between steps.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    // Grounded movement
    /// Top walking speed.
    pub max_speed: f32,
    /// Acceleration profile over progress toward the target speed.
    pub acceleration_curve: AccelerationCurve,
    /// Peak horizontal acceleration.
    pub max_acceleration: f32,
    /// Extra flat deceleration applied when there is no horizontal input. 0 disables it.
    pub deceleration: f32,

    // Aerial control
    /// World gravity.
    pub gravity: Vec2,
    pub gravity_scale: f32,
    /// Gravity multiplier while falling.
    pub fall_multiplier: f32,
    /// Gravity multiplier while rising with jump released.
    pub low_jump_multiplier: f32,
    /// Apex height of a full jump.
    pub jump_height: f32,
    /// Acceleration multiplier while airborne, in [0, 1].
    pub aerial_dampening: f32,

    // Wall jump
    /// Constant fall speed while wall sliding.
    pub wall_slide_speed: f32,
    /// Launch velocity of a wall jump: x away from the wall, y upward.
    pub wall_jump_speed: Vec2,

    pub time_dilation: TimeDilation,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            max_speed: DEFAULT_MAX_SPEED,
            acceleration_curve: AccelerationCurve::default(),
            max_acceleration: DEFAULT_MAX_ACCELERATION,
            deceleration: 0.0,
            gravity: Vec2::new(0.0, DEFAULT_GRAVITY_Y),
            gravity_scale: 1.0,
            fall_multiplier: DEFAULT_FALL_MULTIPLIER,
            low_jump_multiplier: DEFAULT_LOW_JUMP_MULTIPLIER,
            jump_height: DEFAULT_JUMP_HEIGHT,
            aerial_dampening: DEFAULT_AERIAL_DAMPENING,
            wall_slide_speed: DEFAULT_WALL_SLIDE_SPEED,
            wall_jump_speed: Vec2::new(DEFAULT_WALL_JUMP_SPEED.0, DEFAULT_WALL_JUMP_SPEED.1),
            time_dilation: TimeDilation::default(),
        }
    }
}

impl ControllerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        non_negative("max_speed", self.max_speed)?;
        non_negative("max_acceleration", self.max_acceleration)?;
        non_negative("deceleration", self.deceleration)?;
        finite("gravity.x", self.gravity.x)?;
        finite("gravity.y", self.gravity.y)?;
        non_negative("gravity_scale", self.gravity_scale)?;
        non_negative("fall_multiplier", self.fall_multiplier)?;
        non_negative("low_jump_multiplier", self.low_jump_multiplier)?;
        non_negative("jump_height", self.jump_height)?;
        unit_range("aerial_dampening", self.aerial_dampening)?;
        non_negative("wall_slide_speed", self.wall_slide_speed)?;
        finite("wall_jump_speed.x", self.wall_jump_speed.x)?;
        finite("wall_jump_speed.y", self.wall_jump_speed.y)?;
        non_negative("time_dilation.slow_scale", self.time_dilation.slow_scale)?;
        self.acceleration_curve.validate()?;

        if self.gravity.x != 0.0 {
            log::warn!("horizontal gravity {} is ignored by the movement controller", self.gravity.x);
        }
        Ok(())
    }

    /// Parse a RON document and validate it.
    pub fn from_ron_str(src: &str) -> Result<Self, ConfigError> {
        let config: Self = ron::from_str(src)?;
        config.validate()?;
        Ok(config)
    }

    /// Launch speed of a grounded jump.
    #[inline]
    pub fn jump_velocity(&self) -> f32 {
        jump_velocity(self.jump_height, self.gravity_scale, self.gravity.y)
    }
}
