use crate::{
    collision::{CollisionWorld, KinematicMover, Vec2},
    error::ConfigError,
    input::{GameplayInput, InputSource},
    time::StepTime,
    utils::{inverse_lerp, lerp, move_towards, project_onto_ground},
};

use super::config::ControllerConfig;

/// Movement state derived at the end of each step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MovementState {
    Grounded,
    Airborne,
    WallSliding,
}

/// What happened during one [`MovementController::fixed_update`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepReport {
    pub state: MovementState,
    /// A grounded jump started this step.
    pub jumped: bool,
    /// A wall jump started this step.
    pub wall_jumped: bool,
    /// Intended velocity handed to the mover.
    pub velocity: Vec2,
    /// Displacement the mover actually applied.
    pub displacement: Vec2,
}

/// Platformer movement state machine driving a [`KinematicMover`].
///
/// Owns the intended velocity. Each fixed step it reads one input snapshot,
/// updates horizontal then vertical velocity for the derived state
/// (grounded, airborne or wall sliding) and asks the mover to apply
/// `velocity × dt`.
pub struct MovementController<I> {
    config: ControllerConfig,
    mover: KinematicMover,
    input: I,
    velocity: Vec2,
    facing_right: bool,
    wall_sliding: bool,
    /// Jump button state of the previous step, for edge detection.
    jump_last: bool,
    last_state: Option<MovementState>,
}

impl<I: InputSource> MovementController<I> {
    pub fn new(config: ControllerConfig, mover: KinematicMover, input: I) -> Result<Self, ConfigError> {
        config.validate()?;
        // A jump held while spawning must not fire on the first step.
        let jump_last = input.gameplay().jump;
        Ok(Self {
            config,
            mover,
            input,
            velocity: Vec2::zeros(),
            facing_right: true,
            wall_sliding: false,
            jump_last,
            last_state: None,
        })
    }

    #[inline]
    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// Replace the tunables between steps.
    pub fn set_config(&mut self, config: ControllerConfig) -> Result<(), ConfigError> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    #[inline]
    pub fn mover(&self) -> &KinematicMover {
        &self.mover
    }

    #[inline]
    pub fn mover_mut(&mut self) -> &mut KinematicMover {
        &mut self.mover
    }

    #[inline]
    pub fn input(&self) -> &I {
        &self.input
    }

    #[inline]
    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }

    /// Intended velocity after the last step.
    #[inline]
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    #[inline]
    pub fn facing_right(&self) -> bool {
        self.facing_right
    }

    #[inline]
    pub fn is_wall_sliding(&self) -> bool {
        self.wall_sliding
    }

    /// State derived by the last step, `None` before the first step.
    #[inline]
    pub fn state(&self) -> Option<MovementState> {
        self.last_state
    }

    /// Run one fixed simulation step.
    ///
    /// With time dilation enabled, `time.time_scale` is set from the attack button
    /// before anything else, so every scaled quantity of this step agrees on `dt`.
    pub fn fixed_update<W: CollisionWorld + ?Sized>(
        &mut self,
        world: &W,
        time: &mut StepTime,
    ) -> StepReport {
        let input = self.input.gameplay();
        if self.config.time_dilation.enabled {
            time.time_scale = self.config.time_dilation.scale_for(input.attack);
        }
        let dt = time.delta();
        let jump_pressed = input.jump && !self.jump_last;

        self.update_horizontal(world, &input, dt);

        let mut jumped = false;
        let mut wall_jumped = false;
        let state = if self.mover.is_grounded(world) {
            jumped = self.update_grounded(jump_pressed);
            MovementState::Grounded
        } else {
            wall_jumped = self.update_airborne(world, &input, jump_pressed, dt);
            if self.wall_sliding {
                MovementState::WallSliding
            } else {
                MovementState::Airborne
            }
        };

        let displacement = self.mover.move_by(world, self.velocity * dt, time);
        self.jump_last = input.jump;

        if self.last_state != Some(state) {
            log::debug!("movement state {:?} -> {:?}", self.last_state, state);
            self.last_state = Some(state);
        }

        StepReport {
            state,
            jumped,
            wall_jumped,
            velocity: self.velocity,
            displacement,
        }
    }

    fn update_horizontal<W: CollisionWorld + ?Sized>(
        &mut self,
        world: &W,
        input: &GameplayInput,
        dt: f32,
    ) {
        let current = self.velocity.x;
        let target = self.config.max_speed * input.axis_x();

        if target != current {
            let progress = inverse_lerp(0.0, target.abs(), current.abs());
            let blend = self.config.acceleration_curve.evaluate(progress);
            let max = self.config.max_acceleration;
            let mut acceleration = lerp(-max, max, blend);

            if !self.mover.is_grounded(world) {
                acceleration *= self.config.aerial_dampening;
            }

            self.velocity.x = move_towards(current, target, acceleration * dt);
        }

        if self.config.deceleration > 0.0 && target == 0.0 {
            self.velocity.x = move_towards(self.velocity.x, 0.0, self.config.deceleration * dt);
        }
    }

    /// Returns true if a jump started.
    fn update_grounded(&mut self, jump_pressed: bool) -> bool {
        self.wall_sliding = false;

        let jumped = if jump_pressed {
            self.velocity.y = self.config.jump_velocity();
            log::debug!("jump at {:.3} m/s", self.velocity.y);
            true
        } else {
            self.velocity.y = 0.0;
            if let Some(hit) = self.mover.last_grounded_hit() {
                self.velocity = project_onto_ground(self.velocity, hit.normal);
            }
            false
        };

        if self.velocity.x != 0.0 {
            self.facing_right = self.velocity.x > 0.0;
        }
        jumped
    }

    /// Returns true if a wall jump started.
    fn update_airborne<W: CollisionWorld + ?Sized>(
        &mut self,
        world: &W,
        input: &GameplayInput,
        jump_pressed: bool,
        dt: f32,
    ) -> bool {
        let mut gravity_scale = self.config.gravity_scale;
        if self.velocity.y > 0.0 && !input.jump {
            gravity_scale *= self.config.low_jump_multiplier;
        }
        if self.velocity.y < 0.0 {
            gravity_scale *= self.config.fall_multiplier;
        }
        self.velocity.y += self.config.gravity.y * gravity_scale * dt;

        let wall_dir = if self.facing_right { 1.0 } else { -1.0 };
        let axis = input.axis_x();
        self.wall_sliding = self.velocity.y < 0.0
            && axis != 0.0
            && axis.signum() == wall_dir
            && self.mover.wall_probe(world, wall_dir).is_some();

        if !self.wall_sliding {
            return false;
        }

        self.velocity.y = -self.config.wall_slide_speed;

        if jump_pressed {
            self.wall_sliding = false;
            self.facing_right = !self.facing_right;
            self.velocity = Vec2::new(
                -self.config.wall_jump_speed.x * wall_dir,
                self.config.wall_jump_speed.y,
            );
            log::debug!("wall jump off {} wall", if wall_dir > 0.0 { "right" } else { "left" });
            return true;
        }
        false
    }
}
