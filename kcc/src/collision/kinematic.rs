use serde::{Deserialize, Serialize};

use super::{
    settings::{DEFAULT_MAX_SLOPE_DEG, DEFAULT_SKIN_WIDTH, MIN_MOVE_SQ, MIN_SKIN_WIDTH, STEEP_SLOPE_WARN_DEG},
    types::{BoxShape, CastHit, Vec2, closest_hit},
    world::CollisionWorld,
};
use crate::{error::ConfigError, layers::LayerMask, time::StepTime};

/// Per-body configuration of a [`KinematicMover`].
///
/// Editable outside of the simulation step only; every change is re-validated.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MoverConfig {
    /// Body box (half-extents and offset from the body position).
    pub shape: BoxShape,
    /// Separation kept from surfaces (meters). Always > 0.
    pub skin_width: f32,
    /// Steepest surface still counted as ground, in degrees from straight up.
    pub max_slope_angle_deg: f32,
    /// Layers the body collides with and can stand on.
    pub ground_layers: LayerMask,
}

impl Default for MoverConfig {
    fn default() -> Self {
        Self {
            shape: BoxShape::default(),
            skin_width: DEFAULT_SKIN_WIDTH,
            max_slope_angle_deg: DEFAULT_MAX_SLOPE_DEG,
            ground_layers: LayerMask::ALL,
        }
    }
}

impl MoverConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.skin_width >= MIN_SKIN_WIDTH) {
            return Err(ConfigError::SkinWidthTooSmall {
                skin_width: self.skin_width,
                min: MIN_SKIN_WIDTH,
            });
        }

        let size = self.shape.size();
        let contact = self.shape.contact_half_extents(self.skin_width);
        if !(contact.x > 0.0 && contact.y > 0.0) || !size.iter().all(|v| v.is_finite()) {
            return Err(ConfigError::DegenerateShape {
                width: size.x,
                height: size.y,
                skin_width: self.skin_width,
            });
        }
        crate::error::finite("shape.offset.x", self.shape.offset.x)?;
        crate::error::finite("shape.offset.y", self.shape.offset.y)?;

        if !(self.max_slope_angle_deg > 0.0 && self.max_slope_angle_deg < 90.0) {
            return Err(ConfigError::SlopeAngleOutOfRange(self.max_slope_angle_deg));
        }
        if self.max_slope_angle_deg >= STEEP_SLOPE_WARN_DEG {
            log::warn!(
                "max slope angle {} deg is close to vertical; landing speed rescale will be clamped",
                self.max_slope_angle_deg
            );
        }

        Ok(())
    }

    /// Parse a RON document and validate it.
    pub fn from_ron_str(src: &str) -> Result<Self, ConfigError> {
        let config: Self = ron::from_str(src)?;
        config.validate()?;
        Ok(config)
    }
}

/// Kinematic box body that moves through static geometry without tunneling.
///
/// The mover owns the body position. It never stores or interprets intended velocity;
/// it only reports the realized velocity of the last [`move_by`](Self::move_by).
///
/// All sweeps use the contact shape: the body box shrunk by the skin width on every axis.
pub struct KinematicMover {
    config: MoverConfig,
    position: Vec2,
    velocity: Vec2,
    pub(super) last_grounded_hit: Option<CastHit>,
    /// Scratch buffer reused by every cast.
    hits: Vec<CastHit>,
}

impl KinematicMover {
    pub fn new(config: MoverConfig, position: Vec2) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            position,
            velocity: Vec2::zeros(),
            last_grounded_hit: None,
            hits: Vec::new(),
        })
    }

    #[inline]
    pub fn config(&self) -> &MoverConfig {
        &self.config
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Teleport the body (spawning, level loads). Not for use inside a step.
    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
        self.velocity = Vec2::zeros();
    }

    /// World-space center of the body box.
    #[inline]
    pub fn center(&self) -> Vec2 {
        self.position + self.config.shape.offset
    }

    /// Realized velocity of the last move.
    #[inline]
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Nearest hit of the most recent ground probe that touched anything.
    ///
    /// `None` until a ground probe has hit for the first time. The hit stays valid
    /// (possibly stale) until the next probe that hits overwrites it.
    #[inline]
    pub fn last_grounded_hit(&self) -> Option<CastHit> {
        self.last_grounded_hit
    }

    #[inline]
    pub fn skin_width(&self) -> f32 {
        self.config.skin_width
    }

    pub fn set_skin_width(&mut self, skin_width: f32) -> Result<(), ConfigError> {
        self.replace_config(MoverConfig {
            skin_width,
            ..self.config
        })
    }

    pub fn set_max_slope_angle(&mut self, degrees: f32) -> Result<(), ConfigError> {
        self.replace_config(MoverConfig {
            max_slope_angle_deg: degrees,
            ..self.config
        })
    }

    pub fn set_ground_layers(&mut self, layers: LayerMask) -> Result<(), ConfigError> {
        self.replace_config(MoverConfig {
            ground_layers: layers,
            ..self.config
        })
    }

    fn replace_config(&mut self, config: MoverConfig) -> Result<(), ConfigError> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    /// Sweep the contact shape from `origin` and return the nearest hit on the ground layers.
    ///
    /// `direction` must be a unit vector.
    pub(super) fn find_closest_hit<W: CollisionWorld + ?Sized>(
        &mut self,
        world: &W,
        origin: Vec2,
        direction: Vec2,
        distance: f32,
    ) -> Option<CastHit> {
        self.hits.clear();
        world.cast_box(
            origin,
            self.config.shape.contact_half_extents(self.config.skin_width),
            direction,
            distance,
            self.config.ground_layers,
            &mut self.hits,
        );
        closest_hit(&self.hits)
    }

    /// Move the body by `desired` this step, resolving collisions with a two-pass
    /// sweep-and-slide. Returns the displacement actually applied.
    ///
    /// Algorithm:
    /// - Sweep along `desired`. On hit, advance to the contact and back off along the
    ///   surface normal by the skin width.
    /// - Project the leftover onto the hit surface and sweep once more along that
    ///   tangent, clamping the same way on a second hit.
    /// - Zero any axis whose movement is within the skin width.
    ///
    /// Only call this once per fixed step.
    pub fn move_by<W: CollisionWorld + ?Sized>(
        &mut self,
        world: &W,
        desired: Vec2,
        time: &StepTime,
    ) -> Vec2 {
        let skin = self.config.skin_width;
        let origin = self.center();

        let mut movement = match split_direction(desired) {
            None => Vec2::zeros(),
            Some((dir, distance)) => match self.find_closest_hit(world, origin, dir, distance) {
                None => desired,
                Some(hit) => {
                    let first = dir * hit.distance + hit.normal * skin;
                    let remaining = desired - first;
                    let tangent = remaining - hit.normal * remaining.dot(&hit.normal);

                    let slide = match split_direction(tangent) {
                        None => Vec2::zeros(),
                        Some((slide_dir, slide_len)) => {
                            match self.find_closest_hit(world, origin + first, slide_dir, slide_len) {
                                Some(slide_hit) => {
                                    slide_dir * slide_hit.distance + slide_hit.normal * skin
                                }
                                None => tangent,
                            }
                        }
                    };

                    log::trace!(
                        "move blocked at {:.4} (normal {:.3}, {:.3}), slide {:.4}",
                        hit.distance,
                        hit.normal.x,
                        hit.normal.y,
                        slide.norm()
                    );
                    first + slide
                }
            },
        };

        // Suppress sub-skin jitter from repeated partial collisions.
        if movement.x.abs() <= skin {
            movement.x = 0.0;
        }
        if movement.y.abs() <= skin {
            movement.y = 0.0;
        }

        self.position += movement;

        let dt = time.delta();
        self.velocity = if dt > 0.0 {
            movement / dt
        } else {
            Vec2::zeros()
        };

        movement
    }
}

/// Unit direction and length of `v`, or `None` if it is too short (or not finite) to normalize.
#[inline]
pub(crate) fn split_direction(v: Vec2) -> Option<(Vec2, f32)> {
    let len_sq = v.norm_squared();
    if !len_sq.is_finite() || len_sq <= MIN_MOVE_SQ {
        return None;
    }
    let len = len_sq.sqrt();
    Some((v / len, len))
}
