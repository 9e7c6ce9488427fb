pub mod collision;
pub mod constants;
pub mod error;
pub mod input;
pub mod layers;
pub mod movement;
pub mod time;
pub mod utils;

pub use collision::{
    BoxShape, CastHit, CollisionWorld, KinematicMover, MoverConfig, StaticCollider, StaticShape,
    StaticWorld, Transform, Vec2, cuboid_from_pose, plane_through,
};
pub use error::ConfigError;
pub use input::{GameplayInput, InputSource};
pub use layers::{CollisionLayer, LayerMask};
pub use movement::{
    AccelerationCurve, ControllerConfig, CurveKey, MovementController, MovementState, StepReport,
};
pub use time::{StepTime, TimeDilation};
pub use utils::{inverse_lerp, jump_velocity, lerp, move_towards, project_onto_ground};
