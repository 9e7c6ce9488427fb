//! Platformer movement layered on top of the kinematic mover.

pub mod config;
pub mod controller;
pub mod curve;

pub use config::ControllerConfig;
pub use controller::{MovementController, MovementState, StepReport};
pub use curve::{AccelerationCurve, CurveKey};
