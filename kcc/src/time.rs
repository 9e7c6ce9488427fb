use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_FIXED_DT;

/// Fixed-step timing shared by the controller and the mover for one simulation tick.
///
/// `time_scale` is the global simulation time scale. Every time-scaled quantity of a step
/// (acceleration, gravity, displacement, realized velocity) uses [`StepTime::delta`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepTime {
    /// Unscaled fixed step in seconds.
    pub fixed_dt: f32,
    /// Global time scale (1.0 = real time).
    pub time_scale: f32,
}

impl Default for StepTime {
    fn default() -> Self {
        Self::new(DEFAULT_FIXED_DT)
    }
}

impl StepTime {
    #[inline]
    pub fn new(fixed_dt: f32) -> Self {
        Self {
            fixed_dt,
            time_scale: 1.0,
        }
    }

    /// Scaled step duration. Never negative.
    #[inline]
    pub fn delta(&self) -> f32 {
        (self.fixed_dt * self.time_scale).max(0.0)
    }
}

/// Slow-motion bound to the attack button.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeDilation {
    pub enabled: bool,
    /// Time scale while the button is held.
    pub slow_scale: f32,
}

impl Default for TimeDilation {
    fn default() -> Self {
        Self {
            enabled: false,
            slow_scale: 0.5,
        }
    }
}

impl TimeDilation {
    /// Time scale for this step given the attack button state.
    #[inline]
    pub fn scale_for(&self, attack_held: bool) -> f32 {
        if attack_held { self.slow_scale } else { 1.0 }
    }
}
