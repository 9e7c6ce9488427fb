use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// One `(time, value)` key of an [`AccelerationCurve`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CurveKey {
    pub time: f32,
    pub value: f32,
}

impl CurveKey {
    pub const fn new(time: f32, value: f32) -> Self {
        Self { time, value }
    }
}

/// Normalized acceleration curve.
///
/// Maps the progress toward the target speed (0 = standing, 1 = at target) to a
/// blend in [-1, 1]. The controller lerps between `-max_acceleration` and
/// `+max_acceleration` with it, so 1 means full acceleration.
///
/// Keys are interpolated linearly and clamped to the first/last key outside their range.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccelerationCurve {
    keys: Vec<CurveKey>,
}

impl Default for AccelerationCurve {
    fn default() -> Self {
        Self::constant(1.0)
    }
}

impl AccelerationCurve {
    pub fn new(keys: Vec<CurveKey>) -> Result<Self, ConfigError> {
        let curve = Self { keys };
        curve.validate()?;
        Ok(curve)
    }

    pub fn constant(value: f32) -> Self {
        Self {
            keys: vec![CurveKey::new(0.0, value), CurveKey::new(1.0, value)],
        }
    }

    pub fn keys(&self) -> &[CurveKey] {
        &self.keys
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.keys.is_empty() {
            return Err(ConfigError::EmptyCurve);
        }
        for (index, key) in self.keys.iter().enumerate() {
            if !key.time.is_finite() || !(-1.0..=1.0).contains(&key.value) {
                return Err(ConfigError::CurveValueOutOfRange {
                    index,
                    value: key.value,
                });
            }
            if index > 0 && !(key.time > self.keys[index - 1].time) {
                return Err(ConfigError::UnsortedCurve { index });
            }
        }
        Ok(())
    }

    pub fn evaluate(&self, t: f32) -> f32 {
        let (Some(first), Some(last)) = (self.keys.first(), self.keys.last()) else {
            return 0.0;
        };
        if t <= first.time {
            return first.value;
        }
        if t >= last.time {
            return last.value;
        }

        // First key strictly after t; t > first.time so idx >= 1.
        let idx = self.keys.partition_point(|k| k.time <= t);
        let a = self.keys[idx - 1];
        let b = self.keys[idx];
        let span = b.time - a.time;
        a.value + (b.value - a.value) * ((t - a.time) / span)
    }
}
