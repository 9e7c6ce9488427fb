//! Configuration errors.
//!
//! The per-step pipeline never fails; degenerate inputs fall back to "no
//! movement" or "not grounded". Everything that can be wrong is caught once,
//! when a [`MoverConfig`](crate::collision::MoverConfig) or
//! [`ControllerConfig`](crate::movement::ControllerConfig) is accepted.

use thiserror::Error;

/// Rejected configuration values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Skin width must stay strictly positive.
    #[error("skin width {skin_width} is below the minimum of {min}")]
    SkinWidthTooSmall {
        /// Offending value
        skin_width: f32,
        /// Smallest accepted value
        min: f32,
    },

    /// The box collapses once shrunk by the skin width.
    #[error("box of size {width}x{height} collapses when shrunk by skin width {skin_width}")]
    DegenerateShape {
        /// Full box width
        width: f32,
        /// Full box height
        height: f32,
        /// Skin width the box was shrunk by
        skin_width: f32,
    },

    /// Slope limit outside of the open range (0, 90) degrees.
    #[error("max slope angle {0} deg is outside of (0, 90)")]
    SlopeAngleOutOfRange(f32),

    /// A tunable that must be finite and non-negative.
    #[error("{name} must be finite and non-negative, got {value}")]
    NegativeTunable {
        /// Field name
        name: &'static str,
        /// Offending value
        value: f32,
    },

    /// A tunable that must lie in [0, 1].
    #[error("{name} must lie in [0, 1], got {value}")]
    OutOfUnitRange {
        /// Field name
        name: &'static str,
        /// Offending value
        value: f32,
    },

    /// A tunable that must be finite.
    #[error("{name} must be finite")]
    NonFinite {
        /// Field name
        name: &'static str,
    },

    /// Acceleration curve without keys.
    #[error("acceleration curve has no keys")]
    EmptyCurve,

    /// Acceleration curve keys must be sorted by strictly increasing time.
    #[error("acceleration curve key {index} is not after the previous key")]
    UnsortedCurve {
        /// Index of the first out-of-order key
        index: usize,
    },

    /// Acceleration curve values are normalized to [-1, 1].
    #[error("acceleration curve key {index} has value {value} outside of [-1, 1]")]
    CurveValueOutOfRange {
        /// Key index
        index: usize,
        /// Offending value
        value: f32,
    },

    /// Config file could not be parsed.
    #[error("failed to parse config: {0}")]
    Parse(#[from] ron::error::SpannedError),
}

/// Reject non-finite or negative values.
pub(crate) fn non_negative(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NegativeTunable { name, value })
    }
}

/// Reject values outside [0, 1].
pub(crate) fn unit_range(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfUnitRange { name, value })
    }
}

/// Reject NaN and infinities.
pub(crate) fn finite(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonFinite { name })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_negative() {
        assert!(non_negative("x", 0.0).is_ok());
        assert!(non_negative("x", 3.5).is_ok());
        assert_eq!(
            non_negative("x", -1.0),
            Err(ConfigError::NegativeTunable {
                name: "x",
                value: -1.0
            })
        );
        assert!(non_negative("x", f32::INFINITY).is_err());
    }

    #[test]
    fn test_unit_range_rejects_nan() {
        assert!(unit_range("d", 0.5).is_ok());
        assert!(unit_range("d", 1.0).is_ok());
        assert!(unit_range("d", 1.01).is_err());
        assert!(unit_range("d", f32::NAN).is_err());
    }

    #[test]
    fn test_error_messages() {
        let err = ConfigError::SlopeAngleOutOfRange(95.0);
        assert_eq!(err.to_string(), "max slope angle 95 deg is outside of (0, 90)");

        let err = ConfigError::SkinWidthTooSmall {
            skin_width: 0.0,
            min: 0.001,
        };
        assert!(err.to_string().contains("below the minimum"));
    }
}
