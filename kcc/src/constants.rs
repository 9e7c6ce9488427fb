/// Default fixed simulation step (seconds), 50 Hz.
pub const DEFAULT_FIXED_DT: f32 = 0.02;

/// Default world gravity (m/s^2), pointing down.
pub const DEFAULT_GRAVITY_Y: f32 = -9.81;

/// Maximum walking speed (m/s).
pub const DEFAULT_MAX_SPEED: f32 = 5.0;

/// Peak horizontal acceleration (m/s^2) reached when the curve evaluates to 1.
pub const DEFAULT_MAX_ACCELERATION: f32 = 50.0;

/// Acceleration multiplier while airborne.
///
/// Convention:
/// - 1.0 = full ground control in air
/// - 0.0 = no air control
pub const DEFAULT_AERIAL_DAMPENING: f32 = 0.5;

/// Jump apex height (meters) when the jump button is held for the whole ascent.
pub const DEFAULT_JUMP_HEIGHT: f32 = 3.0;

/// Extra gravity applied while falling.
pub const DEFAULT_FALL_MULTIPLIER: f32 = 4.5;

/// Extra gravity applied while rising with the jump button released.
pub const DEFAULT_LOW_JUMP_MULTIPLIER: f32 = 2.5;

/// Constant fall speed (m/s) while sliding down a wall.
pub const DEFAULT_WALL_SLIDE_SPEED: f32 = 2.0;

/// Wall jump launch velocity (m/s): x away from the wall, y upward.
pub const DEFAULT_WALL_JUMP_SPEED: (f32, f32) = (5.0, 10.0);

/// Lowest ground normal y used when rescaling velocity onto a slope.
///
/// Bounds the `1 / normal.y` rescale at 5x (slopes steeper than ~78.5 degrees).
pub const MIN_GROUND_NORMAL_Y: f32 = 0.2;
