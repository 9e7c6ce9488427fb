/*!
Kinematic mover settings and tolerances.

These constants centralize the parameters used by the box sweep-and-slide,
the ground probe and the wall probe. Per-body values live in
[`MoverConfig`](super::MoverConfig); these are the defaults and hard limits.

Notes
- Distances are in meters, angles in degrees.
- Favor practical world-space tolerances over machine epsilon for robust behavior.
*/

/// Separation kept from surfaces when landing or sliding (meters).
/// Too large creates visible gaps; too small lets the next sweep report a
/// zero-distance hit against the surface the body rests on.
pub const DEFAULT_SKIN_WIDTH: f32 = 0.01;

/// Smallest accepted skin width (meters).
pub const MIN_SKIN_WIDTH: f32 = 0.001;

/// Steepest surface (degrees from straight up) still counted as ground.
pub const DEFAULT_MAX_SLOPE_DEG: f32 = 45.0;

/// Slope limits at or above this are accepted but logged as suspicious, since
/// landing rescales velocity by `1 / normal.y`.
pub const STEEP_SLOPE_WARN_DEG: f32 = 80.0;

/// The ground probe casts this many skin widths straight down.
pub const GROUND_PROBE_SKINS: f32 = 2.0;

/// The wall probe casts this many skin widths sideways. A blocked move that would
/// advance by one skin width or less is snapped to zero, so a body pressing into a
/// wall can come to rest anywhere up to two skin widths from it.
pub const WALL_PROBE_SKINS: f32 = 2.0;

/// Added to the wall probe length so a body resting exactly at the probe's reach
/// still detects the wall despite rounding in the sweep (meters).
pub const WALL_PROBE_TOLERANCE: f32 = 1.0e-4;

/// Minimum squared movement considered meaningful (m^2).
/// Shorter displacements are never normalized.
pub const MIN_MOVE_SQ: f32 = 1.0e-12;

/// Inflation of swept AABBs used for broad-phase candidate gathering (meters).
pub const BROAD_PHASE_MARGIN: f32 = 0.01;
