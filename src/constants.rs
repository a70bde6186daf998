//! Aim-assist tuning constants used across systems.
//!
//! These values were calibrated against the host game's camera and input
//! pipeline and are hardcoded rather than loaded from configuration.

/// Zoom factors at or below this threshold classify as low magnification.
pub const LOW_MAGNIFICATION_THRESHOLD: f32 = 1.5;
/// Zoom factor at which recoil and offset scaling reach their maximum.
pub const HIGH_MAGNIFICATION_FACTOR: f32 = 4.24;

/// Mouse-delta multiplier applied while a high-magnification optic is up.
pub const HIGH_MAGNIFICATION_SENSITIVITY_SCALE: f32 = 0.4;
/// Distance from a screen border, in pixels, that counts as the edge zone.
pub const EDGE_DRIFT_BORDER_PX: f32 = 50.0;
/// Mouse-delta magnitude, in pixels, above which edge-zone motion is drift.
pub const EDGE_DRIFT_DELTA_PX: f32 = 10.0;

/// Engagement signal level at which an optic counts as raised.
pub const ADS_ENGAGE_THRESHOLD: f32 = 0.01;

/// Recoil divisor at the low end of the magnification range.
pub const RECOIL_BASE_SCALE_MIN: f32 = 1.0;
/// Recoil divisor at [`HIGH_MAGNIFICATION_FACTOR`].
pub const RECOIL_BASE_SCALE_MAX: f32 = 1.5;
/// Target distance at which recoil is de-emphasised the most.
pub const RECOIL_CLOSE_DISTANCE: f32 = 10.0;
/// Target distance beyond which recoil passes through unchanged.
pub const RECOIL_FAR_DISTANCE: f32 = 50.0;
/// Recoil multiplier applied at [`RECOIL_CLOSE_DISTANCE`].
pub const RECOIL_CLOSE_SCALE: f32 = 0.8;
/// Minimum wall-clock gap between two compensations of the same kick.
pub const RECOIL_ADJUST_DEBOUNCE_SECS: f32 = 0.01;
/// Duration of the edge-scroll suppression window armed by each kick.
pub const RECOIL_SUPPRESSION_SECS: f32 = 0.25;

/// Normalised distance from screen centre at which edge scrolling begins.
pub const EDGE_SCROLL_THRESHOLD: f32 = 0.8;
/// Edge-scroll speed in offset units per second at full excess.
pub const EDGE_SCROLL_SPEED: f32 = 50.0;
/// Multiplier applied to edge scrolling while recoil suppression is active.
pub const EDGE_SCROLL_SUPPRESSED_SCALE: f32 = 0.1;
/// Maximum cumulative suppressed edge scroll per session, in offset units.
pub const EDGE_SCROLL_SUPPRESSED_CAP: f32 = 3.0;

/// Mouse-delta to ground-offset conversion rate per distance-factor unit.
pub const OFFSET_VELOCITY_SCALE: f32 = 0.01;
/// Ground-plane offset limit reached at [`HIGH_MAGNIFICATION_FACTOR`].
pub const MAX_OFFSET_AT_HIGH_MAGNIFICATION: f32 = 22.0;
/// Change in max offset below which the host field is left untouched.
pub const MAX_OFFSET_WRITEBACK_EPSILON: f32 = 0.001;
/// Floor applied to the camera distance factor before division or scaling.
pub const DISTANCE_FACTOR_EPSILON: f32 = 1e-4;
