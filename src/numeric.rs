//! Interpolation helpers shared by the aim-assist components.
//!
//! Every division in the control loop funnels through these guards so a
//! degenerate range or distance factor can never propagate a NaN into
//! host-owned fields.

/// Linearly interpolates between `a` and `b` without clamping `t`.
///
/// # Examples
/// ```
/// use sightline::numeric::lerp;
/// assert!((lerp(1.0, 1.5, 0.5) - 1.25).abs() < f32::EPSILON);
/// ```
#[must_use]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Maps `value` into the `[0, 1]` position it occupies between `a` and `b`.
///
/// Degenerate ranges (`a` ≈ `b`) yield `0.0` rather than dividing by zero.
/// The result is clamped to `[0, 1]`, matching the saturating behaviour the
/// control loop expects from every remapping.
///
/// # Examples
/// ```
/// use sightline::numeric::inverse_lerp;
/// assert!((inverse_lerp(1.5, 4.24, 4.24) - 1.0).abs() < f32::EPSILON);
/// assert!((inverse_lerp(10.0, 50.0, 30.0) - 0.5).abs() < f32::EPSILON);
/// assert!(inverse_lerp(2.0, 2.0, 5.0).abs() < f32::EPSILON);
/// ```
#[must_use]
pub fn inverse_lerp(a: f32, b: f32, value: f32) -> f32 {
    let range = b - a;
    if range.abs() < f32::EPSILON {
        return 0.0;
    }
    ((value - a) / range).clamp(0.0, 1.0)
}
