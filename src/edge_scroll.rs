//! Edge-scroll panning bounds and recoil damping.
//!
//! Holding the pointer near a screen border while engaged pans the aim
//! offset continuously. Right after a recoil kick that panning is damped
//! and capped so a kick cannot fling the view; outside the suppression
//! window it applies at full speed with no cumulative bound. All deltas
//! are per elapsed second, keeping the behaviour frame-rate independent.

use glam::Vec2;

use crate::constants::{
    EDGE_SCROLL_SPEED, EDGE_SCROLL_SUPPRESSED_CAP, EDGE_SCROLL_SUPPRESSED_SCALE,
    EDGE_SCROLL_THRESHOLD,
};
use crate::host::GroundOffset;

/// Normalises a pixel position to `[-1, 1]` per axis about screen centre.
#[must_use]
pub fn normalized_position(position: Vec2, screen_size: Vec2) -> Vec2 {
    let half = screen_size / 2.0;
    let half = half.max(Vec2::splat(f32::EPSILON));
    (position - screen_size / 2.0) / half
}

/// Raw per-axis scroll delta for one tick, before suppression.
fn axis_delta(normalized: f32, delta_time: f32) -> f32 {
    if normalized.abs() <= EDGE_SCROLL_THRESHOLD {
        return 0.0;
    }
    let excess = (normalized.abs() - EDGE_SCROLL_THRESHOLD) / (1.0 - EDGE_SCROLL_THRESHOLD);
    // Squared excess ramps the speed smoothly from the threshold outwards.
    normalized.signum() * excess * excess * EDGE_SCROLL_SPEED * delta_time
}

/// Damps and caps one axis delta against the session accumulator.
fn governed_axis_delta(raw: f32, suppressed: bool, accumulated: &mut f32) -> f32 {
    if !suppressed {
        return raw;
    }
    let damped = raw * EDGE_SCROLL_SUPPRESSED_SCALE;
    let budget = (EDGE_SCROLL_SUPPRESSED_CAP - *accumulated).max(0.0);
    let applied = damped.clamp(-budget, budget);
    *accumulated += applied.abs();
    applied
}

/// Computes this tick's edge-scroll contribution to the ground offset.
///
/// `accumulated` is the session's running total of suppressed scroll; it
/// only grows and never exceeds [`EDGE_SCROLL_SUPPRESSED_CAP`].
#[must_use]
pub fn contribution(
    normalized: Vec2,
    delta_time: f32,
    suppressed: bool,
    accumulated: &mut f32,
) -> GroundOffset {
    let x = governed_axis_delta(axis_delta(normalized.x, delta_time), suppressed, accumulated);
    let z = governed_axis_delta(axis_delta(normalized.y, delta_time), suppressed, accumulated);
    GroundOffset::new(x, z)
}
