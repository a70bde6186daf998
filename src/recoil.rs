//! Recoil rescaling by optic zoom and target distance.
//!
//! Magnification amplifies perceived recoil, so a fresh impulse is divided
//! by a zoom-scaled factor. Close-range kicks are further de-emphasised
//! because the magnified displacement there carries little aiming meaning;
//! at [`crate::constants::RECOIL_FAR_DISTANCE`] units and beyond the
//! distance term is neutral.

use serde::Serialize;

use crate::constants::{
    HIGH_MAGNIFICATION_FACTOR, LOW_MAGNIFICATION_THRESHOLD, RECOIL_BASE_SCALE_MAX,
    RECOIL_BASE_SCALE_MIN, RECOIL_CLOSE_DISTANCE, RECOIL_CLOSE_SCALE, RECOIL_FAR_DISTANCE,
};
use crate::numeric::{inverse_lerp, lerp};

/// Scaling terms applied to one recoil kick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RecoilCompensation {
    /// Zoom-derived divisor in `[1.0, 1.5]`.
    pub base_scale: f32,
    /// Distance-derived multiplier in `[0.8, 1.0]`.
    pub distance_scale: f32,
}

impl RecoilCompensation {
    /// Applies both terms to one impulse component.
    #[must_use]
    pub fn apply(&self, component: f32) -> f32 {
        component / self.base_scale * self.distance_scale
    }
}

/// Computes the compensation for a kick, or `None` when the optic's zoom
/// factor classifies as low magnification and the impulse passes through.
///
/// # Examples
/// ```
/// use sightline::recoil::compensation;
/// let comp = compensation(4.24, 50.0).unwrap();
/// assert!((comp.base_scale - 1.5).abs() < 1e-6);
/// assert!((comp.distance_scale - 1.0).abs() < 1e-6);
/// ```
#[must_use]
pub fn compensation(zoom_factor: f32, target_distance: f32) -> Option<RecoilCompensation> {
    if zoom_factor <= LOW_MAGNIFICATION_THRESHOLD {
        return None;
    }
    let t = inverse_lerp(
        LOW_MAGNIFICATION_THRESHOLD,
        HIGH_MAGNIFICATION_FACTOR,
        zoom_factor,
    );
    let base_scale = lerp(RECOIL_BASE_SCALE_MIN, RECOIL_BASE_SCALE_MAX, t);
    let distance_scale = lerp(
        RECOIL_CLOSE_SCALE,
        1.0,
        inverse_lerp(RECOIL_CLOSE_DISTANCE, RECOIL_FAR_DISTANCE, target_distance),
    )
    .clamp(RECOIL_CLOSE_SCALE, 1.0);
    Some(RecoilCompensation {
        base_scale,
        distance_scale,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    #[rstest]
    #[case(1.0)]
    #[case(1.5)]
    fn low_magnification_is_untouched(#[case] zoom: f32) {
        assert!(compensation(zoom, 30.0).is_none());
    }

    #[rstest]
    fn far_kick_at_full_zoom_divides_by_max_scale() {
        let comp = compensation(4.24, 50.0).unwrap_or_else(|| panic!("expected compensation"));
        assert_relative_eq!(comp.base_scale, 1.5, epsilon = 1e-6);
        assert_relative_eq!(comp.distance_scale, 1.0, epsilon = 1e-6);
        assert_relative_eq!(comp.apply(3.0), 2.0, epsilon = 1e-5);
    }

    #[rstest]
    fn close_kick_is_further_reduced() {
        let comp = compensation(4.24, 10.0).unwrap_or_else(|| panic!("expected compensation"));
        assert_relative_eq!(comp.distance_scale, 0.8, epsilon = 1e-6);
        assert_relative_eq!(comp.apply(3.0), 1.6, epsilon = 1e-5);
    }

    #[rstest]
    fn point_blank_clamps_to_close_scale() {
        let comp = compensation(4.24, 0.0).unwrap_or_else(|| panic!("expected compensation"));
        assert_relative_eq!(comp.distance_scale, 0.8, epsilon = 1e-6);
    }

    #[rstest]
    fn mid_zoom_interpolates_base_scale() {
        let comp = compensation(2.87, 50.0).unwrap_or_else(|| panic!("expected compensation"));
        // Halfway between 1.5 and 4.24 gives half the base-scale range.
        assert_relative_eq!(comp.base_scale, 1.25, epsilon = 1e-3);
    }
}
