//! Mouse sensitivity rescaling for high-magnification optics.
//!
//! The host applies the raw mouse delta to look rotation once per frame;
//! this module decides whether that delta should first be shrunk. Edge
//! drift, the host's own fast panning with the pointer pinned to a screen
//! border, must keep its native speed, so those frames pass through
//! untouched.

use glam::Vec2;

use crate::constants::{
    EDGE_DRIFT_BORDER_PX, EDGE_DRIFT_DELTA_PX, HIGH_MAGNIFICATION_SENSITIVITY_SCALE,
};
use crate::host::FrameInput;
use crate::zoom::Magnification;

/// Returns true when the frame's pointer motion is edge drift.
///
/// Edge drift requires both conditions at once: the pointer within
/// [`EDGE_DRIFT_BORDER_PX`] of any screen border and a delta magnitude above
/// [`EDGE_DRIFT_DELTA_PX`].
#[must_use]
pub fn is_edge_drift(frame: &FrameInput) -> bool {
    let position = frame.mouse_position;
    let screen = frame.screen_size;
    let near_border = position.x < EDGE_DRIFT_BORDER_PX
        || position.x > screen.x - EDGE_DRIFT_BORDER_PX
        || position.y < EDGE_DRIFT_BORDER_PX
        || position.y > screen.y - EDGE_DRIFT_BORDER_PX;
    near_border && frame.mouse_delta.length() > EDGE_DRIFT_DELTA_PX
}

/// Computes the rescaled mouse delta for this frame, if any.
///
/// Returns `None` when the host's delta should be left untouched: low
/// magnification, or an edge-drift frame at any magnification.
#[must_use]
pub fn scaled_delta(frame: &FrameInput, magnification: Magnification) -> Option<Vec2> {
    if magnification == Magnification::Low || is_edge_drift(frame) {
        return None;
    }
    Some(frame.mouse_delta * HIGH_MAGNIFICATION_SENSITIVITY_SCALE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    fn frame(delta: Vec2, position: Vec2) -> FrameInput {
        FrameInput {
            mouse_delta: delta,
            mouse_position: position,
            screen_size: Vec2::new(1920.0, 1080.0),
            delta_time: 1.0 / 60.0,
        }
    }

    #[rstest]
    fn centre_screen_high_zoom_scales_exactly() {
        let input = frame(Vec2::new(10.0, -4.0), Vec2::new(960.0, 540.0));
        let scaled = scaled_delta(&input, Magnification::High);
        let Some(scaled) = scaled else {
            panic!("expected a rescaled delta");
        };
        assert_relative_eq!(scaled.x, 4.0);
        assert_relative_eq!(scaled.y, -1.6);
    }

    #[rstest]
    fn low_magnification_passes_through() {
        let input = frame(Vec2::new(10.0, 0.0), Vec2::new(960.0, 540.0));
        assert_eq!(scaled_delta(&input, Magnification::Low), None);
    }

    #[rstest]
    #[case(Vec2::new(10.0, 540.0))]
    #[case(Vec2::new(1900.0, 540.0))]
    #[case(Vec2::new(960.0, 20.0))]
    #[case(Vec2::new(960.0, 1060.0))]
    fn fast_motion_at_any_border_is_drift(#[case] position: Vec2) {
        let input = frame(Vec2::new(20.0, 0.0), position);
        assert!(is_edge_drift(&input));
        assert_eq!(scaled_delta(&input, Magnification::High), None);
    }

    #[rstest]
    fn slow_motion_at_the_border_is_not_drift() {
        let input = frame(Vec2::new(3.0, 0.0), Vec2::new(10.0, 540.0));
        assert!(!is_edge_drift(&input));
        assert!(scaled_delta(&input, Magnification::High).is_some());
    }

    #[rstest]
    fn fast_motion_at_centre_is_not_drift() {
        let input = frame(Vec2::new(200.0, 0.0), Vec2::new(960.0, 540.0));
        assert!(!is_edge_drift(&input));
    }
}
