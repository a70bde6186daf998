//! ADS session lifecycle driven by the continuous engagement signal.

use glam::{Vec2, Vec3};
use serde::Serialize;

use crate::constants::ADS_ENGAGE_THRESHOLD;
use crate::host::{CameraOffsetState, GroundOffset};

/// Engagement phase of the optic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum AdsPhase {
    /// Optic lowered; the host owns its camera pipeline.
    #[default]
    Idle,
    /// Optic raised; the controller owns the offset computation.
    Transitioning,
}

/// Edge detected between two consecutive engagement samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AdsTransition {
    /// The signal crossed the engage threshold upwards.
    Engaged,
    /// The signal fell back below the threshold.
    Disengaged,
}

/// Detects an engagement edge between the previous and current samples.
///
/// Repeated samples on the same side of the threshold yield `None`, so a
/// monotonic crossing produces exactly one transition.
///
/// # Examples
/// ```
/// use sightline::session::{detect_transition, AdsTransition};
/// assert_eq!(detect_transition(0.0, 0.5), Some(AdsTransition::Engaged));
/// assert_eq!(detect_transition(0.5, 0.9), None);
/// assert_eq!(detect_transition(0.9, 0.0), Some(AdsTransition::Disengaged));
/// ```
#[must_use]
pub fn detect_transition(previous: f32, current: f32) -> Option<AdsTransition> {
    let was_engaged = previous >= ADS_ENGAGE_THRESHOLD;
    let is_engaged = current >= ADS_ENGAGE_THRESHOLD;
    match (was_engaged, is_engaged) {
        (false, true) => Some(AdsTransition::Engaged),
        (true, false) => Some(AdsTransition::Disengaged),
        _ => None,
    }
}

/// Controller-owned state of one engaged optic session.
///
/// Created when the engagement signal crosses the threshold upwards and
/// dropped when it falls back, so no value leaks between sessions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdsSession {
    /// Host camera offset captured at engage.
    pub start_offset: GroundOffset,
    /// World aim point captured at engage.
    pub start_aim_point: Vec3,
    /// Screen-space aim point captured at engage.
    pub start_screen_aim_point: Vec2,
    /// Camera distance factor pinned for the whole session.
    pub start_distance_factor: f32,
    /// Host max offset captured at engage, the low end of the zoom lerp.
    pub start_max_offset: f32,
    /// Running total of suppressed edge scroll; monotonically non-decreasing.
    pub accumulated_edge_scroll: f32,
    /// Offset integrated so far, clamped after every step.
    pub current_offset: GroundOffset,
}

impl AdsSession {
    /// Opens a session from the host state captured at the engage edge.
    #[must_use]
    pub fn open(camera: &CameraOffsetState, aim_point: Vec3, screen_aim_point: Vec2) -> Self {
        Self {
            start_offset: camera.offset,
            start_aim_point: aim_point,
            start_screen_aim_point: screen_aim_point,
            start_distance_factor: camera.distance_factor,
            start_max_offset: camera.max_offset,
            accumulated_edge_scroll: 0.0,
            current_offset: camera.offset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, 0.0, None)]
    #[case(0.0, 0.009, None)]
    #[case(0.009, 0.01, Some(AdsTransition::Engaged))]
    #[case(0.5, 1.0, None)]
    #[case(1.0, 0.009, Some(AdsTransition::Disengaged))]
    #[case(0.005, 0.001, None)]
    fn edges_fire_only_on_threshold_crossings(
        #[case] previous: f32,
        #[case] current: f32,
        #[case] expected: Option<AdsTransition>,
    ) {
        assert_eq!(detect_transition(previous, current), expected);
    }

    #[rstest]
    fn open_session_copies_the_camera_snapshot() {
        let camera = CameraOffsetState {
            offset: GroundOffset::new(1.0, -2.0),
            max_offset: 5.0,
            distance_factor: 2.5,
            smoothing_speed: 12.0,
        };
        let session = AdsSession::open(&camera, Vec3::new(0.0, 1.0, 3.0), Vec2::new(960.0, 540.0));
        assert_eq!(session.current_offset, session.start_offset);
        assert_relative_eq!(session.start_distance_factor, 2.5);
        assert_relative_eq!(session.start_max_offset, 5.0);
        assert_relative_eq!(session.accumulated_edge_scroll, 0.0);
    }
}
