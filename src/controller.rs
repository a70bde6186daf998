//! The per-tick aim-assist control loop.
//!
//! One [`AimAssistController`] exists per player session and owns every
//! piece of assist state: the ADS session, the recoil debounce clock, the
//! suppression timer, and the smoothing restore value. Each tick it runs
//! four phases in order — session tracking, offset integration, sensitivity
//! scaling, recoil compensation — reading and writing the host only through
//! the [`HostAdapter`] contract. Any host write failure is counted, logged
//! at debug level, and discarded so the host's main loop is never at risk.

use glam::{Vec2, Vec3};
use log::debug;

use crate::constants::{
    ADS_ENGAGE_THRESHOLD, DISTANCE_FACTOR_EPSILON, HIGH_MAGNIFICATION_FACTOR,
    LOW_MAGNIFICATION_THRESHOLD, MAX_OFFSET_AT_HIGH_MAGNIFICATION, MAX_OFFSET_WRITEBACK_EPSILON,
    OFFSET_VELOCITY_SCALE, RECOIL_ADJUST_DEBOUNCE_SECS, RECOIL_SUPPRESSION_SECS,
};
use crate::edge_scroll;
use crate::host::{GroundOffset, HostAdapter, HostWriteError};
use crate::numeric::{inverse_lerp, lerp};
use crate::recoil;
use crate::sensitivity;
use crate::session::{detect_transition, AdsPhase, AdsSession, AdsTransition};
use crate::zoom::classify;

/// Frame-stepped controller owning all assist state for one player.
#[derive(Debug, Default)]
pub struct AimAssistController {
    session: Option<AdsSession>,
    last_engagement: f32,
    /// Accumulated simulation time, advanced from host frame deltas.
    clock: f32,
    last_recoil_adjust: Option<f32>,
    suppression_timer: f32,
    recoil_generation: u64,
    restore_smoothing: Option<f32>,
    pending_smoothing_restore: bool,
    write_failures: u64,
}

/// Counts and logs a rejected host write without failing the tick.
fn note_write_failure(counter: &mut u64, result: Result<(), HostWriteError>) {
    if let Err(error) = result {
        *counter += 1;
        debug!("host write discarded: {error}");
    }
}

impl AimAssistController {
    /// Creates a controller with no active session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs one full control-loop tick against the host.
    ///
    /// Must execute before the host consumes the mouse delta and before the
    /// host's own camera step for the same frame.
    pub fn tick(&mut self, host: &mut dyn HostAdapter) {
        self.track_session(host);
        self.integrate_offset(host);
        self.scale_sensitivity(host);
        self.compensate_recoil(host);
    }

    /// Samples the engagement signal and drives the session state machine.
    pub fn track_session(&mut self, host: &mut dyn HostAdapter) {
        let delta_time = host.frame_input().map_or(0.0, |frame| frame.delta_time);
        self.clock += delta_time;
        if self.session.is_some() {
            self.suppression_timer = (self.suppression_timer - delta_time).max(0.0);
        }

        // Smoothing hand-back happens on the first idle tick after an exit.
        if self.session.is_none() && self.pending_smoothing_restore {
            if let Some(speed) = self.restore_smoothing {
                note_write_failure(&mut self.write_failures, host.set_smoothing_speed(speed));
                debug!("host smoothing speed restored to {speed}");
            }
            self.pending_smoothing_restore = false;
        }

        let Some(engagement) = host.engagement() else {
            return;
        };
        match detect_transition(self.last_engagement, engagement) {
            Some(AdsTransition::Engaged) => self.open_session(host),
            Some(AdsTransition::Disengaged) => {
                self.session = None;
                self.pending_smoothing_restore = true;
                debug!("ads session closed");
            }
            None => {}
        }
        self.last_engagement = engagement;
    }

    fn open_session(&mut self, host: &mut dyn HostAdapter) {
        let Some(camera) = host.camera() else {
            debug!("camera state unavailable, ads session not opened");
            return;
        };
        let aim_point = host.aim_point().unwrap_or(Vec3::ZERO);
        let screen_aim_point = host.screen_aim_point().unwrap_or(Vec2::ZERO);
        if camera.smoothing_speed > 0.0 {
            self.restore_smoothing = Some(camera.smoothing_speed);
        }
        self.session = Some(AdsSession::open(&camera, aim_point, screen_aim_point));
        debug!(
            "ads session opened at offset ({}, {})",
            camera.offset.x, camera.offset.z
        );
    }

    /// Integrates this tick's aim offset and takes over the host camera.
    ///
    /// Active only while a session exists. The host's smoothing speed is
    /// forced to zero for the tick so its own interpolation cannot fight
    /// the written offset.
    pub fn integrate_offset(&mut self, host: &mut dyn HostAdapter) {
        if self.session.is_none() {
            return;
        }
        let Some(frame) = host.frame_input() else {
            return;
        };
        note_write_failure(&mut self.write_failures, host.set_smoothing_speed(0.0));

        let zoom_factor = host.optics().map(|optics| optics.zoom_factor);
        let stored_max_offset = host.camera().map(|camera| camera.max_offset);
        let suppressed = self.suppression_timer > 0.0;
        let Some(session) = self.session.as_mut() else {
            return;
        };

        let velocity_scale =
            OFFSET_VELOCITY_SCALE * session.start_distance_factor.max(DISTANCE_FACTOR_EPSILON);
        session.current_offset += GroundOffset::new(
            frame.mouse_delta.x * velocity_scale,
            frame.mouse_delta.y * velocity_scale,
        );

        let normalized = edge_scroll::normalized_position(frame.mouse_position, frame.screen_size);
        session.current_offset += edge_scroll::contribution(
            normalized,
            frame.delta_time,
            suppressed,
            &mut session.accumulated_edge_scroll,
        );

        let t = zoom_factor.map_or(0.0, |zoom| {
            inverse_lerp(LOW_MAGNIFICATION_THRESHOLD, HIGH_MAGNIFICATION_FACTOR, zoom)
        });
        let max_offset = lerp(
            session.start_max_offset,
            MAX_OFFSET_AT_HIGH_MAGNIFICATION,
            t,
        );
        if let Some(stored) = stored_max_offset {
            if (stored - max_offset).abs() > MAX_OFFSET_WRITEBACK_EPSILON {
                note_write_failure(&mut self.write_failures, host.set_max_offset(max_offset));
            }
        }

        session.current_offset = session.current_offset.clamp_axes(max_offset);
        note_write_failure(
            &mut self.write_failures,
            host.set_camera_offset(session.current_offset),
        );

        let Some(axes) = host.camera_axes() else {
            return;
        };
        let offset = session.current_offset;
        let mut aim_point = session.start_aim_point
            + axes.right * (offset.x - session.start_offset.x)
            + axes.forward * (offset.z - session.start_offset.z);
        // Keep the aiming plane level across the session.
        aim_point.y = session.start_aim_point.y;

        note_write_failure(&mut self.write_failures, host.set_aim_point(aim_point));
        note_write_failure(&mut self.write_failures, host.set_input_aim_point(aim_point));
        if let Some(screen_point) = host.world_to_screen(aim_point) {
            note_write_failure(
                &mut self.write_failures,
                host.set_screen_aim_point(screen_point),
            );
            note_write_failure(
                &mut self.write_failures,
                host.set_mouse_position_cache(screen_point),
            );
        }
    }

    /// Rescales the raw mouse delta while a high-magnification optic is up.
    pub fn scale_sensitivity(&mut self, host: &mut dyn HostAdapter) {
        let Some(engagement) = host.engagement() else {
            return;
        };
        if engagement < ADS_ENGAGE_THRESHOLD {
            return;
        }
        let Some(optics) = host.optics() else {
            return;
        };
        let Some(frame) = host.frame_input() else {
            return;
        };
        if let Some(delta) = sensitivity::scaled_delta(&frame, classify(optics.zoom_factor)) {
            note_write_failure(&mut self.write_failures, host.set_mouse_delta(delta));
        }
    }

    /// Compensates a fresh recoil kick by zoom factor and target distance.
    ///
    /// Runs only while the optic is engaged; hip-fire kicks pass through
    /// unchanged. Each kick is processed at most once: the controller
    /// debounces on its own clock and advances a controller-owned
    /// generation counter. The host's new-kick flag is never cleared from
    /// this side.
    pub fn compensate_recoil(&mut self, host: &mut dyn HostAdapter) {
        let Some(engagement) = host.engagement() else {
            return;
        };
        if engagement < ADS_ENGAGE_THRESHOLD {
            return;
        }
        let Some(recoil) = host.recoil() else {
            return;
        };
        if !recoil.is_new || (recoil.vertical == 0.0 && recoil.horizontal == 0.0) {
            return;
        }
        if let Some(last) = self.last_recoil_adjust {
            if (self.clock - last).abs() < RECOIL_ADJUST_DEBOUNCE_SECS {
                return;
            }
        }
        let Some(optics) = host.optics() else {
            return;
        };
        let Some(aim_point) = host.aim_point() else {
            return;
        };

        self.last_recoil_adjust = Some(self.clock);
        self.suppression_timer = RECOIL_SUPPRESSION_SECS;
        self.recoil_generation += 1;

        let target_distance = aim_point.distance(optics.muzzle_position);
        let Some(compensation) = recoil::compensation(optics.zoom_factor, target_distance) else {
            return;
        };
        note_write_failure(
            &mut self.write_failures,
            host.set_recoil(
                compensation.apply(recoil.vertical),
                compensation.apply(recoil.horizontal),
            ),
        );
        debug!(
            "recoil kick {} compensated at distance {target_distance:.1}",
            self.recoil_generation
        );
    }

    /// Current engagement phase.
    #[must_use]
    pub const fn phase(&self) -> AdsPhase {
        if self.session.is_some() {
            AdsPhase::Transitioning
        } else {
            AdsPhase::Idle
        }
    }

    /// The active session, if the optic is engaged.
    #[must_use]
    pub const fn session(&self) -> Option<&AdsSession> {
        self.session.as_ref()
    }

    /// Number of recoil kicks processed since construction.
    #[must_use]
    pub const fn recoil_generation(&self) -> u64 {
        self.recoil_generation
    }

    /// Number of host writes rejected and discarded since construction.
    #[must_use]
    pub const fn write_failures(&self) -> u64 {
        self.write_failures
    }

    /// True while the post-kick edge-scroll suppression window is open.
    #[must_use]
    pub fn suppression_active(&self) -> bool {
        self.suppression_timer > 0.0
    }

    /// Drops all per-session state, returning the controller to idle.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
