//! Typed boundary between the controller and the host engine.
//!
//! Host access goes through an explicit adapter contract rather than
//! direct field reach-in: the host integration layer implements
//! [`HostAdapter`], getters surface missing capabilities as `None`, and
//! setters report rejected writes as [`HostWriteError`]. The controller
//! treats both as degraded ticks rather than failures, so a partially
//! wired host never aborts the frame.

use glam::{Vec2, Vec3};
use serde::Serialize;
use thiserror::Error;

#[cfg(feature = "test-support")]
pub mod fake;

/// Read-only snapshot of the equipped weapon's optic.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeaponOptics {
    /// Magnification multiplier; always positive.
    pub zoom_factor: f32,
    /// World-space muzzle position used for target-distance estimation.
    pub muzzle_position: Vec3,
}

/// Per-tick pointer and timing state, re-read every frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FrameInput {
    /// Raw mouse delta before the host consumes it for look rotation.
    pub mouse_delta: Vec2,
    /// Mouse position in screen pixels.
    pub mouse_position: Vec2,
    /// Screen size in pixels.
    pub screen_size: Vec2,
    /// Simulation step duration in seconds.
    pub delta_time: f32,
}

/// Host-owned recoil impulse with its new-kick edge flag.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RecoilImpulse {
    /// Vertical impulse component.
    pub vertical: f32,
    /// Horizontal impulse component.
    pub horizontal: f32,
    /// True on the first tick a fresh kick is visible. The controller never
    /// clears this flag; it deduplicates with its own clock and generation
    /// counter instead.
    pub is_new: bool,
}

/// 2D displacement of the aim target on the ground plane.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct GroundOffset {
    /// Lateral displacement along the camera-right axis.
    pub x: f32,
    /// Forward displacement along the camera-forward axis.
    pub z: f32,
}

impl GroundOffset {
    /// Creates an offset from its axis components.
    #[must_use]
    pub const fn new(x: f32, z: f32) -> Self {
        Self { x, z }
    }

    /// Clamps each axis independently to `[-limit, limit]`.
    ///
    /// Unlike a radial clamp, the bound applies to each axis on its own, so
    /// diagonal pans keep the same reach per axis as straight ones.
    /// Negative limits are treated as zero.
    #[must_use]
    pub fn clamp_axes(self, limit: f32) -> Self {
        let limit = limit.max(0.0);
        Self {
            x: self.x.clamp(-limit, limit),
            z: self.z.clamp(-limit, limit),
        }
    }
}

impl std::ops::Add for GroundOffset {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.z + other.z)
    }
}

impl std::ops::AddAssign for GroundOffset {
    fn add_assign(&mut self, other: Self) {
        self.x += other.x;
        self.z += other.z;
    }
}

/// Host camera state subject to takeover during an engaged session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CameraOffsetState {
    /// Current ground-plane offset of the camera target.
    pub offset: GroundOffset,
    /// Host-configured bound on the offset magnitude per axis.
    pub max_offset: f32,
    /// Distance factor feeding the offset velocity scale. Never written by
    /// the controller.
    pub distance_factor: f32,
    /// Smoothing speed of the host's own camera interpolation.
    pub smoothing_speed: f32,
}

/// Camera basis vectors projecting ground offsets into world space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CameraAxes {
    /// World-space camera right vector.
    pub right: Vec3,
    /// World-space camera forward vector, flattened onto the ground plane.
    pub forward: Vec3,
}

/// A host-side write was rejected or the target field is unavailable.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("host rejected write to {field}")]
pub struct HostWriteError {
    /// Name of the host field the write targeted.
    pub field: &'static str,
}

impl HostWriteError {
    /// Creates an error naming the rejected field.
    #[must_use]
    pub const fn new(field: &'static str) -> Self {
        Self { field }
    }
}

/// Capability contract the host integration layer supplies per player.
///
/// Every getter is optional: a `None` degrades only the features that need
/// that capability for the current tick. Setters may reject writes; the
/// controller logs and discards such failures at the takeover boundary.
pub trait HostAdapter {
    /// Continuous optic-engagement signal in `[0, 1]`.
    fn engagement(&self) -> Option<f32>;
    /// Snapshot of the equipped weapon's optic, if any weapon is equipped.
    fn optics(&self) -> Option<WeaponOptics>;
    /// This tick's pointer and timing state.
    fn frame_input(&self) -> Option<FrameInput>;
    /// Current recoil impulse and its edge flag.
    fn recoil(&self) -> Option<RecoilImpulse>;
    /// Camera offset state subject to takeover.
    fn camera(&self) -> Option<CameraOffsetState>;
    /// Camera basis vectors for ground-plane projection.
    fn camera_axes(&self) -> Option<CameraAxes>;
    /// World-space aim point the host currently steers towards.
    fn aim_point(&self) -> Option<Vec3>;
    /// Cached screen-space aim point.
    fn screen_aim_point(&self) -> Option<Vec2>;
    /// Projects a world position through the host camera to screen pixels.
    fn world_to_screen(&self, world: Vec3) -> Option<Vec2>;

    /// Overwrites the raw mouse delta before the host consumes it.
    fn set_mouse_delta(&mut self, delta: Vec2) -> Result<(), HostWriteError>;
    /// Writes back compensated recoil components.
    fn set_recoil(&mut self, vertical: f32, horizontal: f32) -> Result<(), HostWriteError>;
    /// Writes the camera ground-plane offset.
    fn set_camera_offset(&mut self, offset: GroundOffset) -> Result<(), HostWriteError>;
    /// Writes the camera max-offset bound.
    fn set_max_offset(&mut self, max_offset: f32) -> Result<(), HostWriteError>;
    /// Writes the camera smoothing speed.
    fn set_smoothing_speed(&mut self, speed: f32) -> Result<(), HostWriteError>;
    /// Pushes a world aim point through the host's aim-point setter.
    fn set_aim_point(&mut self, point: Vec3) -> Result<(), HostWriteError>;
    /// Writes the host's cached input aim point.
    fn set_input_aim_point(&mut self, point: Vec3) -> Result<(), HostWriteError>;
    /// Writes the host's cached screen-space aim point.
    fn set_screen_aim_point(&mut self, point: Vec2) -> Result<(), HostWriteError>;
    /// Writes the host's cached mouse position.
    fn set_mouse_position_cache(&mut self, position: Vec2) -> Result<(), HostWriteError>;
}
