//! Shared-interior fake host used by integration tests and the demo binary.

use std::sync::{Arc, Mutex, PoisonError};

use glam::{Vec2, Vec3};

use super::{
    CameraAxes, CameraOffsetState, FrameInput, GroundOffset, HostAdapter, HostWriteError,
    RecoilImpulse, WeaponOptics,
};

/// Mutable host-side state behind a [`FakeHost`].
///
/// Tests hold a second handle to the same state so they can script inputs
/// before a tick and inspect what the controller wrote back afterwards.
#[derive(Debug, Clone)]
pub struct FakeHostState {
    /// Optic-engagement signal fed to the session tracker.
    pub engagement: f32,
    /// Equipped weapon, or `None` to exercise capability degradation.
    pub optics: Option<WeaponOptics>,
    /// Pointer and timing state for the current tick.
    pub frame: FrameInput,
    /// Recoil impulse with its edge flag.
    pub recoil: RecoilImpulse,
    /// Camera state subject to takeover.
    pub camera: CameraOffsetState,
    /// Camera basis vectors.
    pub axes: CameraAxes,
    /// World aim point.
    pub aim_point: Vec3,
    /// Cached input aim point.
    pub input_aim_point: Vec3,
    /// Cached screen-space aim point.
    pub screen_aim_point: Vec2,
    /// Cached mouse position.
    pub mouse_position_cache: Vec2,
    /// Scale of the fake orthographic projection, in pixels per world unit.
    pub pixels_per_unit: f32,
}

impl Default for FakeHostState {
    fn default() -> Self {
        Self {
            engagement: 0.0,
            optics: Some(WeaponOptics {
                zoom_factor: 4.24,
                muzzle_position: Vec3::ZERO,
            }),
            frame: FrameInput {
                mouse_delta: Vec2::ZERO,
                mouse_position: Vec2::new(960.0, 540.0),
                screen_size: Vec2::new(1920.0, 1080.0),
                delta_time: 1.0 / 60.0,
            },
            recoil: RecoilImpulse {
                vertical: 0.0,
                horizontal: 0.0,
                is_new: false,
            },
            camera: CameraOffsetState {
                offset: GroundOffset::default(),
                max_offset: 5.0,
                distance_factor: 1.0,
                smoothing_speed: 12.0,
            },
            axes: CameraAxes {
                right: Vec3::X,
                forward: Vec3::Z,
            },
            aim_point: Vec3::ZERO,
            input_aim_point: Vec3::ZERO,
            screen_aim_point: Vec2::new(960.0, 540.0),
            mouse_position_cache: Vec2::new(960.0, 540.0),
            pixels_per_unit: 10.0,
        }
    }
}

/// In-memory [`HostAdapter`] with every capability present.
///
/// Cloning yields another handle to the same interior state, so a test can
/// park one clone in the app's host handle and keep the other for scripting.
#[derive(Debug, Clone, Default)]
pub struct FakeHost {
    state: Arc<Mutex<FakeHostState>>,
}

impl FakeHost {
    fn lock(&self) -> std::sync::MutexGuard<'_, FakeHostState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl FakeHost {
    /// Creates a fake host from explicit initial state.
    #[must_use]
    pub fn new(state: FakeHostState) -> Self {
        Self {
            state: Arc::new(Mutex::new(state)),
        }
    }

    /// Runs `f` with mutable access to the interior state.
    pub fn with_state<R>(&self, f: impl FnOnce(&mut FakeHostState) -> R) -> R {
        f(&mut self.lock())
    }

    /// Returns a copy of the interior state for assertions.
    #[must_use]
    pub fn snapshot(&self) -> FakeHostState {
        self.lock().clone()
    }
}

impl HostAdapter for FakeHost {
    fn engagement(&self) -> Option<f32> {
        Some(self.lock().engagement)
    }

    fn optics(&self) -> Option<WeaponOptics> {
        self.lock().optics
    }

    fn frame_input(&self) -> Option<FrameInput> {
        Some(self.lock().frame)
    }

    fn recoil(&self) -> Option<RecoilImpulse> {
        Some(self.lock().recoil)
    }

    fn camera(&self) -> Option<CameraOffsetState> {
        Some(self.lock().camera)
    }

    fn camera_axes(&self) -> Option<CameraAxes> {
        Some(self.lock().axes)
    }

    fn aim_point(&self) -> Option<Vec3> {
        Some(self.lock().aim_point)
    }

    fn screen_aim_point(&self) -> Option<Vec2> {
        Some(self.lock().screen_aim_point)
    }

    fn world_to_screen(&self, world: Vec3) -> Option<Vec2> {
        let state = self.lock();
        let centre = state.frame.screen_size / 2.0;
        Some(centre + Vec2::new(world.x, world.z) * state.pixels_per_unit)
    }

    fn set_mouse_delta(&mut self, delta: Vec2) -> Result<(), HostWriteError> {
        self.lock().frame.mouse_delta = delta;
        Ok(())
    }

    fn set_recoil(&mut self, vertical: f32, horizontal: f32) -> Result<(), HostWriteError> {
        let mut state = self.lock();
        state.recoil.vertical = vertical;
        state.recoil.horizontal = horizontal;
        Ok(())
    }

    fn set_camera_offset(&mut self, offset: GroundOffset) -> Result<(), HostWriteError> {
        self.lock().camera.offset = offset;
        Ok(())
    }

    fn set_max_offset(&mut self, max_offset: f32) -> Result<(), HostWriteError> {
        self.lock().camera.max_offset = max_offset;
        Ok(())
    }

    fn set_smoothing_speed(&mut self, speed: f32) -> Result<(), HostWriteError> {
        self.lock().camera.smoothing_speed = speed;
        Ok(())
    }

    fn set_aim_point(&mut self, point: Vec3) -> Result<(), HostWriteError> {
        self.lock().aim_point = point;
        Ok(())
    }

    fn set_input_aim_point(&mut self, point: Vec3) -> Result<(), HostWriteError> {
        self.lock().input_aim_point = point;
        Ok(())
    }

    fn set_screen_aim_point(&mut self, point: Vec2) -> Result<(), HostWriteError> {
        self.lock().screen_aim_point = point;
        Ok(())
    }

    fn set_mouse_position_cache(&mut self, position: Vec2) -> Result<(), HostWriteError> {
        self.lock().mouse_position_cache = position;
        Ok(())
    }
}
