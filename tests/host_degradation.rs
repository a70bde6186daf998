//! Capability-degradation contract: missing getters disable only the
//! features that need them, and rejected writes are counted and discarded.

use bevy::math::{Vec2, Vec3};
use mockall::mock;
use rstest::rstest;
use sightline::session::AdsPhase;
use sightline::{
    AimAssistController, CameraAxes, CameraOffsetState, FrameInput, GroundOffset, HostAdapter,
    HostWriteError, RecoilImpulse, WeaponOptics,
};

mock! {
    Host {}

    impl HostAdapter for Host {
        fn engagement(&self) -> Option<f32>;
        fn optics(&self) -> Option<WeaponOptics>;
        fn frame_input(&self) -> Option<FrameInput>;
        fn recoil(&self) -> Option<RecoilImpulse>;
        fn camera(&self) -> Option<CameraOffsetState>;
        fn camera_axes(&self) -> Option<CameraAxes>;
        fn aim_point(&self) -> Option<Vec3>;
        fn screen_aim_point(&self) -> Option<Vec2>;
        fn world_to_screen(&self, world: Vec3) -> Option<Vec2>;
        fn set_mouse_delta(&mut self, delta: Vec2) -> Result<(), HostWriteError>;
        fn set_recoil(&mut self, vertical: f32, horizontal: f32) -> Result<(), HostWriteError>;
        fn set_camera_offset(&mut self, offset: GroundOffset) -> Result<(), HostWriteError>;
        fn set_max_offset(&mut self, max_offset: f32) -> Result<(), HostWriteError>;
        fn set_smoothing_speed(&mut self, speed: f32) -> Result<(), HostWriteError>;
        fn set_aim_point(&mut self, point: Vec3) -> Result<(), HostWriteError>;
        fn set_input_aim_point(&mut self, point: Vec3) -> Result<(), HostWriteError>;
        fn set_screen_aim_point(&mut self, point: Vec2) -> Result<(), HostWriteError>;
        fn set_mouse_position_cache(&mut self, position: Vec2) -> Result<(), HostWriteError>;
    }
}

fn centred_frame() -> FrameInput {
    FrameInput {
        mouse_delta: Vec2::new(10.0, 0.0),
        mouse_position: Vec2::new(960.0, 540.0),
        screen_size: Vec2::new(1920.0, 1080.0),
        delta_time: 1.0 / 60.0,
    }
}

#[rstest]
fn a_rejected_delta_write_is_counted_and_discarded() {
    let mut host = MockHost::new();
    host.expect_engagement().returning(|| Some(1.0));
    host.expect_optics().returning(|| {
        Some(WeaponOptics {
            zoom_factor: 4.24,
            muzzle_position: Vec3::ZERO,
        })
    });
    host.expect_frame_input().returning(|| Some(centred_frame()));
    host.expect_set_mouse_delta()
        .returning(|_| Err(HostWriteError::new("mouse_delta")));

    let mut controller = AimAssistController::new();
    controller.scale_sensitivity(&mut host);

    assert_eq!(controller.write_failures(), 1);
}

#[rstest]
fn a_rejected_recoil_write_is_counted_and_discarded() {
    let mut host = MockHost::new();
    host.expect_engagement().returning(|| Some(1.0));
    host.expect_recoil().returning(|| {
        Some(RecoilImpulse {
            vertical: 3.0,
            horizontal: 0.0,
            is_new: true,
        })
    });
    host.expect_optics().returning(|| {
        Some(WeaponOptics {
            zoom_factor: 4.24,
            muzzle_position: Vec3::ZERO,
        })
    });
    host.expect_aim_point()
        .returning(|| Some(Vec3::new(50.0, 0.0, 0.0)));
    host.expect_set_recoil()
        .returning(|_, _| Err(HostWriteError::new("recoil")));

    let mut controller = AimAssistController::new();
    controller.compensate_recoil(&mut host);

    // The kick counts as processed; only the write-back was lost.
    assert_eq!(controller.write_failures(), 1);
    assert_eq!(controller.recoil_generation(), 1);
}

#[rstest]
fn a_missing_camera_keeps_the_session_closed() {
    let mut host = MockHost::new();
    host.expect_frame_input().returning(|| Some(centred_frame()));
    host.expect_engagement().returning(|| Some(1.0));
    host.expect_camera().returning(|| None);

    let mut controller = AimAssistController::new();
    controller.track_session(&mut host);

    assert_eq!(controller.phase(), AdsPhase::Idle);
}

#[rstest]
fn missing_aim_caches_fall_back_to_the_origin() {
    let mut host = MockHost::new();
    host.expect_frame_input().returning(|| None);
    host.expect_engagement().returning(|| Some(1.0));
    host.expect_camera().returning(|| {
        Some(CameraOffsetState {
            offset: GroundOffset::new(1.0, 2.0),
            max_offset: 5.0,
            distance_factor: 1.0,
            smoothing_speed: 12.0,
        })
    });
    host.expect_aim_point().returning(|| None);
    host.expect_screen_aim_point().returning(|| None);

    let mut controller = AimAssistController::new();
    controller.track_session(&mut host);

    let session = controller.session().expect("session should open");
    assert_eq!(session.start_aim_point, Vec3::ZERO);
    assert_eq!(session.start_screen_aim_point, Vec2::ZERO);
}

#[rstest]
fn a_fully_dark_host_makes_the_tick_a_no_op() {
    let mut host = MockHost::new();
    host.expect_frame_input().returning(|| None);
    host.expect_engagement().returning(|| None);
    host.expect_recoil().returning(|| None);

    let mut controller = AimAssistController::new();
    controller.tick(&mut host);

    assert_eq!(controller.phase(), AdsPhase::Idle);
    assert_eq!(controller.write_failures(), 0);
}
