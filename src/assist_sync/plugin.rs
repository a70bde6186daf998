//! Bevy plugin wiring the assist systems into the schedule.

use bevy::prelude::*;

use super::{
    compensate_recoil_system, integrate_offset_system, scale_sensitivity_system,
    track_ads_session_system,
};

/// Set containing every assist system, scheduled before both host sets.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AimAssistSet;

/// Host pipeline stages the assist chain must precede.
///
/// The host integration layer labels its own systems with these sets: the
/// raw-input consumption step with [`HostSet::ConsumeInput`] and the camera
/// step with [`HostSet::CameraUpdate`]. That is the whole ordering
/// contract; the plugin requests priority rather than assuming it.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostSet {
    /// The host applies the (possibly rewritten) mouse delta to look
    /// rotation.
    ConsumeInput,
    /// The host runs its own camera smoothing and offset pipeline.
    CameraUpdate,
}

/// Bevy plugin installing the aim-assist control loop.
///
/// The plugin schedules the systems only. The host adapter itself is
/// registered separately with [`super::init_assist_state`] because adapters
/// wrap non-send engine handles that cannot travel inside a plugin value.
#[derive(Default)]
pub struct AimAssistPlugin;

impl Plugin for AimAssistPlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            AimAssistSet
                .before(HostSet::ConsumeInput)
                .before(HostSet::CameraUpdate),
        );
        app.add_systems(
            Update,
            (
                track_ads_session_system,
                integrate_offset_system,
                scale_sensitivity_system,
                compensate_recoil_system,
            )
                .chain()
                .in_set(AimAssistSet),
        );
    }
}
