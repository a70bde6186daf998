//! Non-send state bridging the controller and the host adapter.

use bevy::prelude::World;

use crate::controller::AimAssistController;
use crate::host::HostAdapter;

/// Resource pairing the per-player controller with its host adapter.
///
/// Host adapters wrap engine-side handles that are generally not `Send`,
/// so the pair lives in the world as a non-send resource, mirroring how
/// the host itself is pinned to the main thread.
pub struct AssistState {
    pub(crate) controller: AimAssistController,
    pub(crate) host: Box<dyn HostAdapter>,
}

impl AssistState {
    /// Creates the state around a host adapter supplied by the integration
    /// layer.
    #[must_use]
    pub fn new(host: Box<dyn HostAdapter>) -> Self {
        Self {
            controller: AimAssistController::new(),
            host,
        }
    }

    /// Read access to the controller for diagnostics and tests.
    #[must_use]
    pub const fn controller(&self) -> &AimAssistController {
        &self.controller
    }
}

/// Installs an [`AssistState`] built around `host` into the world.
///
/// Call this from the host integration layer before the first frame. Until
/// the resource exists every assist system idles, per the degraded-tick
/// contract.
pub fn init_assist_state(world: &mut World, host: Box<dyn HostAdapter>) {
    world.insert_non_send_resource(AssistState::new(host));
}
