//! Shared fixtures for the aim-assist integration tests.

use bevy::prelude::*;
use sightline::host::fake::FakeHost;
use sightline::{init_assist_state, AimAssistPlugin, AssistState};

/// Builds a headless app with the assist plugin wired to a fake host.
///
/// The returned [`FakeHost`] shares state with the one installed in the
/// app, so tests script inputs on it between updates and inspect what the
/// controller wrote back.
pub fn assist_app() -> (App, FakeHost) {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins).add_plugins(AimAssistPlugin);
    let host = FakeHost::default();
    init_assist_state(app.world_mut(), Box::new(host.clone()));
    (app, host)
}

/// Borrows the installed [`AssistState`] for assertions.
pub fn assist_state(app: &App) -> &AssistState {
    app.world()
        .get_non_send_resource::<AssistState>()
        .expect("AssistState should be installed")
}
