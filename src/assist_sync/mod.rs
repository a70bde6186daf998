//! Synchronisation layer integrating the controller with a Bevy host.
//!
//! Re-exports the plugin, the shared state resource, and the per-phase
//! systems that run the control loop inside the host's `Update` schedule.

mod plugin;
mod state;
mod systems;

pub use plugin::{AimAssistPlugin, AimAssistSet, HostSet};
pub use state::{init_assist_state, AssistState};
pub use systems::{
    compensate_recoil_system, integrate_offset_system, scale_sensitivity_system,
    track_ads_session_system,
};
