//! Systems running the control-loop phases inside the host's frame.
//!
//! Each system is a thin shim handing the host adapter to one controller
//! phase. They are installed as a single chain so the phase order from the
//! control-loop design holds within a frame: session tracking first, then
//! offset integration, then the two independent per-frame rewrites. When no
//! [`AssistState`] has been installed yet, every system idles; the host is
//! simply running without assistance that frame.

use bevy::prelude::*;

use super::AssistState;

/// Samples the engagement signal and drives session transitions.
pub fn track_ads_session_system(state: Option<NonSendMut<AssistState>>) {
    let Some(mut state) = state else {
        return;
    };
    let AssistState { controller, host } = &mut *state;
    controller.track_session(host.as_mut());
}

/// Integrates the aim offset and takes over the host camera fields.
///
/// Must run before the host's own camera step; the plugin orders the whole
/// chain ahead of [`super::HostSet::CameraUpdate`].
pub fn integrate_offset_system(state: Option<NonSendMut<AssistState>>) {
    let Some(mut state) = state else {
        return;
    };
    let AssistState { controller, host } = &mut *state;
    controller.integrate_offset(host.as_mut());
}

/// Rescales the raw mouse delta ahead of the host's input consumption.
pub fn scale_sensitivity_system(state: Option<NonSendMut<AssistState>>) {
    let Some(mut state) = state else {
        return;
    };
    let AssistState { controller, host } = &mut *state;
    controller.scale_sensitivity(host.as_mut());
}

/// Rescales fresh recoil kicks by zoom and target distance.
pub fn compensate_recoil_system(state: Option<NonSendMut<AssistState>>) {
    let Some(mut state) = state else {
        return;
    };
    let AssistState { controller, host } = &mut *state;
    controller.compensate_recoil(host.as_mut());
}
