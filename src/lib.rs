//! Library crate providing the optic aim-assist control loop.
//! Re-exports the controller, host adapter contract, and Bevy plugins for
//! the host integration layer and tests.
pub mod assist_sync;
pub mod constants;
pub mod controller;
pub mod edge_scroll;
pub mod host;
pub mod logging;
pub mod numeric;
pub mod recoil;
pub mod sensitivity;
pub mod session;
pub mod stack_guard;
pub mod zoom;
pub use constants::*;

// Re-export commonly used items
pub use assist_sync::{
    compensate_recoil_system, init_assist_state, integrate_offset_system,
    scale_sensitivity_system, track_ads_session_system, AimAssistPlugin, AimAssistSet,
    AssistState, HostSet,
};
pub use controller::AimAssistController;
pub use host::{
    CameraAxes, CameraOffsetState, FrameInput, GroundOffset, HostAdapter, HostWriteError,
    RecoilImpulse, WeaponOptics,
};
pub use logging::init as init_logging;
pub use recoil::{compensation, RecoilCompensation};
pub use sensitivity::{is_edge_drift, scaled_delta};
pub use session::{detect_transition, AdsPhase, AdsSession, AdsTransition};
pub use stack_guard::{GuardedStack, ItemUsed, StackCount, StackGuardPlugin, StackGuardState};
pub use zoom::{classify, Magnification};

pub mod prelude {
    //! Prelude exports used in documentation examples.
    //!
    //! ```rust,no_run
    //! use sightline::prelude::*;
    //! ```

    pub use crate::assist_sync::{init_assist_state, AimAssistPlugin, AimAssistSet, HostSet};
    pub use crate::controller::AimAssistController;
    pub use crate::host::{GroundOffset, HostAdapter};
    pub use crate::session::{AdsPhase, AdsSession};
    pub use crate::zoom::Magnification;
}
