//! Optic magnification classification.
//!
//! Everything downstream of the classifier branches on two bands only: low
//! magnification leaves the host's aiming feel alone, high magnification
//! enables sensitivity rescaling, recoil compensation, and the wider offset
//! range.

use serde::Serialize;

use crate::constants::LOW_MAGNIFICATION_THRESHOLD;

/// Magnification band of the currently equipped optic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Magnification {
    /// Iron sights and short optics; the controller stays hands-off.
    Low,
    /// Long optics; the full assist pipeline applies.
    High,
}

/// Classifies a weapon's zoom factor into a [`Magnification`] band.
///
/// # Examples
/// ```
/// use sightline::zoom::{classify, Magnification};
/// assert_eq!(classify(1.0), Magnification::Low);
/// assert_eq!(classify(1.5), Magnification::Low);
/// assert_eq!(classify(4.24), Magnification::High);
/// ```
#[must_use]
pub fn classify(zoom_factor: f32) -> Magnification {
    if zoom_factor > LOW_MAGNIFICATION_THRESHOLD {
        Magnification::High
    } else {
        Magnification::Low
    }
}
