//! Track sample types for event-shape analysis.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One particle's transverse-momentum components for one event.
///
/// Units are whatever the producing collaborator uses (GeV/c in practice);
/// all observables built from samples are scale-invariant, so the choice
/// never leaks into results.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TrackSample {
    /// Momentum component along x in the transverse plane.
    pub px: f64,
    /// Momentum component along y in the transverse plane.
    pub py: f64,
}

impl TrackSample {
    /// Creates a new track sample.
    #[inline]
    #[must_use]
    pub fn new(px: f64, py: f64) -> Self {
        Self { px, py }
    }

    /// Transverse momentum magnitude, sqrt(px² + py²).
    #[inline]
    #[must_use]
    pub fn pt(&self) -> f64 {
        self.px.hypot(self.py)
    }

    /// Azimuthal angle in (−π, π], from atan2(py, px).
    #[inline]
    #[must_use]
    pub fn phi(&self) -> f64 {
        self.py.atan2(self.px)
    }

    /// Returns true if the sample carries no usable direction (pT ≈ 0).
    #[inline]
    #[must_use]
    pub fn is_null(&self) -> bool {
        self.pt() <= f64::EPSILON
    }

    /// Unit-pT version of this sample, or `None` for a null vector.
    #[inline]
    #[must_use]
    pub fn unit(&self) -> Option<Self> {
        let pt = self.pt();
        if pt <= f64::EPSILON {
            return None;
        }
        Some(Self {
            px: self.px / pt,
            py: self.py / pt,
        })
    }
}
