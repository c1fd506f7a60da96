//! Azimuthal event-activity classification.
//!
//! Splits an event's azimuth into regions relative to its leading
//! (highest-pT) track and counts the multiplicity in the transverse
//! region, the underlying-event activity estimator.

use std::f64::consts::PI;

use evshape_core::EventBuffer;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default transverse-momentum cut for the leading track.
pub const DEFAULT_PT_LEAD_CUT: f64 = 5.0;

/// Wrapped azimuthal difference `phi2 − phi1`, in (−π, π].
#[must_use]
pub fn delta_phi(phi1: f64, phi2: f64) -> f64 {
    let mut dphi = phi2 - phi1;
    if dphi > PI {
        dphi -= 2.0 * PI;
    }
    if dphi < -PI {
        dphi += 2.0 * PI;
    }
    dphi
}

/// Azimuthal region of a track relative to the leading track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AzimuthalRegion {
    /// |Δφ| < π/3, the near side around the leading track.
    Toward,
    /// π/3 ≤ |Δφ| ≤ 2π/3, perpendicular to the leading track.
    Transverse,
    /// |Δφ| > 2π/3, the recoil side.
    Away,
}

impl AzimuthalRegion {
    /// Classifies a track azimuth relative to the leading track's azimuth.
    #[must_use]
    pub fn classify(phi: f64, phi_lead: f64) -> Self {
        let dphi = delta_phi(phi, phi_lead).abs();
        if dphi < PI / 3.0 {
            Self::Toward
        } else if dphi > 2.0 * PI / 3.0 {
            Self::Away
        } else {
            Self::Transverse
        }
    }
}

/// Leading track of an event.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LeadingTrack {
    /// Buffer index of the leading sample.
    pub index: usize,
    /// Transverse momentum of the leading sample.
    pub pt: f64,
    /// Azimuth of the leading sample.
    pub phi: f64,
}

/// Classifies event activity relative to the leading track.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ActivityClassifier {
    pt_lead_cut: f64,
}

impl Default for ActivityClassifier {
    fn default() -> Self {
        Self {
            pt_lead_cut: DEFAULT_PT_LEAD_CUT,
        }
    }
}

impl ActivityClassifier {
    /// Creates a classifier with the default leading-pT cut.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the leading-track pT cut.
    #[must_use]
    pub fn with_pt_lead_cut(mut self, cut: f64) -> Self {
        self.pt_lead_cut = cut;
        self
    }

    /// Current leading-track pT cut.
    #[must_use]
    pub fn pt_lead_cut(&self) -> f64 {
        self.pt_lead_cut
    }

    /// Highest-pT sample in the buffer, if it passes the leading-pT cut.
    ///
    /// Ties keep the earliest sample.
    #[must_use]
    pub fn leading_track(&self, buffer: &EventBuffer) -> Option<LeadingTrack> {
        let mut best: Option<LeadingTrack> = None;
        for (index, sample) in buffer.samples().enumerate() {
            let pt = sample.pt();
            if best.is_none_or(|b| pt > b.pt) {
                best = Some(LeadingTrack {
                    index,
                    pt,
                    phi: sample.phi(),
                });
            }
        }
        best.filter(|lead| lead.pt > self.pt_lead_cut)
    }

    /// Number of samples in the transverse region relative to the leading
    /// track; `None` when no sample passes the leading-pT cut.
    ///
    /// The leading track itself sits at Δφ = 0 (Toward) and is never
    /// counted.
    #[must_use]
    pub fn transverse_multiplicity(&self, buffer: &EventBuffer) -> Option<usize> {
        let lead = self.leading_track(buffer)?;
        Some(
            buffer
                .samples()
                .filter(|sample| {
                    AzimuthalRegion::classify(sample.phi(), lead.phi) == AzimuthalRegion::Transverse
                })
                .count(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn buffer_of(tracks: &[(f64, f64)]) -> EventBuffer {
        let mut buffer = EventBuffer::with_capacity(tracks.len());
        for &(px, py) in tracks {
            buffer.push(px, py);
        }
        buffer
    }

    #[test]
    fn test_delta_phi_wraps_into_range() {
        assert_abs_diff_eq!(delta_phi(0.0, PI / 2.0), PI / 2.0);
        assert_abs_diff_eq!(delta_phi(-3.0, 3.0), 6.0 - 2.0 * PI, epsilon = 1e-12);
        assert_abs_diff_eq!(delta_phi(3.0, -3.0), 2.0 * PI - 6.0, epsilon = 1e-12);
    }

    #[test]
    fn test_region_classification() {
        assert_eq!(AzimuthalRegion::classify(0.1, 0.0), AzimuthalRegion::Toward);
        assert_eq!(
            AzimuthalRegion::classify(PI / 2.0, 0.0),
            AzimuthalRegion::Transverse
        );
        assert_eq!(AzimuthalRegion::classify(PI, 0.0), AzimuthalRegion::Away);
        // Opposite-side wrap: −3π/4 is 3π/4 away from 0, on the recoil side.
        assert_eq!(
            AzimuthalRegion::classify(-3.0 * PI / 4.0, 0.0),
            AzimuthalRegion::Away
        );
    }

    #[test]
    fn test_leading_track_selection() {
        let classifier = ActivityClassifier::new().with_pt_lead_cut(1.0);
        let buffer = buffer_of(&[(0.5, 0.0), (0.0, 6.0), (2.0, 0.0)]);

        let lead = classifier.leading_track(&buffer).unwrap();
        assert_eq!(lead.index, 1);
        assert_abs_diff_eq!(lead.pt, 6.0);
        assert_abs_diff_eq!(lead.phi, PI / 2.0);
    }

    #[test]
    fn test_no_leading_track_below_cut() {
        let classifier = ActivityClassifier::new();
        let buffer = buffer_of(&[(1.0, 0.0), (0.0, 2.0)]);

        assert!(classifier.leading_track(&buffer).is_none());
        assert!(classifier.transverse_multiplicity(&buffer).is_none());
    }

    #[test]
    fn test_transverse_multiplicity_counts_perpendicular_tracks() {
        let classifier = ActivityClassifier::new();
        // Leading along +x; one track perpendicular, one recoil, one near side.
        let buffer = buffer_of(&[
            (6.0, 0.0),   // leading, Toward
            (0.0, 1.0),   // Transverse
            (0.0, -0.5),  // Transverse
            (-1.0, 0.1),  // Away
            (1.0, 0.05),  // Toward
        ]);

        assert_eq!(classifier.transverse_multiplicity(&buffer), Some(2));
    }
}
