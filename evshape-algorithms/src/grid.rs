//! Grid-scan spherocity minimization.
//!
//! Scans a fixed, uniformly spaced grid of candidate directions over the
//! full azimuth and minimizes the summed perpendicular projection of the
//! event's tracks.

use evshape_core::error::{Error, Result};
use evshape_core::EventBuffer;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default angular step between candidate directions, in degrees.
pub const DEFAULT_GRID_STEP_DEG: f64 = 1.0;

/// Grid-scan configuration.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GridScanConfig {
    /// Angular step between candidate directions (degrees).
    pub step_deg: f64,
}

impl Default for GridScanConfig {
    fn default() -> Self {
        Self {
            step_deg: DEFAULT_GRID_STEP_DEG,
        }
    }
}

impl GridScanConfig {
    /// Creates a configuration with the default grid step.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the angular step in degrees.
    #[must_use]
    pub fn with_step_deg(mut self, step_deg: f64) -> Self {
        self.step_deg = step_deg;
        self
    }
}

/// Minimization over a fixed angular grid of candidate directions.
///
/// O((360/step) · N) per event; the generic, expensive path.
#[derive(Clone, Debug)]
pub struct GridScan {
    config: GridScanConfig,
}

impl GridScan {
    /// Creates a grid scan with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when the step is not a positive number of
    /// degrees no larger than 360.
    pub fn new(config: GridScanConfig) -> Result<Self> {
        if !config.step_deg.is_finite() || config.step_deg <= 0.0 || config.step_deg > 360.0 {
            return Err(Error::Config(format!(
                "grid step must be in (0, 360] degrees, got {}",
                config.step_deg
            )));
        }
        Ok(Self { config })
    }

    /// Angular step in degrees.
    #[must_use]
    pub fn step_deg(&self) -> f64 {
        self.config.step_deg
    }

    /// Minimizes (Σ|n⊥·p|/ΣpT)² over the candidate grid.
    ///
    /// Returns the raw minimized ratio squared, before the π²/4 spherocity
    /// normalization. `None` when the event's total pT vanishes, so a
    /// degenerate buffer can never produce NaN.
    #[must_use]
    pub fn minimize(&self, buffer: &EventBuffer) -> Option<f64> {
        // The normalizer is angle independent; one pass, up front.
        let sum_pt = buffer.sum_pt();
        if sum_pt <= 0.0 {
            return None;
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let steps = (360.0 / self.config.step_deg).ceil() as usize;
        let mut min_ratio_sq = f64::INFINITY;
        for i in 0..steps {
            #[allow(clippy::cast_precision_loss)]
            let phi = (i as f64 * self.config.step_deg).to_radians();
            let nx = phi.cos();
            let ny = phi.sin();

            let mut projection = 0.0;
            for j in 0..buffer.len() {
                projection += (ny * buffer.px[j] - nx * buffer.py[j]).abs();
            }

            let ratio_sq = (projection / sum_pt).powi(2);
            if ratio_sq < min_ratio_sq {
                min_ratio_sq = ratio_sq;
            }
        }

        Some(min_ratio_sq)
    }
}

impl Default for GridScan {
    fn default() -> Self {
        Self {
            config: GridScanConfig::default(),
        }
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
    fn test_back_to_back_minimizes_to_zero() {
        let scan = GridScan::default();
        let buffer = buffer_of(&[(1.0, 0.0), (-1.0, 0.0)]);
        let ratio_sq = scan.minimize(&buffer).unwrap();
        assert_abs_diff_eq!(ratio_sq, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_empty_buffer_is_degenerate() {
        let scan = GridScan::default();
        assert!(scan.minimize(&EventBuffer::default()).is_none());
    }

    #[test]
    fn test_all_null_tracks_are_degenerate() {
        let scan = GridScan::default();
        let buffer = buffer_of(&[(0.0, 0.0), (0.0, 0.0)]);
        assert!(scan.minimize(&buffer).is_none());
    }

    #[test]
    fn test_rejects_degenerate_step() {
        assert!(GridScan::new(GridScanConfig::new().with_step_deg(0.0)).is_err());
        assert!(GridScan::new(GridScanConfig::new().with_step_deg(-1.0)).is_err());
        assert!(GridScan::new(GridScanConfig::new().with_step_deg(720.0)).is_err());
        assert!(GridScan::new(GridScanConfig::new().with_step_deg(f64::NAN)).is_err());
    }

    #[test]
    fn test_finer_step_never_increases_minimum() {
        let coarse = GridScan::new(GridScanConfig::new().with_step_deg(5.0)).unwrap();
        let fine = GridScan::new(GridScanConfig::new().with_step_deg(0.5)).unwrap();
        let buffer = buffer_of(&[(1.0, 0.3), (-0.4, 1.1), (0.2, -0.9)]);

        let coarse_min = coarse.minimize(&buffer).unwrap();
        let fine_min = fine.minimize(&buffer).unwrap();
        assert!(fine_min <= coarse_min + 1e-12);
    }
}
