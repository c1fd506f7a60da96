//! The spherocity engine: per-event accumulation, minimization, and
//! score bookkeeping.

use std::f64::consts::PI;

use evshape_core::error::Result;
use evshape_core::{EventBuffer, ScoreHistogram, TrackSample, DEFAULT_TRACK_CAPACITY};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::axes::TrackAxes;
use crate::grid::{GridScan, GridScanConfig, DEFAULT_GRID_STEP_DEG};

/// Sentinel returned when an event's spherocity is undefined
/// (multiplicity below threshold or a degenerate buffer).
pub const UNDEFINED_SCORE: f64 = -1.0;

/// Default minimum multiplicity below which events are not scored.
pub const DEFAULT_MIN_MULTIPLICITY: usize = 10;

/// Default number of bins in the score histogram.
pub const DEFAULT_SCORE_BINS: usize = 50;

/// Maps the raw minimized ratio squared onto [0, 1].
const SPHEROCITY_NORMALIZATION: f64 = PI * PI / 4.0;

/// Engine configuration.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EngineConfig {
    /// Minimum track multiplicity for a defined spherocity.
    pub min_multiplicity: usize,
    /// Number of bins in the score histogram over [0, 1].
    pub score_bins: usize,
    /// Angular step of the grid scan (degrees).
    pub grid_step_deg: f64,
    /// Track slots reserved in the event buffer.
    pub track_capacity: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            min_multiplicity: DEFAULT_MIN_MULTIPLICITY,
            score_bins: DEFAULT_SCORE_BINS,
            grid_step_deg: DEFAULT_GRID_STEP_DEG,
            track_capacity: DEFAULT_TRACK_CAPACITY,
        }
    }
}

impl EngineConfig {
    /// Creates a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the minimum multiplicity.
    #[must_use]
    pub fn with_min_multiplicity(mut self, n: usize) -> Self {
        self.min_multiplicity = n;
        self
    }

    /// Sets the score-histogram bin count.
    #[must_use]
    pub fn with_score_bins(mut self, bins: usize) -> Self {
        self.score_bins = bins;
        self
    }

    /// Sets the grid-scan angular step in degrees.
    #[must_use]
    pub fn with_grid_step_deg(mut self, step_deg: f64) -> Self {
        self.grid_step_deg = step_deg;
        self
    }

    /// Sets the buffer capacity reservation.
    #[must_use]
    pub fn with_track_capacity(mut self, capacity: usize) -> Self {
        self.track_capacity = capacity;
        self
    }
}

/// Computes transverse spherocity for one event at a time.
///
/// Lifecycle per event: [`reset`], zero or more [`add_track`] calls, then
/// one of the two scoring methods. Omitting the reset silently reuses the
/// previous event's samples; that is a caller precondition, not a
/// defended condition.
///
/// Every above-threshold score is also recorded into the engine's own
/// [`ScoreHistogram`], which lives as long as the engine and can be read
/// or merged at end of run.
///
/// [`reset`]: SpherocityEngine::reset
/// [`add_track`]: SpherocityEngine::add_track
#[derive(Clone, Debug)]
pub struct SpherocityEngine {
    min_multiplicity: usize,
    buffer: EventBuffer,
    grid: GridScan,
    axes: TrackAxes,
    histogram: ScoreHistogram,
    minimizing_index: Option<usize>,
}

impl SpherocityEngine {
    /// Creates an engine with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default()).expect("default configuration is valid")
    }

    /// Creates an engine with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for a zero score-bin count or a grid
    /// step outside (0, 360] degrees.
    pub fn with_config(config: EngineConfig) -> Result<Self> {
        let grid = GridScan::new(GridScanConfig::new().with_step_deg(config.grid_step_deg))?;
        let histogram = ScoreHistogram::new(config.score_bins, 0.0, 1.0)?;
        Ok(Self {
            min_multiplicity: config.min_multiplicity,
            buffer: EventBuffer::with_capacity(config.track_capacity),
            grid,
            axes: TrackAxes,
            histogram,
            minimizing_index: None,
        })
    }

    /// Sets the minimum multiplicity used by both scoring methods.
    /// A threshold of 0 disables the gate.
    pub fn set_minimum_multiplicity(&mut self, n: usize) {
        self.min_multiplicity = n;
    }

    /// Current minimum multiplicity.
    #[must_use]
    pub fn minimum_multiplicity(&self) -> usize {
        self.min_multiplicity
    }

    /// Clears the event buffer. Call once per event, before any add.
    pub fn reset(&mut self) {
        self.buffer.reset();
    }

    /// Appends one track's transverse-momentum components.
    ///
    /// No selection is applied here; callers decide which particles
    /// qualify (charge, final state, pseudorapidity) before adding.
    pub fn add_track(&mut self, px: f64, py: f64) {
        self.buffer.push(px, py);
    }

    /// Appends one track normalized to unit pT, keeping only its
    /// direction. Decouples the shape observable from the momentum
    /// spectrum. Returns `false` (appending nothing) for a null vector.
    pub fn add_unit_track(&mut self, px: f64, py: f64) -> bool {
        match TrackSample::new(px, py).unit() {
            Some(unit) => {
                self.buffer.push_sample(unit);
                true
            }
            None => false,
        }
    }

    /// Number of tracks accumulated for the current event.
    #[must_use]
    pub fn track_count(&self) -> usize {
        self.buffer.len()
    }

    /// The current event's buffer.
    #[must_use]
    pub fn buffer(&self) -> &EventBuffer {
        &self.buffer
    }

    /// Transverse spherocity of the current event via the grid scan.
    ///
    /// Returns [`UNDEFINED_SCORE`] for a below-threshold or degenerate
    /// event (no histogram entry is made); otherwise a value in [0, 1]
    /// that has also been recorded into the score histogram.
    pub fn spherocity(&mut self) -> f64 {
        if self.buffer.len() < self.min_multiplicity {
            return UNDEFINED_SCORE;
        }
        match self.grid.minimize(&self.buffer) {
            Some(ratio_sq) => self.record(ratio_sq * SPHEROCITY_NORMALIZATION),
            None => UNDEFINED_SCORE,
        }
    }

    /// Transverse spherocity via the track-restricted strategy.
    ///
    /// Same contract as [`spherocity`], with the minimizing track's
    /// buffer index additionally exposed through
    /// [`minimizing_track_index`].
    ///
    /// [`spherocity`]: SpherocityEngine::spherocity
    /// [`minimizing_track_index`]: SpherocityEngine::minimizing_track_index
    pub fn spherocity_from_track_axes(&mut self) -> f64 {
        if self.buffer.len() < self.min_multiplicity {
            return UNDEFINED_SCORE;
        }
        match self.axes.minimize(&self.buffer) {
            Some(min) => {
                self.minimizing_index = Some(min.track_index);
                self.record(min.ratio_sq * SPHEROCITY_NORMALIZATION)
            }
            None => UNDEFINED_SCORE,
        }
    }

    /// Buffer index of the track whose direction minimized the last
    /// track-restricted scoring call; `None` before the first such call.
    ///
    /// Stale if the track-restricted method was not invoked for the
    /// current event; callers must not read it in that case.
    #[must_use]
    pub fn minimizing_track_index(&self) -> Option<usize> {
        self.minimizing_index
    }

    /// The accumulated score distribution.
    #[must_use]
    pub fn histogram(&self) -> &ScoreHistogram {
        &self.histogram
    }

    fn record(&mut self, score: f64) -> f64 {
        self.histogram.fill(score);
        score
    }
}

impl Default for SpherocityEngine {
    fn default() -> Self {
        Self::new()
    }
}
