//! evshape-algorithms: Event-shape algorithms for collision events.
//!
//! This crate provides the transverse-spherocity engine and its two
//! minimization strategies:
//! - **Grid scan** - fixed angular grid of candidate directions, O(360/s · N)
//! - **Track axes** - candidate directions from the tracks themselves, O(N²)
//!
//! plus azimuthal event-activity classification and parallel multi-event
//! helpers.
//!
#![warn(missing_docs)]

mod activity;
mod axes;
mod engine;
mod grid;
mod processing;

pub use activity::{
    delta_phi, ActivityClassifier, AzimuthalRegion, LeadingTrack, DEFAULT_PT_LEAD_CUT,
};
pub use axes::{AxisMinimum, TrackAxes};
pub use engine::{
    EngineConfig, SpherocityEngine, DEFAULT_MIN_MULTIPLICITY, DEFAULT_SCORE_BINS, UNDEFINED_SCORE,
};
pub use grid::{GridScan, GridScanConfig, DEFAULT_GRID_STEP_DEG};
pub use processing::{event_scores, score_spectrum, SpherocityMethod};

// Re-export core types
pub use evshape_core::{EventBuffer, ScoreHistogram, TrackSample};
