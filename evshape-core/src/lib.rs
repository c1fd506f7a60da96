//! evshape-core: Core types for collision event-shape analysis.
//!
//! This crate provides the foundational types for transverse event-shape
//! observables: per-track momentum samples, the per-event track buffer,
//! and the score histogram.
//!

pub mod buffer;
pub mod error;
pub mod histogram;
pub mod track;

pub use buffer::{EventBuffer, DEFAULT_TRACK_CAPACITY};
pub use error::{Error, Result};
pub use histogram::ScoreHistogram;
pub use track::TrackSample;
