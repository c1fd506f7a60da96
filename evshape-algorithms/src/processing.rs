//! High-level helpers that score whole runs of events.

use rayon::prelude::*;

use evshape_core::error::Result;
use evshape_core::{ScoreHistogram, TrackSample};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::engine::{EngineConfig, SpherocityEngine};

/// Strategy used to pick candidate minimization directions.
///
/// Both strategies share one result contract (sentinel or a score in
/// [0, 1]); their numerical agreement is deliberately not assumed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SpherocityMethod {
    /// Fixed angular grid of candidate directions.
    GridScan,
    /// Candidate directions restricted to the tracks' own unit vectors.
    TrackAxes,
}

fn score_event(
    engine: &mut SpherocityEngine,
    event: &[TrackSample],
    method: SpherocityMethod,
) -> f64 {
    engine.reset();
    for sample in event {
        engine.add_track(sample.px, sample.py);
    }
    match method {
        SpherocityMethod::GridScan => engine.spherocity(),
        SpherocityMethod::TrackAxes => engine.spherocity_from_track_axes(),
    }
}

/// Scores every event with one engine, returning one value per event in
/// input order. Below-threshold events carry the sentinel.
///
/// # Errors
///
/// Returns an error for an invalid engine configuration.
pub fn event_scores(
    events: &[Vec<TrackSample>],
    method: SpherocityMethod,
    config: &EngineConfig,
) -> Result<Vec<f64>> {
    let mut engine = SpherocityEngine::with_config(config.clone())?;
    Ok(events
        .iter()
        .map(|event| score_event(&mut engine, event, method))
        .collect())
}

/// Accumulates the score spectrum over all events in parallel.
///
/// Each rayon worker gets a private engine (buffer and histogram); the
/// per-worker histograms are merged once at the end. No engine is ever
/// shared across threads.
///
/// # Errors
///
/// Returns an error for an invalid engine configuration.
pub fn score_spectrum(
    events: &[Vec<TrackSample>],
    method: SpherocityMethod,
    config: &EngineConfig,
) -> Result<ScoreHistogram> {
    let prototype = SpherocityEngine::with_config(config.clone())?;
    let empty = prototype.histogram().clone();

    events
        .par_iter()
        .fold(
            || prototype.clone(),
            |mut engine, event| {
                score_event(&mut engine, event, method);
                engine
            },
        )
        .map(|engine| Ok(engine.histogram().clone()))
        .try_reduce(
            || empty.clone(),
            |mut merged, worker| {
                merged.merge(&worker)?;
                Ok(merged)
            },
        )
}
