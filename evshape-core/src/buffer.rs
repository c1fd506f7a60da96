//! Per-event track buffer in Structure of Arrays (`SoA`) layout.
//!
//! Momentum components are stored in parallel `Vec<f64>` columns rather
//! than an array of structs, so the minimization inner loops stream two
//! contiguous arrays.

use crate::track::TrackSample;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default number of track slots reserved per event buffer.
pub const DEFAULT_TRACK_CAPACITY: usize = 10_000;

/// An ordered, index-addressed sequence of per-event track samples.
///
/// The buffer grows on push and never fails; `reset` drops the logical
/// length to zero while keeping the allocation, so steady-state event
/// processing does not reallocate.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EventBuffer {
    /// Columnar storage for px components.
    pub px: Vec<f64>,
    /// Columnar storage for py components.
    pub py: Vec<f64>,
}

impl EventBuffer {
    /// Creates an empty buffer with the default capacity reservation.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_TRACK_CAPACITY)
    }

    /// Creates an empty buffer with the specified capacity reservation.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            px: Vec::with_capacity(capacity),
            py: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of samples in the buffer.
    #[must_use]
    pub fn len(&self) -> usize {
        self.px.len()
    }

    /// Returns true if the buffer holds no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.px.is_empty()
    }

    /// Clears the logical contents; the allocation is retained.
    pub fn reset(&mut self) {
        self.px.clear();
        self.py.clear();
    }

    /// Appends one sample from its momentum components.
    pub fn push(&mut self, px: f64, py: f64) {
        self.px.push(px);
        self.py.push(py);
    }

    /// Appends one sample.
    pub fn push_sample(&mut self, sample: TrackSample) {
        self.push(sample.px, sample.py);
    }

    /// Returns the sample at `index`, or `None` past the logical length.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<TrackSample> {
        if index < self.len() {
            Some(TrackSample::new(self.px[index], self.py[index]))
        } else {
            None
        }
    }

    /// Iterates over the samples in insertion order.
    pub fn samples(&self) -> impl Iterator<Item = TrackSample> + '_ {
        self.px
            .iter()
            .zip(self.py.iter())
            .map(|(&px, &py)| TrackSample::new(px, py))
    }

    /// Sum of transverse-momentum magnitudes over all samples.
    #[must_use]
    pub fn sum_pt(&self) -> f64 {
        self.samples().map(|s| s.pt()).sum()
    }
}

impl FromIterator<TrackSample> for EventBuffer {
    fn from_iter<I: IntoIterator<Item = TrackSample>>(iter: I) -> Self {
        let mut buffer = Self::default();
        for sample in iter {
            buffer.push_sample(sample);
        }
        buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_buffer_operations() {
        let mut buffer = EventBuffer::with_capacity(4);
        assert!(buffer.is_empty());

        buffer.push(1.0, 0.0);
        buffer.push(0.0, -2.0);
        assert_eq!(buffer.len(), 2);
        assert_eq!(buffer.get(1), Some(TrackSample::new(0.0, -2.0)));
        assert_eq!(buffer.get(2), None);

        buffer.reset();
        assert!(buffer.is_empty());
        assert_eq!(buffer.len(), 0);
    }

    #[test]
    fn test_reset_keeps_allocation() {
        let mut buffer = EventBuffer::with_capacity(8);
        for i in 0..8 {
            buffer.push(f64::from(i), 0.0);
        }
        let capacity = buffer.px.capacity();
        buffer.reset();
        assert_eq!(buffer.px.capacity(), capacity);
    }

    #[test]
    fn test_sum_pt() {
        let buffer: EventBuffer = [TrackSample::new(3.0, 4.0), TrackSample::new(-1.0, 0.0)]
            .into_iter()
            .collect();
        assert_relative_eq!(buffer.sum_pt(), 6.0);
    }

    #[test]
    fn test_grows_past_reservation() {
        let mut buffer = EventBuffer::with_capacity(2);
        for i in 0..100 {
            buffer.push(f64::from(i), f64::from(i));
        }
        assert_eq!(buffer.len(), 100);
        assert_eq!(buffer.get(99), Some(TrackSample::new(99.0, 99.0)));
    }
}
