//! Core types for normalized motion telemetry
//!
//! This module defines the single document shape every source schema is
//! converted into, plus the stream-level rules (edge trimming, equal-length
//! clamping) shared by all import paths.

use serde::{Deserialize, Serialize};

use crate::error::ConvertError;

/// Nanoseconds per second
pub const NS_PER_SEC: f64 = 1e9;
/// Nanoseconds per millisecond
pub const NS_PER_MS: f64 = 1e6;
/// Nanoseconds per microsecond
pub const NS_PER_US: f64 = 1e3;
/// Seconds per microsecond
pub const SEC_PER_US: f64 = 1e-6;

/// Source schema identifier for provenance tracking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceFormat {
    GoPro,
    PilotGuru,
    Generic,
}

impl SourceFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceFormat::GoPro => "gopro",
            SourceFormat::PilotGuru => "pilotguru",
            SourceFormat::Generic => "generic",
        }
    }
}

/// Normalized telemetry - schema-agnostic representation of aligned
/// accelerometer, gyroscope, and timestamp streams
///
/// Axis order is canonical (x, y, z); timestamps are nanoseconds on the
/// accelerometer cadence, relative to the camera time origin for sources
/// that provide one. The three sequences are equal-length after every
/// normalization step.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NormalizedTelemetry {
    /// Accelerometer samples, one (x, y, z) triple per timestamp
    pub accelerometer: Vec<[f64; 3]>,
    /// Gyroscope samples, one (x, y, z) triple per timestamp
    pub gyroscope: Vec<[f64; 3]>,
    /// Sample timestamps in nanoseconds, non-decreasing
    pub timestamps_ns: Vec<f64>,
    /// Frame rate of the associated video
    pub camera_fps: f64,
}

impl NormalizedTelemetry {
    /// Number of aligned samples
    pub fn len(&self) -> usize {
        self.timestamps_ns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps_ns.is_empty()
    }

    /// Recording duration in seconds, `None` for fewer than two samples
    pub fn duration_seconds(&self) -> Option<f64> {
        match self.timestamps_ns.as_slice() {
            [first, .., last] => Some((last - first) / NS_PER_SEC),
            _ => None,
        }
    }

    /// Native sample rate in Hz, derived from the first inter-sample interval
    pub fn sample_rate_hz(&self) -> Option<f64> {
        let ds = self.sample_interval_ns()?;
        Some(NS_PER_SEC / ds)
    }

    /// First inter-sample interval in nanoseconds, `None` unless positive
    fn sample_interval_ns(&self) -> Option<f64> {
        match self.timestamps_ns.as_slice() {
            [first, second, ..] if second - first > 0.0 => Some(second - first),
            _ => None,
        }
    }

    /// Remove `skip_seconds` worth of samples from both ends of all three
    /// streams
    ///
    /// The sample count to drop is `round(skip / ds)` where `ds` is the
    /// interval between the first two timestamps, so non-uniform spacing
    /// trims approximately. A trim longer than the stream clamps to empty
    /// sequences rather than inverting.
    pub fn trim_seconds(&mut self, skip_seconds: f64) -> Result<(), ConvertError> {
        if self.timestamps_ns.len() < 2 {
            return Err(ConvertError::TooFewSamples {
                stream: "timestamp",
                needed: 2,
                got: self.timestamps_ns.len(),
            });
        }
        let ds = self.sample_interval_ns().ok_or_else(|| {
            ConvertError::DegenerateTiming(format!(
                "non-positive interval between first two timestamps ({} ns, {} ns)",
                self.timestamps_ns[0], self.timestamps_ns[1]
            ))
        })?;

        let skip_ns = skip_seconds * NS_PER_SEC;
        let nr_remove = (skip_ns / ds).round() as usize;

        // Window bounds come from the timestamp sequence so every stream is
        // cut identically even if their raw lengths disagree.
        let end = self.timestamps_ns.len().saturating_sub(nr_remove);
        self.accelerometer = window(&self.accelerometer, nr_remove, end);
        self.gyroscope = window(&self.gyroscope, nr_remove, end);
        self.timestamps_ns = window(&self.timestamps_ns, nr_remove, end);
        Ok(())
    }

    /// Truncate all three streams to the shortest, finalizing the
    /// equal-length invariant
    pub fn clamp_equal_len(&mut self) {
        let n = self
            .timestamps_ns
            .len()
            .min(self.accelerometer.len())
            .min(self.gyroscope.len());
        self.accelerometer.truncate(n);
        self.gyroscope.truncate(n);
        self.timestamps_ns.truncate(n);
    }
}

fn window<T: Clone>(values: &[T], start: usize, end: usize) -> Vec<T> {
    let end = end.min(values.len());
    if start >= end {
        Vec::new()
    } else {
        values[start..end].to_vec()
    }
}
