//! GoPro telemetry adapter
//!
//! Parses the JSON export of a GoPro metadata extractor (one document with
//! ACCL/GYRO streams under device "1") and maps it to normalized telemetry.

use serde::Deserialize;

use crate::error::ConvertError;
use crate::types::{NormalizedTelemetry, NS_PER_MS};

/// Action-camera export adapter
pub struct GoProAdapter;

impl GoProAdapter {
    /// Parse a raw GoPro telemetry document
    ///
    /// Timestamps come from the accelerometer stream (`cts` milliseconds,
    /// relative to the camera's own origin). The gyroscope stream is
    /// cadence-matched by the source, so no resampling happens here.
    pub fn parse(raw_json: &str) -> Result<NormalizedTelemetry, ConvertError> {
        let doc: GoProDocument =
            serde_json::from_str(raw_json).map_err(|e| ConvertError::MalformedInput(e.to_string()))?;

        let streams = doc.device.streams;
        let mut accelerometer = Vec::with_capacity(streams.accl.samples.len());
        let mut timestamps_ns = Vec::with_capacity(streams.accl.samples.len());
        for sample in &streams.accl.samples {
            timestamps_ns.push(sample.cts * NS_PER_MS);
            accelerometer.push(reorder_axes(sample.value));
        }

        let gyroscope = streams
            .gyro
            .samples
            .iter()
            .map(|sample| reorder_axes(sample.value))
            .collect();

        Ok(NormalizedTelemetry {
            accelerometer,
            gyroscope,
            timestamps_ns,
            camera_fps: doc.frames_per_second,
        })
    }
}

/// GoPro stores the triple in (z, x, y) order; canonical is (x, y, z)
fn reorder_axes(value: [f64; 3]) -> [f64; 3] {
    [value[1], value[2], value[0]]
}

// Raw document structures

#[derive(Debug, Deserialize)]
struct GoProDocument {
    #[serde(rename = "1")]
    device: GoProDevice,
    #[serde(rename = "frames/second")]
    frames_per_second: f64,
}

#[derive(Debug, Deserialize)]
struct GoProDevice {
    streams: GoProStreams,
}

#[derive(Debug, Deserialize)]
struct GoProStreams {
    #[serde(rename = "ACCL")]
    accl: GoProStream,
    #[serde(rename = "GYRO")]
    gyro: GoProStream,
}

#[derive(Debug, Deserialize)]
struct GoProStream {
    samples: Vec<GoProSample>,
}

#[derive(Debug, Deserialize)]
struct GoProSample {
    cts: f64,
    value: [f64; 3],
}
