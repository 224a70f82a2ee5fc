//! PilotGuru telemetry adapter
//!
//! Parses the three-file export of the PilotGuru driving recorder:
//! accelerations, rotations, and camera frame records, each with absolute
//! microsecond timestamps. The two sensor streams run at independent rates,
//! so the faster one is subsampled down to the slower cadence, and all
//! timestamps are rebased onto the first camera frame.

use serde::Deserialize;

use crate::error::ConvertError;
use crate::types::{NormalizedTelemetry, NS_PER_US, SEC_PER_US};

/// Driving-assistant export adapter
pub struct PilotGuruAdapter;

impl PilotGuruAdapter {
    /// Parse the three raw PilotGuru documents
    ///
    /// Output timestamps follow the subsampled faster stream; ties go to
    /// the accelerometer so the timestamp cadence stays on it whenever the
    /// rates match. The untouched slower stream is assumed to pair up
    /// one-to-one with the subsampled cadence; any surplus is dropped by
    /// the caller's equal-length clamp.
    pub fn parse(
        accel_json: &str,
        gyro_json: &str,
        frames_json: &str,
    ) -> Result<NormalizedTelemetry, ConvertError> {
        let accel_doc: AccelDocument =
            serde_json::from_str(accel_json).map_err(|e| ConvertError::MalformedInput(e.to_string()))?;
        let gyro_doc: GyroDocument =
            serde_json::from_str(gyro_json).map_err(|e| ConvertError::MalformedInput(e.to_string()))?;
        let frames_doc: FramesDocument =
            serde_json::from_str(frames_json).map_err(|e| ConvertError::MalformedInput(e.to_string()))?;

        // Camera time origin: output timestamps are relative to the first frame.
        let frames = &frames_doc.frames;
        if frames.len() < 2 {
            return Err(ConvertError::TooFewSamples {
                stream: "camera frame",
                needed: 2,
                got: frames.len(),
            });
        }
        let cam_t0 = frames[0].time_usec;
        let camera_fps = rate_hz(frames[0].time_usec, frames[1].time_usec, "camera frame")?;

        let accel_rate = stream_rate(&accel_doc.accelerations, "accelerometer")?;
        let gyro_rate = stream_rate(&gyro_doc.rotations, "gyroscope")?;

        let mut accelerometer = Vec::new();
        let mut gyroscope = Vec::new();
        let mut timestamps_ns = Vec::new();

        if accel_rate >= gyro_rate {
            let stride = (accel_rate / gyro_rate).round() as usize;
            for sample in accel_doc.accelerations.iter().step_by(stride.max(1)) {
                timestamps_ns.push((sample.time_usec - cam_t0) * NS_PER_US);
                accelerometer.push([sample.x, sample.y, sample.z]);
            }
            for sample in &gyro_doc.rotations {
                gyroscope.push([sample.x, sample.y, sample.z]);
            }
        } else {
            let stride = (gyro_rate / accel_rate).round() as usize;
            for sample in &accel_doc.accelerations {
                accelerometer.push([sample.x, sample.y, sample.z]);
            }
            for sample in gyro_doc.rotations.iter().step_by(stride.max(1)) {
                timestamps_ns.push((sample.time_usec - cam_t0) * NS_PER_US);
                gyroscope.push([sample.x, sample.y, sample.z]);
            }
        }

        Ok(NormalizedTelemetry {
            accelerometer,
            gyroscope,
            timestamps_ns,
            camera_fps,
        })
    }
}

/// Native rate of a sensor stream from its first two samples
fn stream_rate(samples: &[MotionSample], stream: &'static str) -> Result<f64, ConvertError> {
    if samples.len() < 2 {
        return Err(ConvertError::TooFewSamples {
            stream,
            needed: 2,
            got: samples.len(),
        });
    }
    rate_hz(samples[0].time_usec, samples[1].time_usec, stream)
}

fn rate_hz(t0_usec: f64, t1_usec: f64, stream: &'static str) -> Result<f64, ConvertError> {
    let delta_sec = (t1_usec - t0_usec) * SEC_PER_US;
    if delta_sec <= 0.0 {
        return Err(ConvertError::DegenerateTiming(format!(
            "{stream} stream has non-positive interval between first two records ({t0_usec} us, {t1_usec} us)"
        )));
    }
    Ok(1.0 / delta_sec)
}

// Raw document structures

#[derive(Debug, Deserialize)]
struct AccelDocument {
    accelerations: Vec<MotionSample>,
}

#[derive(Debug, Deserialize)]
struct GyroDocument {
    rotations: Vec<MotionSample>,
}

#[derive(Debug, Deserialize)]
struct MotionSample {
    time_usec: f64,
    x: f64,
    y: f64,
    z: f64,
}

#[derive(Debug, Deserialize)]
struct FramesDocument {
    frames: Vec<FrameRecord>,
}

#[derive(Debug, Deserialize)]
struct FrameRecord {
    time_usec: f64,
}
