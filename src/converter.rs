//! Conversion orchestration
//!
//! Thin layer over [`TelemetrySource::import`]: run one import, serialize
//! the result, persist it. The document is serialized fully in memory
//! before the output path is touched, so a failing conversion never leaves
//! a partial file behind. Parent directories are not created; a missing
//! target directory surfaces as [`ConvertError::Write`].

use std::fs;
use std::path::Path;

use crate::error::ConvertError;
use crate::source::TelemetrySource;
use crate::types::NormalizedTelemetry;

/// Import from `source`, trim by `skip_seconds`, and write the normalized
/// JSON document to `output_path`
///
/// Overwrites `output_path` unconditionally on success.
pub fn convert(
    source: &TelemetrySource,
    output_path: impl AsRef<Path>,
    skip_seconds: f64,
) -> Result<(), ConvertError> {
    let telemetry = source.import(skip_seconds)?;
    write_document(&telemetry, output_path.as_ref())
}

/// Convert a single-file action-camera export
pub fn convert_gopro_file(
    input_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
    skip_seconds: f64,
) -> Result<(), ConvertError> {
    let source = TelemetrySource::GoPro {
        telemetry: input_path.as_ref().to_path_buf(),
    };
    convert(&source, output_path, skip_seconds)
}

/// Convert a three-file driving-recorder export
pub fn convert_pilotguru_file(
    accel_path: impl AsRef<Path>,
    gyro_path: impl AsRef<Path>,
    camera_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
    skip_seconds: f64,
) -> Result<(), ConvertError> {
    let source = TelemetrySource::PilotGuru {
        accelerations: accel_path.as_ref().to_path_buf(),
        rotations: gyro_path.as_ref().to_path_buf(),
        frames: camera_path.as_ref().to_path_buf(),
    };
    convert(&source, output_path, skip_seconds)
}

/// Re-emit an already-normalized document, optionally trimming it
pub fn convert_generic_file(
    input_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
    skip_seconds: f64,
) -> Result<(), ConvertError> {
    let source = TelemetrySource::Generic {
        telemetry: input_path.as_ref().to_path_buf(),
    };
    convert(&source, output_path, skip_seconds)
}

fn write_document(telemetry: &NormalizedTelemetry, path: &Path) -> Result<(), ConvertError> {
    let json = serde_json::to_string(telemetry)?;
    fs::write(path, json).map_err(|source| ConvertError::Write {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::GenericAdapter;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    fn gopro_document() -> String {
        let samples: Vec<String> = (0..10)
            .map(|i| format!(r#"{{"cts": {}, "value": [1.0, 2.0, 3.0]}}"#, i * 10))
            .collect();
        let samples = samples.join(",");
        format!(
            r#"{{"1": {{"streams": {{"ACCL": {{"samples": [{samples}]}}, "GYRO": {{"samples": [{samples}]}}}}}}, "frames/second": 30.0}}"#
        )
    }

    #[test]
    fn gopro_conversion_round_trips_through_generic_import() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("gopro.json");
        let output = dir.path().join("normalized.json");
        fs::write(&input, gopro_document()).unwrap();

        convert_gopro_file(&input, &output, 0.0).unwrap();

        let first_pass = TelemetrySource::GoPro {
            telemetry: input.clone(),
        }
        .import(0.0)
        .unwrap();
        let reimported = GenericAdapter::parse(&fs::read_to_string(&output).unwrap()).unwrap();

        assert_eq!(reimported, first_pass);
        assert_eq!(reimported.len(), 10);
        assert_eq!(reimported.accelerometer[0], [2.0, 3.0, 1.0]);
    }

    #[test]
    fn generic_conversion_with_zero_trim_is_identity() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.json");
        let output = dir.path().join("out.json");

        let original = NormalizedTelemetry {
            accelerometer: vec![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]],
            gyroscope: vec![[0.1, 0.2, 0.3], [0.4, 0.5, 0.6]],
            timestamps_ns: vec![0.0, 5_000_000.0],
            camera_fps: 24.0,
        };
        fs::write(&input, serde_json::to_string(&original).unwrap()).unwrap();

        convert_generic_file(&input, &output, 0.0).unwrap();

        let reimported = GenericAdapter::parse(&fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(reimported, original);
    }

    #[test]
    fn missing_output_directory_is_a_write_error() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("gopro.json");
        fs::write(&input, gopro_document()).unwrap();

        let output = dir.path().join("no-such-dir").join("out.json");
        let err = convert_gopro_file(&input, &output, 0.0).unwrap_err();

        match err {
            ConvertError::Write { path, .. } => assert_eq!(path, output),
            other => panic!("expected Write, got {other:?}"),
        }
    }

    #[test]
    fn failed_import_leaves_no_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.json");

        let err = convert_gopro_file(PathBuf::from("/nonexistent.json"), &output, 0.0).unwrap_err();
        assert!(matches!(err, ConvertError::Read { .. }));
        assert!(!output.exists());
    }
}
