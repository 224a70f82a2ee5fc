//! Telemetry source dispatch
//!
//! [`TelemetrySource`] is the closed set of supported input schemas, each
//! variant holding the file path(s) that schema needs. Importing reads the
//! document(s), hands them to the matching adapter, applies the optional
//! edge trim, and finalizes the equal-length invariant. Every call returns
//! an owned [`NormalizedTelemetry`]; nothing is cached between calls.

use std::fs;
use std::path::{Path, PathBuf};

use crate::adapters::{GenericAdapter, GoProAdapter, PilotGuruAdapter};
use crate::error::ConvertError;
use crate::types::{NormalizedTelemetry, SourceFormat};

/// One supported input schema plus the paths to its document(s)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TelemetrySource {
    /// Single-document action-camera export
    GoPro { telemetry: PathBuf },
    /// Three-document driving-recorder export
    PilotGuru {
        accelerations: PathBuf,
        rotations: PathBuf,
        frames: PathBuf,
    },
    /// Already-normalized document (this tool's own output schema)
    Generic { telemetry: PathBuf },
}

impl TelemetrySource {
    pub fn format(&self) -> SourceFormat {
        match self {
            TelemetrySource::GoPro { .. } => SourceFormat::GoPro,
            TelemetrySource::PilotGuru { .. } => SourceFormat::PilotGuru,
            TelemetrySource::Generic { .. } => SourceFormat::Generic,
        }
    }

    /// Read, normalize, and optionally trim this source
    ///
    /// `skip_seconds` cuts that duration from both ends of every stream;
    /// `0.0` skips the trim path entirely.
    pub fn import(&self, skip_seconds: f64) -> Result<NormalizedTelemetry, ConvertError> {
        let mut telemetry = match self {
            TelemetrySource::GoPro { telemetry } => {
                GoProAdapter::parse(&read_document(telemetry)?)?
            }
            TelemetrySource::PilotGuru {
                accelerations,
                rotations,
                frames,
            } => PilotGuruAdapter::parse(
                &read_document(accelerations)?,
                &read_document(rotations)?,
                &read_document(frames)?,
            )?,
            TelemetrySource::Generic { telemetry } => {
                GenericAdapter::parse(&read_document(telemetry)?)?
            }
        };

        if skip_seconds != 0.0 {
            telemetry.trim_seconds(skip_seconds)?;
        }
        telemetry.clamp_equal_len();
        Ok(telemetry)
    }
}

fn read_document(path: &Path) -> Result<String, ConvertError> {
    fs::read_to_string(path).map_err(|source| ConvertError::Read {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    fn write_temp(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    fn gopro_document() -> String {
        let samples: Vec<String> = (0..10)
            .map(|i| format!(r#"{{"cts": {}, "value": [0.0, 1.0, 2.0]}}"#, i * 10))
            .collect();
        let samples = samples.join(",");
        format!(
            r#"{{"1": {{"streams": {{"ACCL": {{"samples": [{samples}]}}, "GYRO": {{"samples": [{samples}]}}}}}}, "frames/second": 30.0}}"#
        )
    }

    #[test]
    fn gopro_import_without_trim() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(&dir, "telemetry.json", &gopro_document());

        let source = TelemetrySource::GoPro { telemetry: path };
        let telemetry = source.import(0.0).unwrap();

        assert_eq!(telemetry.len(), 10);
        assert_eq!(telemetry.accelerometer.len(), 10);
        assert_eq!(telemetry.gyroscope.len(), 10);
        let expected_ts: Vec<f64> = (0..10).map(|i| i as f64 * 10_000_000.0).collect();
        assert_eq!(telemetry.timestamps_ns, expected_ts);
        assert_eq!(telemetry.camera_fps, 30.0);
    }

    #[test]
    fn gopro_import_trims_one_interval_per_end() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(&dir, "telemetry.json", &gopro_document());

        let source = TelemetrySource::GoPro { telemetry: path };
        let telemetry = source.import(0.01).unwrap();

        assert_eq!(telemetry.len(), 8);
        assert_eq!(telemetry.timestamps_ns[0], 10_000_000.0);
        assert_eq!(*telemetry.timestamps_ns.last().unwrap(), 80_000_000.0);
        assert_eq!(telemetry.accelerometer.len(), 8);
        assert_eq!(telemetry.gyroscope.len(), 8);
    }

    #[test]
    fn missing_file_reports_read_error_with_path() {
        let source = TelemetrySource::Generic {
            telemetry: PathBuf::from("/nonexistent/telemetry.json"),
        };

        let err = source.import(0.0).unwrap_err();
        match err {
            ConvertError::Read { path, .. } => {
                assert_eq!(path, PathBuf::from("/nonexistent/telemetry.json"))
            }
            other => panic!("expected Read, got {other:?}"),
        }
    }

    #[test]
    fn format_matches_variant() {
        let source = TelemetrySource::PilotGuru {
            accelerations: PathBuf::from("a.json"),
            rotations: PathBuf::from("g.json"),
            frames: PathBuf::from("f.json"),
        };
        assert_eq!(source.format(), SourceFormat::PilotGuru);
        assert_eq!(source.format().as_str(), "pilotguru");
    }
}
