//! imufuse - motion-sensor telemetry normalization
//!
//! Converts camera-coupled IMU logs (accelerometer, gyroscope, timestamps,
//! frame rate) from several third-party JSON exports into one normalized
//! document: canonical axis order, nanosecond timestamps on the
//! accelerometer cadence, equal-length streams, optional edge trimming.
//!
//! ## Supported sources
//!
//! - **GoPro**: single-document action-camera metadata export
//! - **PilotGuru**: three-document driving-recorder export
//! - **Generic**: this tool's own output schema, for round-trips

pub mod adapters;
pub mod converter;
pub mod error;
pub mod source;
pub mod types;

pub use converter::{convert, convert_generic_file, convert_gopro_file, convert_pilotguru_file};
pub use error::ConvertError;
pub use source::TelemetrySource;
pub use types::{NormalizedTelemetry, SourceFormat};

/// Crate version embedded in the CLI
pub const IMUFUSE_VERSION: &str = env!("CARGO_PKG_VERSION");
