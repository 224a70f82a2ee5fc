//! Source schema adapters
//!
//! One adapter per supported telemetry export. Each parses the raw JSON
//! document(s) of its schema and maps them to a [`NormalizedTelemetry`]
//! value: canonical axis order, nanosecond timestamps on the accelerometer
//! cadence, and a camera frame rate.
//!
//! [`NormalizedTelemetry`]: crate::types::NormalizedTelemetry

mod generic;
mod gopro;
mod pilotguru;

pub use generic::GenericAdapter;
pub use gopro::GoProAdapter;
pub use pilotguru::PilotGuruAdapter;
