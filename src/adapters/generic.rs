//! Generic normalized-schema adapter
//!
//! The generic schema is this tool's own output format, so import is a
//! verbatim copy: no unit conversion, no resampling, no axis reordering.

use crate::error::ConvertError;
use crate::types::NormalizedTelemetry;

/// Pass-through adapter for already-normalized documents
pub struct GenericAdapter;

impl GenericAdapter {
    pub fn parse(raw_json: &str) -> Result<NormalizedTelemetry, ConvertError> {
        serde_json::from_str(raw_json).map_err(|e| ConvertError::MalformedInput(e.to_string()))
    }
}
