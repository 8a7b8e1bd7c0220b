//! JSON Schema for override files.

use schemars::schema_for;

use crate::noise::NoiseAnalysisOverrides;

/// JSON Schema describing the override file format.
pub fn override_schema() -> serde_json::Value {
    schema_for!(NoiseAnalysisOverrides).to_value()
}
