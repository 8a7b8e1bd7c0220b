//! Parameter descriptions for the noise analysis monitor.
//!
//! The analyzer receives its thresholds as untracked parameters with a fixed
//! wire type. Untracked parameters do not enter the job's provenance record,
//! so changing them does not change the identity of the produced data.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::noise::{
    NoiseAnalysisConfig, DEFAULT_DO_SYNCH_NOISE, DEFAULT_MAX_SYNCH_NOISE_RATE,
    DEFAULT_NOISY_CELL_DEF, DEFAULT_N_EVENTS_CERT,
};

/// Wire type of a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterKind {
    Int32,
    Bool,
    Double,
}

impl fmt::Display for ParameterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParameterKind::Int32 => write!(f, "int32"),
            ParameterKind::Bool => write!(f, "bool"),
            ParameterKind::Double => write!(f, "double"),
        }
    }
}

/// A typed parameter value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParameterValue {
    Int32(i32),
    Bool(bool),
    Double(f64),
}

impl ParameterValue {
    pub fn kind(&self) -> ParameterKind {
        match self {
            ParameterValue::Int32(_) => ParameterKind::Int32,
            ParameterValue::Bool(_) => ParameterKind::Bool,
            ParameterValue::Double(_) => ParameterKind::Double,
        }
    }
}

impl fmt::Display for ParameterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParameterValue::Int32(v) => write!(f, "{v}"),
            ParameterValue::Bool(v) => write!(f, "{v}"),
            ParameterValue::Double(v) => write!(f, "{v}"),
        }
    }
}

/// Static description of one analyzer parameter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParameterDescription {
    pub name: &'static str,
    pub kind: ParameterKind,
    pub default: ParameterValue,
    /// Tracked parameters are part of the job's provenance; these are not.
    pub tracked: bool,
    pub comment: &'static str,
}

impl NoiseAnalysisConfig {
    /// Describe every parameter in declaration order.
    pub fn describe() -> [ParameterDescription; 4] {
        [
            ParameterDescription {
                name: "noisyCellDef",
                kind: ParameterKind::Int32,
                default: ParameterValue::Int32(int32(DEFAULT_NOISY_CELL_DEF)),
                tracked: false,
                comment: "hit-count threshold above which a cell is noisy",
            },
            ParameterDescription {
                name: "doSynchNoise",
                kind: ParameterKind::Bool,
                default: ParameterValue::Bool(DEFAULT_DO_SYNCH_NOISE),
                tracked: false,
                comment: "enable the synchronous-noise detection pass",
            },
            ParameterDescription {
                name: "maxSynchNoiseRate",
                kind: ParameterKind::Double,
                default: ParameterValue::Double(DEFAULT_MAX_SYNCH_NOISE_RATE),
                tracked: false,
                comment: "upper bound on the synchronous-noise rate, in [0, 1]",
            },
            ParameterDescription {
                name: "nEventsCert",
                kind: ParameterKind::Int32,
                default: ParameterValue::Int32(int32(DEFAULT_N_EVENTS_CERT)),
                tracked: false,
                comment: "minimum event count before certification",
            },
        ]
    }

    /// Effective parameter values in declaration order.
    pub fn parameters(&self) -> Vec<(&'static str, ParameterValue)> {
        vec![
            (
                "noisyCellDef",
                ParameterValue::Int32(int32(self.noisy_cell_def())),
            ),
            ("doSynchNoise", ParameterValue::Bool(self.do_synch_noise())),
            (
                "maxSynchNoiseRate",
                ParameterValue::Double(self.max_synch_noise_rate()),
            ),
            (
                "nEventsCert",
                ParameterValue::Int32(int32(self.n_events_cert())),
            ),
        ]
    }
}

// Construction already bounds integers to the int32 range.
fn int32(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}
