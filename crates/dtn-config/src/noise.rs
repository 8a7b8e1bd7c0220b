//! Noise analysis parameter record.
//!
//! [`NoiseAnalysisConfig`] holds the four thresholds consumed by the DT noise
//! analysis monitor. It can only be obtained through validation, either from
//! [`NoiseAnalysisConfig::default`] or from a [`NoiseAnalysisOverrides`] set
//! where every omitted field takes its documented default. Fields are private
//! and there are no setters: once built, the record is read-only.

use dtn_common::{Error, Result};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Default hit-count threshold above which a cell is noisy.
pub const DEFAULT_NOISY_CELL_DEF: u32 = 500;

/// Synchronous-noise pass is disabled unless requested.
pub const DEFAULT_DO_SYNCH_NOISE: bool = false;

/// Default upper bound on the synchronous-noise rate.
pub const DEFAULT_MAX_SYNCH_NOISE_RATE: f64 = 0.001;

/// Default minimum event count before certification.
pub const DEFAULT_N_EVENTS_CERT: u32 = 1000;

/// Validated, immutable noise analysis parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "NoiseAnalysisOverrides")]
pub struct NoiseAnalysisConfig {
    noisy_cell_def: u32,
    do_synch_noise: bool,
    max_synch_noise_rate: f64,
    n_events_cert: u32,
}

impl NoiseAnalysisConfig {
    /// Build a config from overrides, filling omitted fields with defaults.
    ///
    /// Fails with [`Error::InvalidConfiguration`] when `maxSynchNoiseRate` is
    /// outside [0, 1], `nEventsCert` is not positive, `noisyCellDef` is
    /// negative, or an integer does not fit in 32 bits.
    pub fn new(overrides: NoiseAnalysisOverrides) -> Result<Self> {
        let noisy_cell_def = match overrides.noisy_cell_def {
            None => DEFAULT_NOISY_CELL_DEF,
            Some(v) if v < 0 => {
                return Err(Error::invalid("noisyCellDef", v, "must be non-negative"))
            }
            Some(v) => int32_field("noisyCellDef", v)?,
        };

        let n_events_cert = match overrides.n_events_cert {
            None => DEFAULT_N_EVENTS_CERT,
            Some(v) if v <= 0 => return Err(Error::invalid("nEventsCert", v, "must be positive")),
            Some(v) => int32_field("nEventsCert", v)?,
        };

        let max_synch_noise_rate = overrides
            .max_synch_noise_rate
            .unwrap_or(DEFAULT_MAX_SYNCH_NOISE_RATE);
        // NaN fails the range check too.
        if !(0.0..=1.0).contains(&max_synch_noise_rate) {
            return Err(Error::invalid(
                "maxSynchNoiseRate",
                max_synch_noise_rate,
                "must lie in [0, 1]",
            ));
        }

        let config = Self {
            noisy_cell_def,
            do_synch_noise: overrides.do_synch_noise.unwrap_or(DEFAULT_DO_SYNCH_NOISE),
            max_synch_noise_rate,
            n_events_cert,
        };
        debug!(
            noisy_cell_def,
            do_synch_noise = config.do_synch_noise,
            max_synch_noise_rate,
            n_events_cert,
            "noise analysis config validated"
        );
        Ok(config)
    }

    /// Hit-count threshold above which a cell is classified noisy.
    pub fn noisy_cell_def(&self) -> u32 {
        self.noisy_cell_def
    }

    /// Whether the synchronous-noise detection pass is enabled.
    pub fn do_synch_noise(&self) -> bool {
        self.do_synch_noise
    }

    /// Upper bound on the acceptable synchronous-noise rate, in [0, 1].
    pub fn max_synch_noise_rate(&self) -> f64 {
        self.max_synch_noise_rate
    }

    /// Minimum event count required before certification is computed.
    pub fn n_events_cert(&self) -> u32 {
        self.n_events_cert
    }

    /// Express this config as a full override set.
    pub fn to_overrides(&self) -> NoiseAnalysisOverrides {
        NoiseAnalysisOverrides {
            noisy_cell_def: Some(i64::from(self.noisy_cell_def)),
            do_synch_noise: Some(self.do_synch_noise),
            max_synch_noise_rate: Some(self.max_synch_noise_rate),
            n_events_cert: Some(i64::from(self.n_events_cert)),
        }
    }
}

impl Default for NoiseAnalysisConfig {
    fn default() -> Self {
        Self {
            noisy_cell_def: DEFAULT_NOISY_CELL_DEF,
            do_synch_noise: DEFAULT_DO_SYNCH_NOISE,
            max_synch_noise_rate: DEFAULT_MAX_SYNCH_NOISE_RATE,
            n_events_cert: DEFAULT_N_EVENTS_CERT,
        }
    }
}

impl TryFrom<NoiseAnalysisOverrides> for NoiseAnalysisConfig {
    type Error = Error;

    fn try_from(overrides: NoiseAnalysisOverrides) -> Result<Self> {
        Self::new(overrides)
    }
}

fn int32_field(field: &'static str, value: i64) -> Result<u32> {
    if value > i64::from(i32::MAX) {
        return Err(Error::invalid(field, value, "exceeds the int32 range"));
    }
    u32::try_from(value).map_err(|_| Error::invalid(field, value, "must be non-negative"))
}

/// Optional values for any subset of the noise analysis parameters.
///
/// This is also the on-disk shape of an override file. Integers are held as
/// `i64` so that negative input reaches validation rather than failing at
/// parse time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct NoiseAnalysisOverrides {
    /// Hit-count threshold above which a cell is classified noisy (default 500).
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(range(min = 0, max = 2147483647))]
    pub noisy_cell_def: Option<i64>,

    /// Enable the synchronous-noise detection pass (default false).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub do_synch_noise: Option<bool>,

    /// Upper bound on the acceptable synchronous-noise rate (default 0.001).
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(range(min = 0.0, max = 1.0))]
    pub max_synch_noise_rate: Option<f64>,

    /// Minimum event count before certification (default 1000).
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(range(min = 1, max = 2147483647))]
    pub n_events_cert: Option<i64>,
}

impl NoiseAnalysisOverrides {
    pub fn with_noisy_cell_def(mut self, value: i64) -> Self {
        self.noisy_cell_def = Some(value);
        self
    }

    pub fn with_do_synch_noise(mut self, value: bool) -> Self {
        self.do_synch_noise = Some(value);
        self
    }

    pub fn with_max_synch_noise_rate(mut self, value: f64) -> Self {
        self.max_synch_noise_rate = Some(value);
        self
    }

    pub fn with_n_events_cert(mut self, value: i64) -> Self {
        self.n_events_cert = Some(value);
        self
    }

    /// Layer `other` on top of `self`; fields set in `other` win.
    pub fn merge(self, other: NoiseAnalysisOverrides) -> Self {
        Self {
            noisy_cell_def: other.noisy_cell_def.or(self.noisy_cell_def),
            do_synch_noise: other.do_synch_noise.or(self.do_synch_noise),
            max_synch_noise_rate: other.max_synch_noise_rate.or(self.max_synch_noise_rate),
            n_events_cert: other.n_events_cert.or(self.n_events_cert),
        }
    }

    /// True when no field is set.
    pub fn is_empty(&self) -> bool {
        self.noisy_cell_def.is_none()
            && self.do_synch_noise.is_none()
            && self.max_synch_noise_rate.is_none()
            && self.n_events_cert.is_none()
    }

    /// Validate and build the config.
    pub fn build(self) -> Result<NoiseAnalysisConfig> {
        NoiseAnalysisConfig::new(self)
    }
}
