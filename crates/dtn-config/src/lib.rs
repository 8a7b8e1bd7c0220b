//! DT noise analysis configuration loading and validation.
//!
//! This crate provides:
//! - The immutable [`NoiseAnalysisConfig`] record with defaults and validation
//! - Parameter descriptions (wire type, default, tracking) for the analyzer
//! - The `dtNoiseAnalysisMonitor` module declaration
//! - Config resolution (CLI → env → XDG → defaults) from TOML or JSON files
//! - Config snapshots for job provenance

pub mod describe;
pub mod load;
pub mod module;
pub mod noise;
pub mod resolve;
pub mod schema;
pub mod snapshot;

pub use describe::{ParameterDescription, ParameterKind, ParameterValue};
pub use load::{load_overrides, parse_overrides, FileFormat};
pub use module::AnalyzerModule;
pub use noise::{NoiseAnalysisConfig, NoiseAnalysisOverrides};
pub use resolve::{resolve_config, ConfigPaths, ConfigSource, ResolvedConfig};
pub use schema::override_schema;
pub use snapshot::ConfigSnapshot;

/// Environment variable naming an override file.
pub const CONFIG_ENV_VAR: &str = "DTN_NOISE_CONFIG";
