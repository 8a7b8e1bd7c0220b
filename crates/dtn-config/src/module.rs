//! Analyzer module declaration.
//!
//! Binds a validated [`NoiseAnalysisConfig`] to the module label and plugin
//! type under which the framework instantiates the noise analysis monitor.

use dtn_common::{schema, Error, Result, SCHEMA_VERSION};
use serde::{Deserialize, Serialize};

use crate::noise::NoiseAnalysisConfig;

/// Module label of the noise analysis monitor.
pub const DT_NOISE_ANALYSIS_LABEL: &str = "dtNoiseAnalysisMonitor";

/// Plugin type implementing the noise analysis monitor.
pub const DT_NOISE_ANALYSIS_PLUGIN: &str = "DTNoiseAnalysisTest";

/// A named analyzer instance with its parameter record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzerModule {
    pub schema_version: String,
    pub label: String,
    pub plugin_type: String,
    pub parameters: NoiseAnalysisConfig,
}

impl AnalyzerModule {
    /// The standard `dtNoiseAnalysisMonitor` declaration.
    pub fn dt_noise_analysis_monitor(parameters: NoiseAnalysisConfig) -> Self {
        Self {
            schema_version: SCHEMA_VERSION.to_string(),
            label: DT_NOISE_ANALYSIS_LABEL.to_string(),
            plugin_type: DT_NOISE_ANALYSIS_PLUGIN.to_string(),
            parameters,
        }
    }

    /// Parse a declaration, re-validating its parameters.
    pub fn from_json(json: &str) -> Result<Self> {
        let module: AnalyzerModule = serde_json::from_str(json)?;
        if !schema::is_compatible(&module.schema_version) {
            return Err(Error::UnsupportedSchema(module.schema_version));
        }
        if module.label.trim().is_empty() {
            return Err(Error::Config("module label must not be empty".to_string()));
        }
        Ok(module)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::Parse {
            format: "toml",
            message: e.to_string(),
        })
    }
}

impl Default for AnalyzerModule {
    fn default() -> Self {
        Self::dt_noise_analysis_monitor(NoiseAnalysisConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::noise::NoiseAnalysisOverrides;

    #[test]
    fn default_declaration() {
        let module = AnalyzerModule::default();
        assert_eq!(module.label, "dtNoiseAnalysisMonitor");
        assert_eq!(module.plugin_type, "DTNoiseAnalysisTest");
        assert_eq!(module.parameters, NoiseAnalysisConfig::default());
    }

    #[test]
    fn roundtrip_json() {
        let config = NoiseAnalysisOverrides::default()
            .with_do_synch_noise(true)
            .build()
            .unwrap();
        let module = AnalyzerModule::dt_noise_analysis_monitor(config);
        let back = AnalyzerModule::from_json(&module.to_json().unwrap()).unwrap();
        assert_eq!(back, module);
    }

    #[test]
    fn invalid_parameters_rejected_on_parse() {
        let json = r#"{
            "schema_version": "1.0.0",
            "label": "dtNoiseAnalysisMonitor",
            "plugin_type": "DTNoiseAnalysisTest",
            "parameters": {"maxSynchNoiseRate": 1.5}
        }"#;
        let err = AnalyzerModule::from_json(json).unwrap_err();
        assert!(err.to_string().contains("maxSynchNoiseRate"));
    }

    #[test]
    fn unsupported_schema_rejected() {
        let mut module = AnalyzerModule::default();
        module.schema_version = "2.0.0".to_string();
        let err = AnalyzerModule::from_json(&module.to_json().unwrap()).unwrap_err();
        assert!(matches!(err, Error::UnsupportedSchema(_)));
    }

    #[test]
    fn empty_label_rejected() {
        let mut module = AnalyzerModule::default();
        module.label = "  ".to_string();
        let err = AnalyzerModule::from_json(&module.to_json().unwrap()).unwrap_err();
        assert_eq!(err.code(), 11);
    }

    #[test]
    fn toml_output_has_parameter_table() {
        let toml = AnalyzerModule::default().to_toml().unwrap();
        assert!(toml.contains("[parameters]"));
        assert!(toml.contains("noisyCellDef = 500"));
        assert!(toml.contains("label = \"dtNoiseAnalysisMonitor\""));
    }
}
