//! End-to-end tests: override files on disk through to module declarations.

use std::fs;

use dtn_config::{
    load_overrides, resolve_config, AnalyzerModule, ConfigPaths, ConfigSnapshot, ConfigSource,
    NoiseAnalysisConfig, NoiseAnalysisOverrides,
};

#[test]
fn json_file_to_module_declaration() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("noise.json");
    fs::write(
        &path,
        r#"{"noisyCellDef": 650, "doSynchNoise": true, "maxSynchNoiseRate": 0.01}"#,
    )
    .expect("write config");

    let config = load_overrides(&path)
        .expect("load")
        .build()
        .expect("valid config");
    let module = AnalyzerModule::dt_noise_analysis_monitor(config);
    let json: serde_json::Value =
        serde_json::from_str(&module.to_json().expect("serialize")).expect("parse");

    assert_eq!(json["label"], "dtNoiseAnalysisMonitor");
    assert_eq!(json["plugin_type"], "DTNoiseAnalysisTest");
    assert_eq!(json["parameters"]["noisyCellDef"], 650);
    assert_eq!(json["parameters"]["doSynchNoise"], true);
    assert_eq!(json["parameters"]["maxSynchNoiseRate"], 0.01);
    assert_eq!(json["parameters"]["nEventsCert"], 1000);
}

#[test]
fn invalid_file_reports_field_and_value() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("noise.toml");
    fs::write(&path, "nEventsCert = -5\n").expect("write config");

    let paths = ConfigPaths {
        explicit: Some(path),
        ..Default::default()
    };
    let err = resolve_config(&paths, NoiseAnalysisOverrides::default())
        .expect_err("negative nEventsCert must fail");
    let message = err.to_string();
    assert!(err.is_invalid_configuration());
    assert!(message.contains("nEventsCert"), "got: {message}");
    assert!(message.contains("-5"), "got: {message}");
}

#[test]
fn snapshot_of_resolved_file_verifies() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("noise_analysis.toml");
    fs::write(&path, "doSynchNoise = true\n").expect("write config");

    let paths = ConfigPaths {
        xdg_dir: Some(dir.path().to_path_buf()),
        ..Default::default()
    };
    let resolved = resolve_config(&paths, NoiseAnalysisOverrides::default()).expect("resolve");
    assert_eq!(resolved.source, ConfigSource::Xdg(path));

    let snapshot = ConfigSnapshot::capture(&resolved).expect("capture");
    let restored = ConfigSnapshot::from_json(&snapshot.to_json().expect("json")).expect("verify");
    assert!(restored.config.do_synch_noise());
    assert_ne!(restored.config, NoiseAnalysisConfig::default());
}
