//! Config snapshots for job provenance.
//!
//! A snapshot pins the effective configuration, where it was resolved from,
//! and a SHA-256 digest of its canonical JSON form so that a later reader can
//! detect edits.

use chrono::{DateTime, Utc};
use dtn_common::{schema, Error, Result, SCHEMA_VERSION};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::noise::NoiseAnalysisConfig;
use crate::resolve::{ConfigSource, ResolvedConfig};

/// Immutable record of a resolved configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigSnapshot {
    pub schema_version: String,
    pub captured_at: DateTime<Utc>,
    pub source: ConfigSource,
    pub config_hash: String,
    pub config: NoiseAnalysisConfig,
}

impl ConfigSnapshot {
    /// Capture a snapshot of a resolved config.
    pub fn capture(resolved: &ResolvedConfig) -> Result<Self> {
        Ok(Self {
            schema_version: SCHEMA_VERSION.to_string(),
            captured_at: Utc::now(),
            source: resolved.source.clone(),
            config_hash: config_hash(&resolved.config)?,
            config: resolved.config.clone(),
        })
    }

    /// Check schema compatibility and that the hash matches the config.
    pub fn verify(&self) -> Result<()> {
        if !schema::is_compatible(&self.schema_version) {
            return Err(Error::UnsupportedSchema(self.schema_version.clone()));
        }
        let actual = config_hash(&self.config)?;
        if actual != self.config_hash {
            return Err(Error::HashMismatch {
                expected: self.config_hash.clone(),
                actual,
            });
        }
        Ok(())
    }

    /// Parse a snapshot from JSON and verify it.
    pub fn from_json(json: &str) -> Result<Self> {
        let snapshot: ConfigSnapshot = serde_json::from_str(json)?;
        snapshot.verify()?;
        Ok(snapshot)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// SHA-256 hex digest of the config's compact JSON form.
pub fn config_hash(config: &NoiseAnalysisConfig) -> Result<String> {
    let json = serde_json::to_string(config)?;
    Ok(sha256_hex(json.as_bytes()))
}

fn sha256_hex(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}
