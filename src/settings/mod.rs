//! Bridge configuration
//!
//! Hosts configure the bridge before calling [`crate::init`], typically
//! from an environment variable in development and a JSON file in
//! packaged builds.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::utils::error::RecorderResult;

/// Environment variable consulted by [`BridgeSettings::load`].
pub const ACCESS_KEY_ENV: &str = "RECBRIDGE_ACCESS_KEY";

/// Host-supplied bridge configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BridgeSettings {
    /// Account access key forwarded to the native engine at startup
    #[serde(default)]
    pub access_key: String,
}

impl BridgeSettings {
    /// Load settings from the environment, defaulting to an empty key.
    pub fn load() -> Self {
        Self {
            access_key: std::env::var(ACCESS_KEY_ENV).unwrap_or_default(),
        }
    }

    /// Load settings from a JSON file.
    pub fn from_json_file(path: &Path) -> RecorderResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }
}
