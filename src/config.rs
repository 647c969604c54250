use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{CardwiseError, Result};

/// Which status class a well-formed number that fails the Luhn check gets.
/// The response body carries the full outcome either way; only the status
/// code changes, and only the HTTP handler consults this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ChecksumFailurePolicy {
    /// Respond 400. A number that fails its own checksum is client error.
    #[default]
    ClientError,
    /// Respond 200. The validation ran fine; the answer just happens to
    /// be "not valid".
    Ok,
}

/// Service configuration, loaded from YAML.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// TCP port the HTTP server binds. Default: 3000.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Name used in startup logs.
    #[serde(default = "default_service_name")]
    pub service_name: String,

    /// Status policy for checksum failures.
    #[serde(default)]
    pub checksum_failure: ChecksumFailurePolicy,
}

fn default_port() -> u16 {
    3000
}
fn default_service_name() -> String {
    "cardwise".into()
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            service_name: "cardwise".into(),
            checksum_failure: ChecksumFailurePolicy::default(),
        }
    }
}

impl ServiceConfig {
    /// Load config from a YAML file. Returns defaults if the file doesn't
    /// exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)?;
        serde_yaml::from_str(&contents).map_err(|e| CardwiseError::ConfigParse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }
}
