//! Provider configuration

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use vnfsvc_common::Result;

/// Provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// Base URL of the VNFSvc API
    pub endpoint: String,

    /// Token sent as `X-Auth-Token`
    pub auth_token: Option<String>,

    /// Per-request timeout
    pub request_timeout_secs: u64,

    /// Delete confirmation polling
    pub delete: DeletePolicy,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://127.0.0.1:8888".to_string(),
            auth_token: None,
            request_timeout_secs: 30,
            delete: DeletePolicy::default(),
        }
    }
}

/// How long to wait for a deleted resource to disappear
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DeletePolicy {
    pub poll_interval_ms: u64,
    pub max_attempts: u32,
}

impl Default for DeletePolicy {
    fn default() -> Self {
        Self {
            poll_interval_ms: 1000,
            max_attempts: 60,
        }
    }
}

impl DeletePolicy {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    /// Upper bound on the time spent polling, in whole seconds
    pub fn budget_secs(&self) -> u64 {
        (self.poll_interval_ms * self.max_attempts as u64) / 1000
    }
}

impl ProviderConfig {
    /// Load configuration from file
    pub fn load(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Self = toml::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }
}
