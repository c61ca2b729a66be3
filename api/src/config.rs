//! # Client configuration — `fridgechef.toml`
//!
//! The one piece of deploy-time configuration the client needs: where the
//! backend lives and how long to wait for it.
//!
//! ```toml
//! [backend]
//! base_url = "http://192.168.0.10:8000"   # your API host
//! timeout_secs = 10                        # per-request bound, 0 is invalid
//! ```
//!
//! [`ClientConfig`] derives `Default` with production defaults so a missing
//! or empty config file still yields a usable client pointed at localhost.

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `fridgechef.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub backend: BackendConfig,
}

/// Backend connection settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the API host. A trailing slash is tolerated.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://127.0.0.1:8000".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ClientConfig {
    /// Create a config pointed at the given base URL.
    pub fn new(base_url: String) -> Self {
        Self {
            backend: BackendConfig {
                base_url,
                ..BackendConfig::default()
            },
        }
    }

    /// Builder method to set the request timeout.
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.backend.timeout_secs = secs;
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "fridgechef.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
