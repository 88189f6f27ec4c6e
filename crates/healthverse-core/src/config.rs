//! Session store configuration.
//!
//! Every field has a default, so an empty TOML document (or no document at
//! all) yields the stock configuration:
//!
//! ```toml
//! storage_key = "healthverse_user"
//! auth_delay_ms = 500
//! min_password_length = 6
//! demo_email = "demo@example.com"
//! demo_name = "Demo User"
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use healthverse_contracts::error::{HealthverseError, HealthverseResult};

/// Tunables for `SessionStore`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Key of the persisted session record.
    pub storage_key: String,

    /// Artificial latency applied to `login` and `register`, in milliseconds.
    pub auth_delay_ms: u64,

    /// Shortest password `login` and `register` accept, in characters.
    pub min_password_length: usize,

    /// The demo account whose sessions get `demo_name` instead of a name
    /// derived from the email address.
    pub demo_email: String,
    pub demo_name: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            storage_key: "healthverse_user".to_string(),
            auth_delay_ms: 500,
            min_password_length: 6,
            demo_email: "demo@example.com".to_string(),
            demo_name: "Demo User".to_string(),
        }
    }
}

impl SessionConfig {
    /// Parse `s` as a TOML session configuration.
    ///
    /// Returns `HealthverseError::Config` if the TOML is malformed or the
    /// storage key is empty.
    pub fn from_toml_str(s: &str) -> HealthverseResult<Self> {
        let config: SessionConfig = toml::from_str(s).map_err(|e| HealthverseError::Config {
            reason: format!("failed to parse session config TOML: {}", e),
        })?;
        if config.storage_key.trim().is_empty() {
            return Err(HealthverseError::Config {
                reason: "storage_key must not be empty".to_string(),
            });
        }
        Ok(config)
    }

    /// Read the file at `path` and parse it as a session configuration.
    pub fn from_file(path: &Path) -> HealthverseResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| HealthverseError::Config {
            reason: format!("failed to read config file '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&contents)
    }

    pub fn auth_delay(&self) -> Duration {
        Duration::from_millis(self.auth_delay_ms)
    }
}
