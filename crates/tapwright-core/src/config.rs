//! Persistent configuration for tapwright.
//!
//! Stores per-user defaults in `~/.tapwright/config.json`: the execution
//! host, the cloud security token, and the target platform. Test runners
//! load this once at startup and seed a
//! [`Capabilities`](crate::capabilities::Capabilities) builder from it, so
//! scripts don't hard-code farm credentials.
//!
//! # Example
//!
//! ```no_run
//! use tapwright_core::config::TapwrightConfig;
//!
//! // Load (returns defaults if the file doesn't exist)
//! let config = TapwrightConfig::load();
//! let caps = config.capabilities();
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::capabilities::Capabilities;
use crate::driver::Platform;

const CONFIG_FILENAME: &str = "config.json";

/// The per-user tapwright directory (`~/.tapwright`).
pub fn tapwright_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".tapwright")
}

/// Persistent tapwright configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TapwrightConfig {
    /// Execution host. Unset or a local host string means local execution.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,

    /// Cloud security token, applied only for remote hosts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security_token: Option<String>,

    /// Default target platform.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<Platform>,
}

impl TapwrightConfig {
    /// Load config from `~/.tapwright/config.json`.
    ///
    /// Returns [`Default`] if the file does not exist or cannot be parsed.
    pub fn load() -> Self {
        let path = tapwright_dir().join(CONFIG_FILENAME);
        std::fs::read_to_string(&path)
            .ok()
            .and_then(|s| serde_json::from_str(&s).ok())
            .unwrap_or_default()
    }

    /// Save config to `~/.tapwright/config.json`.
    pub fn save(&self) -> std::io::Result<()> {
        let dir = tapwright_dir();
        std::fs::create_dir_all(&dir)?;
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
        std::fs::write(dir.join(CONFIG_FILENAME), json)
    }

    /// Seeds a [`Capabilities`] builder from the stored defaults.
    ///
    /// Host classification (local vs remote) follows the usual rules; the
    /// token is only applied when both a host and a token are present.
    pub fn capabilities(&self) -> Capabilities {
        let mut caps = match (&self.host, &self.security_token) {
            (Some(host), Some(token)) => Capabilities::with_token(host, token),
            (Some(host), None) => Capabilities::for_host(host),
            (None, _) => Capabilities::new(),
        };
        if let Some(platform) = self.platform {
            caps.set_platform(platform);
        }
        caps
    }
}
