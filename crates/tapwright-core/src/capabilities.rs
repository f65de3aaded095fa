//! Session capability building for local and cloud execution.
//!
//! [`Capabilities`] accumulates the options handed to the driver factory
//! when a session starts. Options live in two buckets: generic driver
//! options, and provider options consumed only by the cloud device-farm
//! backend. Which bucket exists depends on the execution target — a host
//! string naming anything other than the local machine means a remote run,
//! and only remote runs get a provider block.
//!
//! Every option is last-write-wins: the bulk
//! [`add_provider_option`](Capabilities::add_provider_option) API and the
//! named setters ([`open_device_timeout`](Capabilities::open_device_timeout)
//! and friends) write the same map, so whichever ran last is what
//! [`to_options`](Capabilities::to_options) renders.
//!
//! # Example
//!
//! ```
//! use tapwright_core::capabilities::Capabilities;
//! use tapwright_core::driver::Platform;
//!
//! let mut caps = Capabilities::with_token("demo.device-farm.io", "s3cret");
//! caps.set_platform(Platform::Ios).open_device_timeout(3);
//!
//! assert!(!caps.is_local());
//! let options = caps.to_options();
//! assert!(options["tapwright:options"]["securityToken"].is_string());
//! ```

use serde_json::{Map, Value};
use tracing::debug;

use crate::driver::Platform;

/// The nested key under which provider options land in the rendered
/// options object.
pub const PROVIDER_OPTIONS_KEY: &str = "tapwright:options";

/// Provider option holding the cloud security token.
const SECURITY_TOKEN: &str = "securityToken";

/// Generic option naming the target platform.
const PLATFORM_NAME: &str = "platformName";

/// Host strings (case-insensitive) classified as local execution, besides
/// the empty string.
const LOCAL_HOSTS: [&str; 3] = ["local", "localhost", "127.0.0.1"];

/// True when `host` names the local machine.
fn is_local_host(host: &str) -> bool {
    host.is_empty() || LOCAL_HOSTS.iter().any(|h| host.eq_ignore_ascii_case(h))
}

/// Accumulates driver and provider options for a session start.
///
/// Built once per test, rendered once via
/// [`to_options`](Capabilities::to_options).
#[derive(Debug, Clone)]
pub struct Capabilities {
    host: String,
    options: Map<String, Value>,
    /// Provider options. `None` for local runs — never an empty map, so
    /// accessors can distinguish "local" from "remote with no options".
    provider: Option<Map<String, Value>>,
}

impl Capabilities {
    /// Capabilities for a local run (no host).
    pub fn new() -> Self {
        Self {
            host: String::new(),
            options: Map::new(),
            provider: None,
        }
    }

    /// Capabilities targeting `host`.
    ///
    /// An empty, `local`, `localhost`, or `127.0.0.1` host (case
    /// insensitive) is classified as local execution; anything else is a
    /// remote run and materializes the provider-options bucket.
    pub fn for_host(host: impl Into<String>) -> Self {
        let host = host.into();
        let provider = if is_local_host(&host) {
            None
        } else {
            Some(Map::new())
        };
        Self {
            host,
            options: Map::new(),
            provider,
        }
    }

    /// Like [`for_host`](Self::for_host), additionally seeding the cloud
    /// security token.
    ///
    /// In remote mode the token lands in the provider options under
    /// `securityToken`, where a later
    /// [`add_provider_option`](Self::add_provider_option) write may
    /// override it. In local mode the token has no consumer and is
    /// dropped.
    pub fn with_token(host: impl Into<String>, token: impl Into<String>) -> Self {
        let mut caps = Self::for_host(host);
        match caps.provider.as_mut() {
            Some(provider) => {
                provider.insert(SECURITY_TOKEN.to_string(), Value::from(token.into()));
            }
            None => debug!("local execution; ignoring security token"),
        }
        caps
    }

    /// True when this session runs against the local machine.
    pub fn is_local(&self) -> bool {
        is_local_host(&self.host)
    }

    /// The configured target host (empty for local runs).
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Inserts or overwrites a generic driver option.
    pub fn add_option(&mut self, name: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.options.insert(name.into(), value.into());
        self
    }

    /// Inserts or overwrites a provider option.
    ///
    /// Local runs have no provider bucket; the write is dropped rather
    /// than materializing one.
    pub fn add_provider_option(
        &mut self,
        name: impl Into<String>,
        value: impl Into<Value>,
    ) -> &mut Self {
        let name = name.into();
        match self.provider.as_mut() {
            Some(provider) => {
                provider.insert(name, value.into());
            }
            None => debug!(option = %name, "local execution; ignoring provider option"),
        }
        self
    }

    /// Sets the generic `platformName` option.
    pub fn set_platform(&mut self, platform: Platform) -> &mut Self {
        self.add_option(PLATFORM_NAME, platform.as_str())
    }

    /// Provider option: seconds the cloud waits for a device to open.
    pub fn open_device_timeout(&mut self, seconds: u64) -> &mut Self {
        self.add_provider_option("openDeviceTimeout", seconds)
    }

    /// Provider option: the cloud device to reserve.
    pub fn device_name(&mut self, name: &str) -> &mut Self {
        self.add_provider_option("deviceName", name)
    }

    /// Provider option: the report name the cloud files results under.
    pub fn script_name(&mut self, name: &str) -> &mut Self {
        self.add_provider_option("scriptName", name)
    }

    /// The provider options, or `None` for local runs.
    pub fn provider_options(&self) -> Option<&Map<String, Value>> {
        self.provider.as_ref()
    }

    /// Renders the accumulated state into the options object the driver
    /// factory consumes.
    ///
    /// Generic options appear at the top level; the provider options, when
    /// present, nest under [`PROVIDER_OPTIONS_KEY`].
    pub fn to_options(&self) -> Value {
        let mut root = self.options.clone();
        if let Some(provider) = &self.provider {
            root.insert(
                PROVIDER_OPTIONS_KEY.to_string(),
                Value::Object(provider.clone()),
            );
        }
        Value::Object(root)
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_provider_option_overrides_initial() {
        let mut caps = Capabilities::with_token("demo.device-farm.io", "tok");

        caps.add_provider_option("openDeviceTimeout", 3);
        assert_eq!(caps.provider_options().unwrap()["openDeviceTimeout"], 3);

        caps.open_device_timeout(2);
        assert_eq!(caps.provider_options().unwrap()["openDeviceTimeout"], 2);
        assert_eq!(caps.to_options()[PROVIDER_OPTIONS_KEY]["openDeviceTimeout"], 2);
    }

    #[test]
    fn security_token_is_automatically_added() {
        let caps = Capabilities::with_token("demo", "dummy");
        assert_eq!(caps.provider_options().unwrap()[SECURITY_TOKEN], "dummy");
    }

    #[test]
    fn security_token_is_overridable() {
        let mut caps = Capabilities::with_token("demo", "dummy");
        caps.add_provider_option(SECURITY_TOKEN, "rotated");
        assert_eq!(caps.provider_options().unwrap()[SECURITY_TOKEN], "rotated");
    }

    #[test]
    fn local_hosts_classify_as_local() {
        assert!(Capabilities::new().is_local());
        assert!(Capabilities::for_host("").is_local());
        assert!(Capabilities::for_host("local").is_local());
        assert!(Capabilities::for_host("LOCAL").is_local());
        assert!(Capabilities::for_host("localhost").is_local());
        assert!(Capabilities::for_host("127.0.0.1").is_local());
    }

    #[test]
    fn other_hosts_classify_as_remote() {
        assert!(!Capabilities::for_host("demo").is_local());
        assert!(!Capabilities::for_host("demo.device-farm.io").is_local());
    }

    #[test]
    fn local_execution_has_no_provider_options() {
        let caps = Capabilities::for_host("localhost");
        assert!(caps.provider_options().is_none());
        assert!(caps.to_options().get(PROVIDER_OPTIONS_KEY).is_none());
    }

    #[test]
    fn local_provider_writes_are_dropped() {
        let mut caps = Capabilities::for_host("localhost");
        caps.add_provider_option("openDeviceTimeout", 3);
        caps.open_device_timeout(2);
        assert!(caps.provider_options().is_none());
    }

    #[test]
    fn options_nest_provider_block_under_fixed_key() {
        let mut caps = Capabilities::with_token("demo", "dummy");
        caps.set_platform(Platform::Ios);

        let options = caps.to_options();
        assert_eq!(options[PLATFORM_NAME], "iOS");
        assert!(options[PROVIDER_OPTIONS_KEY].is_object());
        assert_eq!(options[PROVIDER_OPTIONS_KEY][SECURITY_TOKEN], "dummy");
    }

    #[test]
    fn generic_options_are_last_write_wins() {
        let mut caps = Capabilities::new();
        caps.add_option("noReset", true);
        caps.add_option("noReset", false);
        assert_eq!(caps.to_options()["noReset"], false);
    }
}
