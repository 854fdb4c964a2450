//! Connection settings for a TR-064 device
//!
//! Defaults match a FRITZ!Box reachable on its fallback link-local address.
//! Address and port can be overridden with `FRITZ_IP_ADDRESS` and
//! `FRITZ_TCP_PORT`.

use std::time::Duration;

use crate::error::{ApiError, Result};

/// Default device address
pub const DEFAULT_ADDRESS: &str = "169.254.1.1";

/// Default TR-064 port
pub const DEFAULT_PORT: u16 = 49000;

pub const ADDRESS_ENV: &str = "FRITZ_IP_ADDRESS";
pub const PORT_ENV: &str = "FRITZ_TCP_PORT";

/// Configuration for a [`crate::FritzClient`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Host name or IP address of the device
    /// Default: 169.254.1.1
    pub address: String,

    /// TR-064 port
    /// Default: 49000
    pub port: u16,

    /// Timeout for establishing the connection
    /// Default: 5 seconds
    pub connect_timeout: Duration,

    /// Timeout for reading the response
    /// Default: 10 seconds
    pub read_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDRESS.to_string(),
            port: DEFAULT_PORT,
            connect_timeout: Duration::from_secs(5),
            read_timeout: Duration::from_secs(10),
        }
    }
}

impl ClientConfig {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            ..Self::default()
        }
    }

    /// Build a configuration from `FRITZ_IP_ADDRESS` and `FRITZ_TCP_PORT`
    ///
    /// Unset variables fall back to the defaults; a port that is not a valid
    /// number is an error.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(address) = lookup(ADDRESS_ENV).filter(|a| !a.trim().is_empty()) {
            config.address = address.trim().to_string();
        }

        if let Some(port) = lookup(PORT_ENV) {
            config.port = port.trim().parse().map_err(|_| {
                ApiError::ConfigError(format!("{} is not a valid port: '{}'", PORT_ENV, port))
            })?;
        }

        Ok(config)
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    pub fn with_read_timeout(mut self, timeout: Duration) -> Self {
        self.read_timeout = timeout;
        self
    }

    /// Absolute URL for a control path such as `/upnp/control/hosts`
    pub fn control_url(&self, control_path: &str) -> String {
        format!("http://{}:{}{}", self.address, self.port, control_path)
    }
}
