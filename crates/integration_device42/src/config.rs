//! Device42 instance configuration
//!
//! The config record mirrors the managed-host instance record, which uses
//! camelCase field names (`device42Username`, `password`, `baseUrl`). When
//! running outside a managed host, [`Device42Config::from_env`] reads the
//! same fields from environment variables instead.

use std::env;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Device42Error;

/// Message shown to the operator when required fields are missing
const REQUIRED_FIELDS_MESSAGE: &str =
    "Config requires all of {device42Username, password, baseUrl}";

/// Per-instance configuration for the Device42 integration
#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device42Config {
    /// Device42 account username
    pub device42_username: String,

    /// Device42 account password (never serialized or logged)
    #[serde(skip_serializing, default)]
    pub password: String,

    /// Base URL of the Device42 appliance, e.g. `https://device42.example.com`
    pub base_url: String,

    /// Disable TLS certificate verification for this integration's client
    ///
    /// Scoped to the HTTP client built from this config; it does not affect
    /// any other outbound connection in the process. Intended for appliances
    /// with self-signed certificates, and audited via a `disable_tls_verify`
    /// event whenever it takes effect.
    #[serde(default)]
    pub disable_tls_verification: bool,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

const fn default_timeout_secs() -> u64 {
    30
}

// Manual impl so the password is redacted wherever the config is logged.
impl fmt::Debug for Device42Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Device42Config")
            .field("device42_username", &self.device42_username)
            .field("password", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("disable_tls_verification", &self.disable_tls_verification)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl Default for Device42Config {
    fn default() -> Self {
        Self {
            device42_username: String::new(),
            password: String::new(),
            base_url: String::new(),
            disable_tls_verification: false,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Device42Config {
    /// Creates a configuration with the given connection details
    pub fn new(
        base_url: impl Into<String>,
        device42_username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            device42_username: device42_username.into(),
            password: password.into(),
            ..Default::default()
        }
    }

    /// Sets the TLS verification override
    #[must_use]
    pub const fn with_tls_verification_disabled(mut self, disabled: bool) -> Self {
        self.disable_tls_verification = disabled;
        self
    }

    /// Reads the configuration from environment variables
    ///
    /// Development-only convention: each instance config field maps to the
    /// SCREAMING_SNAKE_CASE variable of the same name (`baseUrl` becomes
    /// `BASE_URL`, and so on). Managed execution supplies the instance
    /// record directly and never consults the environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            base_url: env::var("BASE_URL").unwrap_or_default(),
            device42_username: env::var("DEVICE42_USERNAME").unwrap_or_default(),
            password: env::var("PASSWORD").unwrap_or_default(),
            disable_tls_verification: env_flag("DISABLE_TLS_VERIFICATION"),
            timeout_secs: default_timeout_secs(),
        }
    }

    /// Checks that all required fields are present
    ///
    /// Purely structural; performs no network access. The error message is
    /// fixed regardless of which field is missing.
    pub fn validate(&self) -> Result<(), Device42Error> {
        if self.device42_username.is_empty() || self.password.is_empty() || self.base_url.is_empty()
        {
            return Err(Device42Error::InvalidConfiguration(
                REQUIRED_FIELDS_MESSAGE.to_string(),
            ));
        }
        Ok(())
    }
}

/// Interprets a boolean-like environment variable ("1", "true", "yes")
fn env_flag(name: &str) -> bool {
    env::var(name).is_ok_and(|v| matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
}
