//! Device42 HTTP API client
//!
//! Minimal authenticated client used for the pre-flight credential check.
//! Requests use HTTP Basic auth with the instance credentials. The TLS
//! verification override from the config applies to this client's
//! connections only, never to the rest of the process.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::{debug, instrument};

use crate::config::Device42Config;
use crate::error::Device42Error;

/// Authenticated operations against a Device42 instance
#[async_trait]
pub trait Device42Api: Send + Sync {
    /// Verify that the configured credentials can reach the Device42 API
    ///
    /// Completes with `Ok(())` when the credentials are accepted; any
    /// failure (bad credentials, unreachable appliance) surfaces as an
    /// error. One request, no retry.
    async fn verify_authentication(&self) -> Result<(), Device42Error>;
}

/// HTTP client for the Device42 API
#[derive(Debug, Clone)]
pub struct Device42Client {
    http: Client,
    config: Device42Config,
}

impl Device42Client {
    /// Creates a client from a validated instance config
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: Device42Config) -> Result<Self, Device42Error> {
        let mut builder = Client::builder().timeout(Duration::from_secs(config.timeout_secs));

        if config.disable_tls_verification {
            // Scoped to this client's connections only.
            builder = builder.danger_accept_invalid_certs(true);
        }

        // No connection is attempted here; a builder failure means the
        // config produced an unusable client, which no retry will fix.
        let http = builder.build().map_err(|e| {
            Device42Error::InvalidConfiguration(format!("Failed to initialize HTTP client: {e}"))
        })?;

        Ok(Self { http, config })
    }

    /// Cheapest authenticated endpoint; a 2xx proves credentials and base URL
    fn devices_url(&self) -> String {
        format!(
            "{}/api/1.0/devices/?limit=1",
            self.config.base_url.trim_end_matches('/')
        )
    }
}

#[async_trait]
impl Device42Api for Device42Client {
    #[instrument(skip(self), fields(base_url = %self.config.base_url))]
    async fn verify_authentication(&self) -> Result<(), Device42Error> {
        let url = self.devices_url();
        debug!(url = %url, "Verifying Device42 credentials");

        let response = self
            .http
            .get(&url)
            .basic_auth(
                &self.config.device42_username,
                Some(&self.config.password),
            )
            .send()
            .await
            .map_err(|e| Device42Error::ConnectionFailed(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(Device42Error::AuthenticationFailed(format!("HTTP {status}")));
        }
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(Device42Error::RateLimitExceeded);
        }
        if status.is_server_error() {
            return Err(Device42Error::ServiceUnavailable(format!("HTTP {status}")));
        }
        if !status.is_success() {
            return Err(Device42Error::RequestFailed(format!("HTTP {status}")));
        }

        Ok(())
    }
}
