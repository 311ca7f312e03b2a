//! Pre-flight invocation validation
//!
//! Runs once before the integration's ingestion work begins: checks that
//! the instance config is complete, audits the TLS verification override
//! when one is requested, and verifies the credentials against the live
//! Device42 API.

use std::fmt;
use std::sync::Arc;

use tracing::warn;

use crate::client::{Device42Api, Device42Client};
use crate::config::Device42Config;
use crate::error::Device42Error;
use crate::events::{EventPublisher, IntegrationEvent, DISABLE_TLS_VERIFY};

/// Capabilities the host supplies for one integration invocation
#[derive(Clone)]
pub struct ExecutionContext {
    /// Instance configuration for this invocation
    pub config: Device42Config,
    /// Publisher for the host's event stream
    pub events: Arc<dyn EventPublisher>,
}

impl ExecutionContext {
    /// Creates a context from an instance config and an event publisher
    pub fn new(config: Device42Config, events: Arc<dyn EventPublisher>) -> Self {
        Self { config, events }
    }
}

impl fmt::Debug for ExecutionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExecutionContext")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Validates an integration invocation before any ingestion work runs
///
/// Three steps, in order, with early exit:
/// 1. Structural presence check of the required config fields. Fails with
///    a fixed operator-facing message before any network access.
/// 2. If TLS verification is disabled in the config, emit one warning and
///    publish one `disable_tls_verify` event. The override applies only to
///    the client built in step 3.
/// 3. Build the API client and verify the credentials. Failures propagate
///    unchanged; `Ok(())` is the success signal.
pub async fn validate_invocation(context: &ExecutionContext) -> Result<(), Device42Error> {
    context.config.validate()?;

    if context.config.disable_tls_verification {
        warn!(
            "Disabling TLS certificate verification for this integration's Device42 client. \
             If possible, please install valid TLS certificates into the Device42 server."
        );
        context
            .events
            .publish(IntegrationEvent::new(
                DISABLE_TLS_VERIFY,
                "Disabling TLS certificate verification. NOT RECOMMENDED: If possible, \
                 please install valid TLS certificates into Device42 server.",
            ))
            .await;
    }

    let client = Device42Client::new(context.config.clone())?;
    client.verify_authentication().await
}
