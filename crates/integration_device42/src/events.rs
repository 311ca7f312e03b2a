//! Host event stream seam
//!
//! The managed host exposes an event stream that surfaces operational
//! records to the operator alongside the integration's logs. This module
//! defines the event record and the narrow port through which the
//! integration publishes to it, so the validator stays testable with a
//! substitutable fake.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Event name published when TLS certificate verification is disabled
pub const DISABLE_TLS_VERIFY: &str = "disable_tls_verify";

/// A record published to the host's event stream
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegrationEvent {
    /// Machine-readable event name
    pub name: String,
    /// Human-readable description shown to the operator
    pub description: String,
    /// When the event was created
    pub occurred_at: DateTime<Utc>,
}

impl IntegrationEvent {
    /// Creates an event timestamped now
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            occurred_at: Utc::now(),
        }
    }
}

/// Port for publishing events to the host's event stream
///
/// Publication is fire-and-forget: the host owns delivery, and a failed
/// publish must never abort the invocation.
#[async_trait]
pub trait EventPublisher: Send + Sync {
    /// Publish an event to the host's event stream
    async fn publish(&self, event: IntegrationEvent);
}

/// Event publisher for unmanaged (local/dev) execution
///
/// There is no host event stream outside a managed environment, so events
/// are emitted to the tracing subscriber instead.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingEventPublisher;

#[async_trait]
impl EventPublisher for TracingEventPublisher {
    async fn publish(&self, event: IntegrationEvent) {
        info!(
            name = %event.name,
            description = %event.description,
            "integration event"
        );
    }
}
