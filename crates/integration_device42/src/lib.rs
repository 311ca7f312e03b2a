#![forbid(unsafe_code)]
//! Device42 inventory integration
//!
//! Pre-flight layer for a Device42 data-ingestion integration: instance
//! config declaration, invocation validation, and the authenticated API
//! client used for the credential check.
//!
//! # Architecture
//!
//! The host framework supplies an [`ExecutionContext`] (instance config plus
//! an [`EventPublisher`] for its event stream). [`validate_invocation`] runs
//! once before ingestion starts: it checks the config is complete, audits an
//! opt-in TLS verification override, and verifies the credentials via
//! [`Device42Client`]. The [`instance_config_fields`] schema tells the host
//! which fields to render and which to mask.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use integration_device42::{
//!     validate_invocation, Device42Config, ExecutionContext, TracingEventPublisher,
//! };
//!
//! let config = Device42Config::from_env();
//! let context = ExecutionContext::new(config, Arc::new(TracingEventPublisher));
//! validate_invocation(&context).await?;
//! ```

mod client;
mod config;
mod error;
mod events;
mod schema;
mod validator;

pub use client::{Device42Api, Device42Client};
pub use config::Device42Config;
pub use error::Device42Error;
pub use events::{EventPublisher, IntegrationEvent, TracingEventPublisher, DISABLE_TLS_VERIFY};
pub use schema::{instance_config_fields, ConfigField, ConfigFieldType};
pub use validator::{validate_invocation, ExecutionContext};
