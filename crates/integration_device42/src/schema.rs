//! Instance config field declarations
//!
//! Static metadata describing the fields an operator must supply, consumed
//! by the host framework to render the configuration UI and to redact
//! sensitive values in logs. Purely declarative; validation lives in
//! [`crate::config`].

use std::collections::BTreeMap;
use std::sync::OnceLock;

use serde::Serialize;

/// Primitive type of a config field, as rendered by the host UI
///
/// Every declared field is currently a string; new variants belong here
/// only once a descriptor needs them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigFieldType {
    /// Free-form string input
    String,
}

/// Descriptor for a single instance config field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConfigField {
    /// Primitive type of the field
    #[serde(rename = "type")]
    pub field_type: ConfigFieldType,

    /// Whether the value must be redacted in logs and UI
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub mask: bool,
}

impl ConfigField {
    const fn string() -> Self {
        Self {
            field_type: ConfigFieldType::String,
            mask: false,
        }
    }

    const fn masked_string() -> Self {
        Self {
            field_type: ConfigFieldType::String,
            mask: true,
        }
    }
}

/// Field descriptors for the Device42 instance config
///
/// Keys use the managed-host (camelCase) field names. Built once, never
/// mutated.
pub fn instance_config_fields() -> &'static BTreeMap<&'static str, ConfigField> {
    static FIELDS: OnceLock<BTreeMap<&'static str, ConfigField>> = OnceLock::new();
    FIELDS.get_or_init(|| {
        BTreeMap::from([
            ("baseUrl", ConfigField::string()),
            ("device42Username", ConfigField::string()),
            ("password", ConfigField::masked_string()),
        ])
    })
}
