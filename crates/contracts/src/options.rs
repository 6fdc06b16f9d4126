//! SendOptions - per-send delivery configuration

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Delivery priority hint forwarded to transports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Standard delivery
    #[default]
    Normal,
    /// Time-sensitive delivery (providers may wake the device)
    High,
}

/// Per-send configuration.
///
/// `SendOptions::default()` is the canonical empty configuration; a send
/// issued without options receives exactly this value. The dispatcher never
/// reads any field, it only guarantees transports always receive a
/// fully-populated value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SendOptions {
    /// Message lifetime in seconds, provider semantics
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ttl_secs: Option<u64>,

    /// Delivery priority hint
    #[serde(default)]
    pub priority: Priority,

    /// Collapse/replacement key for superseding pending messages
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collapse_key: Option<String>,

    /// Transport-specific extras, passed through untouched
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub extra: HashMap<String, Value>,
}
