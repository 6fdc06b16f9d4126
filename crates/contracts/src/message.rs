//! PushMessage - opaque notification payload

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Push notification payload.
///
/// Opaque to the dispatcher: it is forwarded to the resolved transport
/// exactly as received, with no validation or transformation. Field
/// interpretation belongs entirely to the transport.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PushMessage {
    /// Notification title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Notification body text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,

    /// Free-form provider-specific payload
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub data: Value,
}

impl PushMessage {
    /// Create an empty message
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the title
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the body text
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Attach a free-form payload
    pub fn data(mut self, data: Value) -> Self {
        self.data = data;
        self
    }
}
