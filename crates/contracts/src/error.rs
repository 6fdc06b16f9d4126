//! Delivery-side error definitions
//!
//! Errors a transport reports through the delivery callback. Registration
//! and routing errors live in the dispatcher crate; they are a different
//! channel entirely.

use thiserror::Error;

/// Transport delivery error
///
/// The dispatcher never constructs or inspects these. They exist so every
/// transport shares one vocabulary when reporting a failed delivery through
/// its callback.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Provider rejected or failed the delivery
    #[error("transport '{transport}' delivery error: {message}")]
    Delivery { transport: String, message: String },

    /// Payload could not be serialized for the wire
    #[error("payload serialize error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// IO error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl TransportError {
    /// Create a delivery error
    pub fn delivery(transport: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Delivery {
            transport: transport.into(),
            message: message.into(),
        }
    }
}
