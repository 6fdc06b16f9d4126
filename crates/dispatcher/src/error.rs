//! Dispatcher error types

use thiserror::Error;

/// Registration and routing errors
///
/// Returned synchronously by `add_transport` and `send`. Delivery failures
/// never appear here; transports report those through the delivery
/// callback only.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// A blank platform alias was supplied at registration
    #[error("platform name must be a non-empty string")]
    InvalidPlatformName,

    /// The alias is already claimed, case-insensitively
    #[error("platform {platform} is already configured")]
    AlreadyConfigured { platform: String },

    /// No transport is registered for the requested platform
    #[error("cannot send to unsupported platform {platform}")]
    UnsupportedPlatform { platform: String },
}

impl DispatchError {
    /// Create an alias-conflict error, keeping the caller's original casing
    pub fn already_configured(platform: impl Into<String>) -> Self {
        Self::AlreadyConfigured {
            platform: platform.into(),
        }
    }

    /// Create a routing error, keeping the caller's original casing
    pub fn unsupported_platform(platform: impl Into<String>) -> Self {
        Self::UnsupportedPlatform {
            platform: platform.into(),
        }
    }
}
