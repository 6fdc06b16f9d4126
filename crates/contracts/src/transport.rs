//! Transport trait - pluggable delivery backend interface
//!
//! Defines the abstract interface every push backend implements, decoupling
//! the dispatcher from concrete providers (APNs, FCM, SNS, ...). The
//! dispatcher only ever calls through this trait, never inspects backend
//! internals.

use std::sync::Arc;

use async_trait::async_trait;

use crate::{PlatformSpec, PushMessage, SendOptions, TransportError};

/// Successful delivery report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryReceipt {
    /// Normalized platform the send was routed through
    pub platform: String,
    /// Device identifier the message was addressed to
    pub device: String,
    /// Provider-assigned message id, when one exists
    pub message_id: Option<String>,
}

impl DeliveryReceipt {
    /// Create a receipt without a provider message id
    pub fn new(platform: impl Into<String>, device: impl Into<String>) -> Self {
        Self {
            platform: platform.into(),
            device: device.into(),
            message_id: None,
        }
    }
}

/// Outcome of one delivery attempt.
pub type DeliveryResult = Result<DeliveryReceipt, TransportError>;

/// Delivery completion callback type
///
/// The transport invokes this callback with the delivery outcome. Uses
/// `Arc` so the callback can be forwarded into spawned delivery tasks and
/// shared across contexts.
pub type DeliveryCallback = Arc<dyn Fn(DeliveryResult) + Send + Sync>;

/// Shared stateless no-op completion callback.
///
/// The dispatcher substitutes this when the caller supplies no callback,
/// so transports can always invoke one unconditionally.
pub fn noop_callback() -> DeliveryCallback {
    Arc::new(|_outcome| {})
}

/// Pluggable push delivery backend.
///
/// All transport implementations must implement this trait. The dispatcher
/// stores transports as `Arc<dyn Transport>`, so one instance may serve
/// many platform aliases.
///
/// # Contract
///
/// 1. `platform()` is read exactly once, at registration time
/// 2. `deliver` must eventually invoke `callback` exactly once with the
///    outcome, synchronously or from a spawned task; the dispatcher does
///    not enforce this, but a transport that skips it silently loses the
///    send outcome
/// 3. Delivery failures travel only through the callback, never as a
///    return value
#[async_trait]
pub trait Transport: Send + Sync {
    /// Platform aliases this transport serves
    fn platform(&self) -> PlatformSpec;

    /// Deliver one message.
    ///
    /// `platform` is the normalized (lowercase) name the send resolved
    /// through; `device`, `message` and `options` arrive exactly as the
    /// dispatcher normalized them.
    async fn deliver(
        &self,
        platform: &str,
        device: &str,
        message: &PushMessage,
        options: &SendOptions,
        callback: DeliveryCallback,
    );
}
