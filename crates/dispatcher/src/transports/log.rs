//! LogTransport - records sends via tracing

use async_trait::async_trait;
use tracing::{info, instrument};

use contracts::{
    DeliveryCallback, DeliveryReceipt, PlatformSpec, PushMessage, SendOptions, Transport,
};

/// Transport that logs each send for debugging and reports success.
pub struct LogTransport {
    platform: PlatformSpec,
}

impl LogTransport {
    /// Create a new LogTransport serving the given platform aliases
    pub fn new(platform: impl Into<PlatformSpec>) -> Self {
        Self {
            platform: platform.into(),
        }
    }
}

#[async_trait]
impl Transport for LogTransport {
    fn platform(&self) -> PlatformSpec {
        self.platform.clone()
    }

    #[instrument(
        name = "log_transport_deliver",
        skip(self, message, options, callback),
        fields(platform = %platform, device = %device)
    )]
    async fn deliver(
        &self,
        platform: &str,
        device: &str,
        message: &PushMessage,
        options: &SendOptions,
        callback: DeliveryCallback,
    ) {
        info!(
            platform = %platform,
            device = %device,
            title = ?message.title,
            priority = ?options.priority,
            "Push send received"
        );

        callback(Ok(DeliveryReceipt::new(platform, device)));
    }
}
