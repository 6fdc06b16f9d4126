//! Push Demo
//!
//! Wires a dispatcher with the bundled log and file transports and routes a
//! few sends through it. No provider credentials required.
//!
//! Run with: cargo run --bin push_demo

use std::sync::Arc;

use anyhow::Result;
use contracts::{DeliveryCallback, PushMessage, SendOptions};
use dispatcher::{Dispatcher, FileTransport, LogTransport};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!("Starting push demo");

    // ==== Stage 1: Register transports ====
    let mut push = Dispatcher::new();
    push.add_transport(Arc::new(LogTransport::new(["iOS", "APNs"])))?
        .add_transport(Arc::new(FileTransport::new(
            "android",
            "./output/sends.jsonl",
        )?))?;

    tracing::info!(
        platforms = ?push.platforms(),
        "Transports registered"
    );

    // ==== Stage 2: Route sends ====
    let message = PushMessage::new()
        .title("hello")
        .body("world!")
        .data(serde_json::json!({ "badge": 1 }));

    // Minimal form: no options, no callback.
    push.send_to("IOS", "device-ios-1", &message).await?;

    // With a completion callback.
    let callback: DeliveryCallback = Arc::new(|outcome| match outcome {
        Ok(receipt) => tracing::info!(
            platform = %receipt.platform,
            device = %receipt.device,
            "Delivery confirmed"
        ),
        Err(e) => tracing::error!(error = %e, "Delivery failed"),
    });
    push.send_with_callback("apns", "device-ios-2", &message, callback)
        .await?;

    // Full form with explicit options.
    let options = SendOptions {
        ttl_secs: Some(3600),
        ..SendOptions::default()
    };
    push.send("Android", "device-android-1", &message, Some(options), None)
        .await?;

    tracing::info!("Demo complete, android sends appended to ./output/sends.jsonl");
    Ok(())
}
