//! # Integration Tests
//!
//! End-to-end tests across the contracts and dispatcher crates:
//! registration fan-out, send routing, callback plumbing, and concurrent
//! dispatch against a shared registry.

#[cfg(test)]
mod contract_tests {
    use contracts::{PlatformSpec, PushMessage, SendOptions};

    #[test]
    fn test_contracts_compile() {
        let _ = PlatformSpec::from("ios");
        let _ = PushMessage::new();
        let _ = SendOptions::default();
    }
}

#[cfg(test)]
mod e2e_tests {
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use contracts::{
        DeliveryCallback, DeliveryReceipt, PlatformSpec, PushMessage, SendOptions, Transport,
    };
    use dispatcher::{Dispatcher, FileTransport, LogTransport};

    /// Transport that records every (platform, device) pair it delivers
    struct RecordingTransport {
        platform: PlatformSpec,
        sends: Mutex<Vec<(String, String)>>,
    }

    impl RecordingTransport {
        fn new(platform: impl Into<PlatformSpec>) -> Arc<Self> {
            Arc::new(Self {
                platform: platform.into(),
                sends: Mutex::new(Vec::new()),
            })
        }

        fn sends(&self) -> Vec<(String, String)> {
            self.sends.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Transport for RecordingTransport {
        fn platform(&self) -> PlatformSpec {
            self.platform.clone()
        }

        async fn deliver(
            &self,
            platform: &str,
            device: &str,
            _message: &PushMessage,
            _options: &SendOptions,
            callback: DeliveryCallback,
        ) {
            self.sends
                .lock()
                .unwrap()
                .push((platform.to_string(), device.to_string()));
            callback(Ok(DeliveryReceipt::new(platform, device)));
        }
    }

    /// End-to-end: register two transports, route by alias, observe the
    /// callback outcome.
    #[tokio::test]
    async fn test_e2e_register_and_route() {
        let mut push = Dispatcher::new();
        let apple = RecordingTransport::new(["iOS", "APNs"]);
        let android = RecordingTransport::new("android");

        push.add_transport(apple.clone())
            .unwrap()
            .add_transport(android.clone())
            .unwrap();

        assert_eq!(push.len(), 3);

        let receipts = Arc::new(AtomicU64::new(0));
        let seen = Arc::clone(&receipts);
        let callback: DeliveryCallback = Arc::new(move |outcome| {
            let receipt = outcome.unwrap();
            assert_eq!(receipt.platform, "apns");
            seen.fetch_add(1, Ordering::Relaxed);
        });

        let message = PushMessage::new().title("hello").body("world!");
        push.send_with_callback("APNS", "device-1", &message, callback)
            .await
            .unwrap();
        push.send_to("ANDROID", "device-2", &message).await.unwrap();

        assert_eq!(receipts.load(Ordering::Relaxed), 1);
        assert_eq!(apple.sends(), vec![("apns".to_string(), "device-1".to_string())]);
        assert_eq!(
            android.sends(),
            vec![("android".to_string(), "device-2".to_string())]
        );
    }

    /// A registered dispatcher behind an Arc serves concurrent sends.
    #[tokio::test]
    async fn test_concurrent_sends_share_registry() {
        let mut push = Dispatcher::new();
        let transport = RecordingTransport::new(["sns", "apns", "apple"]);
        push.add_transport(transport.clone()).unwrap();

        let push = Arc::new(push);
        let mut handles = Vec::new();

        for i in 0..16 {
            let push = Arc::clone(&push);
            handles.push(tokio::spawn(async move {
                let alias = ["SNS", "Apns", "APPLE", "sns"][i % 4];
                let message = PushMessage::new().title(format!("msg-{i}"));
                push.send_to(alias, &format!("device-{i}"), &message)
                    .await
                    .map(|_| ())
            }));
        }

        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let sends = transport.sends();
        assert_eq!(sends.len(), 16);
        // Every send resolved through a normalized key.
        assert!(sends
            .iter()
            .all(|(platform, _)| ["sns", "apns", "apple"].contains(&platform.as_str())));
    }

    /// Bundled transports plug in like any caller-supplied one.
    #[tokio::test]
    async fn test_e2e_bundled_transports() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("audit.jsonl");

        let mut push = Dispatcher::new();
        push.add_transport(Arc::new(LogTransport::new("ios")))
            .unwrap()
            .add_transport(Arc::new(FileTransport::new("android", &path).unwrap()))
            .unwrap();

        let message = PushMessage::new()
            .title("hello")
            .data(serde_json::json!({ "badge": 1 }));

        push.send_to("iOS", "device-a", &message).await.unwrap();
        push.send_to("Android", "device-b", &message).await.unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 1);

        let record: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(record["platform"], "android");
        assert_eq!(record["device"], "device-b");
        assert_eq!(record["message"]["data"]["badge"], 1);
    }

    /// Routing failures surface before any transport runs, and delivery
    /// outcomes never surface through send's return value.
    #[tokio::test]
    async fn test_error_channels_stay_separate() {
        let mut push = Dispatcher::new();
        let transport = RecordingTransport::new("sns");
        push.add_transport(transport.clone()).unwrap();

        let err = push
            .send_to("fcm", "device-1", &PushMessage::new())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "cannot send to unsupported platform fcm");
        assert!(transport.sends().is_empty());

        // A successful route returns Ok regardless of what the callback saw.
        push.send_to("sns", "device-1", &PushMessage::new())
            .await
            .unwrap();
        assert_eq!(transport.sends().len(), 1);
    }
}
