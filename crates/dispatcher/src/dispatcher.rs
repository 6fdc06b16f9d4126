//! Dispatcher - transport registry and send routing

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, instrument};

use contracts::{noop_callback, DeliveryCallback, PushMessage, SendOptions, Transport};

use crate::error::DispatchError;

/// Routes push sends to registered transports by platform name.
///
/// The registry maps normalized (lowercase) platform names to shared
/// transport references. It starts empty, grows only through
/// [`add_transport`](Self::add_transport), and never shrinks.
///
/// # Concurrency
///
/// Registration takes `&mut self`, so it is exclusive by construction.
/// `send` takes `&self` and only reads the registry: once registration is
/// complete, a `Dispatcher` wrapped in `Arc` serves concurrent sends from
/// many tasks. Complete all registration before sharing.
#[derive(Default)]
pub struct Dispatcher {
    registry: HashMap<String, Arc<dyn Transport>>,
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("platforms", &self.registry.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl Dispatcher {
    /// Create an empty dispatcher
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a transport under every alias it declares.
    ///
    /// Aliases are read once from `transport.platform()` and committed one
    /// at a time, in declaration order, each folded to lowercase. Every
    /// alias of one call maps to the same shared instance.
    ///
    /// Commits are sequential, not atomic: when a later alias fails,
    /// aliases committed earlier in the same call stay registered.
    ///
    /// Returns the dispatcher itself, so registrations chain.
    ///
    /// # Errors
    /// - [`DispatchError::InvalidPlatformName`] for a blank alias
    /// - [`DispatchError::AlreadyConfigured`] if an alias is already
    ///   claimed, case-insensitively; the message carries the alias as the
    ///   caller supplied it, not the folded key
    pub fn add_transport(
        &mut self,
        transport: Arc<dyn Transport>,
    ) -> Result<&mut Self, DispatchError> {
        let spec = transport.platform();

        for alias in spec.iter() {
            if alias.trim().is_empty() {
                return Err(DispatchError::InvalidPlatformName);
            }

            let key = alias.to_lowercase();

            if self.registry.contains_key(&key) {
                return Err(DispatchError::already_configured(alias));
            }

            debug!(platform = %key, "Transport registered");
            self.registry.insert(key, Arc::clone(&transport));
        }

        Ok(self)
    }

    /// Resolve `platform` and forward one send to its transport.
    ///
    /// `platform` matches case-insensitively; `device` and `message` pass
    /// through unchanged. An absent `options` normalizes to
    /// [`SendOptions::default()`]; an absent `callback` becomes the shared
    /// no-op, so the transport always has one to invoke.
    ///
    /// The call returns once the transport's `deliver` invocation returns.
    /// The delivery outcome is reported only through the callback; the
    /// dispatcher never waits for, inspects, or transforms it, and performs
    /// no retry and no payload validation.
    ///
    /// # Errors
    /// [`DispatchError::UnsupportedPlatform`] when nothing is registered
    /// for the platform; no transport is invoked in that case.
    #[instrument(
        name = "dispatcher_send",
        skip(self, message, options, callback),
        fields(platform = %platform, device = %device)
    )]
    pub async fn send(
        &self,
        platform: &str,
        device: &str,
        message: &PushMessage,
        options: Option<SendOptions>,
        callback: Option<DeliveryCallback>,
    ) -> Result<&Self, DispatchError> {
        let key = platform.to_lowercase();
        let transport = self
            .registry
            .get(&key)
            .ok_or_else(|| DispatchError::unsupported_platform(platform))?;

        let options = options.unwrap_or_default();
        let callback = callback.unwrap_or_else(noop_callback);

        transport
            .deliver(&key, device, message, &options, callback)
            .await;

        Ok(self)
    }

    /// Send with no options and no callback
    pub async fn send_to(
        &self,
        platform: &str,
        device: &str,
        message: &PushMessage,
    ) -> Result<&Self, DispatchError> {
        self.send(platform, device, message, None, None).await
    }

    /// Send with a completion callback but default options
    pub async fn send_with_callback(
        &self,
        platform: &str,
        device: &str,
        message: &PushMessage,
        callback: DeliveryCallback,
    ) -> Result<&Self, DispatchError> {
        self.send(platform, device, message, None, Some(callback))
            .await
    }

    /// Look up the transport registered for `platform`, case-insensitively
    pub fn transport(&self, platform: &str) -> Option<&Arc<dyn Transport>> {
        self.registry.get(&platform.to_lowercase())
    }

    /// Whether a transport is registered for `platform`, case-insensitively
    pub fn contains(&self, platform: &str) -> bool {
        self.registry.contains_key(&platform.to_lowercase())
    }

    /// Number of registered aliases
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    /// Whether no alias is registered
    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    /// Registered normalized platform names, in no particular order
    pub fn platforms(&self) -> Vec<&str> {
        self.registry.keys().map(String::as_str).collect()
    }
}
