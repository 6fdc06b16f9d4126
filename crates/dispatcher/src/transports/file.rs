//! FileTransport - appends sends to a JSON-lines file

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::json;
use tracing::{error, instrument};

use contracts::{
    DeliveryCallback, DeliveryReceipt, PlatformSpec, PushMessage, SendOptions, Transport,
    TransportError,
};

/// Transport that appends one JSON line per send to a file.
///
/// Useful for development and audit trails. Write failures are reported
/// through the delivery callback like any other delivery error.
pub struct FileTransport {
    platform: PlatformSpec,
    path: PathBuf,
    file: Mutex<File>,
}

impl FileTransport {
    /// Create a new FileTransport appending to `path`.
    ///
    /// The parent directory is created if it does not exist.
    ///
    /// # Errors
    /// Returns the IO error if the directory or file cannot be created.
    pub fn new(
        platform: impl Into<PlatformSpec>,
        path: impl Into<PathBuf>,
    ) -> std::io::Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let file = OpenOptions::new().create(true).append(true).open(&path)?;

        Ok(Self {
            platform: platform.into(),
            path,
            file: Mutex::new(file),
        })
    }

    /// Path the transport appends to
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn append_record(
        &self,
        platform: &str,
        device: &str,
        message: &PushMessage,
        options: &SendOptions,
    ) -> Result<(), TransportError> {
        let record = json!({
            "platform": platform,
            "device": device,
            "message": message,
            "options": options,
        });
        let line = serde_json::to_string(&record)?;

        // A poisoned lock still holds a usable file handle.
        let mut file = match self.file.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        writeln!(file, "{line}")?;
        Ok(())
    }
}

#[async_trait]
impl Transport for FileTransport {
    fn platform(&self) -> PlatformSpec {
        self.platform.clone()
    }

    #[instrument(
        name = "file_transport_deliver",
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
        match self.append_record(platform, device, message, options) {
            Ok(()) => callback(Ok(DeliveryReceipt::new(platform, device))),
            Err(e) => {
                error!(
                    platform = %platform,
                    path = %self.path.display(),
                    error = %e,
                    "Append failed"
                );
                callback(Err(e));
            }
        }
    }
}
