use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureOutcome {
    Captured,
    /// The user dismissed the region selection; no image was written.
    Cancelled,
}

#[async_trait]
pub trait ScreenCapture: Send + Sync {
    /// Lets the user pick a screen region and writes it as an image to `target`.
    async fn capture(&self, target: &Path) -> Result<CaptureOutcome>;
}

#[async_trait]
pub trait BarcodeDecoder: Send + Sync {
    /// `Ok(None)` means the image was read but holds no barcode.
    async fn decode(&self, image: &Path) -> Result<Option<String>>;
}

#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, message: &str) -> Result<()>;
}

#[async_trait]
pub trait ClipboardSink: Send + Sync {
    async fn copy(&self, text: &str) -> Result<()>;
}
