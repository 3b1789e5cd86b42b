use crate::core::{BarcodeDecoder, CaptureOutcome, ClipboardSink, Notifier, ScreenCapture};
use crate::domain::model::{Barcode, TypeableLine};
use crate::utils::error::{Result, ScanError};
use std::path::Path;

const SCREENSHOT_FILENAME: &str = "screenshot.png";

/// Runs capture, decode, formatting and clipboard delivery in order.
pub struct ScanEngine<C, D, N, K> {
    capture: C,
    decoder: D,
    notifier: N,
    clipboard: K,
}

impl<C, D, N, K> ScanEngine<C, D, N, K>
where
    C: ScreenCapture,
    D: BarcodeDecoder,
    N: Notifier,
    K: ClipboardSink,
{
    pub fn new(capture: C, decoder: D, notifier: N, clipboard: K) -> Self {
        Self {
            capture,
            decoder,
            notifier,
            clipboard,
        }
    }

    pub async fn run(&self) -> Result<TypeableLine> {
        self.notifier
            .notify("Drag to capture barcode from screen")
            .await?;

        let raw = {
            // 暫存目錄在解碼完成後即刪除
            let workdir = tempfile::Builder::new().prefix("zbarshot-").tempdir()?;
            let image = workdir.path().join(SCREENSHOT_FILENAME);
            tracing::debug!("Capturing screen region to {}", image.display());

            let outcome = self.capture.capture(&image).await?;
            if outcome == CaptureOutcome::Cancelled || !image.is_file() {
                return self.fail(ScanError::CaptureCancelled).await;
            }

            self.decode(&image).await?
        };

        self.deliver(&raw).await
    }

    /// Scans an image that already exists on disk.
    pub async fn run_on_image(&self, image: &Path) -> Result<TypeableLine> {
        if !image.is_file() {
            return Err(ScanError::IoError(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("{} is not a file", image.display()),
            )));
        }
        let raw = self.decode(image).await?;
        self.deliver(&raw).await
    }

    /// Converts a barcode typed by the user, skipping capture and decoding.
    pub async fn convert(&self, raw: &str) -> Result<TypeableLine> {
        self.deliver(raw.trim()).await
    }

    async fn decode(&self, image: &Path) -> Result<String> {
        match self.decoder.decode(image).await? {
            Some(raw) if !raw.is_empty() => {
                tracing::debug!("Decoded {} characters", raw.len());
                Ok(raw)
            }
            _ => self.fail(ScanError::NoBarcodeDetected).await,
        }
    }

    async fn deliver(&self, raw: &str) -> Result<TypeableLine> {
        let barcode = match Barcode::parse(raw) {
            Ok(barcode) => barcode,
            Err(e) => return self.fail(e).await,
        };
        tracing::info!("🔎 {:?} barcode: {}", barcode.kind(), barcode);

        let line = barcode.typeable_line()?;
        self.clipboard.copy(line.as_str()).await?;
        self.notifier
            .notify(&format!("Scanned barcode to clipboard: {}", line))
            .await?;

        Ok(line)
    }

    /// Tells the user about a recoverable failure, then returns it.
    async fn fail<T>(&self, error: ScanError) -> Result<T> {
        tracing::warn!("{}", error);
        self.notifier.notify(&error.to_string()).await?;
        Err(error)
    }
}
