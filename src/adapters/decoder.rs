use crate::adapters::command::{CommandSpec, FILE_PLACEHOLDER};
use crate::core::BarcodeDecoder;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::Path;

/// Exit status zbarimg uses when it read the image but found no symbol.
pub const ZBAR_NO_BARCODE_EXIT_CODE: i32 = 4;

#[derive(Debug, Clone)]
pub struct ZbarDecoder {
    command: CommandSpec,
    no_barcode_exit_code: i32,
}

impl ZbarDecoder {
    pub fn new(command: CommandSpec, no_barcode_exit_code: i32) -> Self {
        Self {
            command,
            no_barcode_exit_code,
        }
    }
}

impl Default for ZbarDecoder {
    fn default() -> Self {
        Self::new(
            CommandSpec::new("zbarimg", &["-q", "--raw", FILE_PLACEHOLDER]),
            ZBAR_NO_BARCODE_EXIT_CODE,
        )
    }
}

/// Reads tool output as ASCII; anything else becomes U+FFFD.
fn ascii_lossy(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|&b| if b.is_ascii() { b as char } else { char::REPLACEMENT_CHARACTER })
        .collect()
}

#[async_trait]
impl BarcodeDecoder for ZbarDecoder {
    async fn decode(&self, image: &Path) -> Result<Option<String>> {
        let image_str = image.to_string_lossy();
        let args = self.command.render_args(FILE_PLACEHOLDER, &image_str);
        let output = self.command.output(&args).await?;

        if output.status.code() == Some(self.no_barcode_exit_code) {
            return Ok(None);
        }
        if !output.status.success() {
            return Err(self.command.failure(&output));
        }

        let decoded = ascii_lossy(&output.stdout).trim().to_string();
        if decoded.is_empty() {
            Ok(None)
        } else {
            Ok(Some(decoded))
        }
    }
}
