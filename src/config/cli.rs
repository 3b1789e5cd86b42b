use crate::adapters::{
    AnyClipboard, AnyNotifier, CommandCapture, CommandClipboard, CommandNotifier, QuietNotifier,
    ZbarDecoder,
};
use crate::config::toml_config::{ScanConfig, CLIPBOARD_BACKEND_NATIVE};
use crate::config::CliConfig;
use crate::core::engine::ScanEngine;
use crate::utils::error::Result;
use std::path::PathBuf;

pub type CliEngine = ScanEngine<CommandCapture, ZbarDecoder, AnyNotifier, AnyClipboard>;

/// `$XDG_CONFIG_HOME/zbarshot/config.toml` or the platform equivalent.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("zbarshot").join("config.toml"))
}

impl CliConfig {
    /// Loads `--config`, else the default file when it exists, else built-in defaults.
    pub fn load_scan_config(&self) -> Result<ScanConfig> {
        if let Some(path) = &self.config {
            tracing::info!("📁 Loading configuration from: {}", path.display());
            return ScanConfig::from_file(path);
        }

        match default_config_path() {
            Some(path) if path.is_file() => {
                tracing::info!("📁 Loading configuration from: {}", path.display());
                ScanConfig::from_file(&path)
            }
            _ => {
                tracing::debug!("No configuration file, using defaults");
                Ok(ScanConfig::default())
            }
        }
    }

    /// 依照配置組裝各個 adapter
    pub fn build_engine(&self, config: &ScanConfig) -> Result<CliEngine> {
        let capture = CommandCapture::new(config.capture_command());
        let decoder = ZbarDecoder::new(config.decoder_command(), config.no_barcode_exit_code());

        let notifier = if self.no_notify || !config.notify_enabled() {
            AnyNotifier::Quiet(QuietNotifier)
        } else {
            AnyNotifier::Desktop(CommandNotifier::new(config.notify_command()))
        };

        let clipboard = if self.print_only {
            AnyClipboard::Disabled
        } else {
            clipboard_backend(config)?
        };

        Ok(ScanEngine::new(capture, decoder, notifier, clipboard))
    }
}

#[cfg(feature = "native-clipboard")]
fn clipboard_backend(config: &ScanConfig) -> Result<AnyClipboard> {
    if config.clipboard_backend() == CLIPBOARD_BACKEND_NATIVE {
        return Ok(AnyClipboard::Native(
            crate::adapters::clipboard::ArboardClipboard,
        ));
    }
    Ok(AnyClipboard::Command(CommandClipboard::new(
        config.clipboard_command(),
    )))
}

#[cfg(not(feature = "native-clipboard"))]
fn clipboard_backend(config: &ScanConfig) -> Result<AnyClipboard> {
    if config.clipboard_backend() == CLIPBOARD_BACKEND_NATIVE {
        return Err(crate::utils::error::ScanError::InvalidConfigValueError {
            field: "clipboard.backend".to_string(),
            value: CLIPBOARD_BACKEND_NATIVE.to_string(),
            reason: "zbarshot was built without the native-clipboard feature".to_string(),
        });
    }
    Ok(AnyClipboard::Command(CommandClipboard::new(
        config.clipboard_command(),
    )))
}
