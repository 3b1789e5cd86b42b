//! Clipboard writers.
//!
//! The default pipes the text into `xclip -selection clipboard`, which keeps
//! serving the selection after this process exits. The native backend writes
//! through `arboard` and needs the `native-clipboard` feature.

use crate::adapters::command::CommandSpec;
use crate::core::ClipboardSink;
use crate::utils::error::Result;
use async_trait::async_trait;

#[derive(Debug, Clone)]
pub struct CommandClipboard {
    command: CommandSpec,
}

impl CommandClipboard {
    pub fn new(command: CommandSpec) -> Self {
        Self { command }
    }
}

impl Default for CommandClipboard {
    fn default() -> Self {
        Self::new(CommandSpec::new("xclip", &["-selection", "clipboard"]))
    }
}

#[async_trait]
impl ClipboardSink for CommandClipboard {
    async fn copy(&self, text: &str) -> Result<()> {
        self.command
            .run_with_stdin(&self.command.args, text.as_bytes())
            .await?;
        tracing::debug!(chars = text.len(), "Copied text to clipboard");
        Ok(())
    }
}

#[cfg(feature = "native-clipboard")]
pub use native::ArboardClipboard;

#[cfg(feature = "native-clipboard")]
mod native {
    use super::*;
    use crate::utils::error::ScanError;
    use arboard::Clipboard;

    #[derive(Debug, Clone, Copy, Default)]
    pub struct ArboardClipboard;

    fn clipboard_error(e: arboard::Error) -> ScanError {
        ScanError::Clipboard {
            message: e.to_string(),
        }
    }

    #[async_trait]
    impl ClipboardSink for ArboardClipboard {
        async fn copy(&self, text: &str) -> Result<()> {
            let text = text.to_string();
            tokio::task::spawn_blocking(move || {
                let mut clipboard = Clipboard::new().map_err(clipboard_error)?;
                clipboard.set_text(text).map_err(clipboard_error)
            })
            .await
            .map_err(|e| ScanError::Clipboard {
                message: e.to_string(),
            })??;
            tracing::debug!("Copied text to native clipboard");
            Ok(())
        }
    }
}

/// Clipboard backend picked from the configuration at startup.
#[derive(Debug, Clone)]
pub enum AnyClipboard {
    Command(CommandClipboard),
    #[cfg(feature = "native-clipboard")]
    Native(ArboardClipboard),
    /// Print-only mode: nothing is written.
    Disabled,
}

#[async_trait]
impl ClipboardSink for AnyClipboard {
    async fn copy(&self, text: &str) -> Result<()> {
        match self {
            AnyClipboard::Command(c) => c.copy(text).await,
            #[cfg(feature = "native-clipboard")]
            AnyClipboard::Native(c) => c.copy(text).await,
            AnyClipboard::Disabled => Ok(()),
        }
    }
}
