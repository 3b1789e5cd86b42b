use crate::adapters::command::{CommandSpec, FILE_PLACEHOLDER};
use crate::core::{CaptureOutcome, ScreenCapture};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::Path;

/// Region capture through an interactive screenshot tool such as `gnome-screenshot -a`.
///
/// The tool exits successfully even when the user presses Escape, so a missing
/// output file is what tells a cancellation apart from a capture.
#[derive(Debug, Clone)]
pub struct CommandCapture {
    command: CommandSpec,
}

impl CommandCapture {
    pub fn new(command: CommandSpec) -> Self {
        Self { command }
    }
}

impl Default for CommandCapture {
    fn default() -> Self {
        Self::new(CommandSpec::new("gnome-screenshot", &["-a", "-f", FILE_PLACEHOLDER]))
    }
}

#[async_trait]
impl ScreenCapture for CommandCapture {
    async fn capture(&self, target: &Path) -> Result<CaptureOutcome> {
        let target_str = target.to_string_lossy();
        let args = self.command.render_args(FILE_PLACEHOLDER, &target_str);
        self.command.run(&args).await?;

        if target.is_file() {
            tracing::debug!("Screenshot saved to {}", target.display());
            Ok(CaptureOutcome::Captured)
        } else {
            tracing::debug!("User cancelled region selection");
            Ok(CaptureOutcome::Cancelled)
        }
    }
}
