use crate::adapters::command::{CommandSpec, MESSAGE_PLACEHOLDER};
use crate::core::Notifier;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Desktop notifications through `notify-send`. Every message is echoed to stdout too.
///
/// A notification that fails to send is an error; the scan stops there.
#[derive(Debug, Clone)]
pub struct CommandNotifier {
    command: CommandSpec,
}

impl CommandNotifier {
    pub fn new(command: CommandSpec) -> Self {
        Self { command }
    }
}

impl Default for CommandNotifier {
    fn default() -> Self {
        Self::new(CommandSpec::new("notify-send", &[MESSAGE_PLACEHOLDER]))
    }
}

#[async_trait]
impl Notifier for CommandNotifier {
    async fn notify(&self, message: &str) -> Result<()> {
        println!("{}", message);
        let args = self.command.render_args(MESSAGE_PLACEHOLDER, message);
        self.command.run(&args).await?;
        Ok(())
    }
}

/// Echoes messages without touching the desktop.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuietNotifier;

#[async_trait]
impl Notifier for QuietNotifier {
    async fn notify(&self, message: &str) -> Result<()> {
        println!("{}", message);
        Ok(())
    }
}

/// Either notifier, picked from the configuration at startup.
#[derive(Debug, Clone)]
pub enum AnyNotifier {
    Desktop(CommandNotifier),
    Quiet(QuietNotifier),
}

#[async_trait]
impl Notifier for AnyNotifier {
    async fn notify(&self, message: &str) -> Result<()> {
        match self {
            AnyNotifier::Desktop(n) => n.notify(message).await,
            AnyNotifier::Quiet(n) => n.notify(message).await,
        }
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::utils::error::ScanError;

    #[tokio::test]
    async fn test_message_is_substituted() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("note.txt");
        let script = format!("printf '%s' \"$1\" > '{}'", target.display());
        let notifier = CommandNotifier::new(CommandSpec::new(
            "sh",
            &["-c", &script, "sh", MESSAGE_PLACEHOLDER],
        ));

        notifier.notify("No barcode found").await.unwrap();
        assert_eq!(std::fs::read_to_string(&target).unwrap(), "No barcode found");
    }

    #[tokio::test]
    async fn test_failed_notification_is_fatal() {
        let notifier = AnyNotifier::Desktop(CommandNotifier::new(CommandSpec::new("false", &[])));
        let err = notifier.notify("hello").await.unwrap_err();
        assert!(matches!(err, ScanError::CommandFailed { .. }));
    }

    #[tokio::test]
    async fn test_quiet_notifier_never_fails() {
        assert!(AnyNotifier::Quiet(QuietNotifier).notify("hello").await.is_ok());
    }
}
