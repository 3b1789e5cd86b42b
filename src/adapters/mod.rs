// Adapters layer: external programs behind the domain ports
// (capture, decoder, notifier, clipboard).

pub mod capture;
pub mod clipboard;
pub mod command;
pub mod decoder;
pub mod notifier;

pub use capture::CommandCapture;
pub use clipboard::{AnyClipboard, CommandClipboard};
pub use command::CommandSpec;
pub use decoder::ZbarDecoder;
pub use notifier::{AnyNotifier, CommandNotifier, QuietNotifier};
