pub mod engine;
pub mod layout;
pub mod mod10;
pub mod typeable;

pub use crate::domain::model::{Barcode, BarcodeKind, TypeableLine};
pub use crate::domain::ports::{
    BarcodeDecoder, CaptureOutcome, ClipboardSink, Notifier, ScreenCapture,
};
pub use crate::utils::error::Result;
