pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::{CliConfig, ScanCommand};

pub use crate::config::toml_config::ScanConfig;
pub use crate::core::engine::ScanEngine;
pub use crate::core::mod10::{append_mod10_digit, mod10_digit};
pub use crate::core::typeable::typeable_line_from_barcode;
pub use crate::domain::model::{Barcode, BarcodeKind, TypeableLine};
pub use crate::utils::error::{Result, ScanError};
