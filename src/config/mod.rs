#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "zbarshot")]
#[command(version, about = "Scan a payment slip barcode from the screen into the clipboard")]
pub struct CliConfig {
    #[arg(short, long, help = "TOML configuration file")]
    pub config: Option<PathBuf>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,

    #[arg(long, help = "Do not send desktop notifications")]
    pub no_notify: bool,

    #[arg(long, help = "Print the typeable line instead of copying it")]
    pub print_only: bool,

    #[command(subcommand)]
    pub command: Option<ScanCommand>,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum ScanCommand {
    /// Capture a screen region and scan it (default)
    Scan,
    /// Scan an existing image file
    Image { path: PathBuf },
    /// Convert a 44-digit barcode given on the command line
    Line { barcode: String },
}
