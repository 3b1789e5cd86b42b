use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Barcode scan operation canceled")]
    CaptureCancelled,

    #[error("No barcode found")]
    NoBarcodeDetected,

    #[error("Bad barcode or incorrect scan: '{value}'")]
    MalformedBarcode { value: String },

    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("Failed to run '{program}': {source}")]
    CommandSpawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{program}' exited with {}: {stderr}", describe_exit(.code))]
    CommandFailed {
        program: String,
        code: Option<i32>,
        stderr: String,
    },

    #[error("Clipboard error: {message}")]
    Clipboard { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, ScanError>;

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {}", code),
        None => "a signal".to_string(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// 使用者操作 (取消、掃描不到條碼)
    User,
    /// 條碼內容不符格式
    Data,
    /// 外部工具或 IO
    System,
    Configuration,
    /// 程式契約被違反
    Internal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ScanError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::CaptureCancelled | Self::NoBarcodeDetected => ErrorCategory::User,
            Self::MalformedBarcode { .. } => ErrorCategory::Data,
            Self::InvalidInput { .. } => ErrorCategory::Internal,
            Self::CommandSpawn { .. }
            | Self::CommandFailed { .. }
            | Self::Clipboard { .. }
            | Self::IoError(_) => ErrorCategory::System,
            Self::ConfigError { .. }
            | Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::User => ErrorSeverity::Low,
            ErrorCategory::Data => ErrorSeverity::Medium,
            ErrorCategory::System | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Internal => ErrorSeverity::Critical,
        }
    }

    /// Process exit status for this error. Each recoverable condition has its own code.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::CaptureCancelled => 1,
            Self::MalformedBarcode { .. } => 2,
            Self::NoBarcodeDetected => 4,
            Self::InvalidInput { .. } => 70,
            _ => match self.category() {
                ErrorCategory::Configuration => 78,
                _ => 3,
            },
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::CaptureCancelled | Self::NoBarcodeDetected | Self::MalformedBarcode { .. } => {
                self.to_string()
            }
            Self::CommandSpawn { program, .. } => {
                format!("Could not start '{}', is it installed?", program)
            }
            Self::CommandFailed { program, .. } => format!("'{}' reported an error", program),
            Self::Clipboard { .. } => "Could not write to the clipboard".to_string(),
            Self::IoError(e) => format!("File system error: {}", e),
            Self::InvalidInput { .. } => format!("Internal error: {}", self),
            Self::ConfigError { .. }
            | Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. } => format!("Invalid configuration: {}", self),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::CaptureCancelled => "Run the command again and drag over the barcode",
            Self::NoBarcodeDetected => {
                "Select a tighter region around the barcode, or zoom in before capturing"
            }
            Self::MalformedBarcode { .. } => {
                "Make sure the whole barcode is inside the selection; payment slips have 44 digits"
            }
            Self::CommandSpawn { .. } => {
                "Install the tool or point the configuration file at another program"
            }
            Self::CommandFailed { .. } => "Run with --verbose to see the tool's output",
            Self::Clipboard { .. } => "Use --print-only and copy the line by hand",
            Self::IoError(_) => "Check that the temporary directory is writable",
            Self::InvalidInput { .. } => "Please report this as a bug",
            Self::ConfigError { .. }
            | Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. } => "Fix the configuration file and try again",
        }
    }
}
