use crate::adapters::command::{CommandSpec, FILE_PLACEHOLDER, MESSAGE_PLACEHOLDER};
use crate::adapters::decoder::ZBAR_NO_BARCODE_EXIT_CODE;
use crate::utils::error::{Result, ScanError};
use crate::utils::validation::{
    validate_args, validate_one_of, validate_program, validate_range, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const CLIPBOARD_BACKEND_COMMAND: &str = "command";
pub const CLIPBOARD_BACKEND_NATIVE: &str = "native";

#[cfg(feature = "native-clipboard")]
const CLIPBOARD_BACKENDS: &[&str] = &[CLIPBOARD_BACKEND_COMMAND, CLIPBOARD_BACKEND_NATIVE];
#[cfg(not(feature = "native-clipboard"))]
const CLIPBOARD_BACKENDS: &[&str] = &[CLIPBOARD_BACKEND_COMMAND];

/// Tool configuration. Every section and key is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    pub capture: CaptureConfig,
    pub decoder: DecoderConfig,
    pub notify: NotifyConfig,
    pub clipboard: ClipboardConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CaptureConfig {
    pub program: Option<String>,
    pub args: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DecoderConfig {
    pub program: Option<String>,
    pub args: Option<Vec<String>>,
    pub no_barcode_exit_code: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NotifyConfig {
    pub enabled: Option<bool>,
    pub program: Option<String>,
    pub args: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClipboardConfig {
    pub backend: Option<String>,
    pub program: Option<String>,
    pub args: Option<Vec<String>>,
}

fn command_or(
    program: &Option<String>,
    args: &Option<Vec<String>>,
    default: CommandSpec,
) -> CommandSpec {
    match (program, args) {
        (None, None) => default,
        // 換了程式但沒給參數時，不沿用預設程式的參數
        (Some(program), None) => CommandSpec {
            program: program.clone(),
            args: Vec::new(),
        },
        (program, Some(args)) => CommandSpec {
            program: program.clone().unwrap_or(default.program),
            args: args.clone(),
        },
    }
}

impl ScanConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ScanError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ScanError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${HOME})，未設定的變數保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}")
            .map_err(|e| ScanError::config(format!("invalid substitution pattern: {}", e)))?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn capture_command(&self) -> CommandSpec {
        command_or(
            &self.capture.program,
            &self.capture.args,
            CommandSpec::new("gnome-screenshot", &["-a", "-f", FILE_PLACEHOLDER]),
        )
    }

    pub fn decoder_command(&self) -> CommandSpec {
        command_or(
            &self.decoder.program,
            &self.decoder.args,
            CommandSpec::new("zbarimg", &["-q", "--raw", FILE_PLACEHOLDER]),
        )
    }

    pub fn no_barcode_exit_code(&self) -> i32 {
        self.decoder
            .no_barcode_exit_code
            .unwrap_or(ZBAR_NO_BARCODE_EXIT_CODE)
    }

    pub fn notify_enabled(&self) -> bool {
        self.notify.enabled.unwrap_or(true)
    }

    pub fn notify_command(&self) -> CommandSpec {
        command_or(
            &self.notify.program,
            &self.notify.args,
            CommandSpec::new("notify-send", &[MESSAGE_PLACEHOLDER]),
        )
    }

    pub fn clipboard_backend(&self) -> &str {
        self.clipboard
            .backend
            .as_deref()
            .unwrap_or(CLIPBOARD_BACKEND_COMMAND)
    }

    pub fn clipboard_command(&self) -> CommandSpec {
        command_or(
            &self.clipboard.program,
            &self.clipboard.args,
            CommandSpec::new("xclip", &["-selection", "clipboard"]),
        )
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        let commands = [
            ("capture", self.capture_command()),
            ("decoder", self.decoder_command()),
            ("notify", self.notify_command()),
            ("clipboard", self.clipboard_command()),
        ];
        for (section, command) in &commands {
            validate_program(&format!("{}.program", section), &command.program)?;
            validate_args(&format!("{}.args", section), &command.args)?;
        }

        validate_range(
            "decoder.no_barcode_exit_code",
            self.no_barcode_exit_code(),
            1,
            255,
        )?;
        validate_one_of("clipboard.backend", self.clipboard_backend(), CLIPBOARD_BACKENDS)?;

        Ok(())
    }
}

impl Validate for ScanConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = ScanConfig::from_toml_str("").unwrap();

        assert_eq!(
            config.capture_command(),
            CommandSpec::new("gnome-screenshot", &["-a", "-f", "{file}"])
        );
        assert_eq!(
            config.decoder_command(),
            CommandSpec::new("zbarimg", &["-q", "--raw", "{file}"])
        );
        assert_eq!(config.no_barcode_exit_code(), 4);
        assert!(config.notify_enabled());
        assert_eq!(config.clipboard_backend(), "command");
        assert_eq!(
            config.clipboard_command(),
            CommandSpec::new("xclip", &["-selection", "clipboard"])
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[capture]
program = "flameshot"
args = ["gui", "--raw", "--path", "{file}"]

[decoder]
args = ["--raw", "{file}"]
no_barcode_exit_code = 4

[notify]
enabled = false

[clipboard]
program = "wl-copy"
"#;

        let config = ScanConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.capture_command().program, "flameshot");
        assert_eq!(config.capture_command().args.len(), 4);
        assert_eq!(
            config.decoder_command(),
            CommandSpec::new("zbarimg", &["--raw", "{file}"])
        );
        assert!(!config.notify_enabled());
        assert_eq!(config.clipboard_command(), CommandSpec::new("wl-copy", &[]));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("ZBARSHOT_TEST_DECODER", "/opt/zbar/bin/zbarimg");

        let toml_content = r#"
[decoder]
program = "${ZBARSHOT_TEST_DECODER}"

[capture]
program = "${ZBARSHOT_TEST_UNSET_VARIABLE}"
"#;

        let config = ScanConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.decoder_command().program, "/opt/zbar/bin/zbarimg");
        assert_eq!(
            config.capture_command().program,
            "${ZBARSHOT_TEST_UNSET_VARIABLE}"
        );

        std::env::remove_var("ZBARSHOT_TEST_DECODER");
    }

    #[test]
    fn test_config_validation() {
        let empty_program = ScanConfig::from_toml_str("[capture]\nprogram = \"\"\n").unwrap();
        assert!(empty_program.validate().is_err());

        let bad_code = ScanConfig::from_toml_str("[decoder]\nno_barcode_exit_code = 0\n").unwrap();
        assert!(bad_code.validate().is_err());

        let bad_backend =
            ScanConfig::from_toml_str("[clipboard]\nbackend = \"carrier-pigeon\"\n").unwrap();
        let err = bad_backend.validate().unwrap_err();
        assert_eq!(err.exit_code(), 78);
    }

    #[test]
    fn test_invalid_toml() {
        let err = ScanConfig::from_toml_str("[capture\nprogram = 1").unwrap_err();
        assert!(matches!(err, ScanError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[notify]\nprogram = \"dunstify\"\nargs = [\"zbarshot\", \"{message}\"]\n")
            .unwrap();

        let config = ScanConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(
            config.notify_command(),
            CommandSpec::new("dunstify", &["zbarshot", "{message}"])
        );
    }
}
