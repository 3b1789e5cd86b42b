use crate::utils::error::{Result, ScanError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ScanError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// A program name or path handed to the OS: non-empty and free of NUL bytes.
pub fn validate_program(field_name: &str, program: &str) -> Result<()> {
    validate_non_empty_string(field_name, program)?;

    if program.contains('\0') {
        return Err(ScanError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: program.escape_default().to_string(),
            reason: "Program contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_args(field_name: &str, args: &[String]) -> Result<()> {
    for arg in args {
        if arg.contains('\0') {
            return Err(ScanError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: arg.escape_default().to_string(),
                reason: "Argument contains null bytes".to_string(),
            });
        }
    }
    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(ScanError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Allowed values: {}", allowed.join(", ")),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(ScanError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_program() {
        assert!(validate_program("capture.program", "gnome-screenshot").is_ok());
        assert!(validate_program("capture.program", "/usr/bin/flameshot").is_ok());
        assert!(validate_program("capture.program", "").is_err());
        assert!(validate_program("capture.program", "   ").is_err());
        assert!(validate_program("capture.program", "zbar\0img").is_err());
    }

    #[test]
    fn test_validate_args() {
        let args = vec!["-q".to_string(), "--raw".to_string(), "{file}".to_string()];
        assert!(validate_args("decoder.args", &args).is_ok());
        assert!(validate_args("decoder.args", &["a\0b".to_string()]).is_err());
    }

    #[test]
    fn test_validate_one_of() {
        assert!(validate_one_of("clipboard.backend", "command", &["command", "native"]).is_ok());
        assert!(validate_one_of("clipboard.backend", "pbcopy", &["command", "native"]).is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("decoder.no_barcode_exit_code", 4, 1, 255).is_ok());
        assert!(validate_range("decoder.no_barcode_exit_code", 0, 1, 255).is_err());
        assert!(validate_range("decoder.no_barcode_exit_code", 256, 1, 255).is_err());
    }
}
