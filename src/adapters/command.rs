use crate::utils::error::{Result, ScanError};
use serde::{Deserialize, Serialize};
use std::process::{Output, Stdio};
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

pub const FILE_PLACEHOLDER: &str = "{file}";
pub const MESSAGE_PLACEHOLDER: &str = "{message}";

/// An external program and its argument template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandSpec {
    pub program: String,
    #[serde(default)]
    pub args: Vec<String>,
}

impl CommandSpec {
    pub fn new(program: &str, args: &[&str]) -> Self {
        Self {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }

    /// Arguments with every `placeholder` replaced by `value`.
    pub fn render_args(&self, placeholder: &str, value: &str) -> Vec<String> {
        self.args
            .iter()
            .map(|arg| arg.replace(placeholder, value))
            .collect()
    }

    /// Runs the program and collects its output. A non-zero exit is not an error here.
    pub async fn output(&self, args: &[String]) -> Result<Output> {
        tracing::debug!("Running {} {:?}", self.program, args);
        Command::new(&self.program)
            .args(args)
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|source| self.spawn_error(source))
    }

    /// Runs the program and fails unless it exits successfully.
    pub async fn run(&self, args: &[String]) -> Result<Output> {
        let output = self.output(args).await?;
        if !output.status.success() {
            return Err(self.failure(&output));
        }
        Ok(output)
    }

    /// Runs the program with `input` on its stdin and waits for it to exit.
    ///
    /// Only stdin is piped. Clipboard tools such as xclip fork a child that keeps
    /// serving the selection with the inherited descriptors, so waiting for EOF on
    /// a stdout or stderr pipe would block until the selection is replaced.
    pub async fn run_with_stdin(&self, args: &[String], input: &[u8]) -> Result<()> {
        tracing::debug!("Piping {} bytes to {} {:?}", input.len(), self.program, args);
        let mut child = Command::new(&self.program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::inherit())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| self.spawn_error(source))?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(input).await?;
            // 關閉 stdin 讓子程序讀到 EOF
            drop(stdin);
        }

        let status = child.wait().await?;
        if !status.success() {
            return Err(ScanError::CommandFailed {
                program: self.program.clone(),
                code: status.code(),
                stderr: String::new(),
            });
        }
        Ok(())
    }

    fn spawn_error(&self, source: std::io::Error) -> ScanError {
        ScanError::CommandSpawn {
            program: self.program.clone(),
            source,
        }
    }

    pub(crate) fn failure(&self, output: &Output) -> ScanError {
        ScanError::CommandFailed {
            program: self.program.clone(),
            code: output.status.code(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        }
    }
}
