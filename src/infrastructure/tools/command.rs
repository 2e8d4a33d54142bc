//! Child Process Helpers
//!
//! Every adapter shells out to an external program. These helpers turn a
//! spawn failure into `ToolUnavailable` and a non-zero exit into
//! `ToolFailed`, so adapters only build arguments.

use std::process::{Command, Stdio};

use crate::error::{LambdaError, LambdaResult};

/// Output of a finished child whose streams were captured
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Captured {
    pub success: bool,
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl Captured {
    /// Turn a failed exit into `ToolFailed`, keeping the most useful stream
    pub fn into_result(self, tool: &str) -> LambdaResult<Self> {
        if self.success {
            return Ok(self);
        }
        Err(LambdaError::ToolFailed {
            tool: tool.to_string(),
            message: failure_message(self.code, &self.stderr, &self.stdout),
        })
    }
}

/// Human-readable program line for logs
pub fn describe(cmd: &Command) -> String {
    let mut parts = vec![cmd.get_program().to_string_lossy().into_owned()];
    parts.extend(cmd.get_args().map(|a| a.to_string_lossy().into_owned()));
    parts.join(" ")
}

/// Run with inherited stdio; the child's output goes straight to the terminal.
pub fn run_inherited(tool: &str, cmd: &mut Command) -> LambdaResult<()> {
    tracing::debug!(tool, command = %describe(cmd), "spawning");
    let status = cmd
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|source| LambdaError::ToolUnavailable {
            tool: tool.to_string(),
            source,
        })?;

    if !status.success() {
        return Err(LambdaError::ToolFailed {
            tool: tool.to_string(),
            message: format!("exited with status {}", exit_code(status.code())),
        });
    }
    Ok(())
}

/// Run with captured stdout/stderr. Only a spawn failure is an error here.
pub fn run_captured(tool: &str, cmd: &mut Command) -> LambdaResult<Captured> {
    tracing::debug!(tool, command = %describe(cmd), "spawning");
    let output = cmd
        .stdin(Stdio::null())
        .output()
        .map_err(|source| LambdaError::ToolUnavailable {
            tool: tool.to_string(),
            source,
        })?;

    Ok(Captured {
        success: output.status.success(),
        code: output.status.code(),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    })
}

fn exit_code(code: Option<i32>) -> String {
    code.map_or_else(|| "signal".to_string(), |c| c.to_string())
}

fn failure_message(code: Option<i32>, stderr: &str, stdout: &str) -> String {
    let detail = [stderr.trim(), stdout.trim()]
        .into_iter()
        .find(|s| !s.is_empty());
    match detail {
        Some(detail) => detail.to_string(),
        None => format!("exited with status {}", exit_code(code)),
    }
}
