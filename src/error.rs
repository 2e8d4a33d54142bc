//! Error types for lambda-tasks
//!
//! Library code returns `LambdaError`; the binary wraps it in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::PlatformError;
use crate::domain::value_objects::ExecutionMode;

/// Result type alias for lambda-tasks operations
pub type LambdaResult<T> = Result<T, LambdaError>;

/// Main error type for lambda-tasks operations
#[derive(Error, Debug)]
pub enum LambdaError {
    /// The target has no entry module, so nothing can be built
    #[error("{} does not exist", path.display())]
    MissingEntryModule { path: PathBuf },

    /// A task name was requested (or listed as a dependency) but never registered
    #[error("unknown task '{name}'")]
    UnknownTask { name: String },

    /// A task name was registered twice
    #[error("task '{name}' is already registered")]
    DuplicateTask { name: String },

    /// A task depends on itself, directly or transitively
    #[error("task cycle detected: {}", chain.join(" -> "))]
    TaskCycle { chain: Vec<String> },

    /// A task body failed; the chain halted here
    #[error("task '{task}' failed: {source}")]
    TaskFailed {
        task: String,
        #[source]
        source: Box<LambdaError>,
    },

    /// The function name resolved to nothing for the active mode
    #[error("no function name configured for {mode} mode")]
    MissingFunctionName { mode: ExecutionMode },

    /// Upload was requested before the archive was produced
    #[error("artifact not found: {} (run the package task first)", path.display())]
    MissingArtifact { path: PathBuf },

    /// An external program could not be started
    #[error("could not start '{tool}': {source}")]
    ToolUnavailable {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    /// An external program ran but reported failure
    #[error("{tool} failed: {message}")]
    ToolFailed { tool: String, message: String },

    /// Remote platform error
    #[error(transparent)]
    Platform(#[from] PlatformError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl LambdaError {
    /// Wrap a body failure with the name of the task that produced it
    pub fn task_failed(task: impl Into<String>, source: LambdaError) -> Self {
        Self::TaskFailed {
            task: task.into(),
            source: Box::new(source),
        }
    }

    /// The innermost error, skipping `TaskFailed` wrappers
    pub fn root_cause(&self) -> &LambdaError {
        match self {
            Self::TaskFailed { source, .. } => source.root_cause(),
            other => other,
        }
    }
}
