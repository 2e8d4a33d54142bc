//! Compiler Port
//!
//! Turns a TypeScript entry module into a deployable bundle (release) or
//! runs a type-check pass that only reports diagnostics (dev).

use std::path::{Path, PathBuf};

use crate::error::LambdaResult;

/// Options shared by both compile passes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileOptions {
    /// Modules left out of the bundle because the platform provides them
    pub externals: Vec<String>,
    /// Node version the bundle targets (e.g. `node18`)
    pub node_target: String,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            externals: vec!["aws-sdk".to_string()],
            node_target: "node18".to_string(),
        }
    }
}

/// Output of a release compile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bundle {
    pub output_dir: PathBuf,
    /// The bundled entry file inside `output_dir`
    pub entry_file: PathBuf,
}

/// Messages reported by a dev compile
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    pub lines: Vec<String>,
}

impl Diagnostics {
    pub fn is_clean(&self) -> bool {
        self.lines.is_empty()
    }
}

pub trait Compiler {
    /// Bundle `entry` into `output_dir`
    fn compile_release(
        &self,
        entry: &Path,
        output_dir: &Path,
        options: &CompileOptions,
    ) -> LambdaResult<Bundle>;

    /// Check `entry` without producing output.
    ///
    /// Returns `Err` when the check fails; warnings come back as diagnostics.
    fn compile_dev(&self, entry: &Path, options: &CompileOptions) -> LambdaResult<Diagnostics>;
}
