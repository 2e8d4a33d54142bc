//! esbuild / tsc Compiler
//!
//! Release bundles are produced by `npx esbuild`; the dev pass is a
//! `npx tsc --noEmit` type check whose output becomes diagnostics.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::domain::ports::{Bundle, CompileOptions, Compiler, Diagnostics};
use crate::error::LambdaResult;

use super::command::{run_captured, run_inherited};

/// Name of the bundled entry file inside the output directory
pub const BUNDLE_ENTRY: &str = "index.js";

pub struct EsbuildCompiler {
    npx: String,
}

impl EsbuildCompiler {
    pub fn new(npx: impl Into<String>) -> Self {
        Self { npx: npx.into() }
    }

    fn release_args(entry: &Path, outfile: &Path, options: &CompileOptions) -> Vec<String> {
        let mut args = vec![
            "esbuild".to_string(),
            entry.display().to_string(),
            "--bundle".to_string(),
            "--platform=node".to_string(),
            format!("--target={}", options.node_target),
            "--format=cjs".to_string(),
            "--minify".to_string(),
            "--sourcemap".to_string(),
            format!("--outfile={}", outfile.display()),
        ];
        args.extend(options.externals.iter().map(|e| format!("--external:{}", e)));
        args
    }

    fn dev_args(entry: &Path) -> Vec<String> {
        vec![
            "tsc".to_string(),
            "--noEmit".to_string(),
            "--pretty".to_string(),
            "false".to_string(),
            "--target".to_string(),
            "es2020".to_string(),
            "--module".to_string(),
            "commonjs".to_string(),
            "--esModuleInterop".to_string(),
            entry.display().to_string(),
        ]
    }
}

impl Compiler for EsbuildCompiler {
    fn compile_release(
        &self,
        entry: &Path,
        output_dir: &Path,
        options: &CompileOptions,
    ) -> LambdaResult<Bundle> {
        std::fs::create_dir_all(output_dir)?;
        let entry_file: PathBuf = output_dir.join(BUNDLE_ENTRY);

        let mut cmd = Command::new(&self.npx);
        cmd.args(Self::release_args(entry, &entry_file, options));
        run_inherited("esbuild", &mut cmd)?;

        Ok(Bundle {
            output_dir: output_dir.to_path_buf(),
            entry_file,
        })
    }

    fn compile_dev(&self, entry: &Path, _options: &CompileOptions) -> LambdaResult<Diagnostics> {
        let mut cmd = Command::new(&self.npx);
        cmd.args(Self::dev_args(entry));

        let captured = run_captured("tsc", &mut cmd)?.into_result("tsc")?;
        Ok(Diagnostics {
            lines: captured
                .stdout
                .lines()
                .map(str::trim_end)
                .filter(|l| !l.is_empty())
                .map(str::to_string)
                .collect(),
        })
    }
}
