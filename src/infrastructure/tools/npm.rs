//! npm Installer

use std::path::Path;
use std::process::Command;

use crate::domain::ports::{InstallOptions, Installer};
use crate::error::LambdaResult;

use super::command::run_inherited;

pub struct NpmInstaller {
    npm: String,
}

impl NpmInstaller {
    pub fn new(npm: impl Into<String>) -> Self {
        Self { npm: npm.into() }
    }

    fn args(options: InstallOptions) -> Vec<&'static str> {
        let mut args = vec!["install", "--no-audit", "--no-fund"];
        if options.production {
            args.push("--production");
        }
        args
    }
}

impl Installer for NpmInstaller {
    fn install(&self, manifest_dir: &Path, options: InstallOptions) -> LambdaResult<()> {
        let mut cmd = Command::new(&self.npm);
        cmd.args(Self::args(options)).current_dir(manifest_dir);
        run_inherited("npm", &mut cmd)
    }
}
