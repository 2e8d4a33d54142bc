//! Collaborator Factory
//!
//! Wires the toolchain adapters into an `Orchestrator`.
//! This is the dependency injection point for the application.

use std::path::PathBuf;

use crate::application::{Collaborators, Orchestrator};
use crate::config::ToolchainConfig;
use crate::domain::value_objects::ExecutionMode;
use crate::error::LambdaResult;
use crate::infrastructure::{
    AwsCliPlatform, EsbuildCompiler, NodeLocalRunner, NpmInstaller, ZipArchiver,
};

/// Create the external-tool collaborators for `toolchain`
pub fn create_collaborators(toolchain: &ToolchainConfig) -> Collaborators {
    Collaborators {
        compiler: Box::new(EsbuildCompiler::new(&toolchain.npx)),
        installer: Box::new(NpmInstaller::new(&toolchain.npm)),
        archiver: Box::new(ZipArchiver::new(&toolchain.zip)),
        platform: Box::new(AwsCliPlatform::new(&toolchain.aws)),
        runner: Box::new(NodeLocalRunner::new(&toolchain.npx)),
    }
}

/// Create an orchestrator for `target_dir` with all dependencies wired up
///
/// Tool names come from `LAMBDA_TASKS_*` overrides, falling back to the
/// programs on `PATH`.
pub fn create_orchestrator(
    target_dir: impl Into<PathBuf>,
    mode: ExecutionMode,
) -> LambdaResult<Orchestrator> {
    let toolchain = ToolchainConfig::from_env();
    tracing::debug!(?toolchain, "toolchain");
    Orchestrator::new(target_dir, mode, create_collaborators(&toolchain))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LambdaError;

    #[test]
    fn create_orchestrator_checks_the_entry_module() {
        let dir = tempfile::tempdir().unwrap();
        let result = create_orchestrator(dir.path(), ExecutionMode::Develop);
        assert!(matches!(result, Err(LambdaError::MissingEntryModule { .. })));
    }

    #[test]
    fn create_orchestrator_resolves_the_target() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("orders");
        std::fs::create_dir_all(&root).unwrap();
        std::fs::write(root.join("index.ts"), "").unwrap();

        let orchestrator = create_orchestrator(&root, ExecutionMode::Production).unwrap();
        assert_eq!(orchestrator.layout().name(), "orders");
        assert_eq!(orchestrator.config().function_identity, "orders");
    }
}
