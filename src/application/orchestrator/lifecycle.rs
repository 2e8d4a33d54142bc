//! Task bodies of the lifecycle

use std::fs;
use std::io::ErrorKind;

use crate::application::scaffold::Scaffolder;
use crate::domain::ports::{ArchiveRequest, InstallOptions, PlatformError, TaskEvent, TaskEventSink};
use crate::domain::value_objects::{ArtifactDigest, Operation, MANIFEST_FILE};
use crate::error::{LambdaError, LambdaResult};

use super::{Orchestrator, COMPILE_DEV};

fn note(sink: &dyn TaskEventSink, task: &str, message: impl Into<String>) {
    sink.on_event(TaskEvent::Note {
        task: task.to_string(),
        message: message.into(),
    });
}

impl Orchestrator {
    pub(super) fn compile_release(&self, _sink: &dyn TaskEventSink) -> LambdaResult<()> {
        let bundle = self.collaborators.compiler.compile_release(
            &self.layout.entry_module(),
            &self.layout.bundle_dir(),
            &self.compile_options,
        )?;
        tracing::info!("bundled {}", bundle.entry_file.display());
        Ok(())
    }

    pub(super) fn compile_dev(&self, sink: &dyn TaskEventSink) -> LambdaResult<()> {
        let diagnostics = self
            .collaborators
            .compiler
            .compile_dev(&self.layout.entry_module(), &self.compile_options)?;

        if diagnostics.is_clean() {
            note(sink, COMPILE_DEV, "no problems found");
        }
        for line in diagnostics.lines {
            note(sink, COMPILE_DEV, line);
        }
        Ok(())
    }

    /// Remove `dist/`. Already gone counts as done.
    pub(super) fn clean(&self, _sink: &dyn TaskEventSink) -> LambdaResult<()> {
        let dist = self.layout.dist_root();
        match fs::remove_dir_all(&dist) {
            Ok(()) => {
                tracing::info!("removed {}", dist.display());
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Copy the manifest into the bundle and install production dependencies
    pub(super) fn npm(&self, sink: &dyn TaskEventSink) -> LambdaResult<()> {
        let manifest = self.layout.manifest();
        if !manifest.is_file() {
            note(
                sink,
                Operation::Npm.name(),
                format!(
                    "no {} in {}; skipping dependency install",
                    MANIFEST_FILE,
                    self.layout.root().display()
                ),
            );
            return Ok(());
        }

        let bundle_dir = self.layout.bundle_dir();
        fs::create_dir_all(&bundle_dir)?;
        fs::copy(&manifest, bundle_dir.join(MANIFEST_FILE))?;

        self.collaborators
            .installer
            .install(&bundle_dir, InstallOptions { production: true })
    }

    /// Archive the bundle one level above it as `<name>.zip`
    pub(super) fn zip(&self, sink: &dyn TaskEventSink) -> LambdaResult<()> {
        let request = ArchiveRequest::new(
            self.layout.bundle_dir(),
            self.layout.artifact_name(),
            self.layout.dist_root(),
        );
        let path = self.collaborators.archiver.archive(&request)?;

        let size = fs::metadata(&path)
            .map_err(|_| LambdaError::MissingArtifact { path: path.clone() })?
            .len();
        let digest = ArtifactDigest::from_file(&path)?;
        note(
            sink,
            Operation::Zip.name(),
            format!("created {} ({} bytes, {})", path.display(), size, digest),
        );
        Ok(())
    }

    pub(super) fn upload(&self, sink: &dyn TaskEventSink) -> LambdaResult<()> {
        if self.config.function_identity.is_empty() {
            return Err(LambdaError::MissingFunctionName {
                mode: self.config.mode,
            });
        }

        let artifact = self.layout.artifact();
        if !artifact.is_file() {
            return Err(LambdaError::MissingArtifact { path: artifact });
        }

        self.collaborators
            .platform
            .deploy_artifact(&artifact, &self.config)?;
        note(
            sink,
            Operation::Upload.name(),
            format!(
                "deployed {} to {} ({})",
                self.layout.artifact_name(),
                self.config.function_identity,
                self.config.region
            ),
        );
        Ok(())
    }

    /// Report the remote function's metadata. Never fails the chain.
    pub(super) fn info(&self, sink: &dyn TaskEventSink) {
        let task = Operation::Info.name();
        let function = &self.config.function_identity;

        let data = match self
            .collaborators
            .platform
            .get_function_info(function, &self.config)
        {
            Ok(info) => Some(info),
            Err(PlatformError::NotFound { .. }) => {
                note(
                    sink,
                    task,
                    format!(
                        "Unable to find lambda function {}. Verify the lambda function name and AWS region are correct.",
                        function
                    ),
                );
                None
            }
            Err(PlatformError::Other(detail)) => {
                tracing::debug!("function query failed: {}", detail);
                note(
                    sink,
                    task,
                    "AWS API request failed. Check your AWS credentials and permissions.",
                );
                None
            }
        };

        let printed = data.map_or_else(|| "null".to_string(), |info| info.to_pretty());
        note(sink, task, printed);
    }

    pub(super) fn run_local(&self) -> LambdaResult<()> {
        self.collaborators
            .runner
            .serve(&self.layout.entry_module(), &self.config)
    }

    pub(super) fn init(&self, sink: &dyn TaskEventSink) -> LambdaResult<()> {
        let report = Scaffolder::new(self.layout.root()).scaffold()?;
        for message in report.messages() {
            note(sink, Operation::Init.name(), message);
        }
        Ok(())
    }

    pub(super) fn list(&self, sink: &dyn TaskEventSink) {
        note(sink, Operation::Lambda.name(), Operation::listing(&self.program));
    }
}
