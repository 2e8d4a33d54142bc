//! Orchestrator
//!
//! Wires one target's resolved configuration into the fixed lifecycle:
//!
//! ```text
//! deploy  = package, upload
//! package = clean, zip
//! zip     <- build, npm
//! build   <- compile:release
//! lint    <- compile:dev
//! ```
//!
//! plus the side branches `info`, `run`, `init` and `lambda`.

mod collaborators;
mod lifecycle;

use std::path::PathBuf;

use crate::config::TargetConfig;
use crate::domain::entities::{Task, TaskAction};
use crate::domain::ports::{CompileOptions, TaskEventSink};
use crate::domain::services::TaskGraph;
use crate::domain::value_objects::{ExecutionMode, Operation, TargetLayout};
use crate::error::{LambdaError, LambdaResult};

pub use collaborators::Collaborators;

/// Graph name of the release compile
pub const COMPILE_RELEASE: &str = "compile:release";

/// Graph name of the development compile
pub const COMPILE_DEV: &str = "compile:dev";

/// Lifecycle runner for a single target directory
pub struct Orchestrator {
    layout: TargetLayout,
    config: TargetConfig,
    collaborators: Collaborators,
    compile_options: CompileOptions,
    program: String,
}

impl Orchestrator {
    /// Validate the target and resolve its configuration.
    ///
    /// Fails with `MissingEntryModule` before anything is registered when
    /// `<target>/index.ts` does not exist.
    pub fn new(
        target_dir: impl Into<PathBuf>,
        mode: ExecutionMode,
        collaborators: Collaborators,
    ) -> LambdaResult<Self> {
        let layout = TargetLayout::new(target_dir);
        let entry = layout.entry_module();
        if !entry.is_file() {
            return Err(LambdaError::MissingEntryModule { path: entry });
        }

        let config = TargetConfig::resolve(&layout, mode);
        tracing::debug!(
            target = layout.name(),
            function = %config.function_identity,
            region = %config.region,
            mode = %mode,
            "resolved target config"
        );

        Ok(Self {
            layout,
            config,
            collaborators,
            compile_options: CompileOptions::default(),
            program: env!("CARGO_PKG_NAME").to_string(),
        })
    }

    /// Program name shown by the `lambda` listing
    pub fn with_program_name(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    pub fn layout(&self) -> &TargetLayout {
        &self.layout
    }

    pub fn config(&self) -> &TargetConfig {
        &self.config
    }

    /// Build the task graph. Task bodies borrow `self` and report through `sink`.
    pub fn graph<'s>(&'s self, sink: &'s dyn TaskEventSink) -> LambdaResult<TaskGraph<'s>> {
        let mut graph = TaskGraph::new();

        graph.register(Task::body(COMPILE_RELEASE, move || self.compile_release(sink)))?;
        graph.register(Task::body(COMPILE_DEV, move || self.compile_dev(sink)))?;

        graph.register(Task::body(Operation::Clean.name(), move || self.clean(sink)))?;
        graph.register(Task::new(
            Operation::Build.name(),
            [COMPILE_RELEASE],
            TaskAction::Nothing,
        ))?;
        graph.register(Task::body(Operation::Npm.name(), move || self.npm(sink)))?;
        graph.register(Task::new(
            Operation::Zip.name(),
            [Operation::Build.name(), Operation::Npm.name()],
            TaskAction::Body(Box::new(move || self.zip(sink))),
        ))?;
        graph.register(Task::new(
            Operation::Lint.name(),
            [COMPILE_DEV],
            TaskAction::Nothing,
        ))?;
        graph.register(Task::sequence(
            Operation::Package.name(),
            [Operation::Clean.name(), Operation::Zip.name()],
        ))?;
        graph.register(Task::body(Operation::Upload.name(), move || self.upload(sink)))?;
        graph.register(Task::sequence(
            Operation::Deploy.name(),
            [Operation::Package.name(), Operation::Upload.name()],
        ))?;
        graph.register(Task::body(Operation::Info.name(), move || {
            self.info(sink);
            Ok(())
        }))?;
        graph.register(Task::body(Operation::Run.name(), move || self.run_local()))?;
        graph.register(Task::body(Operation::Init.name(), move || self.init(sink)))?;
        graph.register(Task::body(Operation::Lambda.name(), move || {
            self.list(sink);
            Ok(())
        }))?;

        Ok(graph)
    }

    /// Run `operation` and its dependency chain
    pub fn run(&self, operation: Operation, sink: &dyn TaskEventSink) -> LambdaResult<()> {
        self.run_task(operation.name(), sink)
    }

    /// Run any registered task by name, including `compile:release` and `compile:dev`
    pub fn run_task(&self, name: &str, sink: &dyn TaskEventSink) -> LambdaResult<()> {
        self.graph(sink)?.run(name, sink)
    }
}
