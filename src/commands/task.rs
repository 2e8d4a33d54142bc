//! Lifecycle operations run through the orchestrator

use std::path::Path;

use anyhow::Result;

use lambda_tasks::presentation::create_orchestrator;
use lambda_tasks::{ExecutionMode, Operation};

use super::{event_sink, PROGRAM};
use crate::ui::context::UiContext;

pub fn cmd_task(dir: &Path, mode: ExecutionMode, operation: Operation, ui: &UiContext) -> Result<()> {
    let orchestrator = create_orchestrator(dir, mode)?.with_program_name(PROGRAM);
    tracing::info!(
        task = %operation,
        target = orchestrator.layout().name(),
        mode = %mode,
        "running"
    );

    let sink = event_sink(ui);
    orchestrator.run(operation, sink.as_ref())?;
    Ok(())
}
