//! `init` - scaffold a target directory
//!
//! Runs without an orchestrator: the entry module is one of the files it
//! creates.

use std::path::Path;

use anyhow::{Context, Result};

use lambda_tasks::domain::ports::TaskEvent;
use lambda_tasks::{Operation, Scaffolder};

use super::event_sink;
use crate::ui::context::UiContext;

pub fn cmd_init(dir: &Path, ui: &UiContext) -> Result<()> {
    let sink = event_sink(ui);
    let task = Operation::Init.name().to_string();

    sink.on_event(TaskEvent::Started { task: task.clone() });
    let started = std::time::Instant::now();

    let report = Scaffolder::new(dir)
        .scaffold()
        .with_context(|| format!("could not scaffold {}", dir.display()))?;

    for message in report.messages() {
        sink.on_event(TaskEvent::Note {
            task: task.clone(),
            message,
        });
    }

    sink.on_event(TaskEvent::Finished {
        task,
        elapsed: started.elapsed(),
    });
    Ok(())
}
