//! Command handlers for the lambda-tasks binary

mod init;
mod lambda;
mod task;

use anyhow::Result;

use lambda_tasks::domain::ports::TaskEventSink;
use lambda_tasks::infrastructure::JsonEventSink;
use lambda_tasks::presentation::Cli;
use lambda_tasks::Operation;

use crate::ui::console::ConsoleEventSink;
use crate::ui::context::UiContext;

/// Program name shown in listings
pub const PROGRAM: &str = "lambda-tasks";

pub fn dispatch(cli: &Cli, ui: &UiContext) -> Result<()> {
    match cli.operation() {
        Operation::Lambda => lambda::cmd_lambda(ui),
        Operation::Init => init::cmd_init(&cli.dir, ui),
        operation => task::cmd_task(&cli.dir, cli.mode(), operation, ui),
    }
}

fn event_sink(ui: &UiContext) -> Box<dyn TaskEventSink> {
    if ui.json {
        Box::new(JsonEventSink::stdout())
    } else {
        Box::new(ConsoleEventSink::new(ui))
    }
}
