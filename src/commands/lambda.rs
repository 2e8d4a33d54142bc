//! `lambda` - list the available operations

use anyhow::Result;

use lambda_tasks::Operation;

use super::PROGRAM;
use crate::ui::context::UiContext;

pub fn cmd_lambda(ui: &UiContext) -> Result<()> {
    if ui.json {
        let tasks: Vec<_> = Operation::ALL
            .iter()
            .map(|op| serde_json::json!({ "name": op.name(), "summary": op.summary() }))
            .collect();
        crate::ui::json::emit(serde_json::json!({ "event": "tasks", "tasks": tasks }))?;
        return Ok(());
    }

    print!("{}", Operation::listing(PROGRAM));
    Ok(())
}
