use lambda_tasks::LambdaError;

use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::theme::ERROR_BANNER;

/// Print a fatal error: a red `ERROR!` line on stderr, or a JSON `error` event.
pub fn print_error(err: &anyhow::Error, ui: &UiContext) {
    if ui.json {
        let _ = crate::ui::json::emit(error_event(err));
        return;
    }
    eprint!("{}", format_error_with(err, ui.color, ui.unicode));
}

fn error_event(err: &anyhow::Error) -> serde_json::Value {
    let task = err.downcast_ref::<LambdaError>().and_then(|e| match e {
        LambdaError::TaskFailed { task, .. } => Some(task.clone()),
        _ => None,
    });
    serde_json::json!({
        "event": "error",
        "task": task,
        "message": err.to_string(),
    })
}

fn hint(err: &anyhow::Error) -> Option<&'static str> {
    match err.downcast_ref::<LambdaError>()?.root_cause() {
        LambdaError::MissingEntryModule { .. } => {
            Some("Run the init task to scaffold a function in this directory.")
        }
        LambdaError::MissingArtifact { .. } => Some("Run the package task before uploading."),
        LambdaError::MissingFunctionName { .. } => {
            Some("Set functionName in lambda-config.toml for this mode.")
        }
        LambdaError::ToolUnavailable { .. } => {
            Some("Install the tool or point LAMBDA_TASKS_<TOOL> at it.")
        }
        _ => None,
    }
}

fn format_error_with(err: &anyhow::Error, supports_color: bool, supports_unicode: bool) -> String {
    let mut out = format!(
        "{} {}\n",
        ColoredText::error(ERROR_BANNER).bold().render(supports_color),
        ColoredText::error(err.to_string()).render(supports_color)
    );

    // LambdaError messages already embed their sources
    if err.downcast_ref::<LambdaError>().is_none() {
        for cause in err.chain().skip(1) {
            out.push_str(&format!(
                "  {} {}\n",
                Icon::Arrow.colored(supports_color, supports_unicode),
                cause
            ));
        }
    }

    if let Some(hint) = hint(err) {
        out.push_str(&format!(
            "  {}\n",
            ColoredText::dim(hint).render(supports_color)
        ));
    }
    out
}
