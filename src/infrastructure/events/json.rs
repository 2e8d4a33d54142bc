//! JSON Event Sink
//!
//! Outputs task events as NDJSON for CI/automation consumption.

use crate::domain::ports::{TaskEvent, TaskEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    /// Mutex to ensure whole lines are written
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

/// JSON representation of one task event
pub fn event_json(event: &TaskEvent) -> serde_json::Value {
    match event {
        TaskEvent::Started { task } => serde_json::json!({
            "event": "task_start",
            "task": task,
        }),
        TaskEvent::Finished { task, elapsed } => serde_json::json!({
            "event": "task_finished",
            "task": task,
            "elapsed_ms": elapsed.as_millis() as u64,
        }),
        TaskEvent::Failed { task, message } => serde_json::json!({
            "event": "task_failed",
            "task": task,
            "message": message,
        }),
        TaskEvent::Note { task, message } => serde_json::json!({
            "event": "note",
            "task": task,
            "message": message,
        }),
    }
}

impl TaskEventSink for JsonEventSink {
    fn on_event(&self, event: TaskEvent) {
        self.write_event(event_json(&event));
    }
}
