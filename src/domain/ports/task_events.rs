//! Task Event Port
//!
//! Observable interface for task execution: progress lines, JSON event
//! streams, test recording.

use std::time::Duration;

/// Event emitted while a task chain runs
#[derive(Debug, Clone, PartialEq)]
pub enum TaskEvent {
    /// A task's action is about to run
    Started { task: String },

    /// A task's action completed
    Finished { task: String, elapsed: Duration },

    /// A task's action failed; nothing after it runs
    Failed { task: String, message: String },

    /// Informational output produced by a task body
    Note { task: String, message: String },
}

impl TaskEvent {
    pub fn task(&self) -> &str {
        match self {
            Self::Started { task }
            | Self::Finished { task, .. }
            | Self::Failed { task, .. }
            | Self::Note { task, .. } => task,
        }
    }
}

/// Trait for receiving task events
///
/// Implementations:
/// - `ConsoleEventSink`: progress lines in the terminal
/// - `JsonEventSink`: NDJSON for CI
/// - `NoopEventSink`: silent operation
pub trait TaskEventSink {
    fn on_event(&self, event: TaskEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl TaskEventSink for NoopEventSink {
    fn on_event(&self, _event: TaskEvent) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct RecordingEventSink {
        events: RefCell<Vec<TaskEvent>>,
    }

    impl TaskEventSink for RecordingEventSink {
        fn on_event(&self, event: TaskEvent) {
            self.events.borrow_mut().push(event);
        }
    }

    #[test]
    fn recording_sink_captures_events() {
        let sink = RecordingEventSink {
            events: RefCell::new(Vec::new()),
        };

        sink.on_event(TaskEvent::Started {
            task: "clean".to_string(),
        });
        sink.on_event(TaskEvent::Finished {
            task: "clean".to_string(),
            elapsed: Duration::from_millis(3),
        });

        let recorded = sink.events.borrow();
        assert_eq!(recorded.len(), 2);
        assert!(recorded.iter().all(|e| e.task() == "clean"));
    }
}
