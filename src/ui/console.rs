//! Console Event Sink
//!
//! Human-readable progress on stderr, task output on stdout:
//!
//! ```text
//! ● Starting 'clean'...
//! ✓ Finished 'clean' after 3 ms
//! ```

use std::io::{self, Write};
use std::sync::Mutex;

use lambda_tasks::domain::ports::{TaskEvent, TaskEventSink};

use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub struct ConsoleEventSink {
    color: bool,
    unicode: bool,
    progress: Mutex<Box<dyn Write + Send>>,
    output: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleEventSink {
    pub fn new(ui: &UiContext) -> Self {
        Self::with_writers(ui.color, ui.unicode, io::stderr(), io::stdout())
    }

    pub fn with_writers<P, O>(color: bool, unicode: bool, progress: P, output: O) -> Self
    where
        P: Write + Send + 'static,
        O: Write + Send + 'static,
    {
        Self {
            color,
            unicode,
            progress: Mutex::new(Box::new(progress)),
            output: Mutex::new(Box::new(output)),
        }
    }

    fn task_name(&self, task: &str) -> String {
        ColoredText::info(task).render(self.color)
    }

    fn progress_line(&self, event: &TaskEvent) -> Option<String> {
        match event {
            TaskEvent::Started { task } => Some(format!(
                "{} Starting '{}'...",
                Icon::Progress.colored(self.color, self.unicode),
                self.task_name(task)
            )),
            TaskEvent::Finished { task, elapsed } => Some(format!(
                "{} Finished '{}' {}",
                Icon::Success.colored(self.color, self.unicode),
                self.task_name(task),
                ColoredText::dim(format!("after {} ms", elapsed.as_millis())).render(self.color)
            )),
            TaskEvent::Failed { task, message } => Some(format!(
                "{} '{}' {}",
                Icon::Error.colored(self.color, self.unicode),
                self.task_name(task),
                ColoredText::error(format!("failed: {}", message)).render(self.color)
            )),
            TaskEvent::Note { .. } => None,
        }
    }
}

impl TaskEventSink for ConsoleEventSink {
    fn on_event(&self, event: TaskEvent) {
        if let Some(line) = self.progress_line(&event) {
            if let Ok(mut progress) = self.progress.lock() {
                let _ = writeln!(progress, "{}", line);
            }
            return;
        }

        if let TaskEvent::Note { message, .. } = event {
            if let Ok(mut output) = self.output.lock() {
                let _ = writeln!(output, "{}", message.trim_end_matches('\n'));
                let _ = output.flush();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl SharedBuffer {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    fn sink() -> (ConsoleEventSink, SharedBuffer, SharedBuffer) {
        let progress = SharedBuffer::default();
        let output = SharedBuffer::default();
        let sink = ConsoleEventSink::with_writers(false, false, progress.clone(), output.clone());
        (sink, progress, output)
    }

    #[test]
    fn progress_goes_to_stderr_stream() {
        let (sink, progress, output) = sink();

        sink.on_event(TaskEvent::Started {
            task: "clean".to_string(),
        });
        sink.on_event(TaskEvent::Finished {
            task: "clean".to_string(),
            elapsed: Duration::from_millis(7),
        });

        assert_eq!(
            progress.text(),
            "[..] Starting 'clean'...\n[OK] Finished 'clean' after 7 ms\n"
        );
        assert!(output.text().is_empty());
    }

    #[test]
    fn notes_go_to_output_stream() {
        let (sink, progress, output) = sink();

        sink.on_event(TaskEvent::Note {
            task: "info".to_string(),
            message: "null".to_string(),
        });

        assert!(progress.text().is_empty());
        assert_eq!(output.text(), "null\n");
    }

    #[test]
    fn failure_names_the_task() {
        let (sink, progress, _output) = sink();

        sink.on_event(TaskEvent::Failed {
            task: "upload".to_string(),
            message: "artifact not found".to_string(),
        });

        assert_eq!(progress.text(), "[FAIL] 'upload' failed: artifact not found\n");
    }
}
