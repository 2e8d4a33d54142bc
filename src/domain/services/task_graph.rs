//! Task Graph
//!
//! Registers named tasks and runs one of them after its dependency chain.
//!
//! Execution is strictly sequential. A run first expands the requested task
//! into a plan (the ordered list of task names whose actions execute), then
//! interprets it. Expanding up front means unknown tasks and cycles are
//! reported before any body has touched the file system.
//!
//! There is no memoization: a task reachable twice runs twice, and calling
//! `run` again re-executes the whole chain.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::domain::entities::{Task, TaskAction};
use crate::domain::ports::{TaskEvent, TaskEventSink};
use crate::error::{LambdaError, LambdaResult};


#[derive(Debug, Default)]
pub struct TaskGraph<'a> {
    tasks: HashMap<String, Task<'a>>,
    order: Vec<String>,
}

impl<'a> TaskGraph<'a> {
    pub fn new() -> Self {
        Self {
            tasks: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Register `task`. Names must be unique.
    ///
    /// Dependencies may name tasks registered later; they are checked when a
    /// run is planned.
    pub fn register(&mut self, task: Task<'a>) -> LambdaResult<()> {
        let name = task.name().to_string();
        if self.tasks.contains_key(&name) {
            return Err(LambdaError::DuplicateTask { name });
        }
        self.order.push(name.clone());
        self.tasks.insert(name, task);
        Ok(())
    }

    /// Task names in registration order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Ordered list of task names whose actions run for `name`
    pub fn plan(&self, name: &str) -> LambdaResult<Vec<String>> {
        let mut stack = Vec::new();
        let mut plan = Vec::new();
        self.expand(name, &mut stack, &mut plan)?;
        Ok(plan)
    }

    fn expand(
        &self,
        name: &str,
        stack: &mut Vec<String>,
        plan: &mut Vec<String>,
    ) -> LambdaResult<()> {
        if let Some(pos) = stack.iter().position(|s| s == name) {
            let mut chain = stack[pos..].to_vec();
            chain.push(name.to_string());
            return Err(LambdaError::TaskCycle { chain });
        }

        let task = self.tasks.get(name).ok_or_else(|| LambdaError::UnknownTask {
            name: name.to_string(),
        })?;

        stack.push(name.to_string());
        for dependency in task.dependencies() {
            self.expand(dependency, stack, plan)?;
        }
        if let TaskAction::Sequence(steps) = task.action() {
            for step in steps {
                self.expand(step, stack, plan)?;
            }
        }
        stack.pop();

        plan.push(name.to_string());
        Ok(())
    }

    /// Run `name` after its dependency chain, halting at the first failure.
    pub fn run(&self, name: &str, sink: &dyn TaskEventSink) -> LambdaResult<()> {
        let plan = self.plan(name)?;
        tracing::debug!(task = name, plan = ?plan, "running task");

        for step in &plan {
            let task = &self.tasks[step];
            sink.on_event(TaskEvent::Started { task: step.clone() });
            let started = Instant::now();

            let outcome = match task.action() {
                TaskAction::Body(body) => body(),
                TaskAction::Sequence(_) | TaskAction::Nothing => Ok(()),
            };

            match outcome {
                Ok(()) => {
                    let elapsed = started.elapsed();
                    tracing::debug!(task = %step, elapsed_ms = elapsed.as_millis() as u64, "task finished");
                    sink.on_event(TaskEvent::Finished {
                        task: step.clone(),
                        elapsed: round_elapsed(elapsed),
                    });
                }
                Err(err) => {
                    tracing::debug!(task = %step, error = %err, "task failed");
                    sink.on_event(TaskEvent::Failed {
                        task: step.clone(),
                        message: err.to_string(),
                    });
                    return Err(match err {
                        already @ LambdaError::TaskFailed { .. } => already,
                        other => LambdaError::task_failed(step.clone(), other),
                    });
                }
            }
        }

        Ok(())
    }
}

/// Millisecond precision is all the progress output shows
fn round_elapsed(elapsed: Duration) -> Duration {
    Duration::from_millis(elapsed.as_millis() as u64)
}
