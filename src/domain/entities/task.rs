//! Task entity
//!
//! A named unit of work in a `TaskGraph`.

use crate::error::LambdaResult;

/// Body of a task. Completion is signalled by returning `Ok(())`.
pub type TaskBody<'a> = Box<dyn Fn() -> LambdaResult<()> + 'a>;

/// What running a task does once its dependencies have run
pub enum TaskAction<'a> {
    /// Run a body
    Body(TaskBody<'a>),
    /// Run each named task to completion, in order
    Sequence(Vec<String>),
    /// Nothing beyond the dependencies
    Nothing,
}

impl std::fmt::Debug for TaskAction<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Body(_) => f.write_str("Body(..)"),
            Self::Sequence(steps) => f.debug_tuple("Sequence").field(steps).finish(),
            Self::Nothing => f.write_str("Nothing"),
        }
    }
}

/// A named unit of work with ordered dependencies
#[derive(Debug)]
pub struct Task<'a> {
    name: String,
    dependencies: Vec<String>,
    action: TaskAction<'a>,
}

impl<'a> Task<'a> {
    pub fn new(
        name: impl Into<String>,
        dependencies: impl IntoIterator<Item = impl Into<String>>,
        action: TaskAction<'a>,
    ) -> Self {
        Self {
            name: name.into(),
            dependencies: dependencies.into_iter().map(Into::into).collect(),
            action,
        }
    }

    /// A task with a body and no dependencies
    pub fn body(name: impl Into<String>, body: impl Fn() -> LambdaResult<()> + 'a) -> Self {
        Self::new(name, Vec::<String>::new(), TaskAction::Body(Box::new(body)))
    }

    /// A composite task running `steps` in order
    pub fn sequence(
        name: impl Into<String>,
        steps: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self::new(
            name,
            Vec::<String>::new(),
            TaskAction::Sequence(steps.into_iter().map(Into::into).collect()),
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn dependencies(&self) -> &[String] {
        &self.dependencies
    }

    pub fn action(&self) -> &TaskAction<'a> {
        &self.action
    }
}
