//! Domain Entities
//!
//! - `Task` - a named unit of work with ordered dependencies

mod task;

pub use task::{Task, TaskAction, TaskBody};
