//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `Orchestrator` - registers and runs the lambda lifecycle for one target
//! - `Scaffolder` - writes the template tree for a new target

pub mod orchestrator;
pub mod scaffold;

pub use orchestrator::{Collaborators, Orchestrator, COMPILE_DEV, COMPILE_RELEASE};
pub use scaffold::{ScaffoldReport, Scaffolder, TEMPLATES};
