//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod archiver;
pub mod compiler;
pub mod installer;
pub mod local_runner;
pub mod platform_client;
pub mod task_events;

pub use archiver::{ArchiveRequest, Archiver};
pub use compiler::{Bundle, CompileOptions, Compiler, Diagnostics};
pub use installer::{InstallOptions, Installer};
pub use local_runner::LocalRunner;
pub use platform_client::{FunctionInfo, PlatformClient, PlatformError};
pub use task_events::{NoopEventSink, TaskEvent, TaskEventSink};
