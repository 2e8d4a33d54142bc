//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all process and terminal I/O.
//!
//! ## Structure
//!
//! - `tools/` - Toolchain adapters (esbuild, npm, zip, AWS CLI, ts-node)
//! - `events/` - Task event sinks

pub mod events;
pub mod tools;

// Re-export for convenience
pub use events::JsonEventSink;
pub use tools::{AwsCliPlatform, EsbuildCompiler, NodeLocalRunner, NpmInstaller, ZipArchiver};
