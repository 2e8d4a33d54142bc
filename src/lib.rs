//! lambda-tasks - build, package and deploy a single AWS Lambda function
//!
//! A fixed task lifecycle (`clean`, `build`, `npm`, `zip`, `package`,
//! `upload`, `deploy`, ...) runs against one target directory containing an
//! `index.ts` entry module and an optional `lambda-config.toml`.
//!
//! ## Layers
//!
//! - `domain` - tasks, the task graph, value objects and ports
//! - `application` - the lifecycle orchestrator and scaffolding
//! - `infrastructure` - adapters driving esbuild, npm, zip and the AWS CLI
//! - `presentation` - CLI definition and dependency wiring

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{Orchestrator, ScaffoldReport, Scaffolder};
pub use config::{TargetConfig, ToolchainConfig};
pub use domain::services::TaskGraph;
pub use domain::value_objects::{ExecutionMode, Operation, TargetLayout};
pub use error::{LambdaError, LambdaResult};
