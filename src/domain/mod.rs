//! Domain Layer
//!
//! The orchestration core: tasks and the graph that sequences them, the
//! value types describing a target, and the ports through which the outside
//! world (compiler, installer, archiver, platform, local runner) is reached.
//!
//! ## Structure
//!
//! - `entities/` - `Task`
//! - `value_objects/` - `ExecutionMode`, `FunctionIdentitySpec`, `TargetLayout`, `Operation`
//! - `services/` - `TaskGraph`
//! - `ports/` - Interface definitions for infrastructure

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
