//! Domain Services
//!
//! Pure business logic services that operate on domain entities.

mod task_graph;

pub use task_graph::TaskGraph;
