//! Property tests for lambda-tasks.
//!
//! Properties use randomized input generation to explore edge cases and
//! protect invariants like "never panics" and "always resolves".
//!
//! Run with: `cargo test --test properties`

#[path = "properties/config_resolution.rs"]
mod config_resolution;

#[path = "properties/task_graph.rs"]
mod task_graph;
