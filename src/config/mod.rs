//! Configuration module
//!
//! Two sources feed an orchestration run:
//! 1. The target's own `lambda-config.toml` (or `.json`), which names the
//!    remote function, region and credentials. Loading is fail-open: a
//!    missing or malformed file behaves exactly like an empty one.
//! 2. Tool names for the external collaborators, overridable with
//!    `LAMBDA_TASKS_*` environment variables.

mod loader;
mod types;

pub use loader::{load_raw_config, load_raw_config_file, resolve_target_config, ConfigLoadError};
pub use types::{
    Credentials, DeploySettings, RawConfig, TargetConfig, ToolchainConfig, DEFAULT_HANDLER,
    DEFAULT_LOCAL_PORT, DEFAULT_REGION, DEFAULT_RUNTIME,
};
